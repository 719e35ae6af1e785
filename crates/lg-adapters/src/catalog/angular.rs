//! Angular Material templates shipped with lg.
//!
//! Layout templates are written verbatim. Service fragments may contain
//! `{{SERVICE_CLASS}}`, which the renderer replaces.

pub const LAYOUT_MARKUP: &str = r#"<mat-toolbar class="toolbar-container">
  <button mat-icon-button class="toolbar-icon" aria-label="Example icon-button with menu icon" (click)="drawer.toggle()">
    <mat-icon>menu</mat-icon>
  </button>
  <span class="title">Sidebar Layout Example</span>
  <span class="toolbar-spacer"></span>
  <button mat-icon-button class="toolbar-icon" aria-label="Example icon-button with share icon">
    <mat-icon>logout</mat-icon>
  </button>
</mat-toolbar>
<mat-drawer-container class="container" autosize>
  <mat-drawer #drawer [opened]="true" class="sidenav" [mode]="sidenavMode">
    <div class="logo-container">
      <img src="https://upload.wikimedia.org/wikipedia/commons/thumb/c/cf/Angular_full_color_logo.svg/2048px-Angular_full_color_logo.svg.png" alt="Logo" class="logo">
    </div>
    <mat-nav-list>
      @for (menu of menuItems; track $index) {
        <mat-list-item [routerLink]="menu.router" routerLinkActive #rla="routerLinkActive" [activated]="rla.isActive">
          <mat-icon matListItemIcon>{{menu.icon}}</mat-icon>
          <span matListItemTitle>
            {{menu.label}}
          </span>
        </mat-list-item>
      }
     </mat-nav-list>
  </mat-drawer>
  <div class="sidenav-content">
    <router-outlet></router-outlet>
  </div>
</mat-drawer-container>"#;

pub const LAYOUT_STYLE: &str = r#".toolbar-spacer {
  flex: 1 1 auto;
}
mat-toolbar.toolbar-container {
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.203) !important;
  z-index: 1000;
  position: relative;
  .title {
    margin-left: 1rem;
  }
}
.container {
  width: 100vw;
  height: 93vh;
}
.sidenav {
  padding-left: 12px;
  padding-right: 12px;
  width: 240px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.314);
  border-radius: 0;
  .logo-container {
    display: flex;
    justify-content: center;
    align-items: center;
    padding: 20px 0;
    border-bottom: 1px solid #e0e0e0;
  }
  .logo {
    width: 72px; 
    height: 72px;
    object-fit: contain;
  }
}
.sidenav-content {
  height: 93vh;
  padding-top: 18px;
  padding-left: 12px;
  padding-right: 12px;
}"#;

pub const LAYOUT_CLASS: &str = r#"import { Component } from '@angular/core';
import { Router, RouterModule, RouterOutlet } from '@angular/router';
import { BreakpointObserver, Breakpoints } from '@angular/cdk/layout';
import { MatCardModule } from '@angular/material/card';
import { MatIconModule } from '@angular/material/icon';
import { MatButtonModule } from '@angular/material/button';
import { MatListModule } from '@angular/material/list';
import { MatToolbarModule } from '@angular/material/toolbar';
import { MatSidenavModule } from '@angular/material/sidenav';
import { CommonModule } from '@angular/common';
import { Subject, takeUntil } from 'rxjs';

@Component({
  selector: 'app-root',
  imports: [
    MatCardModule,
    CommonModule,
    MatButtonModule,
    MatIconModule,
    MatToolbarModule,
    MatSidenavModule,
    MatListModule,
    RouterModule
  ],
  templateUrl: './app.component.html',
  styleUrl: './app.component.scss',
})
export class AppComponent {
  sidenavMode: 'over' | 'side' = 'side';
  private destroy$ = new Subject<void>();
  
  menuItems = [
    {label: 'Page 1', router: 'page1', icon: 'home'},
    {label: 'Page 2', router: 'page2', icon: 'apps'},
    {label: 'Page 3', router: 'page3', icon: 'settings'}
  ]

  constructor(private breakpointObserver: BreakpointObserver) {
    this.breakpointObserver
      .observe([Breakpoints.HandsetPortrait, Breakpoints.HandsetLandscape])
      .pipe(takeUntil(this.destroy$))
      .subscribe((result: any) => {
        this.sidenavMode = result.matches ? 'over' : 'side';
      });
  }

  ngOnDestroy() {
    this.destroy$.next();
    this.destroy$.complete();
  }
}"#;

pub const SERVICE_IMPORTS: &str = "import { inject, Injectable } from '@angular/core';\n";

pub const SERVICE_HTTP_IMPORT: &str = "import { HttpClient } from '@angular/common/http';\n";

pub const SERVICE_DECLARATION: &str = r#"
@Injectable({
  providedIn: 'root'
})
export class {{SERVICE_CLASS}} {"#;

pub const SERVICE_CONSTRUCTOR: &str = "\n  constructor() { }";

pub const SERVICE_HTTP_MEMBERS: &str = r#"
  private http = inject(HttpClient);

  // Set your API base URL
  private readonly API_URL = 'your_base_url_here';
  
  getAll() {
    return this.http.get<any[]>(this.API_URL);
  }

  getById(id: number) {
    return this.http.get<any>(`${this.API_URL}/${id}`);
  }

  create(data: any) {
    return this.http.post(this.API_URL, data);
  }

  update(id: number, data: any) {
    return this.http.put(`${this.API_URL}/${id}`, data);
  }

  delete(id: number) {
    return this.http.delete(`${this.API_URL}/${id}`);
  }"#;

pub const SERVICE_CLOSE: &str = "\n}\n";
