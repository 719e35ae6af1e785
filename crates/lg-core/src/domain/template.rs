//! Template keys and render context.
//!
//! Templates are opaque text owned by a `TemplateCatalog`. The domain only
//! names them ([`TemplateKey`]) and describes the single substitution the
//! service fragments need ([`RenderContext`]).

use std::fmt;

use super::ServiceName;

/// Every entry a catalog must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// `app.component.html`
    LayoutMarkup,
    /// `app.component.scss`
    LayoutStyle,
    /// `app.component.ts`
    LayoutClass,
    /// Core Angular imports opening every service file.
    ServiceImports,
    /// `HttpClient` import, only with `--http`.
    ServiceHttpImport,
    /// `@Injectable` decorator and class header.
    ServiceDeclaration,
    /// Empty constructor, only without `--http`.
    ServiceConstructor,
    /// Injected client, base URL constant and CRUD methods, only with `--http`.
    ServiceHttpMembers,
    /// Closing brace.
    ServiceClose,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 9] = [
        Self::LayoutMarkup,
        Self::LayoutStyle,
        Self::LayoutClass,
        Self::ServiceImports,
        Self::ServiceHttpImport,
        Self::ServiceDeclaration,
        Self::ServiceConstructor,
        Self::ServiceHttpMembers,
        Self::ServiceClose,
    ];

    /// Fragments concatenated for a service file, in order.
    pub fn service_fragments(http: bool) -> Vec<TemplateKey> {
        let mut keys = vec![Self::ServiceImports];
        if http {
            keys.push(Self::ServiceHttpImport);
        }
        keys.push(Self::ServiceDeclaration);
        keys.push(if http {
            Self::ServiceHttpMembers
        } else {
            Self::ServiceConstructor
        });
        keys.push(Self::ServiceClose);
        keys
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LayoutMarkup => "layout-markup",
            Self::LayoutStyle => "layout-style",
            Self::LayoutClass => "layout-class",
            Self::ServiceImports => "service-imports",
            Self::ServiceHttpImport => "service-http-import",
            Self::ServiceDeclaration => "service-declaration",
            Self::ServiceConstructor => "service-constructor",
            Self::ServiceHttpMembers => "service-http-members",
            Self::ServiceClose => "service-close",
        };
        f.write_str(name)
    }
}

/// The one substitution service fragments need: `{{SERVICE_CLASS}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    service_class: String,
}

impl RenderContext {
    pub const SERVICE_CLASS: &'static str = "{{SERVICE_CLASS}}";

    pub fn for_service(name: &ServiceName) -> Self {
        Self {
            service_class: name.class_name(),
        }
    }

    /// Replace `{{SERVICE_CLASS}}`. Any other `{{...}}` text stays as-is.
    pub fn render(&self, template: &str) -> String {
        template.replace(Self::SERVICE_CLASS, &self.service_class)
    }
}
