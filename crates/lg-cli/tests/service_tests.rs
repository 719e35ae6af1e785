//! End-to-end tests for `lg-cli service`.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn lg(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("lg-cli");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn service_file(dir: &Path, folder: &str) -> std::path::PathBuf {
    dir.join("src/app/services")
        .join(folder)
        .join(format!("{folder}.service.ts"))
}

#[test]
fn plain_service() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .args(["service", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service created at:"))
        .stdout(predicate::str::contains("foo.service.ts"));

    let content = fs::read_to_string(service_file(temp.path(), "foo")).unwrap();
    assert!(content.contains("export class FooService {"));
    assert!(content.contains("constructor() { }"));
    assert!(content.contains("providedIn: 'root'"));
    assert!(!content.contains("HttpClient"));
    assert!(content.ends_with("}\n"));
}

#[test]
fn http_service() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .args(["service", "Foo", "--http"])
        .assert()
        .success();

    let content = fs::read_to_string(service_file(temp.path(), "foo")).unwrap();
    assert!(content.contains("import { HttpClient } from '@angular/common/http';"));
    assert_eq!(content.matches("inject(HttpClient)").count(), 1);
    for method in ["getAll(", "getById(", "create(", "update(", "delete("] {
        assert!(content.contains(method), "missing {method}");
    }
    assert!(!content.contains("constructor"));
}

#[test]
fn service_class_uses_name_as_typed() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .args(["service", "userProfile"])
        .assert()
        .success();

    let content = fs::read_to_string(service_file(temp.path(), "userprofile")).unwrap();
    assert!(content.contains("export class userProfileService {"));
}

#[test]
fn service_twice_overwrites_without_backup() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .args(["service", "Foo", "--http"])
        .assert()
        .success();
    lg(temp.path()).args(["service", "Foo"]).assert().success();

    let path = service_file(temp.path(), "foo");
    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("HttpClient"));

    let entries: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name())
        .collect();
    assert_eq!(entries, vec!["foo.service.ts"]);
}

#[test]
fn service_reuses_existing_services_directory() {
    let temp = TempDir::new().unwrap();
    let services = temp.path().join("src/app/services");
    fs::create_dir_all(services.join("auth")).unwrap();
    fs::write(services.join("auth/auth.service.ts"), "keep").unwrap();

    lg(temp.path()).args(["service", "Foo"]).assert().success();

    assert_eq!(
        fs::read_to_string(services.join("auth/auth.service.ts")).unwrap(),
        "keep"
    );
    assert!(service_file(temp.path(), "foo").exists());
}

#[test]
fn service_dry_run_prints_content_only() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .args(["service", "Foo", "--http", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("export class FooService {"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn invalid_service_name_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .args(["service", "1foo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid service name"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn path_separator_in_name_rejected() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .args(["service", "../evil"])
        .assert()
        .code(2);

    assert!(!temp.path().join("src").exists());
}

#[test]
fn dry_run_content_survives_quiet() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .args(["service", "Foo", "--dry-run", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export class FooService {"))
        .stdout(predicate::str::contains("Dry run").not());

    assert!(!temp.path().join("src").exists());
}

#[test]
fn app_dir_can_come_from_the_environment() {
    let temp = TempDir::new().unwrap();

    lg(temp.path())
        .env("LG_PROJECT__APP_DIR", "web/app")
        .args(["service", "Foo"])
        .assert()
        .success();

    assert!(
        temp.path()
            .join("web/app/services/foo/foo.service.ts")
            .exists()
    );
    assert!(!temp.path().join("src").exists());
}
