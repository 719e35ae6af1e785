//! Template catalogs.

pub mod angular;

use lg_core::{application::ports::TemplateCatalog, domain::TemplateKey, error::LgResult};

/// Catalog backed by the compiled-in Angular templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Static lookup; every key has an entry.
    pub fn template(key: TemplateKey) -> &'static str {
        match key {
            TemplateKey::LayoutMarkup => angular::LAYOUT_MARKUP,
            TemplateKey::LayoutStyle => angular::LAYOUT_STYLE,
            TemplateKey::LayoutClass => angular::LAYOUT_CLASS,
            TemplateKey::ServiceImports => angular::SERVICE_IMPORTS,
            TemplateKey::ServiceHttpImport => angular::SERVICE_HTTP_IMPORT,
            TemplateKey::ServiceDeclaration => angular::SERVICE_DECLARATION,
            TemplateKey::ServiceConstructor => angular::SERVICE_CONSTRUCTOR,
            TemplateKey::ServiceHttpMembers => angular::SERVICE_HTTP_MEMBERS,
            TemplateKey::ServiceClose => angular::SERVICE_CLOSE,
        }
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn get(&self, key: TemplateKey) -> LgResult<&str> {
        Ok(Self::template(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_content() {
        let catalog = BuiltinCatalog::new();
        for key in TemplateKey::ALL {
            assert!(!catalog.get(key).unwrap().is_empty(), "{key} is empty");
        }
    }

    #[test]
    fn only_the_declaration_is_parameterised() {
        for key in TemplateKey::ALL {
            let content = BuiltinCatalog::template(key);
            assert_eq!(
                content.contains("{{SERVICE_CLASS}}"),
                key == TemplateKey::ServiceDeclaration,
                "{key}"
            );
        }
    }

    #[test]
    fn layout_class_references_sibling_files() {
        let class = BuiltinCatalog::template(TemplateKey::LayoutClass);
        assert!(class.contains("templateUrl: './app.component.html'"));
        assert!(class.contains("styleUrl: './app.component.scss'"));
    }

    #[test]
    fn layout_markup_labels_and_router_imports() {
        let markup = BuiltinCatalog::template(TemplateKey::LayoutMarkup);
        assert!(markup.contains(r#"aria-label="Example icon-button with menu icon""#));
        assert!(markup.contains(r#"aria-label="Example icon-button with share icon""#));

        let class = BuiltinCatalog::template(TemplateKey::LayoutClass);
        assert!(class.contains("import { Router, RouterModule, RouterOutlet } from '@angular/router';"));
    }
}
