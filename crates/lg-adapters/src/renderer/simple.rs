//! Simple variable substitution renderer.

use lg_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::LgResult,
};
use tracing::{instrument, trace};

/// Renderer using `{{VARIABLE}}` substitution from a [`RenderContext`].
///
/// Fails if a substituted fragment still carries a `{{SERVICE_...}}`
/// placeholder, which means the catalog and the context disagree.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all)]
    fn render(&self, fragment: &str, context: &RenderContext) -> LgResult<String> {
        let rendered = context.render(fragment);

        if let Some(start) = rendered.find("{{SERVICE_") {
            let placeholder: String = rendered[start..]
                .chars()
                .take_while(|c| *c != '}')
                .chain("}}".chars())
                .collect();
            return Err(ApplicationError::RenderingFailed {
                reason: format!("unknown placeholder {placeholder}"),
            }
            .into());
        }

        trace!(bytes = rendered.len(), "Fragment rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use lg_core::{domain::ServiceName, error::LgError};

    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::for_service(&ServiceName::new("Order").unwrap())
    }

    #[test]
    fn substitutes_class_name() {
        let out = SimpleRenderer::new()
            .render("export class {{SERVICE_CLASS}} {", &ctx())
            .unwrap();
        assert_eq!(out, "export class OrderService {");
    }

    #[test]
    fn leaves_angular_interpolation_untouched() {
        let out = SimpleRenderer::new()
            .render("<span>{{menu.label}}</span>", &ctx())
            .unwrap();
        assert_eq!(out, "<span>{{menu.label}}</span>");
    }

    #[test]
    fn unknown_service_placeholder_is_an_error() {
        let err = SimpleRenderer::new()
            .render("{{SERVICE_PLURAL}}", &ctx())
            .unwrap_err();
        assert_eq!(
            err,
            LgError::Application(ApplicationError::RenderingFailed {
                reason: "unknown placeholder {{SERVICE_PLURAL}}".into(),
            })
        );
    }
}
