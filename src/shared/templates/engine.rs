//! HTML page templates using Jinja2 syntax.
//!
//! Templates live under `templates/pages/` and are compiled into the binary,
//! so rendering does not depend on the working directory.

use minijinja::Environment;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

const TEMPLATES: &[(&str, &str)] = &[
    (
        "base.html",
        include_str!("../../../templates/pages/base.html"),
    ),
    (
        "home.html",
        include_str!("../../../templates/pages/home.html"),
    ),
    (
        "about.html",
        include_str!("../../../templates/pages/about.html"),
    ),
    (
        "updates.html",
        include_str!("../../../templates/pages/updates.html"),
    ),
    (
        "control_measures.html",
        include_str!("../../../templates/pages/control_measures.html"),
    ),
    (
        "contact.html",
        include_str!("../../../templates/pages/contact.html"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a page template with a serializable context.
///
/// # Example
/// ```ignore
/// let html = render_template("about.html", minijinja::context! { page => "about" })?;
/// ```
pub fn render_template<S: Serialize>(template_name: &str, ctx: S) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
pub fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_compile() {
        for (name, _) in TEMPLATES {
            assert!(template_exists(name), "template {} failed to load", name);
        }
    }

    #[test]
    fn test_missing_template() {
        let result = render_template("nonexistent.html", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_static_page_renders_layout() {
        let html = render_template("about.html", context! { page => "about" }).unwrap();
        assert!(html.contains("<html"));
        assert!(html.contains("Foot-and-Mouth Disease"));
    }
}
