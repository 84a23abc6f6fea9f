//! Page templates rendered with Jinja2 syntax.
//!
//! Templates live in `templates/` and are embedded at compile time, so the
//! binary does not depend on its working directory.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

pub const SURVEY_PAGE_TEMPLATE: &str = "survey.html.jinja";

/// Templates shipped with the binary as (name, source) pairs
const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[(
    SURVEY_PAGE_TEMPLATE,
    include_str!("../../templates/survey.html.jinja"),
)];

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

    for &(name, source) in EMBEDDED_TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Example
/// ```ignore
/// use minijinja::context;
///
/// let html = render_template(SURVEY_PAGE_TEMPLATE, context! { reasons => reasons })?;
/// ```
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_missing_template() {
        let result = render_template("definitely_not_a_real_template.jinja", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_survey_template_is_embedded() {
        let html = render_template(
            SURVEY_PAGE_TEMPLATE,
            context! {
                reasons => vec!["포트폴리오를 만들고싶어서"],
                landing_url => "landing-page",
                submit_url => "/api/submit",
                alert_message => "alert",
                rules => context! {
                    occupation_min_chars => 2,
                    detailed_reason_min_chars => 10,
                    email_pattern => "^.+$",
                    email_message => "bad email",
                },
            },
        )
        .unwrap();

        assert!(html.contains("포트폴리오를 만들고싶어서"));
        assert!(html.contains("data-landing-url=\"landing-page\""));
        assert!(html.contains("<details>"));
        assert!(html.contains("data-occupation-min-chars=\"2\""));
        assert!(html.contains("data-message=\"bad email\""));
    }
}
