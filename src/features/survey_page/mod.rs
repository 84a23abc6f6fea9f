//! The survey page itself, rendered from `templates/survey.html.jinja`.

pub mod handlers;
pub mod routes;
