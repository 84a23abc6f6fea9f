use utoipa::{Modify, OpenApi};

use crate::features::submissions::{dtos as submissions_dtos, handlers as submissions_handlers};
use crate::shared::types::{ApiResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Submissions (public)
        submissions_handlers::submit_survey,
    ),
    components(
        schemas(
            // Shared
            ApiResponse,
            ErrorResponse,
            // Submissions
            submissions_dtos::SubmitSurveyDto,
        )
    ),
    tags(
        (name = "submissions", description = "Survey submissions forwarded to the spreadsheet (public)"),
    ),
    info(
        title = "Interest Survey API",
        version = "0.1.0",
        description = "API documentation for the interest survey",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_submit_endpoint() {
        let openapi = ApiDoc::openapi();
        assert!(openapi.paths.paths.contains_key("/api/submit"));
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Survey".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Survey");
        assert_eq!(openapi.info.version, "9.9.9");
        assert_eq!(openapi.info.description.as_deref(), Some("desc"));
    }
}
