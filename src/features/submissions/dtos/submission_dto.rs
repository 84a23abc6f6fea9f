use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::submissions::validation::{
    validate_detailed_reason, validate_interest_reasons, validate_occupation,
    validate_optional_email,
};

/// Request DTO for a survey submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitSurveyDto {
    /// Respondent's occupation (at least 2 characters after trimming)
    #[serde(default)]
    #[validate(custom(function = "validate_occupation"))]
    #[schema(example = "학생")]
    pub occupation: String,

    /// Selected reasons for interest, drawn from the predefined list
    #[serde(default)]
    #[validate(custom(function = "validate_interest_reasons"))]
    #[schema(example = json!(["포트폴리오를 만들고싶어서"]))]
    pub interest_reasons: Vec<String>,

    /// Free-text explanation (at least 10 characters after trimming)
    #[serde(default)]
    #[validate(custom(function = "validate_detailed_reason"))]
    pub detailed_reason: String,

    /// Optional email for follow-up; empty, null or missing means not supplied
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_optional_email"))]
    #[schema(value_type = Option<String>, example = "")]
    pub email: String,

    /// Opted in to the social post request
    #[serde(default)]
    pub social_support: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_email_deserialize_as_empty() {
        let base = json!({
            "occupation": "학생",
            "interest_reasons": ["포트폴리오를 만들고싶어서"],
            "detailed_reason": "개인 프로젝트에 적용해보고 싶습니다"
        });
        let missing: SubmitSurveyDto = serde_json::from_value(base.clone()).unwrap();
        assert_eq!(missing.email, "");
        assert!(!missing.social_support);

        let mut with_null = base;
        with_null["email"] = serde_json::Value::Null;
        let null: SubmitSurveyDto = serde_json::from_value(with_null).unwrap();
        assert_eq!(null.email, "");
    }
}
