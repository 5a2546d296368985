//! Career suggestion payloads
//!
//! Wire types for the recommendation endpoint. Suggestion contents are
//! displayed verbatim; only the response envelope is enforced.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single career suggestion returned by the recommendation service
///
/// Fields are never type-checked: `null` or a missing field becomes `""`,
/// and any other non-string value is shown as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerSuggestion {
    #[serde(deserialize_with = "lenient_string")]
    pub career_title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub why_recommended: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl CareerSuggestion {
    /// Project one raw list item; anything but an object has no fields
    pub fn from_item(item: Value) -> Self {
        serde_json::from_value(item).unwrap_or_default()
    }

    pub fn new(
        career_title: impl Into<String>,
        description: impl Into<String>,
        why_recommended: impl Into<String>,
    ) -> Self {
        Self {
            career_title: career_title.into(),
            description: description.into(),
            why_recommended: why_recommended.into(),
        }
    }
}

/// Request body sent to the recommendation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRequest<'a> {
    pub frontendinput: &'a str,
}

/// Successful response envelope
///
/// Items stay raw here so one odd item cannot reject the whole list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub career_recommendations: Vec<Value>,
}

impl RecommendationResponse {
    /// Suggestions in response order
    pub fn into_suggestions(self) -> Vec<CareerSuggestion> {
        self.career_recommendations
            .into_iter()
            .map(CareerSuggestion::from_item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_frontendinput_key() {
        let body = serde_json::to_value(RecommendationRequest {
            frontendinput: "I like biology and puzzles",
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"frontendinput": "I like biology and puzzles"})
        );
    }

    #[test]
    fn test_response_preserves_order() {
        let json = r#"{"careerRecommendations":[
            {"careerTitle":"A","description":"da","whyRecommended":"wa"},
            {"careerTitle":"B","description":"db","whyRecommended":"wb"}
        ]}"#;

        let response: RecommendationResponse = serde_json::from_str(json).unwrap();
        let suggestions = response.into_suggestions();

        let titles: Vec<&str> = suggestions.iter().map(|s| s.career_title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(suggestions[1].why_recommended, "wb");
    }

    #[test]
    fn test_missing_item_fields_default_to_empty() {
        let json = r#"{"careerRecommendations":[{"careerTitle":"Genetic Counselor"}]}"#;

        let response: RecommendationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.into_suggestions(),
            vec![CareerSuggestion::new("Genetic Counselor", "", "")]
        );
    }

    #[test]
    fn test_null_item_field_becomes_empty() {
        let json = r#"{"careerRecommendations":[
            {"careerTitle":"Chef","description":null,"whyRecommended":"Likes food"},
            {"careerTitle":"Baker","description":"Bakes","whyRecommended":"Early riser"}
        ]}"#;

        let response: RecommendationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.into_suggestions(),
            vec![
                CareerSuggestion::new("Chef", "", "Likes food"),
                CareerSuggestion::new("Baker", "Bakes", "Early riser"),
            ]
        );
    }

    #[test]
    fn test_non_string_item_fields_shown_as_json_text() {
        let json = r#"{"careerRecommendations":[
            {"careerTitle":42,"description":true,"whyRecommended":["a","b"]}
        ]}"#;

        let response: RecommendationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.into_suggestions(),
            vec![CareerSuggestion::new("42", "true", r#"["a","b"]"#)]
        );
    }

    #[test]
    fn test_non_object_item_has_empty_fields() {
        let json = r#"{"careerRecommendations":[null,"Pilot",{"careerTitle":"Chef"}]}"#;

        let response: RecommendationResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.into_suggestions(),
            vec![
                CareerSuggestion::default(),
                CareerSuggestion::default(),
                CareerSuggestion::new("Chef", "", ""),
            ]
        );
    }

    #[test]
    fn test_missing_envelope_is_rejected() {
        let result: Result<RecommendationResponse, _> =
            serde_json::from_str(r#"{"recommendations":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_envelope_is_rejected() {
        let result: Result<RecommendationResponse, _> =
            serde_json::from_str(r#"{"careerRecommendations":null}"#);
        assert!(result.is_err());
    }
}
