//! Feedback resource implementation.
//!
//! Call feedback is a singleton attached to one call: it is created, fetched
//! and updated in place at `/Accounts/{account_sid}/Calls/{call_sid}/Feedback.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{
    deserialize, require, Resource, ResourceError, ResourceOperation, ResourcePath, Validate,
};
use crate::HttpMethod;

const FEEDBACK_PATH: &str = "/Accounts/{account_sid}/Calls/{call_sid}/Feedback.json";
const FEEDBACK_IDS: &[&str] = &["account_sid", "call_sid"];

/// Quality feedback for a call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Feedback {
    /// The account that owns the call.
    pub account_sid: Option<String>,
    /// When the feedback was created.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the feedback was last updated.
    #[serde(default, deserialize_with = "deserialize::option_datetime")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Issues reported for the call (e.g. `dropped-call`).
    pub issues: Option<Vec<String>>,
    /// Quality score from 1 to 5.
    #[serde(default, deserialize_with = "deserialize::option_integer")]
    pub quality_score: Option<i64>,
    /// The unique identifier of the feedback.
    pub sid: Option<String>,
}

impl Resource for Feedback {
    type ReadParams = ();
    type CreateParams = FeedbackCreateParams;
    type UpdateParams = FeedbackCreateParams;

    const NAME: &'static str = "Feedback";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            FEEDBACK_IDS,
            FEEDBACK_PATH,
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Fetch,
            FEEDBACK_IDS,
            FEEDBACK_PATH,
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Update,
            FEEDBACK_IDS,
            FEEDBACK_PATH,
        ),
    ];

    fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

/// Parameters for creating or updating call feedback.
///
/// `quality_score` is required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedbackCreateParams {
    /// Quality score from 1 to 5.
    #[serde(rename = "QualityScore", skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<u8>,
    /// Issues to report; sent as one `Issue` per entry.
    #[serde(rename = "Issue", skip_serializing_if = "Vec::is_empty")]
    pub issue: Vec<String>,
}

impl Validate for FeedbackCreateParams {
    fn validate(&self) -> Result<(), ResourceError> {
        require::<Feedback, _>("QualityScore", self.quality_score.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::to_params;

    #[test]
    fn test_feedback_wire_format() {
        let params = FeedbackCreateParams {
            quality_score: Some(3),
            issue: vec!["dropped-call".to_string(), "audio-latency".to_string()],
        };
        assert_eq!(
            to_params(&params).unwrap(),
            vec![
                ("QualityScore".to_string(), "3".to_string()),
                ("Issue".to_string(), "dropped-call".to_string()),
                ("Issue".to_string(), "audio-latency".to_string()),
            ]
        );
    }

    #[test]
    fn test_quality_score_is_required() {
        assert!(matches!(
            FeedbackCreateParams::default().validate(),
            Err(ResourceError::MissingRequiredField {
                resource: "Feedback",
                field: "QualityScore"
            })
        ));
    }

    #[test]
    fn test_feedback_deserialization() {
        let feedback: Feedback = serde_json::from_str(
            r#"{"account_sid": "AC1", "issues": ["post-dial-delay"], "quality_score": 5, "sid": "FB1"}"#,
        )
        .unwrap();
        assert_eq!(feedback.quality_score, Some(5));
        assert_eq!(feedback.issues.unwrap(), vec!["post-dial-delay"]);
    }
}
