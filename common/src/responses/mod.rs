//! Response bodies of the certificate rendering service and their
//! interpretation into workflow outcomes.

use crate::error::WorkflowError;
use crate::model::certificate::ArtifactRef;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/templates`. Extra keys (e.g. `template_details`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesResponse {
    #[serde(default)]
    pub templates: Vec<String>,
    #[serde(default)]
    pub styles: Option<Vec<String>>,
}

/// Body of `POST /api/generate-certificate`, for both success and error statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCertificateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateCertificateResponse {
    /// Interprets a raw HTTP answer.
    ///
    /// A body that is not JSON is tolerated on error statuses (proxies and crashed
    /// servers return HTML) and reported as a rejection without a reason.
    pub fn interpret(status: u16, body: &str) -> Result<ArtifactRef, WorkflowError> {
        let ok_status = (200..300).contains(&status);
        match serde_json::from_str::<GenerateCertificateResponse>(body) {
            Ok(response) if ok_status => response.into_artifact(Some(status)),
            Ok(response) => Err(WorkflowError::Rejected {
                status: Some(status),
                message: response.error,
            }),
            Err(e) if ok_status => Err(WorkflowError::decode(e.to_string())),
            Err(_) => Err(WorkflowError::Rejected {
                status: Some(status),
                message: None,
            }),
        }
    }

    /// Artifact of a successful response; any other shape is a rejection.
    pub fn into_artifact(self, status: Option<u16>) -> Result<ArtifactRef, WorkflowError> {
        if !self.success {
            return Err(WorkflowError::Rejected {
                status,
                message: self.error,
            });
        }
        self.filename
            .and_then(ArtifactRef::new)
            .ok_or(WorkflowError::Rejected {
                status,
                message: self.error,
            })
    }
}

/// Interprets the listing response body.
pub fn interpret_templates(status: u16, body: &str) -> Result<TemplatesResponse, WorkflowError> {
    if !(200..300).contains(&status) {
        return Err(WorkflowError::Rejected {
            status: Some(status),
            message: serde_json::from_str::<GenerateCertificateResponse>(body)
                .ok()
                .and_then(|r| r.error),
        });
    }
    serde_json::from_str(body).map_err(|e| WorkflowError::decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_generation_yields_artifact() {
        let artifact = GenerateCertificateResponse::interpret(
            200,
            r#"{"success": true, "filename": "out/cert123.pdf", "message": "Certificate generated successfully"}"#,
        )
        .unwrap();
        assert_eq!(artifact.as_str(), "out/cert123.pdf");
        assert_eq!(artifact.remote_id(), "cert123.pdf");
    }

    #[test]
    fn error_status_carries_server_reason() {
        let err =
            GenerateCertificateResponse::interpret(400, r#"{"error": "bad org"}"#).unwrap_err();
        assert_eq!(err.user_message(), "bad org");
        assert!(matches!(err, WorkflowError::Rejected { status: Some(400), .. }));
    }

    #[test]
    fn success_false_on_ok_status_is_rejection() {
        let err = GenerateCertificateResponse::interpret(
            200,
            r#"{"success": false, "error": "bad org"}"#,
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "bad org");
    }

    #[test]
    fn success_without_filename_is_rejection() {
        let err = GenerateCertificateResponse::interpret(200, r#"{"success": true}"#).unwrap_err();
        assert_eq!(err.user_message(), "Error generating certificate");
    }

    #[test]
    fn non_json_error_page_is_reasonless_rejection() {
        let err = GenerateCertificateResponse::interpret(502, "<html>Bad Gateway</html>")
            .unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Rejected {
                status: Some(502),
                message: None
            }
        );
    }

    #[test]
    fn garbage_on_ok_status_is_decode_error() {
        let err = GenerateCertificateResponse::interpret(200, "not json").unwrap_err();
        assert!(matches!(err, WorkflowError::Decode(_)));
    }

    #[test]
    fn templates_listing_ignores_details_and_keeps_missing_styles_absent() {
        let listing = interpret_templates(
            200,
            r#"{"templates": ["volunteer", "achievement"], "template_details": {"volunteer": {}}}"#,
        )
        .unwrap();
        assert_eq!(listing.templates, vec!["volunteer", "achievement"]);
        assert_eq!(listing.styles, None);
    }

    #[test]
    fn templates_listing_failure_is_rejection() {
        let err = interpret_templates(503, "").unwrap_err();
        assert!(matches!(err, WorkflowError::Rejected { status: Some(503), message: None }));
    }
}
