//! Error taxonomy of the certificate request workflow.
//!
//! No error escapes the workflow: each one ends up as the status message shown
//! under the form, via [`WorkflowError::user_message`].

/// Fallback text when generation fails without a server-supplied reason.
pub const GENERATE_FAILED: &str = "Error generating certificate";

/// Text shown for any failure on the download path.
pub const DOWNLOAD_FAILED: &str = "Error downloading certificate";

/// A form or selection rule that blocks submission. The display text is shown to
/// the user verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Duration is required")]
    DurationRequired,

    #[error("Duration must be a positive number")]
    DurationNotPositive,

    #[error("Selected template is not available")]
    TemplateUnavailable,

    #[error("Selected style is not available")]
    StyleUnavailable,
}

/// Failure of a remote call or of the browser-side save.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered, but with a non-2xx status or `success: false`.
    #[error("request rejected (status {:?}): {}", .status, .message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        status: Option<u16>,
        message: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Blob, object URL or anchor handling failed in the browser.
    #[error("download failed: {0}")]
    Download(String),
}

impl WorkflowError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn download(message: impl Into<String>) -> Self {
        Self::Download(message.into())
    }

    /// Server-supplied reason, if the server gave one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            WorkflowError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Status text for a failed generate attempt.
    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or(GENERATE_FAILED).to_string()
    }
}
