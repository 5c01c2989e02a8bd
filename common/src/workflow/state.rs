use uuid::Uuid;

/// Where the workflow is in its generate cycle.
///
/// `Generating` is the only busy phase. The ticket names the single request whose
/// completion will be accepted; completions carrying any other ticket are stale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WorkflowPhase {
    #[default]
    Idle,
    Generating { ticket: Uuid },
}

/// Outcome of the one-time catalog fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Pending,
    Loaded,
    /// The fetch failed; the form keeps working with an empty catalog.
    Unavailable(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS class of the status banner.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success-message",
            StatusKind::Error => "error-message",
        }
    }
}

/// Feedback shown under the form. Every workflow action overwrites it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}
