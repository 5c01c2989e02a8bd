//! # Certificate Request Workflow
//!
//! Owns the form, the template/style selection, the generated artifact and the
//! status message, and sequences the two remote operations against user actions.
//! The workflow performs no I/O itself: the caller runs the HTTP requests and
//! reports their results back.
//!
//! ## Generate
//!
//! 1.  `begin_generate` validates, clears the previous artifact, enters
//!     `Generating` and hands out a [`PendingGeneration`] carrying the request
//!     body and a ticket.
//! 2.  The caller posts the body and passes the ticket and result to
//!     `finish_generate`, which always returns the workflow to `Idle`.
//!
//! While generating, further `begin_generate` calls are refused. A completion
//! whose ticket no longer matches (the form was reset meanwhile) is discarded.
//!
//! ## Download
//!
//! `begin_download` yields the remote identifier, local file name and a ticket,
//! or `None` when nothing has been generated; the caller fetches and saves the
//! file and reports through `finish_download`. Reset and a new generation drop
//! the download ticket, so a late result cannot overwrite the status.

mod state;

pub use state::{CatalogStatus, StatusKind, StatusMessage, WorkflowPhase};

use crate::error::{DOWNLOAD_FAILED, ValidationError, WorkflowError};
use crate::model::certificate::{
    ArtifactRef, CertificateForm, DEFAULT_ORGANIZATION, FormField, certificate_file_name,
};
use crate::model::template::{CertificateStyle, TemplateCatalog, TemplateKind};
use crate::requests::GenerateCertificateRequest;
use crate::responses::TemplatesResponse;
use crate::validation::{validate_form, validate_selection};
use uuid::Uuid;

/// Status text after a successful generation.
pub const GENERATED: &str =
    "Certificate generated successfully! Click download to get your certificate.";

/// A generate request the caller must send, and the ticket to report it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub ticket: Uuid,
    pub request: GenerateCertificateRequest,
}

/// What the caller needs to fetch and save the generated certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Last path segment of the artifact; appended to the download endpoint.
    pub remote_id: String,
    /// Name offered to the browser's save dialog.
    pub file_name: String,
    pub ticket: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateWorkflow {
    form: CertificateForm,
    template: TemplateKind,
    style: CertificateStyle,
    catalog: TemplateCatalog,
    catalog_status: CatalogStatus,
    artifact: Option<ArtifactRef>,
    status: Option<StatusMessage>,
    phase: WorkflowPhase,
    download_ticket: Option<Uuid>,
}

impl Default for CertificateWorkflow {
    fn default() -> Self {
        Self::new(DEFAULT_ORGANIZATION)
    }
}

impl CertificateWorkflow {
    pub fn new(default_organization: impl Into<String>) -> Self {
        Self {
            form: CertificateForm::initial(default_organization),
            template: TemplateKind::default(),
            style: CertificateStyle::default(),
            catalog: TemplateCatalog::default(),
            catalog_status: CatalogStatus::Pending,
            artifact: None,
            status: None,
            phase: WorkflowPhase::Idle,
            download_ticket: None,
        }
    }

    pub fn form(&self) -> &CertificateForm {
        &self.form
    }

    pub fn selected_template(&self) -> TemplateKind {
        self.template
    }

    pub fn selected_style(&self) -> CertificateStyle {
        self.style
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn catalog_status(&self) -> &CatalogStatus {
        &self.catalog_status
    }

    pub fn artifact(&self) -> Option<&ArtifactRef> {
        self.artifact.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn phase(&self) -> &WorkflowPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, WorkflowPhase::Generating { .. })
    }

    pub fn can_download(&self) -> bool {
        self.artifact.is_some()
    }

    /// Whether the generate button is enabled: both required fields hold
    /// something and no request is in flight. Full validation runs on click.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.form.name.is_empty() && !self.form.duration.is_empty()
    }

    /// Records the result of the startup catalog fetch. Failure degrades to an
    /// empty catalog and is reported through [`CatalogStatus::Unavailable`].
    pub fn apply_catalog(&mut self, result: Result<TemplatesResponse, WorkflowError>) {
        match result {
            Ok(response) => {
                self.catalog = TemplateCatalog::from_response(response);
                self.catalog_status = CatalogStatus::Loaded;
            }
            Err(e) => {
                self.catalog = TemplateCatalog::default();
                self.catalog_status = CatalogStatus::Unavailable(e.to_string());
            }
        }
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn select_template(&mut self, template: TemplateKind) {
        self.template = template;
    }

    pub fn select_style(&mut self, style: CertificateStyle) {
        self.style = style;
    }

    /// Runs the form rules; on failure the first broken rule becomes the status
    /// message. A pass leaves the current message untouched.
    pub fn validate(&mut self) -> bool {
        self.check(validate_form(&self.form))
    }

    fn check(&mut self, result: Result<(), ValidationError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                self.status = Some(StatusMessage::error(e.to_string()));
                false
            }
        }
    }

    /// Starts a generation. Returns `None` when one is already in flight or the
    /// form or selection is invalid (the status message says why).
    pub fn begin_generate(&mut self) -> Option<PendingGeneration> {
        if self.is_busy() {
            return None;
        }
        self.status = None;
        if !self.validate() {
            return None;
        }
        let selection = validate_selection(&self.catalog, self.template, self.style);
        if !self.check(selection) {
            return None;
        }

        let ticket = Uuid::new_v4();
        self.artifact = None;
        self.download_ticket = None;
        self.phase = WorkflowPhase::Generating { ticket };

        Some(PendingGeneration {
            ticket,
            request: GenerateCertificateRequest {
                form: self.form.clone(),
                template_type: self.template,
                style: self.style,
            },
        })
    }

    /// Completes the generation named by `ticket`. Returns `false` and changes
    /// nothing when the ticket is stale.
    pub fn finish_generate(
        &mut self,
        ticket: Uuid,
        result: Result<ArtifactRef, WorkflowError>,
    ) -> bool {
        if self.phase != (WorkflowPhase::Generating { ticket }) {
            return false;
        }
        self.phase = WorkflowPhase::Idle;

        match result {
            Ok(artifact) => {
                self.artifact = Some(artifact);
                self.status = Some(StatusMessage::success(GENERATED));
            }
            Err(e) => {
                self.status = Some(StatusMessage::error(e.user_message()));
            }
        }
        true
    }

    /// `None` until a generation has succeeded; no request should be issued then.
    /// Each call supersedes the ticket of any earlier download.
    pub fn begin_download(&mut self) -> Option<DownloadTarget> {
        let artifact = self.artifact.as_ref()?;
        let ticket = Uuid::new_v4();
        self.download_ticket = Some(ticket);

        Some(DownloadTarget {
            remote_id: artifact.remote_id().to_string(),
            file_name: certificate_file_name(&self.form.name),
            ticket,
        })
    }

    /// Completes the download named by `ticket`. Returns `false` and changes
    /// nothing when the ticket is stale.
    pub fn finish_download(&mut self, ticket: Uuid, result: Result<(), WorkflowError>) -> bool {
        if self.download_ticket != Some(ticket) {
            return false;
        }
        self.download_ticket = None;

        if result.is_err() {
            self.status = Some(StatusMessage::error(DOWNLOAD_FAILED));
        }
        true
    }

    /// Blank form, default selection, nothing generated, no message. Drops any
    /// in-flight tickets so late completions are ignored.
    pub fn reset(&mut self) {
        self.form = CertificateForm::blank();
        self.template = TemplateKind::default();
        self.style = CertificateStyle::default();
        self.artifact = None;
        self.status = None;
        self.phase = WorkflowPhase::Idle;
        self.download_ticket = None;
    }
}
