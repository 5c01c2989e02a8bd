use common::error::WorkflowError;
use common::model::certificate::{ArtifactRef, FormField};
use common::model::template::{CertificateStyle, TemplateKind};
use common::responses::TemplatesResponse;
use uuid::Uuid;

#[derive(Clone)]
pub enum Msg {
    CatalogLoaded(Result<TemplatesResponse, WorkflowError>),
    UpdateField(FormField, String),
    SelectTemplate(TemplateKind),
    SelectStyle(CertificateStyle),
    Generate,
    GenerateFinished {
        ticket: Uuid,
        result: Result<ArtifactRef, WorkflowError>,
    },
    Download,
    DownloadFinished {
        ticket: Uuid,
        result: Result<(), WorkflowError>,
    },
    Reset,
}
