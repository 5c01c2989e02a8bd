use crate::model::certificate::CertificateForm;
use crate::model::template::{CertificateStyle, TemplateKind};
use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/generate-certificate`.
/// Carries every form field unchanged plus the selected template and style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCertificateRequest {
    #[serde(flatten)]
    pub form: CertificateForm,
    pub template_type: TemplateKind,
    pub style: CertificateStyle,
}
