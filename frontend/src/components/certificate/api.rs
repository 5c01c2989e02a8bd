//! HTTP calls to the certificate rendering service.
//!
//! Each function returns the raw outcome; interpreting status codes and bodies
//! is left to `common::responses` so the rules are shared with the native tests.

use common::api::{download_url, generate_url, templates_url};
use common::error::WorkflowError;
use common::model::certificate::ArtifactRef;
use common::requests::GenerateCertificateRequest;
use common::responses::{interpret_templates, GenerateCertificateResponse, TemplatesResponse};
use gloo_net::http::Request;

fn transport(err: gloo_net::Error) -> WorkflowError {
    WorkflowError::transport(err.to_string())
}

/// `GET /api/templates`
pub async fn fetch_catalog(api_base: &str) -> Result<TemplatesResponse, WorkflowError> {
    let response = Request::get(&templates_url(api_base))
        .send()
        .await
        .map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    interpret_templates(status, &body)
}

/// `POST /api/generate-certificate`
pub async fn request_generation(
    api_base: &str,
    request: &GenerateCertificateRequest,
) -> Result<ArtifactRef, WorkflowError> {
    let response = Request::post(&generate_url(api_base))
        .json(request)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    GenerateCertificateResponse::interpret(status, &body)
}

/// `GET /api/download-certificate/{remote_id}`, returning the file bytes.
pub async fn fetch_certificate(api_base: &str, remote_id: &str) -> Result<Vec<u8>, WorkflowError> {
    let response = Request::get(&download_url(api_base, remote_id))
        .send()
        .await
        .map_err(transport)?;
    if !response.ok() {
        return Err(WorkflowError::Rejected {
            status: Some(response.status()),
            message: None,
        });
    }
    response.binary().await.map_err(transport)
}
