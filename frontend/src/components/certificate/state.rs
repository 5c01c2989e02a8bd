//! Component state for the certificate request form.
//!
//! All form, selection and status data lives in the `CertificateWorkflow`
//! from `common`; this struct only adds what the browser side needs on top.

use common::workflow::CertificateWorkflow;
use yew::prelude::*;

use super::props::CertificateRequestProps;

/// Main state container for the `CertificateRequestComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct CertificateRequestComponent {
    /// Form, selection, artifact and status state. Mutated only through its
    /// own operations.
    pub workflow: CertificateWorkflow,

    /// Prefix for API requests, copied from the props at creation.
    pub api_base: AttrValue,

    /// Guard to avoid fetching the catalog more than once.
    pub loaded: bool,
}

impl CertificateRequestComponent {
    pub fn new(props: &CertificateRequestProps) -> Self {
        Self {
            workflow: CertificateWorkflow::new(props.default_organization.to_string()),
            api_base: props.api_base.clone(),
            loaded: false,
        }
    }
}
