//! Defines the properties for the `CertificateRequestComponent`.
//!
//! These are the only configuration the client has: there are no environment
//! variables and nothing is persisted between page loads.

use common::model::certificate::DEFAULT_ORGANIZATION;
use yew::prelude::*;

/// Properties for the `CertificateRequestComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct CertificateRequestProps {
    /// Prefix for the `/api/...` endpoint paths.
    ///
    /// Empty (the default) sends requests to the origin that served the page.
    /// Set it to e.g. `http://localhost:5000` when the rendering service runs
    /// on another host.
    #[prop_or_default]
    pub api_base: AttrValue,

    /// Organization pre-filled in the form on first load. A reset clears it.
    #[prop_or(AttrValue::Static(DEFAULT_ORGANIZATION))]
    pub default_organization: AttrValue,
}
