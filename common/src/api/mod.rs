//! Endpoint paths of the certificate rendering service.
//!
//! Paths are relative to an API base (empty for same-origin deployments) that the
//! frontend receives as a component property.

/// Lists available templates and styles.
pub const TEMPLATES_PATH: &str = "/api/templates";

/// Renders a certificate and returns the path of the generated file.
pub const GENERATE_PATH: &str = "/api/generate-certificate";

/// Serves a generated file; the file identifier is appended as the last segment.
pub const DOWNLOAD_PATH: &str = "/api/download-certificate";

/// Header logo. Served from the site root next to the page, not under the API
/// base.
pub const LOGO_PATH: &str = "/akshar-paaul-logo.png";

fn join(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

pub fn templates_url(api_base: &str) -> String {
    join(api_base, TEMPLATES_PATH)
}

pub fn generate_url(api_base: &str) -> String {
    join(api_base, GENERATE_PATH)
}

pub fn download_url(api_base: &str, remote_id: &str) -> String {
    format!("{}/{}", join(api_base, DOWNLOAD_PATH), remote_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_urls_are_bare_paths() {
        assert_eq!(templates_url(""), "/api/templates");
        assert_eq!(generate_url(""), "/api/generate-certificate");
        assert_eq!(
            download_url("", "cert123.pdf"),
            "/api/download-certificate/cert123.pdf"
        );
    }

    #[test]
    fn logo_is_served_from_site_root() {
        assert_eq!(LOGO_PATH, "/akshar-paaul-logo.png");
        assert!(!LOGO_PATH.starts_with("/api/"));
    }

    #[test]
    fn base_trailing_slash_is_not_doubled() {
        assert_eq!(
            templates_url("http://localhost:5000/"),
            "http://localhost:5000/api/templates"
        );
    }
}
