//! Recipient details collected by the certificate form.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Organization pre-filled on first load. A reset clears it.
pub const DEFAULT_ORGANIZATION: &str = "Akshar Paul NGO Pune";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN should be a valid regex pattern"));

/// Raw form values, exactly as typed.
///
/// `duration` stays a string: it is validated at submission time and sent to the
/// server unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateForm {
    pub name: String,
    pub duration: String,
    pub organization: String,
    pub project: String,
    pub email: String,
    pub phone: String,
}

impl CertificateForm {
    /// Shape shown when the page loads.
    pub fn initial(default_organization: impl Into<String>) -> Self {
        Self {
            organization: default_organization.into(),
            ..Self::default()
        }
    }

    /// Shape restored by a reset: every field empty.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Duration => &self.duration,
            FormField::Organization => &self.organization,
            FormField::Project => &self.project,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Duration => &mut self.duration,
            FormField::Organization => &mut self.organization,
            FormField::Project => &mut self.project,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }
}

/// Identifies one input of the form, with the metadata the view needs to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Duration,
    Organization,
    Project,
    Email,
    Phone,
}

impl FormField {
    /// Render order; consecutive pairs share a grid row.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Duration,
        FormField::Organization,
        FormField::Project,
        FormField::Email,
        FormField::Phone,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Duration => "duration",
            FormField::Organization => "organization",
            FormField::Project => "project",
            FormField::Email => "email",
            FormField::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name *",
            FormField::Duration => "Duration (Hours) *",
            FormField::Organization => "Organization",
            FormField::Project => "Project/Event",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Enter full name",
            FormField::Duration => "Enter duration in hours",
            FormField::Organization => "Enter organization name",
            FormField::Project => "Enter project or event name",
            FormField::Email => "Enter email address",
            FormField::Phone => "Enter phone number",
        }
    }

    /// HTML `type` attribute of the input.
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Duration => "number",
            FormField::Email => "email",
            FormField::Phone => "tel",
            _ => "text",
        }
    }

    pub fn required(&self) -> bool {
        matches!(self, FormField::Name | FormField::Duration)
    }
}

/// Path of a generated certificate, as returned by the generate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    /// `None` for an empty or whitespace-only path.
    pub fn new(path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        if path.trim().is_empty() {
            None
        } else {
            Some(Self(path))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trailing path segment; the identifier accepted by the download endpoint.
    pub fn remote_id(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

/// Name offered to the browser when saving: `certificate_<name>.pdf`, each run of
/// whitespace in the name replaced by a single underscore.
pub fn certificate_file_name(recipient: &str) -> String {
    format!("certificate_{}.pdf", WHITESPACE_RUN.replace_all(recipient, "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_form_carries_default_organization() {
        let form = CertificateForm::initial(DEFAULT_ORGANIZATION);
        assert_eq!(form.organization, "Akshar Paul NGO Pune");
        assert!(form.name.is_empty());
        assert_eq!(CertificateForm::blank().organization, "");
    }

    #[test]
    fn set_touches_only_the_named_field() {
        let mut form = CertificateForm::blank();
        form.set(FormField::Project, "Library drive");
        form.set(FormField::Phone, "555-0100");
        assert_eq!(form.get(FormField::Project), "Library drive");
        assert_eq!(form.get(FormField::Phone), "555-0100");
        assert_eq!(form.get(FormField::Name), "");
        form.set(FormField::Project, "Food bank");
        assert_eq!(form.project, "Food bank");
    }

    #[test]
    fn only_name_and_duration_are_required() {
        let required: Vec<_> = FormField::ALL.into_iter().filter(FormField::required).collect();
        assert_eq!(required, vec![FormField::Name, FormField::Duration]);
    }

    #[test]
    fn remote_id_is_last_path_segment() {
        let artifact = ArtifactRef::new("out/cert123.pdf").unwrap();
        assert_eq!(artifact.remote_id(), "cert123.pdf");
        let bare = ArtifactRef::new("cert9.pdf").unwrap();
        assert_eq!(bare.remote_id(), "cert9.pdf");
        assert!(ArtifactRef::new("  ").is_none());
    }

    #[test]
    fn file_name_collapses_whitespace_runs() {
        assert_eq!(certificate_file_name("Jane Doe"), "certificate_Jane_Doe.pdf");
        assert_eq!(
            certificate_file_name("Mary  Ann\tLee"),
            "certificate_Mary_Ann_Lee.pdf"
        );
        assert_eq!(certificate_file_name("Solo"), "certificate_Solo.pdf");
    }
}
