//! Submission-time checks on the certificate form.
//!
//! Rules run in a fixed order and stop at the first failure, so the user only
//! ever sees one message.

use crate::error::ValidationError;
use crate::model::certificate::CertificateForm;
use crate::model::template::{CertificateStyle, TemplateCatalog, TemplateKind};

/// Checks the form fields.
///
/// 1. `name` must be non-empty after trimming.
/// 2. `duration` must be non-empty after trimming.
/// 3. `duration` must be numeric with an integer part of at least one hour.
pub fn validate_form(form: &CertificateForm) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if form.duration.trim().is_empty() {
        return Err(ValidationError::DurationRequired);
    }
    if duration_hours(&form.duration).is_none() {
        return Err(ValidationError::DurationNotPositive);
    }
    Ok(())
}

/// Checks the selection against the catalog the server advertised.
/// An empty catalog (not loaded, or unavailable) never blocks.
pub fn validate_selection(
    catalog: &TemplateCatalog,
    template: TemplateKind,
    style: CertificateStyle,
) -> Result<(), ValidationError> {
    if !catalog.allows_template(template) {
        return Err(ValidationError::TemplateUnavailable);
    }
    if !catalog.allows_style(style) {
        return Err(ValidationError::StyleUnavailable);
    }
    Ok(())
}

/// Whole hours in a duration string, or `None` when it is not a finite decimal
/// number or truncates to zero or less. Fractions are truncated, so `"1.5"` is
/// one hour while `"0.5"`, `".5"` and `"1e-3"` are rejected. Hex prefixes and
/// `"Infinity"` are not numbers here.
pub fn duration_hours(raw: &str) -> Option<u64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let hours = value.trunc();
    if hours < 1.0 {
        return None;
    }
    Some(hours as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, duration: &str) -> CertificateForm {
        CertificateForm {
            name: name.to_string(),
            duration: duration.to_string(),
            ..CertificateForm::default()
        }
    }

    #[test]
    fn blank_name_is_rejected_first() {
        for name in ["", " ", "\t\n"] {
            assert_eq!(
                validate_form(&form(name, "")),
                Err(ValidationError::NameRequired)
            );
        }
    }

    #[test]
    fn blank_duration_is_required() {
        for duration in ["", "   "] {
            assert_eq!(
                validate_form(&form("Jane Doe", duration)),
                Err(ValidationError::DurationRequired)
            );
        }
    }

    #[test]
    fn non_positive_or_non_numeric_duration_is_rejected() {
        for duration in ["abc", "0", "-5", "0.5", "NaN", "inf", "0x10", "3 hours"] {
            assert_eq!(
                validate_form(&form("Jane Doe", duration)),
                Err(ValidationError::DurationNotPositive),
                "duration {duration:?}"
            );
        }
    }

    #[test]
    fn sub_hour_hex_and_infinite_durations_are_rejected() {
        for duration in [".5", "1e-3", "Infinity", "-Infinity", "0x10"] {
            assert_eq!(duration_hours(duration), None, "duration {duration:?}");
            assert_eq!(
                validate_form(&form("Jane Doe", duration)),
                Err(ValidationError::DurationNotPositive),
                "duration {duration:?}"
            );
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(validate_form(&form("Jane Doe", "3")), Ok(()));
        assert_eq!(validate_form(&form(" Jane ", " 12 ")), Ok(()));
    }

    #[test]
    fn duration_accepts_decimal_notations() {
        assert_eq!(duration_hours("3"), Some(3));
        assert_eq!(duration_hours("+3"), Some(3));
        assert_eq!(duration_hours("1.5"), Some(1));
        assert_eq!(duration_hours("1e3"), Some(1000));
    }

    #[test]
    fn selection_must_be_listed_when_catalog_is_loaded() {
        let catalog = TemplateCatalog {
            templates: vec![TemplateKind::Volunteer],
            styles: vec![CertificateStyle::Simple],
            ignored: Vec::new(),
        };
        assert_eq!(
            validate_selection(&catalog, TemplateKind::Achievement, CertificateStyle::Simple),
            Err(ValidationError::TemplateUnavailable)
        );
        assert_eq!(
            validate_selection(&catalog, TemplateKind::Volunteer, CertificateStyle::Advanced),
            Err(ValidationError::StyleUnavailable)
        );
        assert_eq!(
            validate_selection(&catalog, TemplateKind::Volunteer, CertificateStyle::Simple),
            Ok(())
        );
    }
}
