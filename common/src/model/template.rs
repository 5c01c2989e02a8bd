//! Certificate templates and styles offered by the rendering service.
//!
//! Both are closed sets. The server advertises the identifiers it supports
//! through `GET /api/templates`; anything it lists that is not one of the
//! variants below is dropped when the catalog is built, so a selection can never
//! hold an arbitrary string.

use crate::responses::TemplatesResponse;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout category of a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Volunteer,
    Achievement,
    Participation,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Volunteer,
        TemplateKind::Achievement,
        TemplateKind::Participation,
    ];

    /// Wire identifier, as sent in `template_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Volunteer => "volunteer",
            TemplateKind::Achievement => "achievement",
            TemplateKind::Participation => "participation",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TemplateKind::Volunteer => "Volunteer Certificate",
            TemplateKind::Achievement => "Achievement Certificate",
            TemplateKind::Participation => "Participation Certificate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::Volunteer => {
                "Perfect for recognizing volunteer service and community contributions"
            }
            TemplateKind::Achievement => {
                "Ideal for celebrating outstanding performance and accomplishments"
            }
            TemplateKind::Participation => {
                "Great for acknowledging event participation and involvement"
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TemplateKind::Volunteer => "🤝",
            TemplateKind::Achievement => "🏆",
            TemplateKind::Participation => "🎉",
        }
    }
}

/// Visual treatment applied on top of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStyle {
    #[default]
    Advanced,
    Minimal,
    Simple,
}

impl CertificateStyle {
    /// Also the fallback list used when the server omits `styles`.
    pub const ALL: [CertificateStyle; 3] = [
        CertificateStyle::Advanced,
        CertificateStyle::Minimal,
        CertificateStyle::Simple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStyle::Advanced => "advanced",
            CertificateStyle::Minimal => "minimal",
            CertificateStyle::Simple => "simple",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CertificateStyle::Advanced => "Advanced Style",
            CertificateStyle::Minimal => "Minimal Style",
            CertificateStyle::Simple => "Simple Style",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CertificateStyle::Advanced => {
                "Professional design with borders and enhanced typography"
            }
            CertificateStyle::Minimal => "Clean and simple design for a modern look",
            CertificateStyle::Simple => "Basic design with essential information",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CertificateStyle::Advanced => "✨",
            CertificateStyle::Minimal => "📄",
            CertificateStyle::Simple => "📋",
        }
    }
}

/// Returned by `FromStr` for identifiers outside the known sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIdentifier(pub String);

impl fmt::Display for UnknownIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown identifier `{}`", self.0)
    }
}

impl std::error::Error for UnknownIdentifier {}

impl FromStr for TemplateKind {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownIdentifier(s.to_string()))
    }
}

impl FromStr for CertificateStyle {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CertificateStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownIdentifier(s.to_string()))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CertificateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Templates and styles the server currently offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    pub templates: Vec<TemplateKind>,
    pub styles: Vec<CertificateStyle>,
    /// Identifiers the server listed that are not known locally.
    pub ignored: Vec<String>,
}

impl TemplateCatalog {
    /// Builds the catalog from the listing response.
    ///
    /// A missing `styles` key falls back to [`CertificateStyle::ALL`]; an
    /// explicitly empty list is kept empty.
    pub fn from_response(response: TemplatesResponse) -> Self {
        let mut ignored = Vec::new();

        let templates = response
            .templates
            .into_iter()
            .filter_map(|id| match id.parse::<TemplateKind>() {
                Ok(kind) => Some(kind),
                Err(UnknownIdentifier(id)) => {
                    ignored.push(id);
                    None
                }
            })
            .collect();

        let styles = match response.styles {
            Some(ids) => ids
                .into_iter()
                .filter_map(|id| match id.parse::<CertificateStyle>() {
                    Ok(style) => Some(style),
                    Err(UnknownIdentifier(id)) => {
                        ignored.push(id);
                        None
                    }
                })
                .collect(),
            None => CertificateStyle::ALL.to_vec(),
        };

        Self {
            templates,
            styles,
            ignored,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.styles.is_empty()
    }

    /// An empty template list places no restriction on the selection.
    pub fn allows_template(&self, kind: TemplateKind) -> bool {
        self.templates.is_empty() || self.templates.contains(&kind)
    }

    pub fn allows_style(&self, style: CertificateStyle) -> bool {
        self.styles.is_empty() || self.styles.contains(&style)
    }
}
