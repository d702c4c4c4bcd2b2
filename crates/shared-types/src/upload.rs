use serde::{Deserialize, Serialize};

/// Icon shown next to an upload panel heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelIcon {
    Microscope,
    FileText,
}

/// Static configuration of one upload panel on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPanelConfig {
    pub heading: &'static str,
    pub icon: PanelIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub accepted_types: &'static [&'static str],
}

pub const TISSUE_IMAGE_PANEL: UploadPanelConfig = UploadPanelConfig {
    heading: "Tissue Image Analysis",
    icon: PanelIcon::Microscope,
    title: "Upload Tissue Image",
    description: "Drop a tissue image or click to browse",
    accepted_types: &["image/*"],
};

pub const MEDICAL_REPORT_PANEL: UploadPanelConfig = UploadPanelConfig {
    heading: "Medical Report Analysis",
    icon: PanelIcon::FileText,
    title: "Upload Medical Report",
    description: "Drop a report file (CSV, XLSX, or PDF) or click to browse",
    accepted_types: &[".csv", ".xlsx", ".pdf"],
};

/// Both dashboard panels in display order.
pub const UPLOAD_PANELS: &[UploadPanelConfig] = &[TISSUE_IMAGE_PANEL, MEDICAL_REPORT_PANEL];

/// A file picked or dropped into an upload widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Value for an `<input type="file" accept=...>` attribute.
pub fn accept_attribute<S: AsRef<str>>(accepted_types: &[S]) -> String {
    accepted_types
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Whether a file matches one of the accepted patterns.
///
/// Patterns follow the HTML `accept` attribute: `.ext` matches the file name
/// suffix, `type/*` matches the MIME major type and anything else is an exact
/// MIME type. Comparison is case-insensitive. An empty pattern list accepts
/// everything.
pub fn is_accepted<S: AsRef<str>>(
    accepted_types: &[S],
    file_name: &str,
    content_type: Option<&str>,
) -> bool {
    if accepted_types.is_empty() {
        return true;
    }
    let name = file_name.to_ascii_lowercase();
    let mime = content_type.map(str::to_ascii_lowercase);

    accepted_types.iter().any(|pattern| {
        let pattern = pattern.as_ref().trim().to_ascii_lowercase();
        if pattern.starts_with('.') {
            name.ends_with(&pattern)
        } else if let Some(major) = pattern.strip_suffix("/*") {
            mime.as_deref()
                .and_then(|m| m.split('/').next())
                .map_or(false, |m| m == major)
        } else {
            mime.as_deref() == Some(pattern.as_str())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_are_configured_as_displayed() {
        assert_eq!(UPLOAD_PANELS.len(), 2);
        assert_eq!(TISSUE_IMAGE_PANEL.accepted_types, &["image/*"]);
        assert_eq!(MEDICAL_REPORT_PANEL.accepted_types, &[".csv", ".xlsx", ".pdf"]);
        assert_eq!(MEDICAL_REPORT_PANEL.title, "Upload Medical Report");
    }

    #[test]
    fn accept_attribute_joins_patterns() {
        assert_eq!(accept_attribute(MEDICAL_REPORT_PANEL.accepted_types), ".csv,.xlsx,.pdf");
        assert_eq!(accept_attribute::<&str>(&[]), "");
    }

    #[test]
    fn wildcard_mime_matches_major_type() {
        let accepted = TISSUE_IMAGE_PANEL.accepted_types;
        assert!(is_accepted(accepted, "slide.png", Some("image/png")));
        assert!(is_accepted(accepted, "slide.TIFF", Some("IMAGE/TIFF")));
        assert!(!is_accepted(accepted, "report.pdf", Some("application/pdf")));
        assert!(!is_accepted(accepted, "slide.png", None));
    }

    #[test]
    fn extension_matches_case_insensitively() {
        let accepted = MEDICAL_REPORT_PANEL.accepted_types;
        assert!(is_accepted(accepted, "labs.CSV", None));
        assert!(is_accepted(accepted, "labs.xlsx", Some("application/octet-stream")));
        assert!(!is_accepted(accepted, "labs.xls", None));
        assert!(!is_accepted(accepted, "pdf", None));
    }

    #[test]
    fn exact_mime_pattern() {
        let accepted = ["application/pdf"];
        assert!(is_accepted(&accepted, "a.bin", Some("application/pdf")));
        assert!(!is_accepted(&accepted, "a.pdf", None));
    }

    #[test]
    fn empty_patterns_accept_anything() {
        assert!(is_accepted::<&str>(&[], "anything.bin", None));
    }
}
