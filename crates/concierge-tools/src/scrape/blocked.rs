use concierge_core::errors::ToolError;
use concierge_core::ToolName;

/// Firewall interstitials come back as 200 responses; the only signal is the
/// page text.
pub fn detect_block(tool: ToolName, text: &str, markers: &[String]) -> Result<(), ToolError> {
    match markers.iter().find(|m| !m.is_empty() && text.contains(m.as_str())) {
        Some(marker) => Err(ToolError::Blocked {
            tool: tool.as_str().to_string(),
            marker: marker.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        vec!["MalCare".into(), "Firewall".into(), "Blocked".into()]
    }

    #[test]
    fn marker_is_reported() {
        let err = detect_block(ToolName::Placements, "Protected by MalCare", &markers()).unwrap_err();
        assert_eq!(
            err,
            ToolError::Blocked {
                tool: "scrape_placements".into(),
                marker: "MalCare".into()
            }
        );
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert!(detect_block(ToolName::Placements, "firewall-free page", &markers()).is_ok());
    }
}
