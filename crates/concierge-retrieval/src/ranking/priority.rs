//! Content-based score adjustments.
//!
//! Website chunks that name a person with a title are what person queries
//! want; short contact lines and pipe-separated menus are what they usually
//! get instead.

/// Menu text scraped from every page header.
pub fn is_navigation_artifact(text: &str) -> bool {
    text.contains("About Vision") && text.contains("Organogram")
}

/// Chunk names someone with an academic title.
pub fn has_title(text: &str) -> bool {
    text.contains("Dr.") || text.contains("Prof.")
}

/// Additive semantic-score adjustment for person queries.
pub fn person_adjustment(text: &str) -> f64 {
    let text = text.trim();
    let len = text.chars().count();
    let lower = text.to_lowercase();

    let mut boost = 0.0;
    if has_title(text) {
        boost += 2.0;
    }
    if text.contains("Head") && text.contains("Department") {
        boost += 1.5;
    }
    if text.contains("Principal") && len > 100 {
        boost += 1.5;
    }
    if text.contains("Dean") || text.contains("Vice Principal") {
        boost += 1.0;
    }
    // Overrides every boost above.
    if lower.contains("emergency") || (lower.contains("contact") && len < 100) {
        boost = -2.0;
    }
    if text.matches('|').count() > 3 {
        boost -= 0.5;
    }
    boost
}
