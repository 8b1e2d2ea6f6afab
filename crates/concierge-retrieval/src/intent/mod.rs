//! Person-seeking query heuristic.
//!
//! Person queries get a wider candidate pool and title-aware boosting. The
//! heuristic is a whole-word keyword check, so "dr" does not fire on "address".

use concierge_core::text::tokens;

pub const PERSON_KEYWORDS: &[&str] = &[
    "who",
    "principal",
    "director",
    "hod",
    "dean",
    "registrar",
    "founder",
    "name",
    "head",
    "prof",
    "professor",
    "dr",
    "madam",
    "sir",
];

pub fn is_person_query(query: &str) -> bool {
    tokens(query)
        .iter()
        .any(|t| PERSON_KEYWORDS.contains(&t.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_person_queries() {
        assert!(is_person_query("Who is the principal?"));
        assert!(is_person_query("name of hod ece"));
        assert!(is_person_query("Dr. Rao contact"));
    }

    #[test]
    fn ignores_substrings() {
        assert!(!is_person_query("college address"));
        assert!(!is_person_query("what is the fee structure"));
        assert!(!is_person_query("whole campus map"));
    }
}
