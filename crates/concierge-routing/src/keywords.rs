//! Keyword lists behind the default rule table. Matched as word prefixes.

pub const FRESHNESS: &[&str] = &["latest", "recent", "current", "notice", "announcement"];

pub const PERSONAL_DATA: &[&str] = &[
    "my result",
    "my attendance",
    "my grade",
    "my mark",
    "login",
    "student portal",
    "dashboard",
];

/// Combined with a roll number these also mean the portal.
pub const PORTAL_WITH_ROLL: &[&str] = &["result", "mark"];

pub const AGGREGATE: &[&str] = &[
    "how many",
    "average",
    "top companies",
    "cgpa",
    "rate",
    "statistics",
    "highest",
    "lowest",
    "package",
    "salary",
    "number of",
    "total",
    "percent",
    "recruiters",
    "students placed",
];

/// Matched as whole words: as a prefix "count" would catch "country".
pub const AGGREGATE_WORDS: &[&str] = &["count", "counts"];

pub const PLACEMENT: &[&str] = &["placement", "placed", "company", "companies", "job", "recruit"];

/// Roll numbers look like `22K91A05C0`.
pub const ROLL_NUMBER_PATTERN: &str = r"\b\d{2}[kK]\d{2}[A-Za-z0-9]+\b";
