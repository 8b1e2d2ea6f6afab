//! Campus abbreviation table.
//!
//! Each whole word of the query that appears in the table is replaced by its
//! expansion. Single pass: expansions are not expanded again.

/// Abbreviation → expansion. Expansions repeat the short form so exact
/// keyword matches still count.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("hod", "head of department head department hod"),
    ("heads", "head of department head department"),
    ("dept", "department"),
    ("cs", "computer science"),
    ("cse", "computer science and engineering cse head cse department"),
    ("csm", "cse aiml artificial intelligence machine learning csm department head"),
    ("csd", "cse ds data science csd department head"),
    ("ece", "electronics and communication engineering ece head ece department"),
    ("eee", "electrical and electronics engineering eee head eee department"),
    ("it", "information technology it head it department"),
    ("mech", "mechanical engineering mech head mech department"),
    ("ce", "civil engineering ce head ce department"),
    ("ba", "bachelor of arts"),
    ("ma", "master of arts"),
    ("tech", "bachelor of technology"),
    ("mtech", "master of technology"),
    ("phd", "doctor of philosophy"),
    ("sgpa", "semester grade point average"),
    ("cgpa", "cumulative grade point average"),
    ("fees", "fee"),
    ("prof", "professor faculty dr."),
    ("dr", "doctor professor dr."),
    ("info", "information"),
    ("pls", "please"),
    ("updates", "update"),
    ("timing", "timings schedule"),
    ("principal", "principal director dr."),
    ("rector", "rector principal director"),
];

fn lookup(word: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == word)
        .map(|(_, expansion)| *expansion)
}

/// Lower-case the query and expand every abbreviation it contains.
///
/// Punctuation between words is kept so phrasing survives for the embedder.
pub fn expand_abbreviations(query: &str) -> String {
    let lower = query.to_lowercase();
    let mut out = String::with_capacity(lower.len() * 2);
    let mut word = String::new();

    let flush = |word: &mut String, out: &mut String| {
        if !word.is_empty() {
            out.push_str(lookup(word.as_str()).unwrap_or(word.as_str()));
            word.clear();
        }
    };

    for c in lower.chars() {
        if c.is_alphanumeric() || c == '-' {
            word.push(c);
        } else {
            flush(&mut word, &mut out);
            out.push(c);
        }
    }
    flush(&mut word, &mut out);
    out
}
