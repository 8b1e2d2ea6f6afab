//! Per-tool rendering of raw tool output, and the rules for when the
//! optional language model is allowed to rewrite it.

use concierge_core::text::truncate_chars;
use concierge_core::{ToolName, ToolResult};
use serde_json::{Map, Value};

use crate::canned::{NOT_FOUND_REPLY, NO_NOTICES_REPLY};

const NOTICES_SHOWN: usize = 3;
const PLACEMENT_CHARS: usize = 500;
const SEARCH_DOCS_SHOWN: usize = 3;
const SEARCH_SNIPPET_CHARS: usize = 200;

/// Raw reply for one tool result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnswer {
    pub text: String,
    /// False for fixed sentences and personal data, which are never rewritten.
    pub polishable: bool,
}

impl RawAnswer {
    fn fixed(text: &str) -> Self {
        Self {
            text: text.to_string(),
            polishable: false,
        }
    }

    fn polishable(text: String) -> Self {
        Self {
            text,
            polishable: true,
        }
    }
}

pub fn format_result(tool: ToolName, result: &ToolResult) -> RawAnswer {
    if !result.success {
        return RawAnswer::fixed(NOT_FOUND_REPLY);
    }
    let raw = match tool {
        ToolName::StaticFacts => result.text("answer").unwrap_or_default().to_string(),
        ToolName::LatestNotices => match format_notices(&result.payload) {
            Some(text) => text,
            None => return RawAnswer::fixed(NO_NOTICES_REPLY),
        },
        ToolName::Placements => {
            let content = result.text("content").unwrap_or_default();
            format!(
                "Placement information from TKRCET:\n{}",
                truncate_chars(content, PLACEMENT_CHARS)
            )
        }
        ToolName::Database => result
            .text("answer")
            .unwrap_or("No placement data available in the database.")
            .to_string(),
        ToolName::StudentPortal => {
            return RawAnswer {
                text: format_portal(&result.payload),
                polishable: false,
            }
        }
        ToolName::WebSearch => format_search(&result.payload),
    };
    if raw.trim().is_empty() {
        return RawAnswer::fixed(NOT_FOUND_REPLY);
    }
    RawAnswer::polishable(raw)
}

fn format_notices(payload: &Map<String, Value>) -> Option<String> {
    let notices = payload.get("notices").and_then(Value::as_array)?;
    if notices.is_empty() {
        return None;
    }
    let mut out = String::from("Latest notices from TKRCET:\n");
    for (i, notice) in notices.iter().take(NOTICES_SHOWN).enumerate() {
        let title = notice.get("title").and_then(Value::as_str).unwrap_or("Notice");
        out.push_str(&format!("{}. {title}\n", i + 1));
    }
    Some(out.trim_end().to_string())
}

fn format_search(payload: &Map<String, Value>) -> String {
    let Some(docs) = payload.get("documents").and_then(Value::as_array) else {
        return String::new();
    };
    if docs.is_empty() {
        return String::new();
    }
    let mut out = String::from("Based on available information:\n\n");
    for doc in docs.iter().take(SEARCH_DOCS_SHOWN) {
        let text = doc.get("text").and_then(Value::as_str).unwrap_or_default();
        out.push_str(&format!("• {}\n", truncate_chars(text.trim(), SEARCH_SNIPPET_CHARS)));
    }
    out.trim_end().to_string()
}

fn format_portal(payload: &Map<String, Value>) -> String {
    let portal = payload
        .get("portal")
        .and_then(Value::as_str)
        .unwrap_or("Student Portal");
    let mut out = format!("✓ Login Successful ({portal})\n");
    if let Some(Value::Object(data)) = payload.get("data") {
        if data.is_empty() {
            out.push_str("\nNo data was returned by the portal.");
        }
        for (section, value) in data {
            out.push_str(&format!("\n{}:\n", section.to_uppercase()));
            render_value(value, 1, &mut out);
        }
    }
    out.trim_end().to_string()
}

fn render_value(value: &Value, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                match v {
                    Value::Object(_) | Value::Array(_) => {
                        out.push_str(&format!("{indent}{k}:\n"));
                        render_value(v, depth + 1, out);
                    }
                    _ => out.push_str(&format!("{indent}{k}: {}\n", scalar(v))),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Array(cells) => {
                        let row: Vec<String> = cells.iter().map(scalar).collect();
                        out.push_str(&format!("{indent}{}\n", row.join(" | ")));
                    }
                    Value::Object(map) => {
                        let row: Vec<String> =
                            map.iter().map(|(k, v)| format!("{k}: {}", scalar(v))).collect();
                        out.push_str(&format!("{indent}- {}\n", row.join(", ")));
                    }
                    other => out.push_str(&format!("{indent}- {}\n", scalar(other))),
                }
            }
        }
        other => out.push_str(&format!("{indent}{}\n", scalar(other))),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Whether a rewrite by the language model is worth the latency: short
/// static facts and text that is already conversational are left alone.
pub fn should_use_llm(raw: &RawAnswer, tool: ToolName, min_chars: usize) -> bool {
    if !raw.polishable {
        return false;
    }
    if tool == ToolName::StaticFacts && raw.text.chars().count() < min_chars {
        return false;
    }
    let already_friendly =
        raw.text.contains('😊') || raw.text.contains('🎉') || raw.text.matches('!').count() > 1;
    !already_friendly
}

/// Prompt asking the model to restate `raw` as a short, friendly answer.
pub fn llm_prompt(query: &str, raw: &str) -> String {
    format!(
        "You are TKRCET College Assistant, a helpful and friendly chatbot. \
Answer the student's question based on the information provided.\n\n\
Student asked: {query}\n\n\
Information available:\n{raw}\n\n\
Instructions:\n\
- Be warm, friendly, and conversational\n\
- Keep response concise (2-4 sentences)\n\
- Use simple, clear language\n\
- Add 1-2 relevant emojis if appropriate\n\
- If information is incomplete, suggest visiting the website or contacting the college\n\
- Don't make up information not in the data\n\n\
Your friendly response:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(value: Value) -> ToolResult {
        match value {
            Value::Object(map) => ToolResult::ok(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn unsuccessful_results_get_the_not_found_sentence() {
        let raw = format_result(ToolName::WebSearch, &ToolResult::miss("nothing"));
        assert_eq!(raw.text, NOT_FOUND_REPLY);
        assert!(!raw.polishable);
    }

    #[test]
    fn notices_show_first_three() {
        let result = ok(json!({ "notices": [
            { "title": "Mid exams from Monday", "date": "Recent" },
            { "title": "Fee payment deadline", "date": "Recent" },
            { "title": "Sports day registrations", "date": "Recent" },
            { "title": "Library closed Sunday", "date": "Recent" },
        ]}));
        let raw = format_result(ToolName::LatestNotices, &result);
        assert_eq!(
            raw.text,
            "Latest notices from TKRCET:\n1. Mid exams from Monday\n2. Fee payment deadline\n3. Sports day registrations"
        );
    }

    #[test]
    fn empty_notices_use_fixed_reply() {
        let raw = format_result(ToolName::LatestNotices, &ok(json!({ "notices": [] })));
        assert_eq!(raw.text, NO_NOTICES_REPLY);
    }

    #[test]
    fn search_bullets_are_truncated() {
        let long = "a".repeat(300);
        let result = ok(json!({ "documents": [ { "text": long }, { "text": "Hostel for girls." } ] }));
        let raw = format_result(ToolName::WebSearch, &result);
        assert!(raw.text.starts_with("Based on available information:\n\n• "));
        assert!(raw.text.contains(&format!("• {}\n", "a".repeat(200))));
        assert!(raw.text.ends_with("• Hostel for girls."));
    }

    #[test]
    fn portal_output_is_never_polished() {
        let result = ok(json!({
            "portal": "Autonomous Portal",
            "data": { "results": [ { "subject": "DBMS", "grade": "A" } ] }
        }));
        let raw = format_result(ToolName::StudentPortal, &result);
        assert!(raw.text.starts_with("✓ Login Successful (Autonomous Portal)"));
        assert!(raw.text.contains("RESULTS:"));
        assert!(raw.text.contains("grade: A"));
        assert!(!should_use_llm(&raw, ToolName::StudentPortal, 0));
    }

    #[test]
    fn llm_heuristic() {
        let short = RawAnswer::polishable("Dr. X is the principal.".into());
        assert!(!should_use_llm(&short, ToolName::StaticFacts, 150));
        assert!(should_use_llm(&short, ToolName::WebSearch, 150));

        let friendly = RawAnswer::polishable("Great news! We placed 300 students!".into());
        assert!(!should_use_llm(&friendly, ToolName::Database, 150));

        let long = RawAnswer::polishable("x".repeat(200));
        assert!(should_use_llm(&long, ToolName::StaticFacts, 150));
    }

    #[test]
    fn prompt_carries_query_and_data() {
        let p = llm_prompt("placements?", "300 placed");
        assert!(p.contains("Student asked: placements?"));
        assert!(p.contains("Information available:\n300 placed"));
    }
}
