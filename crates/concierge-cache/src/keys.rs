//! Cache key construction.

use concierge_core::text::normalize;
use concierge_core::ToolName;

/// Static tier key: the lower-cased, trimmed query.
pub fn static_key(query: &str) -> String {
    normalize(query)
}

/// Dynamic tier key: `"{tool}:{normalized input}"`.
///
/// Callers must not put secrets in `input`; the portal key uses the username
/// and data kind only.
pub fn dynamic_key(tool: ToolName, input: &str) -> String {
    format!("{}:{}", tool.as_str(), normalize(input))
}
