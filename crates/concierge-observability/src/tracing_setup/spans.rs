//! Span definitions per operation: turn, tool call, retrieval.

/// Span covering one conversational turn.
#[macro_export]
macro_rules! turn_span {
    ($session:expr) => {
        tracing::info_span!("concierge.turn", session = %$session)
    };
}

/// Span covering one tool call, including cache lookup.
#[macro_export]
macro_rules! tool_span {
    ($tool:expr) => {
        tracing::info_span!("concierge.tool", tool = %$tool)
    };
}

/// Span covering a hybrid retrieval.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $k:expr) => {
        tracing::info_span!("concierge.retrieval", query = %$query, k = $k)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TURN: &str = "concierge.turn";
    pub const TOOL: &str = "concierge.tool";
    pub const RETRIEVAL: &str = "concierge.retrieval";
}
