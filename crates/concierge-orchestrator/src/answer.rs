use concierge_core::{ErrorKind, ToolName};
use serde::Serialize;

/// How far a turn got before its reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnStage {
    Start,
    LanguageNormalized,
    GreetingCheck,
    ContextResolved,
    ScopeChecked,
    LoginGate,
    Routed,
    ToolExecuted,
    ResponseAssembled,
    End,
}

/// The user-visible result of one turn. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub text: String,
    /// Tool whose output the reply is built from, if any was called.
    pub tool: Option<ToolName>,
    pub cached: bool,
    pub stage: TurnStage,
    pub error_kind: Option<ErrorKind>,
}

impl Answer {
    /// A reply that did not involve a tool.
    pub fn canned(text: impl Into<String>, stage: TurnStage) -> Self {
        Self {
            text: text.into(),
            tool: None,
            cached: false,
            stage,
            error_kind: None,
        }
    }

    pub fn from_tool(text: impl Into<String>, tool: ToolName, cached: bool) -> Self {
        Self {
            text: text.into(),
            tool: Some(tool),
            cached,
            stage: TurnStage::End,
            error_kind: None,
        }
    }

    pub fn with_error(mut self, kind: ErrorKind) -> Self {
        self.error_kind = Some(kind);
        self
    }

    pub fn is_canned(&self) -> bool {
        self.tool.is_none()
    }
}
