//! `check_static_facts`: deterministic answers from the knowledge base.

mod knowledge;
pub mod rules;

pub use knowledge::KnowledgeBase;

use concierge_core::config::CacheConfig;
use concierge_core::errors::ToolError;
use concierge_core::text::normalize;
use concierge_core::traits::ITool;
use concierge_core::{ToolContract, ToolInput, ToolName, ToolResult};
use serde_json::{Map, Value};
use tracing::debug;

use crate::contracts::contract_for;

pub struct StaticFactsTool {
    kb: KnowledgeBase,
    contract: ToolContract,
}

impl StaticFactsTool {
    pub fn new(kb: KnowledgeBase, cache: &CacheConfig) -> Self {
        Self {
            kb,
            contract: contract_for(ToolName::StaticFacts, cache),
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }
}

impl ITool for StaticFactsTool {
    fn contract(&self) -> &ToolContract {
        &self.contract
    }

    fn call(&self, input: &ToolInput) -> Result<ToolResult, ToolError> {
        let query = normalize(&input.query);
        match rules::lookup(&self.kb, &query) {
            Some((rule, answer)) => {
                debug!(rule, "static fact matched");
                let mut payload = Map::new();
                payload.insert("answer".into(), Value::String(answer));
                payload.insert("rule".into(), Value::String(rule.into()));
                Ok(ToolResult::ok(payload))
            }
            None => Ok(ToolResult::miss("no static fact found for this query")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> StaticFactsTool {
        StaticFactsTool::new(KnowledgeBase::default(), &CacheConfig::default())
    }

    #[test]
    fn hit_carries_answer_and_rule() {
        let result = tool().call(&ToolInput::query("  Who is the PRINCIPAL?  ")).unwrap();
        assert!(result.success);
        assert!(!result.cached);
        assert_eq!(
            result.text("answer"),
            Some("The Principal of TKRCET is Dr. D. V. Ravi Shankar.")
        );
        assert_eq!(result.text("rule"), Some("principal"));
    }

    #[test]
    fn miss_is_not_an_error() {
        let result = tool().call(&ToolInput::query("what is quantum gravity")).unwrap();
        assert!(!result.success);
        assert!(result.error.is_some());
    }
}
