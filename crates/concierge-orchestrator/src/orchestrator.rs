//! QueryOrchestrator: one conversational turn, end to end.
//!
//! ```text
//! Start ─▶ LoginGate (login in progress: message is a credential)
//!   └─▶ LanguageNormalized ─▶ GreetingCheck ─▶ ContextResolved ─▶ ScopeChecked
//!        ─▶ Routed ─▶ ToolExecuted ─▶ ResponseAssembled ─▶ End
//! ```
//!
//! Canned replies short-circuit without touching the cache or any tool.
//! Every tool error is caught here and turned into a complete sentence.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use concierge_core::config::{ConciergeConfig, GenerationConfig};
use concierge_core::constants::{PLACEMENT_FALLBACK_QUERY, POST_LOGIN_QUERY};
use concierge_core::errors::{ConciergeResult, ToolError};
use concierge_core::traits::{ILanguageModel, ILanguageNormalizer};
use concierge_core::{ErrorKind, PortalKind, ToolInput, ToolName, ToolResult};
use concierge_observability::tracing_setup::events;
use concierge_routing::{IntentRouter, RouteDecision};
use concierge_session::{LoginStep, SessionState};
use serde_json::{json, Map};
use tracing::{debug, Instrument};

use crate::answer::{Answer, TurnStage};
use crate::canned::{
    is_out_of_scope, small_talk_reply, EMPTY_INPUT_REPLY, LOGIN_FAILED_REPLY, OUT_OF_SCOPE_REPLY,
    TOOL_FAILURE_REPLY,
};
use crate::executor::ToolExecutor;
use crate::formatting::{format_result, llm_prompt, should_use_llm};

const ENGLISH: &str = "en";
const PLACEMENT_FALLBACK_SUMMARY: &str = "Placement Statistics (Fallback from Database)";

fn is_english(language: &str) -> bool {
    language.is_empty() || language.eq_ignore_ascii_case(ENGLISH) || language.eq_ignore_ascii_case("english")
}

/// Run a blocking collaborator call under a timeout. Failures and timeouts
/// are logged as degradations and yield `None`.
async fn run_degradable<T, F>(component: &str, fallback: &str, timeout_ms: u64, f: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> ConciergeResult<T> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(f);
    match tokio::time::timeout(Duration::from_millis(timeout_ms), task).await {
        Ok(Ok(Ok(value))) => Some(value),
        Ok(Ok(Err(e))) => {
            events::degradation_triggered(component, e.kind().as_str(), fallback);
            None
        }
        Ok(Err(join_error)) => {
            events::degradation_triggered(component, &join_error.to_string(), fallback);
            None
        }
        Err(_) => {
            events::degradation_triggered(component, ErrorKind::Timeout.as_str(), fallback);
            None
        }
    }
}

pub struct QueryOrchestrator {
    executor: ToolExecutor,
    router: IntentRouter,
    normalizer: Option<Arc<dyn ILanguageNormalizer>>,
    language_model: Option<Arc<dyn ILanguageModel>>,
    generation: GenerationConfig,
    portal_kind: PortalKind,
}

impl QueryOrchestrator {
    pub fn new(executor: ToolExecutor, router: IntentRouter, config: &ConciergeConfig) -> Self {
        Self {
            executor,
            router,
            normalizer: None,
            language_model: None,
            generation: config.generation.clone(),
            portal_kind: config.tools.default_portal,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn ILanguageNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn with_language_model(mut self, model: Arc<dyn ILanguageModel>) -> Self {
        self.language_model = Some(model);
        self
    }

    pub fn executor(&self) -> &ToolExecutor {
        &self.executor
    }

    pub fn router(&self) -> &IntentRouter {
        &self.router
    }

    /// Answer one message of `session`. Never fails; errors become sentences.
    pub async fn answer(&self, session: &mut SessionState, message: &str) -> Answer {
        let span = concierge_observability::turn_span!(session.session_id);
        self.answer_inner(session, message).instrument(span).await
    }

    async fn answer_inner(&self, session: &mut SessionState, message: &str) -> Answer {
        session.touch(Utc::now());
        self.executor.metrics().record_turn();

        let message = message.trim();
        if message.is_empty() {
            self.executor.metrics().record_canned();
            return Answer::canned(EMPTY_INPUT_REPLY, TurnStage::Start).with_error(ErrorKind::Input);
        }

        // Credentials bypass the normalizer and every other check.
        if session.login_state.is_active() {
            return self.login_gate(session, message).await;
        }

        let (query, language) = self.normalize(message).await;
        let answer = self.route_turn(session, &query, message).await;
        self.localize(answer, &language).await
    }

    async fn route_turn(&self, session: &mut SessionState, query: &str, raw: &str) -> Answer {
        if let Some(reply) = small_talk_reply(query) {
            self.executor.metrics().record_canned();
            return Answer::canned(reply, TurnStage::GreetingCheck);
        }

        let resolved = session.resolve_context(query);
        if resolved != query {
            debug!(resolved = %resolved, "follow-up resolved against last topic");
        }

        if is_out_of_scope(&resolved) {
            self.executor.metrics().record_canned();
            return Answer::canned(OUT_OF_SCOPE_REPLY, TurnStage::ScopeChecked);
        }

        self.dispatch(session, &resolved, raw).await
    }

    async fn login_gate(&self, session: &mut SessionState, message: &str) -> Answer {
        let from = session.login_state;
        let step = session.accept_credential(message, self.portal_kind);
        if from != session.login_state {
            events::login_transition(&session.session_id, from.as_str(), session.login_state.as_str());
        }
        match step {
            LoginStep::Prompt(prompt) => Answer::canned(prompt, TurnStage::LoginGate),
            LoginStep::Complete => self.dispatch(session, POST_LOGIN_QUERY, POST_LOGIN_QUERY).await,
        }
    }

    /// Route `query` and run the chosen tool with its fallbacks. `history`
    /// is what gets remembered for the turn.
    async fn dispatch(&self, session: &mut SessionState, query: &str, history: &str) -> Answer {
        let (tool, fallback) = match self.router.route(query, session.login_state) {
            RouteDecision::Tool { tool, fallback, rule } => {
                events::route_decided(&rule, tool.as_str());
                (tool, fallback)
            }
            RouteDecision::CollectCredential => {
                return Answer::canned(session.begin_login(), TurnStage::LoginGate);
            }
        };

        if tool == ToolName::StudentPortal && !session.has_credentials() {
            session.push_history(history);
            let from = session.login_state;
            let prompt = session.begin_login();
            events::login_transition(&session.session_id, from.as_str(), session.login_state.as_str());
            return Answer::canned(prompt, TurnStage::LoginGate);
        }

        let mut input = ToolInput::query(query);
        if tool == ToolName::StudentPortal {
            input.credentials = session.credentials.clone();
        }

        let first = self.executor.execute(tool, input).await;
        let needs_fallback = match &first {
            Ok(result) => !result.success,
            Err(e) => !matches!(e, ToolError::LoginRejected { .. }),
        };
        let (tool, outcome, fell_back) = match fallback {
            Some(next) if needs_fallback => {
                let failure = match &first {
                    Ok(_) => ErrorKind::RoutingMiss.as_str(),
                    Err(e) => e.kind().as_str(),
                };
                events::degradation_triggered(tool.as_str(), failure, next.as_str());
                let second = self.executor.execute(next, ToolInput::query(query)).await;
                (next, second, true)
            }
            _ => (tool, first, false),
        };
        session.push_history(history);

        let answer = match outcome {
            Ok(result) => self.assemble(tool, result, query).await,
            Err(ToolError::Blocked { marker, .. }) if tool == ToolName::Placements => {
                events::degradation_triggered(tool.as_str(), &format!("blocked ({marker})"), ToolName::Database.as_str());
                self.placement_fallback(query).await
            }
            Err(ToolError::LoginRejected { .. }) => {
                let from = session.login_state;
                session.login_rejected();
                events::login_transition(&session.session_id, from.as_str(), session.login_state.as_str());
                Answer::from_tool(LOGIN_FAILED_REPLY, tool, false).with_error(ErrorKind::LoginFailure)
            }
            Err(e) => Answer::from_tool(TOOL_FAILURE_REPLY, tool, false).with_error(e.kind()),
        };

        if fell_back && answer.error_kind.is_none() {
            answer.with_error(ErrorKind::RoutingMiss)
        } else {
            answer
        }
    }

    /// Placements page blocked by a firewall: answer from the database in
    /// the same turn, presented as placement information.
    async fn placement_fallback(&self, query: &str) -> Answer {
        let outcome = self
            .executor
            .execute(ToolName::Database, ToolInput::query(PLACEMENT_FALLBACK_QUERY))
            .await;
        match outcome {
            Ok(result) if result.success => {
                let content = result.text("answer").unwrap_or("No data").to_string();
                let mut payload = Map::new();
                payload.insert("summary".into(), json!(PLACEMENT_FALLBACK_SUMMARY));
                payload.insert("content".into(), json!(content));
                let mut wrapped = ToolResult::ok(payload);
                wrapped.cached = result.cached;
                let mut answer = self.assemble(ToolName::Placements, wrapped, query).await;
                answer.tool = Some(ToolName::Database);
                answer
            }
            Ok(_) => Answer::from_tool(TOOL_FAILURE_REPLY, ToolName::Database, false)
                .with_error(ErrorKind::ToolFailure),
            Err(e) => Answer::from_tool(TOOL_FAILURE_REPLY, ToolName::Database, false).with_error(e.kind()),
        }
    }

    async fn assemble(&self, tool: ToolName, result: ToolResult, query: &str) -> Answer {
        let raw = format_result(tool, &result);
        let mut text = raw.text.clone();

        if let Some(model) = &self.language_model {
            if model.is_available() && should_use_llm(&raw, tool, self.generation.min_chars) {
                let model = Arc::clone(model);
                let prompt = llm_prompt(query, &raw.text);
                let polished = run_degradable("llm", "raw_answer", self.generation.timeout_ms, move || {
                    model.generate(&prompt)
                })
                .await;
                if let Some(polished) = polished.filter(|p| !p.trim().is_empty()) {
                    text = polished;
                }
            }
        }

        let answer = Answer::from_tool(text, tool, result.cached);
        if result.success {
            answer
        } else {
            answer.with_error(ErrorKind::RoutingMiss)
        }
    }

    async fn normalize(&self, message: &str) -> (String, String) {
        let Some(normalizer) = &self.normalizer else {
            return (message.to_string(), ENGLISH.to_string());
        };
        let normalizer = Arc::clone(normalizer);
        let text = message.to_string();
        let normalized = run_degradable(
            "language_normalizer",
            "identity",
            self.generation.normalizer_timeout_ms,
            move || normalizer.normalize(&text),
        )
        .await;
        match normalized {
            Some((english, language)) if !english.trim().is_empty() => {
                if !is_english(&language) {
                    debug!(language = %language, "query translated");
                }
                (english, language)
            }
            _ => (message.to_string(), ENGLISH.to_string()),
        }
    }

    async fn localize(&self, mut answer: Answer, language: &str) -> Answer {
        if is_english(language) {
            return answer;
        }
        let Some(normalizer) = &self.normalizer else {
            return answer;
        };
        let normalizer = Arc::clone(normalizer);
        let text = answer.text.clone();
        let language = language.to_string();
        let localized = run_degradable(
            "language_normalizer",
            "identity",
            self.generation.normalizer_timeout_ms,
            move || normalizer.localize(&text, &language),
        )
        .await;
        if let Some(localized) = localized.filter(|t| !t.trim().is_empty()) {
            answer.text = localized;
        }
        answer
    }
}
