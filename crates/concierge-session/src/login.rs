//! Two-turn credential collection.
//!
//! ```text
//! Idle ──portal without credentials──▶ AwaitingUsername
//! AwaitingUsername ──any message──▶ AwaitingPassword   (username = trimmed, upper-cased)
//! AwaitingPassword ──any message──▶ Idle               (credentials stored)
//! ```

use concierge_core::{Credentials, LoginState, PortalKind};
use tracing::debug;

use crate::state::SessionState;

pub const USERNAME_PROMPT: &str = "To access your results from the Student Portal, I need your **Roll Number** (I'll ask for your password next):";
pub const PASSWORD_PROMPT: &str = "Thanks! Now please enter your password:";

/// What the orchestrator does after feeding a credential message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStep {
    /// Reply with this prompt; no tool call this turn.
    Prompt(&'static str),
    /// Credentials are stored; route the synthesized follow-up query.
    Complete,
}

impl SessionState {
    /// Start collecting credentials. Only meaningful from `Idle`; otherwise
    /// the prompt for the current step is repeated.
    pub fn begin_login(&mut self) -> &'static str {
        match self.login_state {
            LoginState::Idle => {
                self.pending_username = None;
                self.transition(LoginState::AwaitingUsername);
                USERNAME_PROMPT
            }
            LoginState::AwaitingUsername => USERNAME_PROMPT,
            LoginState::AwaitingPassword => PASSWORD_PROMPT,
        }
    }

    /// Consume one message while a login is in progress.
    pub fn accept_credential(&mut self, message: &str, portal_kind: PortalKind) -> LoginStep {
        let value = message.trim();
        match self.login_state {
            LoginState::Idle => LoginStep::Complete,
            LoginState::AwaitingUsername => {
                if value.is_empty() {
                    return LoginStep::Prompt(USERNAME_PROMPT);
                }
                self.pending_username = Some(value.to_uppercase());
                self.transition(LoginState::AwaitingPassword);
                LoginStep::Prompt(PASSWORD_PROMPT)
            }
            LoginState::AwaitingPassword => {
                let Some(username) = self.pending_username.take() else {
                    // Lost the username somehow; start over.
                    self.transition(LoginState::AwaitingUsername);
                    return LoginStep::Prompt(USERNAME_PROMPT);
                };
                if value.is_empty() {
                    self.pending_username = Some(username);
                    return LoginStep::Prompt(PASSWORD_PROMPT);
                }
                self.credentials = Some(Credentials::new(username, value, portal_kind));
                self.transition(LoginState::Idle);
                LoginStep::Complete
            }
        }
    }

    /// The portal refused the stored credentials.
    pub fn login_rejected(&mut self) {
        self.credentials = None;
        self.pending_username = None;
        self.transition(LoginState::Idle);
    }

    /// Back to `Idle` without touching stored credentials.
    pub fn reset_login(&mut self) {
        self.pending_username = None;
        self.transition(LoginState::Idle);
    }

    fn transition(&mut self, to: LoginState) {
        if self.login_state != to {
            debug!(
                session = %self.session_id,
                from = self.login_state.as_str(),
                to = to.as_str(),
                "login transition"
            );
            self.login_state = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_flow() {
        let mut s = SessionState::new("s", 3);
        assert_eq!(s.begin_login(), USERNAME_PROMPT);
        assert_eq!(s.login_state, LoginState::AwaitingUsername);

        assert_eq!(
            s.accept_credential(" 22k91a05c0 ", PortalKind::Autonomous),
            LoginStep::Prompt(PASSWORD_PROMPT)
        );
        assert_eq!(s.pending_username.as_deref(), Some("22K91A05C0"));
        assert_eq!(s.login_state, LoginState::AwaitingPassword);

        assert_eq!(
            s.accept_credential(" secret123 ", PortalKind::Autonomous),
            LoginStep::Complete
        );
        assert_eq!(s.login_state, LoginState::Idle);
        let c = s.credentials.as_ref().unwrap();
        assert_eq!(c.username, "22K91A05C0");
        assert_eq!(c.password, "secret123");
        assert_eq!(c.portal_kind, PortalKind::Autonomous);
        assert!(s.pending_username.is_none());
    }

    #[test]
    fn blank_messages_repeat_the_prompt() {
        let mut s = SessionState::new("s", 3);
        s.begin_login();
        assert_eq!(s.accept_credential("   ", PortalKind::Regular), LoginStep::Prompt(USERNAME_PROMPT));
        assert_eq!(s.login_state, LoginState::AwaitingUsername);
        s.accept_credential("x", PortalKind::Regular);
        assert_eq!(s.accept_credential("", PortalKind::Regular), LoginStep::Prompt(PASSWORD_PROMPT));
        assert_eq!(s.login_state, LoginState::AwaitingPassword);
    }

    #[test]
    fn rejection_clears_credentials() {
        let mut s = SessionState::new("s", 3);
        s.begin_login();
        s.accept_credential("u", PortalKind::Regular);
        s.accept_credential("p", PortalKind::Regular);
        assert!(s.has_credentials());
        s.login_rejected();
        assert!(!s.has_credentials());
        assert_eq!(s.login_state, LoginState::Idle);
    }

    #[test]
    fn begin_login_mid_flow_repeats_prompt() {
        let mut s = SessionState::new("s", 3);
        s.begin_login();
        s.accept_credential("u", PortalKind::Regular);
        assert_eq!(s.begin_login(), PASSWORD_PROMPT);
        assert_eq!(s.login_state, LoginState::AwaitingPassword);
    }
}
