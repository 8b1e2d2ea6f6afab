//! # concierge-session
//!
//! State owned by one conversation and passed explicitly into every turn.
//!
//! ## Modules
//!
//! - `state`: `SessionState` with bounded history, last topic, login fields
//! - `login`: `Idle → AwaitingUsername → AwaitingPassword → Idle`
//! - `context`: follow-up resolution ("what about CSE?")
//! - `manager`: `SessionManager`, one async mutex per session
//! - `cleanup`: removal of inactive sessions

pub mod cleanup;
pub mod context;
pub mod login;
pub mod manager;
pub mod state;

pub use cleanup::cleanup_stale_sessions;
pub use login::{LoginStep, PASSWORD_PROMPT, USERNAME_PROMPT};
pub use manager::{SessionHandle, SessionManager};
pub use state::SessionState;
