#![deny(unsafe_code)]

//! Interactive clarification sessions.
//!
//! A session drives the multi-round dialogue that converges toward a
//! diagnosis or an explicit insufficient-evidence outcome. Suspension is
//! external: each turn returns a response and the caller supplies the
//! next utterance.

mod error;
mod questions;
mod response;
mod session;

pub use error::{Result, SessionError};
pub use questions::QuestionCatalog;
pub use response::{FocusDisease, TurnResponse};
pub use session::{ClarificationSession, SessionConfig, SessionState};
