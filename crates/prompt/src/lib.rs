//! Prompt contract for LLM-based electrical panel assessment.
//!
//! Everything an application needs to ask a vision-capable model whether a
//! panel can take a Level 2 EV charger: the reviewed assessment instruction
//! ([`prompts::SYSTEM_PROMPT`]) and the serializable request payload that
//! pairs it with a panel photograph ([`request::AssessmentRequest`]).
//!
//! Deliberately absent: HTTP transport, response parsing, and any local
//! electrical reasoning. The model does the engineering; the caller does
//! the networking.

pub mod prompts;
pub mod request;

pub use prompts::SYSTEM_PROMPT;
pub use request::{AssessmentRequest, ImageMediaType, ImageSource, RequestError};
