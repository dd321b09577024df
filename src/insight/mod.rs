//! Natural-language insight generation via an external model.
//!
//! The rest of the engine treats this as fire-and-forget: requests carry
//! their own pending/settled state, failures degrade to a fallback string or
//! `None` at this boundary, and a superseding comparison request invalidates
//! display of a stale prior response.

mod client;
mod prompt;
mod provider;
mod session;

pub use client::{InsightClient, FALLBACK_INSIGHT};
pub use provider::{GeminiProvider, InsightError, InsightProvider};
pub use session::ComparisonSession;
