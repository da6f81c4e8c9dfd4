//! `iglobal-assistant`
//!
//! **Responsibility:** chat/advisory capability boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on catalog or pricing state.
//! - It must not mutate anything.
//! - Its transport (HTTP client, model choice, cancellation, timeouts) is an
//!   implementation concern of whoever injects an [`Assistant`].
//!
//! The one behavior owned here is recovery: wrapped in
//! [`FallbackAssistant`], a failing assistant degrades to a fixed localized
//! message instead of surfacing an error to the buyer.

pub mod capability;
pub mod fallback;
pub mod scripted;

pub use capability::{Assistant, AssistantContext, AssistantError, AssistantReply};
pub use fallback::FallbackAssistant;
pub use scripted::ScriptedAssistant;
