//! crates/codegenio_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like local storage or APIs.

use async_trait::async_trait;

use crate::domain::AccountState;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., storage, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable storage of per-account application state, keyed by email, plus
/// a single active-account pointer.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Resolves the active-account pointer and returns that account's stored
    /// snapshot. An absent pointer, an unknown account or a corrupt store all
    /// read as a cold start; this operation never fails.
    async fn load_active_account_state(&self) -> Option<AccountState>;

    /// Upserts `state` under `email`, rewriting that account's entry in full.
    /// No partial merge.
    async fn save_account_state(&self, email: &str, state: &AccountState) -> PortResult<()>;

    /// Sets or clears the active-account pointer.
    async fn set_active_account(&self, email: Option<&str>) -> PortResult<()>;

    /// Membership check against the account map, used by the login flow to
    /// branch between sign-in and registration. Storage failure reads as
    /// "does not exist".
    async fn account_exists(&self, email: &str) -> bool;
}

/// The assistant's textual reply to a lesson question.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub text: String,
}

/// Lesson-scoped chat assistant backed by an external completion API.
#[async_trait]
pub trait LessonAssistantService: Send + Sync {
    /// Answers a student question about one lesson. This operation never
    /// fails: adapter degradations (missing credentials, network failure,
    /// non-success responses) must surface as a canned reply.
    async fn ask(&self, question: &str, lesson_content: &str, lesson_title: &str)
        -> AssistantReply;
}
