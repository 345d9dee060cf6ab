use thiserror::Error;

/// Structural invariant violations raised during translation.
///
/// Each of these indicates that the translator's bookkeeping went wrong for
/// the current compilation unit, not that the input was merely unusual. They
/// abort the unit's translation and are never caught internally; the caller
/// decides whether to discard the unit's contribution.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no enclosing container for {construct} at byte {offset}")]
    MissingContainer { construct: &'static str, offset: usize },

    #[error("statement at byte {offset} appended with no active scope")]
    NoActiveScope { offset: usize },

    #[error("scope stack underflow on {construct} exit")]
    ScopeUnderflow { construct: &'static str },

    #[error("container stack underflow on {construct} exit")]
    ContainerUnderflow { construct: &'static str },

    #[error("method-scoped block exited under non-method container {path}")]
    NotAMethodScope { path: String },
}
