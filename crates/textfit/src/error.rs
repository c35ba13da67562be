use thiserror::Error;

/// Errors raised by the fitting routines before any measurement happens.
///
/// Exhausting the attempt budget is deliberately NOT an error: the search
/// returns its last attempted result with
/// [`FitOutcome::Exhausted`](crate::FitOutcome::Exhausted) instead, and
/// callers accept the approximate fit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    /// Degenerate input that can never produce a usable layout.
    #[error("invalid fit input: {0}")]
    InvalidInput(&'static str),
}
