//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `SvError`
//! via `From` impls, or keep them separate and wrap `SvError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `sv-core` and a common base for sub-crates.
///
/// Note that behavior-tree execution never produces errors — leaves report
/// problems as `Failure` states.  These variants cover construction and
/// configuration only.
#[derive(Debug, Error)]
pub enum SvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("degenerate world bounds: {0}")]
    WorldBounds(String),
}

/// Shorthand result type for all `sv-*` crates.
pub type SvResult<T> = Result<T, SvError>;
