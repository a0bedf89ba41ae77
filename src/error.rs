//! Errors shared by the predicate and the enumerator.

use thiserror::Error;

use crate::pitch::PitchError;

/// Errors from an analysis call.
///
/// A progression that simply fails to match is not an error; these mean the
/// input could not be read or the question asked was ill-posed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A slice string held a malformed pitch name.
    #[error(transparent)]
    Pitch(#[from] PitchError),

    /// An invalid argument or configuration value was supplied.
    #[error("invalid argument `{arg}`: {msg}")]
    InvalidArgument {
        /// The name of the invalid argument.
        arg: &'static str,
        /// A description of the invalid argument.
        msg: String,
    },
}
