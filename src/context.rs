//! Error bookkeeping shared by a sequence of window-building calls.

use crate::Error;

/// Holds the failure state for the operations run under it.
///
/// Every fallible call in this crate takes the context by `&mut`. Once a
/// call fails, its error is recorded here and every later call made with
/// the same context returns that error without doing any work, until
/// [`clear_error`](Context::clear_error) is called.
///
/// A context is cheap; give each thread its own.
///
/// ```
/// use resample_weights::{Context, Error, InterpolationDetails, LineContributions, Type};
///
/// let mut ctx = Context::new();
/// let details = InterpolationDetails::create(&mut ctx, Type::Triangle).unwrap();
/// assert_eq!(LineContributions::create(&mut ctx, 0, 10, &details).unwrap_err(), Error::InvalidParameters);
/// // Still failed, even for valid input.
/// assert!(LineContributions::create(&mut ctx, 5, 10, &details).is_err());
/// ctx.clear_error();
/// assert!(LineContributions::create(&mut ctx, 5, 10, &details).is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Context {
    error: Option<Error>,
}

impl Context {
    /// Create a context with no recorded failure.
    pub fn new() -> Context {
        Context { error: None }
    }

    /// The most recently recorded failure, if any.
    #[inline]
    pub fn error(&self) -> Option<Error> {
        self.error
    }

    /// Whether the context is in the failed state.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Reset to the ok state.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Run `op` unless already failed, recording whatever error it returns.
    pub(crate) fn run<T>(&mut self, op: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        op().map_err(|err| {
            self.error = Some(err);
            err
        })
    }
}
