use thiserror::Error;

/// Errors reported by [`SortedList`](crate::SortedList) operations.
///
/// Only misuse is reported as an error. Legitimate absence (a value that is not
/// present, an extremum of an empty list) is reported as `None` or `false`.
///
/// An operation that returns an error has not modified the list.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A position fell outside `[-len, len)`.
    #[error("position {index} is out of range for a sorted list of length {len}")]
    OutOfRange {
        /// The position as supplied by the caller, before normalization.
        index: isize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// An argument was malformed, such as a zero load factor, a zero step, or a
    /// range whose start resolves past its end.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Result type returned by fallible [`SortedList`](crate::SortedList) operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
