//! Error types for the hypergraph generator.
//!
//! Defines the generation and parsing error enums exposed by the public API,
//! their stable error codes, and a convenient result alias.

use std::{fmt, io, time::Duration};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running a
/// [`crate::HypergraphGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// The requested number of nets was negative.
    #[error("net count must not be negative (got {got})")]
    NegativeNetCount {
        /// The invalid net count supplied by the caller.
        got: i64,
    },
    /// Fewer than two cells were requested, so no net of size two exists.
    #[error("cell count must be at least 2 (got {got})")]
    TooFewCells {
        /// The invalid cell count supplied by the caller.
        got: i64,
    },
    /// The requested net count does not fit the platform's `usize`.
    #[error("net count {got} is too large for this platform")]
    NetCountTooLarge {
        /// The net count supplied by the caller.
        got: i64,
    },
    /// Cell identifiers are 32-bit; the requested count exceeds that range.
    #[error("cell count {got} exceeds the maximum of {max}", max = u32::MAX)]
    CellCountTooLarge {
        /// The cell count supplied by the caller.
        got: i64,
    },
    /// The attempt budget ran out before enough distinct nets were drawn.
    #[error(
        "gave up after {attempts} attempts with {collected} of {requested} distinct nets collected"
    )]
    AttemptsExhausted {
        /// Number of sampling attempts performed.
        attempts: u64,
        /// Distinct nets collected before giving up.
        collected: usize,
        /// Distinct nets requested.
        requested: usize,
    },
    /// The wall-clock budget ran out before enough distinct nets were drawn.
    #[error(
        "gave up after {elapsed:?} with {collected} of {requested} distinct nets collected"
    )]
    DeadlineExceeded {
        /// Time spent sampling before giving up.
        elapsed: Duration,
        /// Distinct nets collected before giving up.
        collected: usize,
        /// Distinct nets requested.
        requested: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The requested number of nets was negative.
        NegativeNetCount => NegativeNetCount { .. } => "HYPERGEN_NEGATIVE_NET_COUNT",
        /// Fewer than two cells were requested.
        TooFewCells => TooFewCells { .. } => "HYPERGEN_TOO_FEW_CELLS",
        /// The requested net count does not fit `usize`.
        NetCountTooLarge => NetCountTooLarge { .. } => "HYPERGEN_NET_COUNT_TOO_LARGE",
        /// The requested cell count does not fit `u32`.
        CellCountTooLarge => CellCountTooLarge { .. } => "HYPERGEN_CELL_COUNT_TOO_LARGE",
        /// The attempt budget ran out.
        AttemptsExhausted => AttemptsExhausted { .. } => "HYPERGEN_ATTEMPTS_EXHAUSTED",
        /// The wall-clock budget ran out.
        DeadlineExceeded => DeadlineExceeded { .. } => "HYPERGEN_DEADLINE_EXCEEDED",
    }
}

impl GeneratorError {
    /// Whether the error rejects the requested parameters before any
    /// sampling took place.
    ///
    /// # Examples
    /// ```
    /// use hypergen_core::GeneratorError;
    ///
    /// assert!(GeneratorError::TooFewCells { got: 1 }.is_degenerate_parameters());
    /// let exhausted = GeneratorError::AttemptsExhausted {
    ///     attempts: 10,
    ///     collected: 1,
    ///     requested: 4,
    /// };
    /// assert!(!exhausted.is_degenerate_parameters());
    /// ```
    #[must_use]
    pub const fn is_degenerate_parameters(&self) -> bool {
        matches!(
            self,
            Self::NegativeNetCount { .. }
                | Self::TooFewCells { .. }
                | Self::NetCountTooLarge { .. }
                | Self::CellCountTooLarge { .. }
        )
    }
}

/// Errors raised while reading a hypergraph instance from text.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading from the underlying source failed.
    #[error("failed to read hypergraph: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
    /// The input contained no header line.
    #[error("hypergraph input is empty")]
    MissingHeader,
    /// The header line could not be interpreted.
    #[error("line {line}: invalid header: {reason}")]
    InvalidHeader {
        /// One-based line number of the header.
        line: usize,
        /// Description of the problem.
        reason: &'static str,
    },
    /// The header requested weighted nets or cells.
    #[error("line {line}: weighted hypergraphs are not supported (fmt = {fmt})")]
    UnsupportedFormat {
        /// One-based line number of the header.
        line: usize,
        /// The format flag found in the header.
        fmt: u32,
    },
    /// A net line contained something other than a cell identifier.
    #[error("line {line}: `{token}` is not a cell identifier")]
    InvalidCell {
        /// One-based line number of the offending net.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },
    /// A cell identifier fell outside `1..=cell_count`.
    #[error("line {line}: cell {cell} is outside 1..={cell_count}")]
    CellOutOfRange {
        /// One-based line number of the offending net.
        line: usize,
        /// The out-of-range cell identifier.
        cell: u32,
        /// Cell count declared by the header.
        cell_count: u32,
    },
    /// The number of net lines disagreed with the header.
    #[error("header declares {expected} nets but {actual} were found")]
    NetCountMismatch {
        /// Net count declared by the header.
        expected: usize,
        /// Net lines actually present.
        actual: usize,
    },
}

/// Convenient alias for results returned by the generator API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
