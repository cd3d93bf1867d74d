/// Failure modes of a selection call. Every variant aborts the current call
/// immediately; `select_sequence` returns no partial list on failure.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// The participant table must be a non-empty (N, 2) table of
    /// (name, consideration) cells.
    #[error("participant table must have shape (N, 2) with N > 0, got ({rows}, {width})")]
    Shape { rows: usize, width: usize },

    /// The consideration column holds more than two distinct values.
    #[error("expected at most two distinct consideration values, got {0:?}")]
    TooManyCategories(Vec<String>),

    /// A consideration value outside the recognized literal set.
    #[error("consideration values must be \"True\" or \"False\", got {0:?}")]
    InvalidCategory(Vec<String>),

    #[error("participant names must be unique, {0:?} appears more than once")]
    DuplicateName(String),

    #[error("unknown selection mode {0:?}, expected \"k\" or \"ptj_v\"")]
    UnknownMode(String),

    /// The mode parameter falls outside its valid interval for the current
    /// category counts.
    #[error("{parameter} must be between {lower} and {upper}, got {value}")]
    OutOfRange {
        parameter: &'static str,
        lower: f64,
        upper: f64,
        value: f64,
    },

    /// The derived weights do not form a probability distribution. Indicates
    /// a bug in the bound derivation, not a caller error.
    #[error(
        "derived weights are not a probability distribution: \
         p_v = {p_v}, p_s = {p_s}, total mass = {mass}"
    )]
    InvariantViolation { p_v: f64, p_s: f64, mass: f64 },
}
