use thiserror::Error;

/// Faults surfaced by algebra operations.
///
/// All of these are caller-contract violations in the mathematical sense:
/// nothing is caught or retried internally, and there is no recovery path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// A blade or bundle of one grade was absorbed into a bundle whose grade
    /// is already established as something else.
    #[error("grade mismatch: bundle has grade {expected}, absorbed element has grade {got}")]
    GradeMismatch { expected: usize, got: usize },

    /// Inverse or quotient requested for an element whose relevant self
    /// inner product is zero.
    #[error("element is not invertible: {0}")]
    NotInvertible(String),

    /// Componentwise arithmetic on two vectors of different lengths.
    /// Mismatched vectors are rejected, never zero-padded.
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
