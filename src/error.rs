use thiserror::Error;

/// Errors raised while constructing, parsing or loading qudit gates.
#[derive(Debug, Error)]
pub enum GateError {
    /// A basis index (or control value) does not address a level of the qudit.
    #[error("invalid basis state: {parameter} = {value} must lie in [0, {dimension})")]
    InvalidBasisState {
        /// Name of the offending constructor parameter (`i`, `j` or `c`).
        parameter: &'static str,
        value: usize,
        dimension: usize,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid gate configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Checks that `value` is a valid basis index for a qudit of dimension `dimension`.
pub(crate) fn check_basis_state(
    parameter: &'static str,
    value: usize,
    dimension: usize,
) -> Result<(), GateError> {
    if value < dimension {
        Ok(())
    } else {
        log::debug!("rejecting {parameter} = {value} for dimension {dimension}");
        Err(GateError::InvalidBasisState {
            parameter,
            value,
            dimension,
        })
    }
}
