//! Flip (basis transposition) gates for qudits of arbitrary dimension.

use super::diagram::DiagramArgs;
use super::gates::QuditOperator;
use super::matrix::{controlled, transposition, Unitary};
use crate::error::{check_basis_state, GateError};
use serde::{Deserialize, Serialize};

/// Swaps basis states `|i>` and `|j>` of a `d`-level qudit, leaving the rest fixed.
///
/// The gate is its own inverse, and reduces to the identity when `i == j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FlipParams")]
pub struct FlipGate {
    d: usize,
    i: usize,
    j: usize,
}

#[derive(Deserialize)]
struct FlipParams {
    d: usize,
    i: usize,
    j: usize,
}

impl FlipGate {
    /// Creates a flip gate, failing with [`GateError::InvalidBasisState`] if
    /// `i` or `j` is not in `[0, d)`.
    pub fn new(d: usize, i: usize, j: usize) -> Result<Self, GateError> {
        check_basis_state("i", i, d)?;
        check_basis_state("j", j, d)?;
        log::debug!("constructing flip gate X({i},{j}) on dimension {d}");
        Ok(Self { d, i, j })
    }

    pub fn dim(&self) -> usize {
        self.d
    }

    /// The two exchanged basis indices.
    pub fn indices(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

impl TryFrom<FlipParams> for FlipGate {
    type Error = GateError;

    fn try_from(params: FlipParams) -> Result<Self, Self::Error> {
        FlipGate::new(params.d, params.i, params.j)
    }
}

impl QuditOperator for FlipGate {
    fn qid_shape(&self) -> Vec<usize> {
        vec![self.d]
    }

    fn unitary(&self) -> Unitary {
        transposition(self.d, self.i, self.j)
    }

    fn diagram_label(&self, _args: &DiagramArgs) -> String {
        format!("X({},{})", self.i, self.j)
    }
}

/// Two-qudit gate applying [`FlipGate`] `(d, i, j)` to the target qudit when
/// the control qudit is in state `|c>`.
///
/// Subsystem order is `(control, target)`, so the matrix is block diagonal
/// with `d` blocks of size `d`: block `c` is the flip, every other block is
/// the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ControlledFlipParams")]
pub struct ControlledFlipGate {
    d: usize,
    c: usize,
    i: usize,
    j: usize,
}

#[derive(Deserialize)]
struct ControlledFlipParams {
    d: usize,
    c: usize,
    i: usize,
    j: usize,
}

impl ControlledFlipGate {
    /// Creates a controlled flip gate. The control value `c` and the flipped
    /// indices `i`, `j` must all lie in `[0, d)`.
    pub fn new(d: usize, c: usize, i: usize, j: usize) -> Result<Self, GateError> {
        check_basis_state("c", c, d)?;
        check_basis_state("i", i, d)?;
        check_basis_state("j", j, d)?;
        log::debug!("constructing controlled flip gate CX({c}, {i}, {j}) on dimension {d}");
        Ok(Self { d, c, i, j })
    }

    pub fn dim(&self) -> usize {
        self.d
    }

    /// Control state that triggers the flip.
    pub fn control(&self) -> usize {
        self.c
    }

    pub fn indices(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    /// The flip applied to the target qudit.
    pub fn target_gate(&self) -> FlipGate {
        FlipGate {
            d: self.d,
            i: self.i,
            j: self.j,
        }
    }
}

impl TryFrom<ControlledFlipParams> for ControlledFlipGate {
    type Error = GateError;

    fn try_from(params: ControlledFlipParams) -> Result<Self, Self::Error> {
        ControlledFlipGate::new(params.d, params.c, params.i, params.j)
    }
}

impl QuditOperator for ControlledFlipGate {
    fn qid_shape(&self) -> Vec<usize> {
        vec![self.d, self.d]
    }

    fn unitary(&self) -> Unitary {
        controlled(self.d, self.c, &self.target_gate().unitary())
    }

    fn diagram_label(&self, _args: &DiagramArgs) -> String {
        format!("CX({}, {}, {})", self.c, self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::matrix::{approx_eq, identity, is_permutation, is_unitary, kron};
    use num_complex::Complex64;

    #[test]
    fn test_flip_1_3_on_ququart() {
        let m = FlipGate::new(4, 1, 3).unwrap().unitary();
        let rows = [[1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.0], [0.0, 1.0, 0.0, 0.0]];
        for (r, row) in rows.iter().enumerate() {
            for (col, &val) in row.iter().enumerate() {
                assert_eq!(m[(r, col)], Complex64::new(val, 0.0));
            }
        }
    }

    #[test]
    fn test_flip_same_index_is_identity() {
        let m = FlipGate::new(3, 2, 2).unwrap().unitary();
        assert_eq!(m, identity(3));
    }

    #[test]
    fn test_flip_self_inverse() {
        let m = FlipGate::new(5, 0, 3).unwrap().unitary();
        assert!(is_permutation(&m));
        assert!(approx_eq(&(&m * &m), &identity(5)));
    }

    #[test]
    fn test_flip_deterministic() {
        let gate = FlipGate::new(6, 5, 1).unwrap();
        assert_eq!(gate.unitary(), gate.unitary());
    }

    #[test]
    fn test_flip_invalid_indices() {
        assert!(matches!(
            FlipGate::new(4, 4, 0),
            Err(GateError::InvalidBasisState { parameter: "i", value: 4, dimension: 4 })
        ));
        assert!(matches!(
            FlipGate::new(4, 0, 9),
            Err(GateError::InvalidBasisState { parameter: "j", value: 9, dimension: 4 })
        ));
        assert!(FlipGate::new(0, 0, 0).is_err());
        assert!(FlipGate::new(1, 0, 0).is_ok());
    }

    #[test]
    fn test_flip_label() {
        let gate = FlipGate::new(4, 1, 3).unwrap();
        assert_eq!(gate.diagram_label(&DiagramArgs::ascii()), "X(1,3)");
        assert_eq!(gate.indices(), (1, 3));
        assert_eq!(gate.dim(), 4);
    }

    #[test]
    fn test_controlled_flip_shape_and_unitarity() {
        let gate = ControlledFlipGate::new(4, 2, 1, 3).unwrap();
        assert_eq!(gate.qid_shape(), vec![4, 4]);
        let m = gate.unitary();
        assert_eq!(m.shape(), (16, 16));
        assert!(is_unitary(&m));
        assert!(is_permutation(&m));
    }

    #[test]
    fn test_controlled_flip_acts_only_on_control_block() {
        let gate = ControlledFlipGate::new(3, 1, 0, 2).unwrap();
        let m = gate.unitary();
        let flip = gate.target_gate().unitary();

        let mut projector = Unitary::zeros(3, 3);
        projector[(1, 1)] = Complex64::new(1.0, 0.0);
        let complement = identity(3) - &projector;
        let expected = kron(&projector, &flip) + kron(&complement, &identity(3));
        assert!(approx_eq(&m, &expected));

        // |1>|0> -> |1>|2>, while |0>|0> is untouched.
        assert_eq!(m[(5, 3)], Complex64::new(1.0, 0.0));
        assert_eq!(m[(0, 0)], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_controlled_flip_depends_on_control_value() {
        let a = ControlledFlipGate::new(4, 0, 1, 3).unwrap().unitary();
        let b = ControlledFlipGate::new(4, 3, 1, 3).unwrap().unitary();
        assert!(!approx_eq(&a, &b));
        // The unconditional `flip (x) 1` construction is not what this gate produces.
        let unconditional = kron(&FlipGate::new(4, 1, 3).unwrap().unitary(), &identity(4));
        assert!(!approx_eq(&a, &unconditional));
    }

    #[test]
    fn test_controlled_flip_invalid_control() {
        assert!(matches!(
            ControlledFlipGate::new(3, 3, 0, 1),
            Err(GateError::InvalidBasisState { parameter: "c", value: 3, dimension: 3 })
        ));
        assert!(ControlledFlipGate::new(3, 0, 0, 5).is_err());
    }

    #[test]
    fn test_controlled_flip_label() {
        let gate = ControlledFlipGate::new(4, 2, 0, 1).unwrap();
        assert_eq!(gate.diagram_label(&DiagramArgs::ascii()), "CX(2, 0, 1)");
        assert_eq!(gate.control(), 2);
    }
}
