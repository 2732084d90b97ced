use super::diagram::DiagramArgs;
use super::flip::{ControlledFlipGate, FlipGate};
use super::matrix::Unitary;
use super::ququart::{QuquartPlusCubedGate, QuquartPlusGate, QuquartPlusSquaredGate, ZGate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capabilities a circuit-simulation host expects from a qudit gate.
pub trait QuditOperator {
    /// Dimension of each subsystem the gate acts on, in order.
    fn qid_shape(&self) -> Vec<usize>;

    /// Unitary matrix of size `dimension() x dimension()`.
    fn unitary(&self) -> Unitary;

    /// Short label used when rendering a circuit diagram.
    fn diagram_label(&self, args: &DiagramArgs) -> String;

    /// Number of qudits the gate acts on.
    fn num_qudits(&self) -> usize {
        self.qid_shape().len()
    }

    /// Total Hilbert space dimension: the product of the subsystem dimensions.
    fn dimension(&self) -> usize {
        self.qid_shape().iter().product()
    }
}

/// Qudit Gate Types
///
/// The closed set of gate descriptors provided by this crate. Each variant
/// is an immutable value; its matrix is recomputed from the stored
/// parameters on every request.
///
/// # Examples
///
/// ```
/// use qudit_ops::ir::{FlipGate, QuditGate, QuditOperator};
/// let flip = QuditGate::from(FlipGate::new(4, 1, 3).unwrap());
/// assert_eq!(flip.qid_shape(), vec![4]);
/// assert_eq!(flip.to_string(), "X(1,3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum QuditGate {
    /// Ququart phase gate `diag(1, i^p, i^2p, i^3p)`
    Z(ZGate),
    /// Ququart modular increment `|k> -> |k + 1 mod 4>`
    Plus,
    /// Ququart modular increment by two
    PlusSquared,
    /// Ququart modular increment by three
    PlusCubed,
    /// Transposition of two basis states of a `d`-level qudit
    Flip(FlipGate),
    /// Flip on a target qudit conditioned on a control qudit
    ControlledFlip(ControlledFlipGate),
}

impl QuditGate {
    fn as_operator(&self) -> &dyn QuditOperator {
        match self {
            QuditGate::Z(gate) => gate,
            QuditGate::Plus => &QuquartPlusGate,
            QuditGate::PlusSquared => &QuquartPlusSquaredGate,
            QuditGate::PlusCubed => &QuquartPlusCubedGate,
            QuditGate::Flip(gate) => gate,
            QuditGate::ControlledFlip(gate) => gate,
        }
    }
}

impl QuditOperator for QuditGate {
    fn qid_shape(&self) -> Vec<usize> {
        self.as_operator().qid_shape()
    }

    fn unitary(&self) -> Unitary {
        self.as_operator().unitary()
    }

    fn diagram_label(&self, args: &DiagramArgs) -> String {
        self.as_operator().diagram_label(args)
    }
}

impl fmt::Display for QuditGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.diagram_label(&DiagramArgs::ascii()))
    }
}

impl From<ZGate> for QuditGate {
    fn from(gate: ZGate) -> Self {
        QuditGate::Z(gate)
    }
}

impl From<QuquartPlusGate> for QuditGate {
    fn from(_: QuquartPlusGate) -> Self {
        QuditGate::Plus
    }
}

impl From<QuquartPlusSquaredGate> for QuditGate {
    fn from(_: QuquartPlusSquaredGate) -> Self {
        QuditGate::PlusSquared
    }
}

impl From<QuquartPlusCubedGate> for QuditGate {
    fn from(_: QuquartPlusCubedGate) -> Self {
        QuditGate::PlusCubed
    }
}

impl From<FlipGate> for QuditGate {
    fn from(gate: FlipGate) -> Self {
        QuditGate::Flip(gate)
    }
}

impl From<ControlledFlipGate> for QuditGate {
    fn from(gate: ControlledFlipGate) -> Self {
        QuditGate::ControlledFlip(gate)
    }
}
