//! Fixed-dimension gates on a single ququart (4-level qudit).

use super::diagram::{superscript, DiagramArgs};
use super::gates::QuditOperator;
use super::matrix::{cyclic_shift, fourth_root_power, Unitary};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Number of levels of a ququart.
pub const QUQUART_DIM: usize = 4;

/// Generalized Z (clock) gate on a ququart raised to an integer power.
///
/// The matrix is `diag(1, i^p, i^2p, i^3p)`. Any power is accepted; powers
/// that agree modulo 4 produce identical matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZGate {
    pub power: i64,
}

impl ZGate {
    pub fn new(power: i64) -> Self {
        log::debug!("constructing Z gate with power {power}");
        Self { power }
    }
}

impl QuditOperator for ZGate {
    fn qid_shape(&self) -> Vec<usize> {
        vec![QUQUART_DIM]
    }

    fn unitary(&self) -> Unitary {
        let step = self.power.rem_euclid(4);
        let diagonal = DVector::from_fn(QUQUART_DIM, |k, _| fourth_root_power(step * k as i64));
        Unitary::from_diagonal(&diagonal)
    }

    fn diagram_label(&self, args: &DiagramArgs) -> String {
        match self.power {
            1 => "Z".to_string(),
            p if args.use_unicode_characters => format!("Z{}", superscript(p)),
            p => format!("Z{p}"),
        }
    }
}

/// Modular increment `|k> -> |k + 1 mod 4>` on a ququart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuquartPlusGate;

/// Modular increment by two on a ququart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuquartPlusSquaredGate;

/// Modular increment by three on a ququart, i.e. the inverse of [`QuquartPlusGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuquartPlusCubedGate;

macro_rules! shift_gate {
    ($gate:ty, $shift:expr, $label:expr) => {
        impl QuditOperator for $gate {
            fn qid_shape(&self) -> Vec<usize> {
                vec![QUQUART_DIM]
            }

            fn unitary(&self) -> Unitary {
                cyclic_shift(QUQUART_DIM, $shift)
            }

            fn diagram_label(&self, _args: &DiagramArgs) -> String {
                $label.to_string()
            }
        }
    };
}

shift_gate!(QuquartPlusGate, 1, "[+]");
shift_gate!(QuquartPlusSquaredGate, 2, "[++]");
shift_gate!(QuquartPlusCubedGate, 3, "[+++]");
