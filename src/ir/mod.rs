pub mod diagram;
pub mod flip;
pub mod gates;
pub mod matrix;
pub mod ququart;

// Re-export for easier access
pub use diagram::DiagramArgs;
pub use flip::{ControlledFlipGate, FlipGate};
pub use gates::{QuditGate, QuditOperator};
pub use matrix::Unitary;
pub use ququart::{QuquartPlusCubedGate, QuquartPlusGate, QuquartPlusSquaredGate, ZGate};
