//! Qudit gate operators for circuit-simulation hosts.
//!
//! Provides fixed ququart gates (the generalized Z phase gate and the three
//! modular increment gates) together with flip and controlled flip gates for
//! qudits of any dimension. Every gate exposes its subsystem shape, unitary
//! matrix and diagram label through [`ir::QuditOperator`].

pub mod config;
pub mod error;
pub mod ir;
pub mod parser;

pub use error::GateError;
