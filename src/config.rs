//! JSON configuration for collections of gates.
//!
//! ```json
//! { "gates": [ { "gate": "z", "power": 2 }, { "gate": "flip", "d": 4, "i": 1, "j": 3 } ] }
//! ```

use crate::error::GateError;
use crate::ir::QuditGate;
use serde::{Deserialize, Serialize};

/// An ordered set of gate descriptors loaded from or saved to JSON.
///
/// Flip-type entries are validated while deserializing, so a config with an
/// out-of-range basis index fails to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    pub gates: Vec<QuditGate>,
}

impl GateConfig {
    pub fn new(gates: Vec<QuditGate>) -> Self {
        Self { gates }
    }

    pub fn from_json(input: &str) -> Result<Self, GateError> {
        let config: GateConfig = serde_json::from_str(input)?;
        log::debug!("loaded {} gates from JSON", config.gates.len());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, GateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ControlledFlipGate, FlipGate, ZGate};

    #[test]
    fn test_load_config() {
        let json = r#"
            {
                "gates": [
                    { "gate": "z", "power": 2 },
                    { "gate": "plus" },
                    { "gate": "plus_cubed" },
                    { "gate": "flip", "d": 4, "i": 1, "j": 3 },
                    { "gate": "controlled_flip", "d": 3, "c": 2, "i": 0, "j": 1 }
                ]
            }
        "#;
        let config = GateConfig::from_json(json).unwrap();
        assert_eq!(
            config.gates,
            vec![
                QuditGate::Z(ZGate::new(2)),
                QuditGate::Plus,
                QuditGate::PlusCubed,
                QuditGate::Flip(FlipGate::new(4, 1, 3).unwrap()),
                QuditGate::ControlledFlip(ControlledFlipGate::new(3, 2, 0, 1).unwrap()),
            ]
        );
    }

    #[test]
    fn test_invalid_basis_state_rejected_on_load() {
        let json = r#"{ "gates": [ { "gate": "flip", "d": 4, "i": 1, "j": 4 } ] }"#;
        let err = GateConfig::from_json(json).unwrap_err();
        assert!(matches!(err, GateError::Config(_)));
        assert!(err.to_string().contains("j = 4 must lie in [0, 4)"));
    }

    #[test]
    fn test_unknown_gate_rejected() {
        let json = r#"{ "gates": [ { "gate": "hadamard" } ] }"#;
        assert!(GateConfig::from_json(json).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let config = GateConfig::new(vec![
            QuditGate::PlusSquared,
            QuditGate::ControlledFlip(ControlledFlipGate::new(4, 1, 2, 3).unwrap()),
        ]);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"gate\": \"controlled_flip\""));
        assert_eq!(GateConfig::from_json(&json).unwrap(), config);
    }
}
