pub mod ast;
pub mod rules;

use self::ast::ParsedGate;
use self::rules::{comment, statement_end};
use crate::error::GateError;
use crate::ir::{ControlledFlipGate, FlipGate, QuditGate, ZGate};
use nom::character::complete::multispace0;

// --- Resolution ---

fn resolve_gate(parsed: ParsedGate, radix: usize) -> Result<QuditGate, GateError> {
    let gate = match parsed {
        ParsedGate::Z(power) => QuditGate::Z(ZGate::new(power)),
        ParsedGate::Plus => QuditGate::Plus,
        ParsedGate::PlusSquared => QuditGate::PlusSquared,
        ParsedGate::PlusCubed => QuditGate::PlusCubed,
        ParsedGate::Flip(i, j) => FlipGate::new(radix, i, j)?.into(),
        ParsedGate::ControlledFlip(c, i, j) => ControlledFlipGate::new(radix, c, i, j)?.into(),
    };
    Ok(gate)
}

/// Parses a single ASCII diagram label (`Z2`, `[++]`, `X(1,3)`, `CX(0, 1, 3)`, ...)
/// back into a gate.
///
/// Flip-type gates take their dimension from `radix`; ququart gates ignore it.
pub fn parse_gate(input: &str, radix: usize) -> Result<QuditGate, GateError> {
    let label = input.trim();
    let (rem, parsed) = rules::gate(label)
        .map_err(|_| GateError::Parse(format!("Unrecognized gate label: '{}'", label)))?;
    if !rem.is_empty() {
        return Err(GateError::Parse(format!(
            "Unexpected input after gate label: '{}'",
            rem
        )));
    }
    log::trace!("parsed gate label '{label}' as {parsed:?}");
    resolve_gate(parsed, radix)
}

/// Parses a list of gate labels separated by `;` or newlines. `//` starts a
/// comment running to the end of the line.
pub fn parse_gate_list(input: &str, radix: usize) -> Result<Vec<QuditGate>, GateError> {
    let mut gates = Vec::new();
    let mut current_input = input;

    loop {
        // Consume whitespace
        let (rem, _) = multispace0::<&str, nom::error::Error<&str>>(current_input)
            .map_err(|e| GateError::Parse(e.to_string()))?;
        current_input = rem;

        if current_input.is_empty() {
            break;
        }

        if let Ok((rem, _)) = comment(current_input) {
            current_input = rem;
            continue;
        }

        if let Some(rem) = current_input.strip_prefix(';') {
            current_input = rem;
            continue;
        }

        let (rem, parsed) = rules::gate(current_input)
            .map_err(|_| GateError::Parse(format!("Parse error at: {}", current_input)))?;
        let (rem, _) = statement_end(rem)
            .map_err(|_| GateError::Parse(format!("Expected ';' or newline at: {}", rem)))?;
        current_input = rem;

        gates.push(resolve_gate(parsed, radix)?);
    }

    log::debug!("parsed {} gates for radix {radix}", gates.len());
    Ok(gates)
}
