//! Error types for the enigma library.

use std::fmt;

/// Errors produced by the enigma library.
///
/// Every fallible operation returns one of exactly four kinds, matching
/// the phase of the machine lifecycle in which the violation is detected:
///
/// - [`Configuration`](Self::Configuration): building an alphabet, a rotor
///   catalog, or a machine from invalid parts (reserved or duplicate
///   symbols, bad slot/pawl counts, unknown or misplaced rotors).
/// - [`Setting`](Self::Setting): applying an invalid rotational offset or
///   setting line to already-configured rotors.
/// - [`Permutation`](Self::Permutation): malformed or contradictory cycle
///   notation, or a reflector wiring that is not a derangement.
/// - [`Runtime`](Self::Runtime): converting through an incomplete machine
///   (no rotors, no plugboard) or with an out-of-range symbol.
///
/// All violations are detected synchronously at the offending call and
/// surfaced immediately; the machine never continues in a partially valid
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Invalid machine or component construction parameters.
    Configuration(String),
    /// Invalid rotational offset or setting line.
    Setting(String),
    /// Invalid cycle notation or wiring constraint violation.
    Permutation(String),
    /// Conversion attempted through an incomplete or misused machine.
    Runtime(String),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::Configuration(msg) => {
                write!(f, "configuration error: {}", msg)
            }
            EnigmaError::Setting(msg) => write!(f, "setting error: {}", msg),
            EnigmaError::Permutation(msg) => {
                write!(f, "permutation error: {}", msg)
            }
            EnigmaError::Runtime(msg) => write!(f, "runtime error: {}", msg),
        }
    }
}

impl std::error::Error for EnigmaError {}
