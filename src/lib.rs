//! Enigma rotor cipher machine simulator.
//!
//! Simulates an electromechanical rotor cipher machine: a configurable
//! stack of rotors with internal wirings, a stepping mechanism including
//! the historical double-step anomaly, a fixed reflector, and a plugboard
//! swap layer. For a fixed machine state the transformation is reciprocal:
//! converting a message twice from the same initial state returns the
//! original text.
//!
//! # Architecture
//!
//! ```text
//! Alphabet    (bijection between symbols and indices [0, N))
//!     ↑ consumed by
//! Permutation (bijective index mapping built from cycle notation)
//!     ↑ owned by
//! Rotor       (permutation + rotational offset; Moving/Fixed/Reflecting)
//!     ↑ stacked by
//! Machine     (reflector + rotor slots + plugboard; steps every keypress)
//! ```
//!
//! # Examples
//!
//! Configure a small machine and convert a message both ways:
//!
//! ```
//! use enigma::{Alphabet, Machine, Permutation, Rotor};
//!
//! let alpha = Alphabet::default();
//! let catalog = vec![
//!     Rotor::reflecting(
//!         "B",
//!         Permutation::new(
//!             "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
//!             alpha.clone(),
//!         )
//!         .unwrap(),
//!     )
//!     .unwrap(),
//!     Rotor::moving(
//!         "I",
//!         Permutation::new(
//!             "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
//!             alpha.clone(),
//!         )
//!         .unwrap(),
//!         "Q",
//!     )
//!     .unwrap(),
//! ];
//!
//! let mut machine = Machine::new(alpha.clone(), 2, 1, catalog).unwrap();
//! machine.insert_rotors(&["B", "I"]).unwrap();
//! machine.set_rotors("A").unwrap();
//! machine.set_plugboard(Permutation::new("", alpha).unwrap());
//!
//! let ciphertext = machine.convert("HELLO").unwrap();
//!
//! machine.set_rotors("A").unwrap();
//! assert_eq!(machine.convert(&ciphertext).unwrap(), "HELLO");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod machine;
mod permutation;
mod rotor;

pub use alphabet::Alphabet;
pub use error::EnigmaError;
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
