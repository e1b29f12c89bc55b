//! Rotor: a wiring permutation behind a rotational offset.
//!
//! Three variants exist as a closed set: moving rotors (driven by a pawl,
//! carrying notches), fixed rotors (settable but never advancing), and
//! reflectors (non-rotating, wired as a derangement, folding the signal
//! path back through the stack). The variant is a tagged union rather than
//! a trait object so that `advance`/`at_notch`/`set` dispatch stays
//! exhaustively checkable.

use crate::error::EnigmaError;
use crate::permutation::Permutation;

/// Variant-specific payload of a [`Rotor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// A pawl-driven rotor with notch offsets that trigger its left
    /// neighbor's stepping.
    Moving {
        /// Offsets at which this rotor presents a notch.
        notches: Vec<usize>,
    },
    /// A settable rotor with no ratchet; it never advances on its own.
    Fixed,
    /// A non-rotating rotor whose wiring is a derangement; always sits in
    /// slot 0 and has exactly one position.
    Reflecting,
}

/// A named wiring permutation with a mutable rotational offset.
///
/// The offset ("setting") shifts the wiring's effective permutation: a
/// signal entering at contact `c` leaves the wiring at
/// `permute(c + setting) - setting`, wrapped into the alphabet range.
///
/// Rotors have value semantics: a machine catalog holds immutable
/// definitions at setting 0 and each installed slot owns its own clone, so
/// no two machines ever alias rotor state.
///
/// # Examples
///
/// ```
/// use enigma::{Alphabet, Permutation, Rotor};
///
/// let alpha = Alphabet::new("ABCD").unwrap();
/// let perm = Permutation::new("(ABCD)", alpha).unwrap();
/// let mut rotor = Rotor::moving("I", perm, "D").unwrap();
/// assert_eq!(rotor.convert_forward(0), 1); // A -> B at setting 0
/// rotor.advance();
/// assert_eq!(rotor.setting(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    setting: usize,
    kind: RotorKind,
}

impl Rotor {
    /// Creates a moving rotor named `name` with the given wiring, whose
    /// notches sit at the offsets of the symbols in `notches`. The rotor
    /// starts at setting 0.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if a notch symbol is not in
    /// the wiring's alphabet.
    pub fn moving(
        name: &str,
        permutation: Permutation,
        notches: &str,
    ) -> Result<Self, EnigmaError> {
        let mut offsets = Vec::new();
        for ch in notches.chars() {
            match permutation.alphabet().to_index(ch) {
                Ok(index) => offsets.push(index),
                Err(_) => {
                    return Err(EnigmaError::Configuration(format!(
                        "notch '{}' of rotor {} is not in the alphabet",
                        ch, name
                    )))
                }
            }
        }
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            setting: 0,
            kind: RotorKind::Moving { notches: offsets },
        })
    }

    /// Creates a fixed (non-advancing but settable) rotor named `name`
    /// with the given wiring, at setting 0.
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Rotor {
            name: name.to_string(),
            permutation,
            setting: 0,
            kind: RotorKind::Fixed,
        }
    }

    /// Creates a reflector named `name` with the given wiring.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Permutation`] if the wiring is not a
    /// derangement — a reflector that maps any contact to itself would
    /// send a signal straight back out of the contact it entered.
    pub fn reflecting(name: &str, permutation: Permutation) -> Result<Self, EnigmaError> {
        if !permutation.is_derangement() {
            return Err(EnigmaError::Permutation(format!(
                "the wiring of reflector {} must be a derangement",
                name
            )));
        }
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            setting: 0,
            kind: RotorKind::Reflecting,
        })
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the size of the alphabet this rotor acts on.
    pub fn alphabet_size(&self) -> usize {
        self.permutation.size()
    }

    /// Returns the wiring permutation.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the current rotational offset.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Returns true iff this rotor is pawl-driven.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns true iff this rotor is a reflector.
    pub fn reflects(&self) -> bool {
        matches!(self.kind, RotorKind::Reflecting)
    }

    /// Sets the rotational offset to `posn`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Setting`] if `posn` is outside
    /// `[0, alphabet_size())`, or, for a reflector, if `posn != 0` — a
    /// reflector has only one position.
    pub fn set(&mut self, posn: usize) -> Result<(), EnigmaError> {
        if self.reflects() {
            if posn != 0 {
                return Err(EnigmaError::Setting(
                    "a reflector has only one position".to_string(),
                ));
            }
            return Ok(());
        }
        if posn >= self.alphabet_size() {
            return Err(EnigmaError::Setting(format!(
                "setting {} is out of range for rotor {} over an alphabet of size {}",
                posn,
                self.name,
                self.alphabet_size()
            )));
        }
        self.setting = posn;
        Ok(())
    }

    /// Reduces `p` to a valid contact index in `[0, alphabet_size())`.
    fn wrap(&self, p: i32) -> i32 {
        p.rem_euclid(self.alphabet_size() as i32)
    }

    /// Converts the contact index `c` through the wiring in the forward
    /// direction, accounting for the current rotational offset.
    pub fn convert_forward(&self, c: i32) -> i32 {
        let shifted = self.permutation.permute(c + self.setting as i32);
        self.wrap(shifted - self.setting as i32)
    }

    /// Converts the contact index `c` through the wiring in the backward
    /// direction, accounting for the current rotational offset.
    pub fn convert_backward(&self, c: i32) -> i32 {
        let shifted = self.permutation.invert(c + self.setting as i32);
        self.wrap(shifted - self.setting as i32)
    }

    /// Advances the rotor one position. Fixed rotors and reflectors do not
    /// move.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = (self.setting + 1) % self.alphabet_size();
        }
    }

    /// Returns true iff the rotor currently presents a notch to its left
    /// neighbor's pawl.
    ///
    /// Fixed rotors and reflectors report true unconditionally: they can
    /// never advance, and an unconditional true keeps them inert but
    /// non-blocking when the stepping loop reads them uniformly by slot.
    /// A moving rotor with an EMPTY notch set also reports true at every
    /// setting; this replicates the reference behavior for a physically
    /// nonsensical configuration.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => {
                notches.is_empty() || notches.contains(&self.setting)
            }
            RotorKind::Fixed | RotorKind::Reflecting => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    fn perm(cycles: &str) -> Permutation {
        Permutation::new(cycles, Alphabet::new("ABCD").unwrap()).unwrap()
    }

    #[test]
    fn test_moving_rotor_basics() {
        let rotor = Rotor::moving("I", perm("(ABCD)"), "B").unwrap();
        assert_eq!(rotor.name(), "I");
        assert_eq!(rotor.alphabet_size(), 4);
        assert_eq!(rotor.setting(), 0);
        assert!(rotor.rotates());
        assert!(!rotor.reflects());
    }

    #[test]
    fn test_moving_rotor_bad_notch() {
        assert!(matches!(
            Rotor::moving("I", perm("(ABCD)"), "Q"),
            Err(EnigmaError::Configuration(_))
        ));
    }

    #[test]
    fn test_fixed_rotor_never_advances() {
        let mut rotor = Rotor::fixed("Beta", perm("(ABCD)"));
        assert!(!rotor.rotates());
        rotor.advance();
        assert_eq!(rotor.setting(), 0);
        rotor.set(2).unwrap();
        rotor.advance();
        assert_eq!(rotor.setting(), 2);
    }

    #[test]
    fn test_reflector_requires_derangement() {
        assert!(Rotor::reflecting("B", perm("(AB) (CD)")).is_ok());
        assert!(matches!(
            Rotor::reflecting("B", perm("(AB)")),
            Err(EnigmaError::Permutation(_))
        ));
        // Full coverage with a singleton cycle is still not a derangement.
        assert!(matches!(
            Rotor::reflecting("B", perm("(BCD) (A)")),
            Err(EnigmaError::Permutation(_))
        ));
    }

    #[test]
    fn test_reflector_set_only_zero() {
        let mut reflector = Rotor::reflecting("B", perm("(AB) (CD)")).unwrap();
        assert!(reflector.set(0).is_ok());
        assert_eq!(reflector.setting(), 0);
        assert!(matches!(reflector.set(1), Err(EnigmaError::Setting(_))));
        assert_eq!(reflector.setting(), 0);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut rotor = Rotor::moving("I", perm("(ABCD)"), "B").unwrap();
        assert!(rotor.set(3).is_ok());
        assert!(matches!(rotor.set(4), Err(EnigmaError::Setting(_))));
        assert_eq!(rotor.setting(), 3);
    }

    #[test]
    fn test_advance_wraps() {
        let mut rotor = Rotor::moving("I", perm("(ABCD)"), "B").unwrap();
        for expected in [1, 2, 3, 0, 1] {
            rotor.advance();
            assert_eq!(rotor.setting(), expected);
        }
    }

    #[test]
    fn test_convert_forward_offset_correction() {
        // Wiring A->B->C->D->A. At setting 1, contact 0 enters at B,
        // leaves at C, and exits contact 1.
        let mut rotor = Rotor::moving("I", perm("(ABCD)"), "B").unwrap();
        assert_eq!(rotor.convert_forward(0), 1);
        rotor.set(1).unwrap();
        assert_eq!(rotor.convert_forward(0), 1);
        assert_eq!(rotor.convert_forward(3), 0);
    }

    #[test]
    fn test_convert_backward_inverts_forward() {
        let mut rotor = Rotor::moving("I", perm("(BACD)"), "B").unwrap();
        for setting in 0..4 {
            rotor.set(setting).unwrap();
            for c in 0..4 {
                assert_eq!(rotor.convert_backward(rotor.convert_forward(c)), c);
            }
        }
    }

    #[test]
    fn test_at_notch() {
        let mut rotor = Rotor::moving("I", perm("(ABCD)"), "C").unwrap();
        assert!(!rotor.at_notch());
        rotor.set(2).unwrap();
        assert!(rotor.at_notch());
    }

    #[test]
    fn test_at_notch_multiple_notches() {
        let mut rotor = Rotor::moving("VI", perm("(ABCD)"), "BD").unwrap();
        let mut hits = Vec::new();
        for setting in 0..4 {
            rotor.set(setting).unwrap();
            hits.push(rotor.at_notch());
        }
        assert_eq!(hits, vec![false, true, false, true]);
    }

    #[test]
    fn test_empty_notch_set_always_at_notch() {
        let mut rotor = Rotor::moving("I", perm("(ABCD)"), "").unwrap();
        for setting in 0..4 {
            rotor.set(setting).unwrap();
            assert!(rotor.at_notch(), "setting {}", setting);
        }
    }

    #[test]
    fn test_fixed_and_reflecting_always_at_notch() {
        let fixed = Rotor::fixed("Beta", perm("(ABCD)"));
        let reflector = Rotor::reflecting("B", perm("(AB) (CD)")).unwrap();
        assert!(fixed.at_notch());
        assert!(reflector.at_notch());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Rotor::moving("I", perm("(ABCD)"), "B").unwrap();
        let clone = original.clone();
        original.advance();
        assert_eq!(original.setting(), 1);
        assert_eq!(clone.setting(), 0);
    }
}
