//! Machine: an ordered rotor stack with a plugboard, driven per keypress.
//!
//! Slot 0 always holds the reflector; the rightmost `num_pawls` slots hold
//! the moving rotors; everything in between is fixed. Each converted
//! symbol first advances the stack (including the historical double-step
//! anomaly), then travels plugboard → rotors right-to-left → reflector →
//! rotors left-to-right → plugboard.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// A complete rotor cipher machine.
///
/// The machine holds a catalog of immutable rotor definitions (all at
/// setting 0) and a slot assignment of clones whose settings mutate with
/// every keypress. Because slots own their rotors, two machines built from
/// the same catalog can never bleed state into each other.
///
/// A machine instance is a deterministic finite-state transducer and must
/// be exclusively owned by one message stream at a time; interleaving two
/// conversions through one instance would corrupt the stepping sequence.
///
/// # Examples
///
/// ```
/// use enigma::{Alphabet, Machine, Permutation, Rotor};
///
/// let alpha = Alphabet::new("ABCD").unwrap();
/// let catalog = vec![
///     Rotor::reflecting("R", Permutation::new("(AB) (CD)", alpha.clone()).unwrap()).unwrap(),
///     Rotor::moving("I", Permutation::new("(ABCD)", alpha.clone()).unwrap(), "D").unwrap(),
/// ];
/// let mut machine = Machine::new(alpha.clone(), 2, 1, catalog).unwrap();
/// machine.insert_rotors(&["R", "I"]).unwrap();
/// machine.set_rotors("A").unwrap();
/// machine.set_plugboard(Permutation::new("", alpha).unwrap());
/// let ciphertext = machine.convert("AB").unwrap();
/// assert_eq!(ciphertext.len(), 2);
/// ```
pub struct Machine {
    alphabet: Alphabet,
    num_slots: usize,
    num_pawls: usize,
    catalog: Vec<Rotor>,
    slots: Vec<Rotor>,
    plugboard: Option<Permutation>,
}

impl Machine {
    /// Creates a machine with `num_slots` rotor slots, `num_pawls` pawls,
    /// and the given catalog of available rotor definitions.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if `num_slots <= 1`, if
    /// `num_pawls >= num_slots`, if the catalog is empty, repeats a rotor
    /// name, or contains a rotor over a different alphabet size.
    pub fn new(
        alphabet: Alphabet,
        num_slots: usize,
        num_pawls: usize,
        catalog: Vec<Rotor>,
    ) -> Result<Self, EnigmaError> {
        if num_slots <= 1 {
            return Err(EnigmaError::Configuration(format!(
                "a machine needs more than one rotor slot, got {}",
                num_slots
            )));
        }
        if num_pawls >= num_slots {
            return Err(EnigmaError::Configuration(format!(
                "pawl count must be below the slot count, got {} pawls for {} slots",
                num_pawls, num_slots
            )));
        }
        if catalog.is_empty() {
            return Err(EnigmaError::Configuration(
                "the rotor catalog cannot be empty".to_string(),
            ));
        }
        for (i, rotor) in catalog.iter().enumerate() {
            if rotor.alphabet_size() != alphabet.size() {
                return Err(EnigmaError::Configuration(format!(
                    "rotor {} uses an alphabet of size {}, machine expects {}",
                    rotor.name(),
                    rotor.alphabet_size(),
                    alphabet.size()
                )));
            }
            if catalog[..i].iter().any(|r| r.name() == rotor.name()) {
                return Err(EnigmaError::Configuration(format!(
                    "duplicate rotor {} in catalog",
                    rotor.name()
                )));
            }
        }
        Ok(Machine {
            alphabet,
            num_slots,
            num_pawls,
            catalog,
            slots: Vec::new(),
            plugboard: None,
        })
    }

    /// Returns the number of rotor slots.
    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    /// Returns the number of pawls, and thus of rotating rotors.
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// Returns the machine's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns true if the catalog holds a rotor definition named `name`.
    pub fn has_rotor(&self, name: &str) -> bool {
        self.catalog.iter().any(|r| r.name() == name)
    }

    /// Fills the rotor slots with the catalog rotors named in `names`,
    /// where `names[0]` names the reflector. Every installed rotor starts
    /// at setting 0.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if the name count differs
    /// from the slot count, a name is unknown or repeated, `names[0]` does
    /// not name a reflector, or a moving rotor sits outside the rightmost
    /// `num_pawls` slots (and vice versa).
    pub fn insert_rotors(&mut self, names: &[&str]) -> Result<(), EnigmaError> {
        if names.len() != self.num_slots {
            return Err(EnigmaError::Configuration(format!(
                "expected {} rotor names, got {}",
                self.num_slots,
                names.len()
            )));
        }
        let mut slots: Vec<Rotor> = Vec::with_capacity(self.num_slots);
        for (i, &name) in names.iter().enumerate() {
            let rotor = self
                .catalog
                .iter()
                .find(|r| r.name() == name)
                .ok_or_else(|| {
                    EnigmaError::Configuration(format!(
                        "rotor {} is not in the catalog",
                        name
                    ))
                })?;
            if slots.iter().any(|r| r.name() == name) {
                return Err(EnigmaError::Configuration(format!(
                    "rotor {} cannot be inserted twice",
                    name
                )));
            }
            if i == 0 && !rotor.reflects() {
                return Err(EnigmaError::Configuration(format!(
                    "slot 0 needs a reflector, but rotor {} does not reflect",
                    name
                )));
            }
            if i > 0 {
                let in_pawl_window = i >= self.num_slots - self.num_pawls;
                if in_pawl_window != rotor.rotates() {
                    return Err(EnigmaError::Configuration(format!(
                        "wrong number of moving rotors: rotor {} in slot {} {}",
                        name,
                        i,
                        if rotor.rotates() {
                            "rotates but has no pawl"
                        } else {
                            "does not rotate but sits on a pawl"
                        }
                    )));
                }
            }
            // Catalog definitions are immutable and stay at setting 0, so
            // the fresh clone needs no reset.
            slots.push(rotor.clone());
        }
        self.slots = slots;
        Ok(())
    }

    /// Sets the installed rotors according to `setting`, one symbol per
    /// slot from slot 1 leftmost to the rightmost. The reflector in slot 0
    /// is never set here.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Runtime`] if no rotors are inserted, and
    /// [`EnigmaError::Setting`] if `setting` is not exactly
    /// `num_slots() - 1` symbols long or contains a symbol outside the
    /// alphabet.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), EnigmaError> {
        if self.slots.is_empty() {
            return Err(EnigmaError::Runtime(
                "no rotors have been inserted".to_string(),
            ));
        }
        let symbols: Vec<char> = setting.chars().collect();
        if symbols.len() != self.num_slots - 1 {
            return Err(EnigmaError::Setting(format!(
                "setting {:?} should be {} symbols long",
                setting,
                self.num_slots - 1
            )));
        }
        let mut offsets = Vec::with_capacity(symbols.len());
        for &ch in &symbols {
            if !self.alphabet.contains(ch) {
                return Err(EnigmaError::Setting(format!(
                    "setting symbol '{}' is not in the alphabet",
                    ch
                )));
            }
            offsets.push(self.alphabet.to_index(ch)?);
        }
        for (slot, offset) in self.slots[1..].iter_mut().zip(offsets) {
            slot.set(offset)?;
        }
        Ok(())
    }

    /// Installs the plugboard permutation applied before and after the
    /// rotor stack. Any permutation over the machine alphabet is accepted.
    pub fn set_plugboard(&mut self, plugboard: Permutation) {
        self.plugboard = Some(plugboard);
    }

    /// Advances the rotor stack one keypress.
    ///
    /// Within the pawl-bearing window, each rotor whose right neighbor is
    /// at a notch steps together with that neighbor; the rightmost rotor
    /// always steps. Per-keypress markers cap every rotor at a single step
    /// per call, which is exactly what produces the historical double-step
    /// anomaly on the following keypress.
    fn advance(&mut self) {
        let n = self.slots.len();
        let mut stepped = vec![false; n];
        let first_pawl = n - self.num_pawls;
        for i in first_pawl..n - 1 {
            if self.slots[i + 1].at_notch() {
                if !stepped[i] {
                    self.slots[i].advance();
                    stepped[i] = true;
                }
                if !stepped[i + 1] {
                    self.slots[i + 1].advance();
                    stepped[i + 1] = true;
                }
            }
        }
        if !stepped[n - 1] {
            self.slots[n - 1].advance();
        }
    }

    /// Converts the symbol index `c` after first advancing the machine.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Runtime`] if `c` is outside the alphabet
    /// range, if no rotors are inserted, or if no plugboard is installed.
    pub fn convert_index(&mut self, c: usize) -> Result<usize, EnigmaError> {
        if c >= self.alphabet.size() {
            return Err(EnigmaError::Runtime(format!(
                "input index {} is out of range for an alphabet of size {}",
                c,
                self.alphabet.size()
            )));
        }
        if self.slots.is_empty() {
            return Err(EnigmaError::Runtime(
                "no rotors have been inserted".to_string(),
            ));
        }
        if self.plugboard.is_none() {
            return Err(EnigmaError::Runtime(
                "no plugboard installed".to_string(),
            ));
        }
        self.advance();
        let plugboard = match &self.plugboard {
            Some(p) => p,
            None => {
                return Err(EnigmaError::Runtime(
                    "no plugboard installed".to_string(),
                ))
            }
        };
        let mut signal = plugboard.permute(c as i32);
        for slot in self.slots.iter().rev() {
            signal = slot.convert_forward(signal);
        }
        for slot in self.slots.iter().skip(1) {
            signal = slot.convert_backward(signal);
        }
        signal = plugboard.invert(signal);
        Ok(signal as usize)
    }

    /// Converts `msg` symbol by symbol, updating the rotor state between
    /// symbols. This is a stateful stream transform: the same input symbol
    /// at two positions generally produces different output symbols.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Runtime`] if a symbol of `msg` is outside
    /// the alphabet or the machine is incompletely configured.
    pub fn convert(&mut self, msg: &str) -> Result<String, EnigmaError> {
        let mut result = String::with_capacity(msg.len());
        for ch in msg.chars() {
            let index = self.alphabet.to_index(ch)?;
            let converted = self.convert_index(index)?;
            result.push(self.alphabet.to_char(converted)?);
        }
        Ok(result)
    }

    /// Returns each slot's current setting as a symbol, slot 0 first.
    /// Empty until rotors are inserted. Intended for debugging and
    /// progress echo.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Runtime`] only if a stored setting cannot be
    /// resolved through the alphabet, which a correctly constructed
    /// machine never produces.
    pub fn rotor_settings(&self) -> Result<String, EnigmaError> {
        let mut row = String::with_capacity(self.slots.len());
        for slot in &self.slots {
            row.push(self.alphabet.to_char(slot.setting())?);
        }
        Ok(row)
    }
}
