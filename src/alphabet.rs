//! Alphabet: bijection between a set of unique symbols and indices.
//!
//! Every other component works on integer indices in `[0, size)`; the
//! alphabet is the only place where symbols and indices meet. The three
//! characters `*`, `(` and `)` are reserved as structural delimiters of
//! the cycle notation and may never appear in an alphabet.

use crate::error::EnigmaError;

/// Characters reserved as structural delimiters of the cycle notation.
const RESERVED: [char; 3] = ['*', '(', ')'];

/// An ordered set of unique symbols with a fixed bijection to `[0, size)`.
///
/// # Examples
///
/// ```
/// use enigma::Alphabet;
///
/// let alpha = Alphabet::new("ABCD").unwrap();
/// assert_eq!(alpha.size(), 4);
/// assert_eq!(alpha.to_index('C').unwrap(), 2);
/// assert_eq!(alpha.to_char(2).unwrap(), 'C');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from the given symbols. Symbol number `k` has
    /// index `k`, numbering from 0.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if `chars` is empty, contains
    /// one of the reserved delimiters `*`, `(`, `)`, or repeats a symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// assert!(Alphabet::new("ABC").is_ok());
    /// assert!(Alphabet::new("AB(").is_err());
    /// assert!(Alphabet::new("ABA").is_err());
    /// ```
    pub fn new(chars: &str) -> Result<Self, EnigmaError> {
        if chars.is_empty() {
            return Err(EnigmaError::Configuration(
                "an alphabet must contain at least one symbol".to_string(),
            ));
        }
        let mut letters: Vec<char> = Vec::new();
        for c in chars.chars() {
            if RESERVED.contains(&c) {
                return Err(EnigmaError::Configuration(format!(
                    "symbol '{}' is reserved and cannot appear in an alphabet",
                    c
                )));
            }
            if letters.contains(&c) {
                return Err(EnigmaError::Configuration(format!(
                    "duplicate symbol '{}' in alphabet",
                    c
                )));
            }
            letters.push(c);
        }
        Ok(Alphabet { chars: letters })
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if `ch` is in this alphabet.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Returns the index of `ch`. This is the inverse of
    /// [`to_char`](Self::to_char).
    ///
    /// # Errors
    /// Returns [`EnigmaError::Runtime`] if `ch` is not in the alphabet.
    pub fn to_index(&self, ch: char) -> Result<usize, EnigmaError> {
        self.chars.iter().position(|&c| c == ch).ok_or_else(|| {
            EnigmaError::Runtime(format!("symbol '{}' is not in the alphabet", ch))
        })
    }

    /// Returns symbol number `index`, where `0 <= index < size()`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Runtime`] if `index` is out of range.
    pub fn to_char(&self, index: usize) -> Result<char, EnigmaError> {
        self.chars.get(index).copied().ok_or_else(|| {
            EnigmaError::Runtime(format!(
                "index {} is out of bounds for an alphabet of size {}",
                index,
                self.size()
            ))
        })
    }
}

impl Default for Alphabet {
    /// The standard upper-case alphabet A through Z.
    fn default() -> Self {
        Alphabet {
            chars: ('A'..='Z').collect(),
        }
    }
}
