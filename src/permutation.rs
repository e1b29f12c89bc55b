//! Permutation: a total bijective remapping of an alphabet's index space.
//!
//! Built from cycle notation: a specification like `(AELTPHQXRU) (BKNW)`
//! where each parenthesized group `(s0 s1 ... sm)` maps `s0→s1→...→sm→s0`.
//! Symbols absent from every cycle are fixed points. Disjoint cycles plus
//! fixed points guarantee a true bijection by construction.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;

/// A bijective mapping over an alphabet's index space, expressed via
/// disjoint cycles.
///
/// Forward and inverse lookup tables are precomputed at construction, so
/// [`permute`](Self::permute) and [`invert`](Self::invert) are O(1). Both
/// wrap their input modulo the alphabet size before lookup, which lets
/// un-normalized arithmetic from rotor offset computations drive them
/// directly.
///
/// # Examples
///
/// ```
/// use enigma::{Alphabet, Permutation};
///
/// let alpha = Alphabet::new("ABCD").unwrap();
/// let perm = Permutation::new("(BACD)", alpha).unwrap();
/// assert_eq!(perm.permute(0), 2); // A -> C
/// assert_eq!(perm.invert(2), 0);  // C <- A
/// assert_eq!(perm.permute(-1), 1); // wraps: index 3 is D -> B
/// ```
#[derive(Debug, Clone)]
pub struct Permutation {
    alphabet: Alphabet,
    forward: Vec<usize>,
    inverse: Vec<usize>,
    derangement: bool,
}

impl Permutation {
    /// Builds a permutation of `alphabet` from `cycles`, a string in the
    /// form `(cccc) (cc) ...`. Symbols not included in any cycle map to
    /// themselves. Whitespace between groups is ignored.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Permutation`] if the cycle syntax is
    /// malformed (unbalanced or empty groups, stray characters, a
    /// delimiter or whitespace inside a group), if a cycle references a
    /// symbol outside `alphabet`, or if any symbol appears more than once
    /// across all groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation};
    ///
    /// let alpha = Alphabet::new("ABCD").unwrap();
    /// assert!(Permutation::new("(AB) (CD)", alpha.clone()).is_ok());
    /// assert!(Permutation::new("(AB", alpha.clone()).is_err());
    /// assert!(Permutation::new("(AB) (BC)", alpha).is_err());
    /// ```
    pub fn new(cycles: &str, alphabet: Alphabet) -> Result<Self, EnigmaError> {
        let groups = Self::parse_groups(cycles)?;

        let size = alphabet.size();
        let mut forward: Vec<Option<usize>> = vec![None; size];
        for group in &groups {
            let mut indices = Vec::with_capacity(group.len());
            for &ch in group {
                let index = match alphabet.to_index(ch) {
                    Ok(i) => i,
                    Err(_) => {
                        return Err(EnigmaError::Permutation(format!(
                            "cycle symbol '{}' is not in the alphabet",
                            ch
                        )))
                    }
                };
                indices.push(index);
            }
            for (k, &from) in indices.iter().enumerate() {
                if forward[from].is_some() {
                    return Err(EnigmaError::Permutation(format!(
                        "duplicate symbol '{}' in cycles",
                        group[k]
                    )));
                }
                let to = indices[(k + 1) % indices.len()];
                forward[from] = Some(to);
            }
        }

        // Symbols absent from every cycle are fixed points; their presence
        // disqualifies the permutation as a derangement.
        let mut full_coverage = true;
        let forward: Vec<usize> = forward
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.unwrap_or_else(|| {
                    full_coverage = false;
                    i
                })
            })
            .collect();

        // A singleton cycle like "(A)" also leaves a fixed point.
        let derangement = full_coverage && forward.iter().enumerate().all(|(i, &j)| i != j);

        let mut inverse = vec![0usize; size];
        for (i, &j) in forward.iter().enumerate() {
            inverse[j] = i;
        }

        Ok(Permutation {
            alphabet,
            forward,
            inverse,
            derangement,
        })
    }

    /// Splits the cycle specification into groups of symbols.
    fn parse_groups(cycles: &str) -> Result<Vec<Vec<char>>, EnigmaError> {
        let malformed = |detail: &str| {
            EnigmaError::Permutation(format!(
                "cycles {:?} are malformed: {}",
                cycles, detail
            ))
        };
        let mut groups: Vec<Vec<char>> = Vec::new();
        let mut current: Vec<char> = Vec::new();
        let mut in_group = false;
        for c in cycles.chars() {
            if in_group {
                match c {
                    ')' => {
                        if current.is_empty() {
                            return Err(malformed("a cycle group cannot be empty"));
                        }
                        groups.push(std::mem::take(&mut current));
                        in_group = false;
                    }
                    '(' | '*' => {
                        return Err(malformed("delimiters cannot appear inside a group"));
                    }
                    c if c.is_whitespace() => {
                        return Err(malformed("whitespace cannot appear inside a group"));
                    }
                    c => current.push(c),
                }
            } else {
                match c {
                    '(' => in_group = true,
                    c if c.is_whitespace() => {}
                    _ => {
                        return Err(malformed("symbols must appear inside parentheses"));
                    }
                }
            }
        }
        if in_group {
            return Err(malformed("unclosed cycle group"));
        }
        Ok(groups)
    }

    /// Returns the size of the alphabet this permutation acts on.
    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    /// Returns the alphabet used to build this permutation.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Reduces `p` to a valid index in `[0, size)`.
    fn wrap(&self, p: i32) -> usize {
        p.rem_euclid(self.size() as i32) as usize
    }

    /// Applies the permutation to `p` modulo the alphabet size.
    pub fn permute(&self, p: i32) -> i32 {
        self.forward[self.wrap(p)] as i32
    }

    /// Applies the inverse of the permutation to `c` modulo the alphabet
    /// size.
    pub fn invert(&self, c: i32) -> i32 {
        self.inverse[self.wrap(c)] as i32
    }

    /// Applies the permutation to the symbol `p`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Runtime`] if `p` is not in the alphabet.
    pub fn permute_char(&self, p: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.to_index(p)?;
        self.alphabet.to_char(self.forward[index])
    }

    /// Applies the inverse of the permutation to the symbol `c`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Runtime`] if `c` is not in the alphabet.
    pub fn invert_char(&self, c: char) -> Result<char, EnigmaError> {
        let index = self.alphabet.to_index(c)?;
        self.alphabet.to_char(self.inverse[index])
    }

    /// Returns true iff this permutation is a derangement: no symbol was
    /// left out of the cycles at construction and no symbol maps to
    /// itself. A singleton cycle such as `(A)` is a fixed point and
    /// disqualifies the permutation.
    pub fn is_derangement(&self) -> bool {
        self.derangement
    }
}
