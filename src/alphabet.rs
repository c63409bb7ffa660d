// Alphabet definitions and the membership/validation gate.
//
// An alphabet is an ordered, duplicate-free run of symbols; its length is
// the modulus for all cipher index arithmetic. Two fixed instances are
// provided: the 26-letter Latin alphabet and the 27-letter Spanish one,
// which inserts 'Ñ' between 'N' and 'O'. Both are immutable process-wide
// constants and safe to share from any number of threads.

use crate::error::CipherError;

// ---------------------------------------------------------------------------
// Fixed instances
// ---------------------------------------------------------------------------

/// The 26-symbol Latin alphabet, A through Z.
pub const LATIN: Alphabet = Alphabet::new("latin", "ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// The 27-symbol Spanish alphabet: Latin plus 'Ñ' immediately after 'N'.
pub const SPANISH: Alphabet = Alphabet::new("spanish", "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ");

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// An ordered, finite, duplicate-free sequence of symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    symbols: &'static str,
}

impl Alphabet {
    /// Build an alphabet from an ordered symbol run.
    ///
    /// `symbols` must be non-empty and free of duplicates; the fixed
    /// instances are verified against this invariant in unit tests.
    pub const fn new(name: &'static str, symbols: &'static str) -> Self {
        Self { name, symbols }
    }

    /// Short name used in diagnostics ("latin", "spanish").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of symbols — the modulus for all shift arithmetic.
    pub fn len(&self) -> usize {
        self.symbols.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Membership test for a single character.
    pub fn contains(&self, ch: char) -> bool {
        self.symbols.contains(ch)
    }

    /// Zero-based position of `ch`, or `None` if it is not a member.
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.symbols.chars().position(|s| s == ch)
    }

    /// Symbol at `index`, reduced modulo the alphabet length, so callers
    /// doing wraparound arithmetic never index out of range.
    pub fn char_at(&self, index: usize) -> char {
        let reduced = index % self.len();
        // position is in range after the reduction
        self.symbols.chars().nth(reduced).unwrap_or('\0')
    }

    /// Position of `ch` or a `ForeignChar` error naming this alphabet.
    pub(crate) fn index_or_err(&self, ch: char) -> Result<usize, CipherError> {
        self.index_of(ch).ok_or(CipherError::ForeignChar {
            ch,
            alphabet: self.name,
        })
    }

    // -----------------------------------------------------------------------
    // Validation gate
    // -----------------------------------------------------------------------

    /// The sole gate between untrusted text and the transforms: `true` iff
    /// `text` is non-empty and every character is a member.
    pub fn is_valid_text(&self, text: &str) -> bool {
        self.check_text(text).is_ok()
    }

    /// Same gate, reporting which character (if any) is foreign.
    pub fn check_text(&self, text: &str) -> Result<(), CipherError> {
        if text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        for ch in text.chars() {
            if !self.contains(ch) {
                return Err(CipherError::ForeignChar {
                    ch,
                    alphabet: self.name,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
