//! Cifra: classical substitution ciphers over pluggable alphabets.
//!
//! The crate provides:
//! - Two process-wide alphabet constants (`alphabet::LATIN`, `alphabet::SPANISH`)
//! - Diacritic folding and upper-casing for natural-language input (`normalize`)
//! - Caesar shift encoding/decoding (`caesar`)
//! - Vigenère encoding/decoding with cyclic key reconciliation (`vigenere`)
//! - An optional CLI (`cli` feature)
//!
//! These are teaching ciphers. They offer no resistance to cryptanalysis
//! and must never be used to protect real data.
//!
//! # Quick Start
//!
//! ```
//! use cifra::alphabet::LATIN;
//! use cifra::{caesar, normalize, vigenere};
//!
//! let message = normalize::normalize("Hello");
//! assert!(LATIN.is_valid_text(&message));
//!
//! let shifted = caesar::encode(&message, &LATIN, 3).unwrap();
//! assert_eq!(shifted, "KHOOR");
//! assert_eq!(caesar::decode(&shifted, &LATIN, 3).unwrap(), "HELLO");
//!
//! let encoded = vigenere::encode(&message, &LATIN, "KEY").unwrap();
//! assert_eq!(vigenere::decode(&encoded, &LATIN, "KEY").unwrap(), "HELLO");
//! ```

pub mod alphabet;
pub mod caesar;
pub mod error;
pub mod normalize;
pub mod vigenere;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::CipherError;
