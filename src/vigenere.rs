// Vigenère cipher.
//
// Stateless encode/decode over an `Alphabet` and a key string, plus the
// key-reconciliation helper that stretches a short key to message length.
// Each message position is shifted by the index of the corresponding key
// character, so the cipher is a sequence of per-position Caesar shifts.

use crate::alphabet::Alphabet;
use crate::error::CipherError;

/// Stretch `key` to `message_len` characters by cycling it.
///
/// The extension reads the original key, never the growing buffer:
/// `extended[i] = key[i % key_len]`. A key already at least as long as the
/// message is returned unchanged; trailing key material is simply never
/// consulted by the transforms.
pub fn reconcile_key(key: &str, message_len: usize) -> String {
    if key.chars().count() >= message_len {
        return key.to_owned();
    }
    key.chars().cycle().take(message_len).collect()
}

/// Shift each message character forward by the index of the matching
/// reconciled-key character.
///
/// Fails on an empty key or on the first character (of either message or
/// key) that is not alphabet-resident.
pub fn encode(message: &str, alphabet: &Alphabet, key: &str) -> Result<String, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyText);
    }
    let len = alphabet.len();
    let reconciled = reconcile_key(key, message.chars().count());
    let mut out = String::with_capacity(message.len());
    for (m, k) in message.chars().zip(reconciled.chars()) {
        let m_i = alphabet.index_or_err(m)?;
        let k_i = alphabet.index_or_err(k)?;
        out.push(alphabet.char_at((m_i + k_i) % len));
    }
    Ok(out)
}

/// Inverse of [`encode`] for the same alphabet and key.
pub fn decode(message: &str, alphabet: &Alphabet, key: &str) -> Result<String, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyText);
    }
    let len = alphabet.len();
    let reconciled = reconcile_key(key, message.chars().count());
    let mut out = String::with_capacity(message.len());
    for (m, k) in message.chars().zip(reconciled.chars()) {
        let m_i = alphabet.index_or_err(m)?;
        let k_i = alphabet.index_or_err(k)?;
        let index = if m_i < k_i {
            m_i + len - k_i // both in [0, len), one correction suffices
        } else {
            m_i - k_i
        };
        out.push(alphabet.char_at(index));
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
