// Caesar shift cipher.
//
// Stateless encode/decode over an `Alphabet` and a signed integer key.
// The key is reduced with Euclidean remainder into `[0, L)` before use,
// so the transforms accept any `i32` and never index out of range. The
// UI policy that a key must be nonzero with magnitude below the alphabet
// length lives in `check_key`, not in the transforms.

use crate::alphabet::Alphabet;
use crate::error::CipherError;

/// Reject keys the cipher policy disallows: zero (an identity transform)
/// or magnitude at or above the alphabet length. Negative keys down to
/// `-(L-1)` are allowed and shift backwards.
pub fn check_key(key: i32, alphabet: &Alphabet) -> Result<(), CipherError> {
    let len = alphabet.len();
    if key == 0 || key.unsigned_abs() as usize >= len {
        return Err(CipherError::ShiftOutOfRange { key, len });
    }
    Ok(())
}

/// Shift every character of `message` forward by `key` positions,
/// wrapping around the end of the alphabet.
///
/// Fails on the first character that is not alphabet-resident. Output
/// length always equals input length.
pub fn encode(message: &str, alphabet: &Alphabet, key: i32) -> Result<String, CipherError> {
    let len = alphabet.len();
    let shift = reduce(key, len);
    let mut out = String::with_capacity(message.len());
    for ch in message.chars() {
        let mut index = alphabet.index_or_err(ch)? + shift;
        if index >= len {
            index -= len; // shift < len, so one correction suffices
        }
        out.push(alphabet.char_at(index));
    }
    Ok(out)
}

/// Inverse of [`encode`] for the same alphabet and key.
pub fn decode(message: &str, alphabet: &Alphabet, key: i32) -> Result<String, CipherError> {
    let len = alphabet.len();
    let shift = reduce(key, len);
    let mut out = String::with_capacity(message.len());
    for ch in message.chars() {
        let raw = alphabet.index_or_err(ch)?;
        let index = if raw < shift {
            raw + len - shift
        } else {
            raw - shift
        };
        out.push(alphabet.char_at(index));
    }
    Ok(out)
}

/// Reduce an arbitrary signed key to a forward shift in `[0, len)`.
fn reduce(key: i32, len: usize) -> usize {
    key.rem_euclid(len as i32) as usize
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
