// Text normalization: accent folding + upper-casing.
//
// Folds exactly the five acute-accented vowels (both cases) to their bare
// equivalents, then upper-cases. Anything else — 'Ü', punctuation, digits,
// whitespace — passes through unchanged and is left for the alphabet
// validator to reject. The function is pure and idempotent.

/// Fold `á/Á → A`, `é/É → E`, `í/Í → I`, `ó/Ó → O`, `ú/Ú → U` and
/// upper-case the rest.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(|ch| fold_accent(ch).to_uppercase())
        .collect()
}

fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'Á' => 'A',
        'é' | 'É' => 'E',
        'í' | 'Í' => 'I',
        'ó' | 'Ó' => 'O',
        'ú' | 'Ú' => 'U',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
