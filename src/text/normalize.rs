use icu_normalizer::{ComposingNormalizerBorrowed, DecomposingNormalizerBorrowed};

/// Arabic-script harakat and related combining marks (U+064B..=U+065F).
fn is_diacritic(ch: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&ch)
}

/// Latin and Urdu punctuation ignored when matching words.
fn is_ignored_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '.' | ',' | '!' | '?' | '؟' | '،' | '؛' | '۔' | ':' | '"' | '“' | '”' | '\'' | '(' | ')'
            | '[' | ']' | '{' | '}'
    )
}

/// Canonical matching key for a surface token.
///
/// Input is decomposed to NFD so marks folded into precomposed letters
/// (hamza above in أ, ۂ, ؤ, ئ) are exposed, diacritics and punctuation are
/// dropped, and the rest is recomposed to NFC and trimmed.
pub fn normalize(token: &str) -> String {
    let decomposed = DecomposingNormalizerBorrowed::new_nfd().normalize(token);
    let stripped: String = decomposed
        .chars()
        .filter(|&ch| !is_diacritic(ch) && !is_ignored_punctuation(ch))
        .collect();
    ComposingNormalizerBorrowed::new_nfc()
        .normalize(&stripped)
        .trim()
        .to_string()
}

/// Split on runs of whitespace. Separators are not kept.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
