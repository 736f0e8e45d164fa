// src/core/normalize.rs
//
// Search-side text folding: lowercase, then NFD and drop the combining
// diacritical marks block (U+0300..=U+036F).

use unicode_normalization::UnicodeNormalization;

pub fn normalize(s: &str) -> String {
    if s.is_empty() {
        return s!();
    }
    s.to_lowercase().nfd().filter(|c| !is_mark(*c)).collect()
}

/// Absent input folds to "".
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}

fn is_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
