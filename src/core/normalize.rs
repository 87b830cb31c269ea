//! Name normalization. All identity/matching decisions in the crate go
//! through `normalize_key`; raw strings are never compared directly.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collapses whitespace runs to single spaces and trims the ends. Case and
/// punctuation are preserved; this is the form stored and shown to users.
pub fn normalize_display(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical comparison key: accent-folded (NFD, combining marks dropped),
/// every non-alphanumeric character mapped to a space, lower-cased,
/// whitespace collapsed. Idempotent. Two names denote the same food/menu
/// iff their keys are equal.
pub fn normalize_key(raw: &str) -> String {
    let folded: String = raw.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut mapped = String::with_capacity(folded.len());
    for c in folded.chars() {
        if c.is_alphanumeric() {
            mapped.extend(c.to_lowercase());
        } else {
            mapped.push(' ');
        }
    }

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_collapses_whitespace_preserves_case() {
        assert_eq!(normalize_display("  Pasta   spaguetti "), "Pasta spaguetti");
        assert_eq!(normalize_display("Limón"), "Limón");
        assert_eq!(normalize_display("   "), "");
    }

    #[test]
    fn test_key_folds_accents_and_case() {
        assert_eq!(normalize_key("  Pimentón  "), normalize_key("pimenton"));
        assert_eq!(normalize_key("LIMÓN"), "limon");
        assert_eq!(normalize_key("Piña ORO MIEL PORCIÓN"), "pina oro miel porcion");
    }

    #[test]
    fn test_key_strips_punctuation_and_quotes() {
        assert_eq!(
            normalize_key("Banano común, maduro"),
            normalize_key("Banano comun maduro")
        );
        assert_eq!(normalize_key("Aceite, de soya"), "aceite de soya");
        assert_eq!(normalize_key("queso \u{201c}doble\u{201d} crema"), "queso doble crema");
        assert_eq!(normalize_key("pera 'porcion'"), "pera porcion");
    }

    #[test]
    fn test_key_is_idempotent() {
        let samples = [
            "  Pimentón  ",
            "Arveja verde c/cáscara",
            "Crema de leche x 125 gr",
            "ñandú, asado",
            "",
            "   ",
            "1234",
        ];
        for s in samples {
            let once = normalize_key(s);
            assert_eq!(normalize_key(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_blank_input_normalizes_to_empty() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key(" \t \n"), "");
        assert_eq!(normalize_key("--- ,,, ---"), "");
    }
}
