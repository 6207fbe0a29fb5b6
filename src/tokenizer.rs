//! Text normalization for keyword matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is not a word char or whitespace becomes a separator
    static ref RE_PUNCT: Regex = Regex::new(r"[^a-z0-9\s_]").unwrap();
}

/// Lowercase `text`, turn punctuation into spaces and split into words.
///
/// No stemming and no stopwords: `"Vault,"` and `"vault"` both become
/// `"vault"`, but `"vaults"` stays `"vaults"`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_PUNCT
        .replace_all(&lower, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            tokenize("Vault, please! Import my API-keys."),
            vec!["vault", "please", "import", "my", "api", "keys"]
        );
    }

    #[test]
    fn test_keeps_underscores_and_digits() {
        assert_eq!(tokenize("engine_import 26 services"), vec!["engine_import", "26", "services"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
        assert!(tokenize("?!...").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        assert_eq!(tokenize("café vault"), vec!["caf", "vault"]);
    }
}
