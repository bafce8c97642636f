//! Question text normalization.
//!
//! Turns raw user input into the token sequence embedded in the prompt.
//! Normalization is lossy on purpose: the original question text is kept
//! alongside the tokens and rendered verbatim into the prompt.

/// Normalizes a question into lowercase alphanumeric tokens.
///
/// # Normalization rules
///
/// - Converts to lowercase
/// - Removes every character outside `[a-z0-9]` and whitespace
/// - Splits on runs of whitespace
/// - Drops empty pieces
///
/// Token order follows order of appearance in the input; duplicates are
/// kept. Every returned token consists only of `[a-z0-9]` characters.
///
/// # Examples
///
/// ```
/// use qask::normalizer::normalize;
///
/// assert_eq!(normalize("Hello, World! 123"), vec!["hello", "world", "123"]);
/// assert_eq!(normalize("What is 2+2?"), vec!["what", "is", "22"]);
/// assert!(normalize("").is_empty());
/// assert!(normalize("?!...").is_empty());
/// ```
#[must_use]
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9') || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_conversion() {
        assert_eq!(normalize("RUST"), vec!["rust"]);
        assert_eq!(normalize("RuSt Is FuN"), vec!["rust", "is", "fun"]);
    }

    #[test]
    fn punctuation_removed() {
        assert_eq!(normalize("what's up?"), vec!["whats", "up"]);
        assert_eq!(normalize("c++"), vec!["c"]);
        assert_eq!(normalize("node.js"), vec!["nodejs"]);
    }

    #[test]
    fn digits_kept_and_merged_with_letters() {
        assert_eq!(normalize("What is 2+2?"), vec!["what", "is", "22"]);
        assert_eq!(normalize("web 2.0"), vec!["web", "20"]);
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("?!@#$%").is_empty());
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize("  a\t\tb\n c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicates_and_order_preserved() {
        assert_eq!(
            normalize("the cat and the hat"),
            vec!["the", "cat", "and", "the", "hat"]
        );
    }

    #[test]
    fn non_ascii_letters_stripped() {
        // Accented characters fall outside [a-z0-9] and are dropped,
        // not transliterated.
        assert_eq!(normalize("café crème"), vec!["caf", "crme"]);
    }

    #[test]
    fn all_tokens_are_lowercase_alphanumeric() {
        let samples = [
            "Hello, World! 123",
            "What's the Capital of FRANCE?",
            "a-b_c d.e,f",
            "   mixed 42 Case\tINPUT!!!",
        ];

        for sample in samples {
            for token in normalize(sample) {
                assert!(!token.is_empty());
                assert!(
                    token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                    "token {token:?} from {sample:?} has characters outside [a-z0-9]"
                );
            }
        }
    }
}
