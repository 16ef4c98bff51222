//! Text normalization and tokenization

use crate::config::{AnalysisConfig, LanguageProfile};
use std::collections::HashSet;

/// Turns raw text into a clean lowercase token stream. Punctuation is
/// stripped, hyphenated compounds survive.
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    min_token_chars: usize,
}

impl TextNormalizer {
    pub fn new(profile: &LanguageProfile, analysis: &AnalysisConfig) -> Self {
        Self {
            stop_words: profile.stop_words.iter().cloned().collect(),
            min_token_chars: analysis.min_token_chars,
        }
    }

    /// Normalize text into tokens: lowercase, keep only letters, digits,
    /// whitespace and hyphens, split on whitespace, drop short tokens,
    /// stop words and pure-digit tokens.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.scrub(text)
            .split_whitespace()
            .filter(|token| self.keep(token))
            .map(|token| token.to_string())
            .collect()
    }

    /// Lowercase and replace every character outside the working character
    /// class with a space.
    pub fn scrub(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() || c == '-' {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_chars
            && !self.stop_words.contains(token)
            && !token.chars().all(|c| c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn normalizer() -> TextNormalizer {
        let config = Config::default();
        TextNormalizer::new(&config.language, &config.analysis)
    }

    #[test]
    fn test_lowercase_and_punctuation() {
        let tokens = normalizer().normalize("Erforderlich: Python, SQL!");
        assert_eq!(tokens, vec!["erforderlich", "python", "sql"]);
    }

    #[test]
    fn test_hyphenated_compounds_survive() {
        let tokens = normalizer().normalize("Software-Entwicklung im Web-Umfeld");
        assert!(tokens.contains(&"software-entwicklung".to_string()));
        assert!(tokens.contains(&"web-umfeld".to_string()));
    }

    #[test]
    fn test_stop_words_and_digits_dropped() {
        let tokens = normalizer().normalize("123 und der die das 456 java");
        assert_eq!(tokens, vec!["java"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let tokens = normalizer().normalize("ab c# java");
        assert_eq!(tokens, vec!["java"]);
    }

    #[test]
    fn test_umlauts_preserved() {
        let tokens = normalizer().normalize("Teamführung & Qualitätssicherung");
        assert_eq!(tokens, vec!["teamführung", "qualitätssicherung"]);
    }
}
