//! Improvement suggestions derived from score, missing keywords and resume text

use crate::config::{AnalysisConfig, LanguageProfile, SuggestionTexts};
use crate::error::{JobMatcherError, Result};
use crate::processing::extractor::{Keyword, WEIGHT_PREFERRED};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub priority: SuggestionPriority,
}

pub struct SuggestionGenerator {
    texts: SuggestionTexts,
    quantifier: Regex,
    max_named_missing: usize,
}

impl SuggestionGenerator {
    pub fn new(profile: &LanguageProfile, analysis: &AnalysisConfig) -> Result<Self> {
        let quantifier = Regex::new(&profile.quantifier_pattern).map_err(|e| {
            JobMatcherError::Configuration(format!("Invalid quantifier pattern: {}", e))
        })?;

        Ok(Self {
            texts: profile.suggestions.clone(),
            quantifier,
            max_named_missing: analysis.max_named_missing,
        })
    }

    /// Ordered suggestions: score-banded advice, then the most important
    /// missing terms, then a nudge towards quantified achievements. Steps
    /// whose condition does not hold are omitted.
    pub fn generate(&self, missing: &[Keyword], score: u8, resume_text: &str) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if let Some(banded) = self.score_band(score) {
            suggestions.push(banded);
        }

        if let Some(important) = self.important_missing(missing) {
            suggestions.push(important);
        }

        if !self.quantifier.is_match(&resume_text.to_lowercase()) {
            suggestions.push(Suggestion {
                text: self.texts.add_quantified_results.clone(),
                priority: SuggestionPriority::Medium,
            });
        }

        suggestions
    }

    fn score_band(&self, score: u8) -> Option<Suggestion> {
        let (text, priority) = match score {
            0..=29 => (&self.texts.barely_matching, SuggestionPriority::High),
            30..=49 => (&self.texts.add_missing_keywords, SuggestionPriority::High),
            50..=69 => (&self.texts.good_base, SuggestionPriority::Medium),
            70..=89 => (&self.texts.fine_tuning, SuggestionPriority::Low),
            _ => return None,
        };
        Some(Suggestion {
            text: text.clone(),
            priority,
        })
    }

    /// Names up to `max_named_missing` highest-weight missing terms, provided
    /// at least one of them is preferred or required.
    fn important_missing(&self, missing: &[Keyword]) -> Option<Suggestion> {
        let mut important: Vec<&Keyword> = missing
            .iter()
            .filter(|k| k.weight >= WEIGHT_PREFERRED)
            .collect();
        if important.is_empty() {
            return None;
        }

        important.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.term.cmp(&b.term)));
        let named: Vec<String> = important
            .iter()
            .take(self.max_named_missing)
            .map(|k| format!("\"{}\"", k.term))
            .collect();

        Some(Suggestion {
            text: format!("{}: {}", self.texts.important_missing_prefix, named.join(", ")),
            priority: SuggestionPriority::High,
        })
    }
}
