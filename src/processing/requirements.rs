//! Sentence-level requirement analysis of job postings
//!
//! Complements the keyword pipeline with a coarser view: which sentences of
//! the posting carry requirements, how important they are, and whether they
//! are hard constraints.

use crate::config::AnalysisConfig;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Experience,
    Education,
    Language,
    Technical,
    Leadership,
    SoftSkill,
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub text: String,
    pub importance: f32,
    pub category: RequirementCategory,
    pub is_hard: bool,
}

const HARD_CUES: &[&str] = &[
    "müssen",
    "erforderlich",
    "voraussetzung",
    "mindestens",
    "zwingend",
    "unbedingt",
    "notwendig",
    "erwarten",
    "setzen voraus",
];

const SOFT_CUES: &[&str] = &[
    "sollten",
    "wünschenswert",
    "vorteilhaft",
    "idealerweise",
    "bevorzugt",
    "erwünscht",
    "von vorteil",
];

const TASK_CUES: &[&str] = &[
    "aufgaben",
    "verantwortlich",
    "zuständig",
    "entwickeln",
    "führen",
    "betreuen",
    "koordinieren",
    "analysieren",
    "optimieren",
    "implementieren",
];

pub struct RequirementAnalyzer {
    min_sentence_chars: usize,
    min_importance: f32,
}

impl RequirementAnalyzer {
    pub fn new(analysis: &AnalysisConfig) -> Self {
        Self {
            min_sentence_chars: analysis.min_sentence_chars,
            min_importance: analysis.min_requirement_importance,
        }
    }

    /// Split the posting into sentences, keep those that read like
    /// requirements, sorted by importance descending.
    pub fn analyze(&self, job_text: &str) -> Vec<Requirement> {
        let mut requirements: Vec<Requirement> = job_text
            .unicode_sentences()
            .map(str::trim)
            .filter(|sentence| sentence.chars().count() >= self.min_sentence_chars)
            .filter_map(|sentence| {
                let importance = Self::importance(sentence);
                if importance > self.min_importance {
                    Some(Requirement {
                        text: sentence.to_string(),
                        importance,
                        category: Self::categorize(sentence),
                        is_hard: Self::is_hard(sentence),
                    })
                } else {
                    None
                }
            })
            .collect();

        requirements.sort_by(|a, b| {
            b.importance
                .partial_cmp(&a.importance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        requirements
    }

    fn importance(sentence: &str) -> f32 {
        let lower = sentence.to_lowercase();
        let mut score: f32 = 0.5;

        score += 0.3 * HARD_CUES.iter().filter(|cue| lower.contains(*cue)).count() as f32;
        score += 0.2 * SOFT_CUES.iter().filter(|cue| lower.contains(*cue)).count() as f32;
        score += 0.15 * TASK_CUES.iter().filter(|cue| lower.contains(*cue)).count() as f32;

        if Self::contains_year_count(&lower) {
            score += 0.2;
        }
        if ["bachelor", "master", "diplom", "studium"]
            .iter()
            .any(|cue| lower.contains(cue))
        {
            score += 0.25;
        }
        if ["zertifik", "qualifikation"]
            .iter()
            .any(|cue| lower.contains(cue))
        {
            score += 0.2;
        }

        score.min(1.0)
    }

    /// "3 Jahre", "5+ jahre" and similar experience spans.
    fn contains_year_count(lower: &str) -> bool {
        let mut rest = lower;
        while let Some(pos) = rest.find("jahr") {
            let prefix = &rest[..pos];
            let has_digit = prefix
                .trim_end_matches(|c: char| c.is_whitespace() || c == '+')
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit());
            if has_digit {
                return true;
            }
            rest = &rest[pos + "jahr".len()..];
        }
        false
    }

    fn categorize(sentence: &str) -> RequirementCategory {
        let lower = sentence.to_lowercase();
        let any = |cues: &[&str]| cues.iter().any(|cue| lower.contains(cue));

        if any(&["erfahrung", "praxis", "kenntnis"]) {
            RequirementCategory::Experience
        } else if any(&["studium", "abschluss", "bachelor", "master"]) {
            RequirementCategory::Education
        } else if any(&["sprach", "englisch", "deutsch"]) {
            RequirementCategory::Language
        } else if any(&["software", "tool", "system", "programm"]) {
            RequirementCategory::Technical
        } else if any(&["führung", "team", "management"]) {
            RequirementCategory::Leadership
        } else if any(&["kommunikation", "präsentation"]) {
            RequirementCategory::SoftSkill
        } else {
            RequirementCategory::General
        }
    }

    fn is_hard(sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        [
            "zwingend",
            "müssen",
            "erforderlich",
            "voraussetzung",
            "unbedingt",
            "notwendig",
            "mindestens",
        ]
        .iter()
        .any(|cue| lower.contains(cue))
    }
}
