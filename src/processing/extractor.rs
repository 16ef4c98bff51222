//! Weighted keyword extraction from job-description text
//!
//! Two passes: single tokens weighted by requirement cues in their context
//! window, then fixed multi-word compound phrases that naive tokenization
//! would otherwise split apart.

use crate::config::{AnalysisConfig, LanguageProfile};
use crate::error::{JobMatcherError, Result};
use crate::processing::normalizer::TextNormalizer;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const WEIGHT_REQUIRED: u8 = 3;
pub const WEIGHT_PREFERRED: u8 = 2;
pub const WEIGHT_NICE: u8 = 1;

/// A candidate keyword extracted from job-description text. `weight`
/// reflects the strongest requirement cue seen near any occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: u8,
    pub count: usize,
}

/// Ordered cue rule: if the context contains any of the cue phrases, the
/// keyword gets at least this weight. Rules are evaluated in priority
/// order, first match wins.
struct CueRule {
    cues: Vec<String>,
    weight: u8,
}

pub struct KeywordExtractor {
    normalizer: TextNormalizer,
    cue_rules: Vec<CueRule>,
    exclusions: HashSet<String>,
    compounds: Vec<Regex>,
    window: usize,
    min_occurrences: usize,
}

impl KeywordExtractor {
    pub fn new(profile: &LanguageProfile, analysis: &AnalysisConfig) -> Result<Self> {
        let compounds = profile
            .compound_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    JobMatcherError::Configuration(format!(
                        "Invalid compound pattern '{}': {}",
                        pattern, e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cue_rules = vec![
            CueRule {
                cues: profile.required_cues.clone(),
                weight: WEIGHT_REQUIRED,
            },
            CueRule {
                cues: profile.preferred_cues.clone(),
                weight: WEIGHT_PREFERRED,
            },
        ];

        Ok(Self {
            normalizer: TextNormalizer::new(profile, analysis),
            cue_rules,
            exclusions: profile.candidate_exclusions.iter().cloned().collect(),
            compounds,
            window: analysis.context_window,
            min_occurrences: analysis.min_occurrences,
        })
    }

    /// Extract the deduplicated, weighted candidate keyword set. The result
    /// is sorted by weight descending, then term, so output is deterministic.
    pub fn extract(&self, job_text: &str) -> Vec<Keyword> {
        let tokens = self.normalizer.normalize(job_text);
        let mut candidates: HashMap<String, (u8, usize)> = HashMap::new();

        for (i, token) in tokens.iter().enumerate() {
            if self.exclusions.contains(token) {
                continue;
            }

            let weight = self.context_weight(&tokens, i);

            let entry = candidates.entry(token.clone()).or_insert((weight, 0));
            entry.0 = entry.0.max(weight);
            entry.1 += 1;
        }

        // Single low-signal mentions are noise.
        candidates.retain(|_, (weight, count)| {
            *count >= self.min_occurrences || *weight >= WEIGHT_PREFERRED
        });

        self.merge_compounds(job_text, &mut candidates);

        let mut keywords: Vec<Keyword> = candidates
            .into_iter()
            .map(|(term, (weight, count))| Keyword {
                term,
                weight,
                count,
            })
            .collect();
        keywords.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.term.cmp(&b.term)));
        keywords
    }

    /// Strongest requirement cue in the ±window tokens around index `i`.
    fn context_weight(&self, tokens: &[String], i: usize) -> u8 {
        let start = i.saturating_sub(self.window);
        let end = (i + self.window).min(tokens.len());
        let context = tokens[start..end].join(" ");

        for rule in &self.cue_rules {
            if rule.cues.iter().any(|cue| context.contains(cue.as_str())) {
                return rule.weight;
            }
        }
        WEIGHT_NICE
    }

    /// Scan the raw lowercase text for compound phrases and fold them into
    /// the candidate map. A compound never lowers the weight of an entry a
    /// cue already promoted.
    fn merge_compounds(&self, job_text: &str, candidates: &mut HashMap<String, (u8, usize)>) {
        let text = job_text.to_lowercase();

        for pattern in &self.compounds {
            let mut occurrences = 0;
            let mut term = None;
            for m in pattern.find_iter(&text) {
                occurrences += 1;
                if term.is_none() {
                    term = Some(Self::clean_compound(m.as_str()));
                }
            }

            if let Some(term) = term {
                let entry = candidates.entry(term).or_insert((WEIGHT_PREFERRED, 0));
                entry.0 = entry.0.max(WEIGHT_PREFERRED);
                entry.1 = occurrences;
            }
        }
    }

    fn clean_compound(matched: &str) -> String {
        matched
            .chars()
            .filter(|c| c.is_alphabetic() || c.is_whitespace() || *c == '-')
            .collect::<String>()
            .trim()
            .to_string()
    }
}
