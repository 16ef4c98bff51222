//! Skill-gap classification of missing keywords

use crate::config::LanguageProfile;
use crate::error::{JobMatcherError, Result};
use crate::processing::extractor::Keyword;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub category: String,
    pub items: Vec<String>,
    pub priority: GapPriority,
}

/// Ordered category rule; a missing term lands in the first category whose
/// pattern matches, so technical takes precedence over soft skills.
struct CategoryRule {
    label: String,
    pattern: Regex,
    priority: GapPriority,
}

pub struct GapClassifier {
    rules: Vec<CategoryRule>,
}

impl GapClassifier {
    pub fn new(profile: &LanguageProfile) -> Result<Self> {
        let compile = |source: &str, label: &str| {
            Regex::new(source).map_err(|e| {
                JobMatcherError::Configuration(format!("Invalid {} pattern: {}", label, e))
            })
        };

        Ok(Self {
            rules: vec![
                CategoryRule {
                    label: profile.technical_gap_label.clone(),
                    pattern: compile(&profile.technical_gap_pattern, "technical gap")?,
                    priority: GapPriority::High,
                },
                CategoryRule {
                    label: profile.soft_skill_gap_label.clone(),
                    pattern: compile(&profile.soft_skill_gap_pattern, "soft-skill gap")?,
                    priority: GapPriority::Medium,
                },
            ],
        })
    }

    /// Group missing terms into prioritized gap categories. Terms matching
    /// no category are omitted; they still count toward the score.
    pub fn classify(&self, missing: &[Keyword]) -> Vec<SkillGap> {
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); self.rules.len()];

        for keyword in missing {
            if let Some(index) = self
                .rules
                .iter()
                .position(|rule| rule.pattern.is_match(&keyword.term))
            {
                buckets[index].push(keyword.term.clone());
            }
        }

        self.rules
            .iter()
            .zip(buckets)
            .filter(|(_, items)| !items.is_empty())
            .map(|(rule, items)| SkillGap {
                category: rule.label.clone(),
                items,
                priority: rule.priority,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn keyword(term: &str, weight: u8) -> Keyword {
        Keyword {
            term: term.to_string(),
            weight,
            count: 1,
        }
    }

    fn classifier() -> GapClassifier {
        GapClassifier::new(&Config::default().language).unwrap()
    }

    #[test]
    fn test_technical_and_soft_gaps() {
        let gaps = classifier().classify(&[
            keyword("javascript", 3),
            keyword("kommunikation", 2),
        ]);

        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].category, "Technische Skills");
        assert_eq!(gaps[0].priority, GapPriority::High);
        assert_eq!(gaps[0].items, vec!["javascript"]);
        assert_eq!(gaps[1].category, "Soft Skills");
        assert_eq!(gaps[1].priority, GapPriority::Medium);
        assert_eq!(gaps[1].items, vec!["kommunikation"]);
    }

    #[test]
    fn test_unclassified_terms_omitted() {
        let gaps = classifier().classify(&[keyword("buchhaltung", 2)]);
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_technical_takes_precedence() {
        // "agile" matches the technical pattern; "agiles team" style terms
        // could also hit the soft-skill "team" alternation. One gap only.
        let gaps = classifier().classify(&[keyword("agile teamkultur", 2)]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].category, "Technische Skills");
    }

    #[test]
    fn test_empty_missing_set() {
        assert!(classifier().classify(&[]).is_empty());
    }
}
