//! Candidate keyword matching against resume text

use crate::config::LanguageProfile;
use crate::processing::extractor::Keyword;
use crate::processing::synonyms::SynonymResolver;

/// Partition of the candidate set. Every candidate lands in exactly one of
/// the two lists.
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub found: Vec<Keyword>,
    pub missing: Vec<Keyword>,
}

pub struct Matcher {
    synonyms: SynonymResolver,
}

impl Matcher {
    pub fn new(profile: &LanguageProfile) -> Self {
        Self {
            synonyms: SynonymResolver::new(profile),
        }
    }

    /// Classify each candidate as found or missing. A term counts as found
    /// if it, or any surface form of its synonym group, appears as a
    /// substring of the lowercased resume text. Binary, no partial credit.
    pub fn partition(&self, candidates: Vec<Keyword>, resume_text: &str) -> MatchResult {
        let resume = resume_text.to_lowercase();
        let mut result = MatchResult::default();

        for keyword in candidates {
            if self.is_present(&keyword.term, &resume) {
                result.found.push(keyword);
            } else {
                result.missing.push(keyword);
            }
        }

        result
    }

    fn is_present(&self, term: &str, resume: &str) -> bool {
        if resume.contains(term) {
            return true;
        }
        match self.synonyms.surface_forms(term) {
            Some(forms) => forms.iter().any(|form| resume.contains(form)),
            None => false,
        }
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

    fn matcher() -> Matcher {
        Matcher::new(&Config::default().language)
    }

    #[test]
    fn test_direct_match_case_insensitive() {
        let result = matcher().partition(
            vec![keyword("python", 3)],
            "Langjährige PYTHON Entwicklung",
        );
        assert_eq!(result.found.len(), 1);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_synonym_match() {
        // Resume mentions AWS, the posting asks for cloud.
        let result = matcher().partition(
            vec![keyword("cloud", 2)],
            "Deployments auf AWS und eigenem Blech",
        );
        assert_eq!(result.found.len(), 1);
        assert_eq!(result.found[0].term, "cloud");
    }

    #[test]
    fn test_missing_term() {
        let result = matcher().partition(
            vec![keyword("kubernetes", 3)],
            "Backend in Java, Datenbanken, Jenkins",
        );
        assert!(result.found.is_empty());
        assert_eq!(result.missing[0].term, "kubernetes");
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let candidates = vec![
            keyword("python", 3),
            keyword("sql", 3),
            keyword("docker", 2),
        ];
        let result = matcher().partition(candidates.clone(), "Python und PostgreSQL");

        assert_eq!(result.found.len() + result.missing.len(), candidates.len());
        for keyword in &result.found {
            assert!(!result.missing.iter().any(|m| m.term == keyword.term));
        }
    }

    #[test]
    fn test_unknown_term_without_synonyms() {
        let result = matcher().partition(vec![keyword("cobol", 1)], "Java seit 2005");
        assert_eq!(result.missing.len(), 1);
    }
}
