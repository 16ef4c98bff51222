//! Match engine: wires the pipeline together
//!
//! Extraction -> matching -> scoring -> gap classification -> suggestions.
//! Strictly pipeline-shaped and synchronous; no stage calls back into an
//! earlier one, and nothing is shared between calls.

use crate::config::Config;
use crate::error::Result;
use crate::processing::extractor::{Keyword, KeywordExtractor};
use crate::processing::gaps::{GapClassifier, SkillGap};
use crate::processing::matcher::Matcher;
use crate::processing::requirements::{Requirement, RequirementAnalyzer};
use crate::processing::scorer::ScoreCalculator;
use crate::processing::suggestions::{Suggestion, SuggestionGenerator};
use serde::{Deserialize, Serialize};

/// Result of one `analyze` call. Transient; nothing persists between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Weighted match score, 0..=100.
    pub score: u8,
    pub found: Vec<Keyword>,
    pub missing: Vec<Keyword>,
    pub gaps: Vec<SkillGap>,
    pub suggestions: Vec<Suggestion>,
}

impl MatchReport {
    fn empty() -> Self {
        Self {
            score: 0,
            found: Vec::new(),
            missing: Vec::new(),
            gaps: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

pub struct MatchEngine {
    extractor: KeywordExtractor,
    matcher: Matcher,
    gap_classifier: GapClassifier,
    suggestion_generator: SuggestionGenerator,
    requirement_analyzer: RequirementAnalyzer,
    min_job_text_chars: usize,
}

impl MatchEngine {
    /// Compiles all configured patterns once; `analyze` itself is infallible.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: KeywordExtractor::new(&config.language, &config.analysis)?,
            matcher: Matcher::new(&config.language),
            gap_classifier: GapClassifier::new(&config.language)?,
            suggestion_generator: SuggestionGenerator::new(&config.language, &config.analysis)?,
            requirement_analyzer: RequirementAnalyzer::new(&config.analysis),
            min_job_text_chars: config.analysis.min_job_text_chars,
        })
    }

    /// Analyze a resume against a job posting. Pure and idempotent: identical
    /// inputs yield identical reports.
    ///
    /// Job text shorter than the configured minimum (after trimming) yields
    /// the zero report without running extraction; too little text cannot
    /// produce meaningful candidates.
    pub fn analyze(&self, job_text: &str, resume_text: &str) -> MatchReport {
        if job_text.trim().chars().count() < self.min_job_text_chars {
            log::debug!("job text below minimum length, returning zero report");
            return MatchReport::empty();
        }

        let candidates = self.extractor.extract(job_text);
        log::debug!("extracted {} candidate keywords", candidates.len());

        let match_result = self.matcher.partition(candidates, resume_text);
        let score = ScoreCalculator::score(&match_result);
        let gaps = self.gap_classifier.classify(&match_result.missing);
        let suggestions =
            self.suggestion_generator
                .generate(&match_result.missing, score, resume_text);

        log::info!(
            "match score {} ({} found, {} missing)",
            score,
            match_result.found.len(),
            match_result.missing.len()
        );

        MatchReport {
            score,
            found: match_result.found,
            missing: match_result.missing,
            gaps,
            suggestions,
        }
    }

    /// Sentence-level requirement breakdown of the posting (detailed view).
    pub fn analyze_requirements(&self, job_text: &str) -> Vec<Requirement> {
        if job_text.trim().chars().count() < self.min_job_text_chars {
            return Vec::new();
        }
        self.requirement_analyzer.analyze(job_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn engine() -> MatchEngine {
        MatchEngine::new(&Config::default()).unwrap()
    }

    const JOB: &str = "Erforderlich: Python und SQL Kenntnisse. Wünschenswert: Erfahrung mit Cloud.";
    const RESUME: &str = "Ich habe Erfahrung mit Python und AWS.";

    #[test]
    fn test_reference_scenario() {
        let report = engine().analyze(JOB, RESUME);

        let found: Vec<&str> = report.found.iter().map(|k| k.term.as_str()).collect();
        let missing: Vec<&str> = report.missing.iter().map(|k| k.term.as_str()).collect();

        assert_eq!(found, vec!["python", "cloud"]);
        assert_eq!(missing, vec!["sql"]);
        assert_eq!(report.found[0].weight, 3);
        assert_eq!(report.found[1].weight, 2);
        assert_eq!(report.missing[0].weight, 3);
        // found 5 of total 8 -> 62.5 -> 63
        assert_eq!(report.score, 63);
    }

    #[test]
    fn test_short_job_text_short_circuits() {
        let report = engine().analyze("Python gesucht.", RESUME);
        assert_eq!(report.score, 0);
        assert!(report.found.is_empty());
        assert!(report.missing.is_empty());
        assert!(report.gaps.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_stop_words_and_digits_only() {
        let job = "123 und der die das 456 der die das und oder 789 die das der und oder die";
        let report = engine().analyze(job, "Umsatz um 25 % gesteigert und 12 Projekte geleitet.");
        assert_eq!(report.score, 0);
        assert!(report.found.is_empty());
        assert!(report.missing.is_empty());
        assert!(report.gaps.is_empty());
        // only the lowest-band suggestion survives an empty candidate set
        assert_eq!(report.suggestions.len(), 1);
    }

    #[test]
    fn test_idempotence() {
        let e = engine();
        let first = e.analyze(JOB, RESUME);
        let second = e.analyze(JOB, RESUME);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_score_bounds() {
        let e = engine();
        for resume in ["", RESUME, "python sql cloud aws docker alles"] {
            let report = e.analyze(JOB, resume);
            assert!(report.score <= 100);
        }
    }

    #[test]
    fn test_partition_completeness() {
        let report = engine().analyze(JOB, RESUME);
        let total = report.found.len() + report.missing.len();
        assert_eq!(total, 3);
        for keyword in &report.found {
            assert!(!report.missing.iter().any(|m| m.term == keyword.term));
        }
    }

    #[test]
    fn test_adding_missing_term_raises_score() {
        let e = engine();
        let before = e.analyze(JOB, RESUME);
        let extended = format!("{} SQL", RESUME);
        let after = e.analyze(JOB, &extended);
        assert!(after.score >= before.score);
        assert_eq!(after.score, 100);
    }

    #[test]
    fn test_gap_classification_in_report() {
        let job = "Erforderlich: JavaScript Entwicklung. Wünschenswert: Kommunikation im Umgang mit Kunden.";
        let report = engine().analyze(job, "Ich entwickle Backends in Go seit Jahren.");

        assert!(report
            .missing
            .iter()
            .any(|keyword| keyword.term == "javascript"));
        let technical = report
            .gaps
            .iter()
            .find(|gap| gap.category == "Technische Skills")
            .expect("technical gap present");
        assert!(technical.items.contains(&"javascript".to_string()));
        let soft = report
            .gaps
            .iter()
            .find(|gap| gap.category == "Soft Skills")
            .expect("soft-skill gap present");
        assert!(soft.items.contains(&"kommunikation".to_string()));
    }

    #[test]
    fn test_requirements_view() {
        let requirements = engine()
            .analyze_requirements("Ein Studium der Informatik ist zwingend erforderlich für die Stelle.");
        assert!(!requirements.is_empty());
        assert!(requirements[0].is_hard);
    }
}
