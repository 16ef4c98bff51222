//! Weighted match score

use crate::processing::matcher::MatchResult;

/// Weighted coverage score in 0..=100. A required keyword (weight 3) moves
/// the score three times as much as a nice-to-have one, mirroring how hiring
/// managers read postings.
pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn score(result: &MatchResult) -> u8 {
        let found_weight: u32 = result.found.iter().map(|k| u32::from(k.weight)).sum();
        let total_weight: u32 = found_weight
            + result
                .missing
                .iter()
                .map(|k| u32::from(k.weight))
                .sum::<u32>();

        if total_weight == 0 {
            return 0;
        }

        let score = (f64::from(found_weight) / f64::from(total_weight) * 100.0).round();
        score.clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::extractor::Keyword;

    fn keyword(term: &str, weight: u8) -> Keyword {
        Keyword {
            term: term.to_string(),
            weight,
            count: 1,
        }
    }

    #[test]
    fn test_empty_candidate_set_scores_zero() {
        assert_eq!(ScoreCalculator::score(&MatchResult::default()), 0);
    }

    #[test]
    fn test_all_found_scores_hundred() {
        let result = MatchResult {
            found: vec![keyword("python", 3), keyword("sql", 1)],
            missing: vec![],
        };
        assert_eq!(ScoreCalculator::score(&result), 100);
    }

    #[test]
    fn test_weighted_rounding() {
        // found 5 of total 8 -> 62.5 -> 63
        let result = MatchResult {
            found: vec![keyword("python", 3), keyword("cloud", 2)],
            missing: vec![keyword("sql", 3)],
        };
        assert_eq!(ScoreCalculator::score(&result), 63);
    }

    #[test]
    fn test_required_outweighs_nice_to_have() {
        let required_found = MatchResult {
            found: vec![keyword("python", 3)],
            missing: vec![keyword("ausdauer", 1)],
        };
        let nice_found = MatchResult {
            found: vec![keyword("ausdauer", 1)],
            missing: vec![keyword("python", 3)],
        };
        assert!(ScoreCalculator::score(&required_found) > ScoreCalculator::score(&nice_found));
    }
}
