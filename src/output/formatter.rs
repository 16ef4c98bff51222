//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ReportDocument;
use crate::processing::extractor::Keyword;
use crate::processing::gaps::GapPriority;
use crate::processing::suggestions::SuggestionPriority;
use colored::Colorize;

/// Trait for formatting report documents
pub trait OutputFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored score and priority markers
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for structured consumption
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saving reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self { use_colors }
    }

    fn score_line(&self, score: u8) -> String {
        let value = format!("{} %", score);
        if !self.use_colors {
            return format!("Match-Score: {}", value);
        }
        // same bands the score ring uses: green / yellow / red
        let colored_value = if score >= 70 {
            value.green().bold()
        } else if score >= 40 {
            value.yellow().bold()
        } else {
            value.red().bold()
        };
        format!("Match-Score: {}", colored_value)
    }

    fn keyword_list(keywords: &[Keyword]) -> String {
        keywords
            .iter()
            .map(|k| format!("{} (w{})", k.term, k.weight))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String> {
        let report = &document.report;
        let mut out = String::new();

        out.push_str(&self.score_line(report.score));
        out.push('\n');

        out.push_str(&format!(
            "\nGefundene Keywords ({}):\n  {}\n",
            report.found.len(),
            if report.found.is_empty() {
                "-".to_string()
            } else {
                Self::keyword_list(&report.found)
            }
        ));

        out.push_str(&format!(
            "\nFehlende Keywords ({}):\n  {}\n",
            report.missing.len(),
            if report.missing.is_empty() {
                "-".to_string()
            } else {
                Self::keyword_list(&report.missing)
            }
        ));

        if !report.gaps.is_empty() {
            out.push_str("\nSkill-Gaps:\n");
            for gap in &report.gaps {
                let marker = match gap.priority {
                    GapPriority::High => "!",
                    GapPriority::Medium => "~",
                };
                out.push_str(&format!(
                    "  [{}] {}: {}\n",
                    marker,
                    gap.category,
                    gap.items.join(", ")
                ));
            }
        }

        if !report.suggestions.is_empty() {
            out.push_str("\nVerbesserungsvorschläge:\n");
            for suggestion in &report.suggestions {
                let marker = match suggestion.priority {
                    SuggestionPriority::High => "!",
                    SuggestionPriority::Medium => "~",
                    SuggestionPriority::Low => "·",
                };
                out.push_str(&format!("  [{}] {}\n", marker, suggestion.text));
            }
        }

        if let Some(requirements) = &document.requirements {
            out.push_str("\nAnforderungen aus der Stellenbeschreibung:\n");
            for requirement in requirements {
                out.push_str(&format!(
                    "  [{:.2}]{} {}\n",
                    requirement.importance,
                    if requirement.is_hard { " (hart)" } else { "" },
                    requirement.text
                ));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String> {
        let report = &document.report;
        let mut out = String::new();

        out.push_str("# Job-Match Analyse\n\n");
        out.push_str(&format!("**Match-Score:** {} %\n\n", report.score));

        out.push_str("## Gefundene Keywords\n\n");
        for keyword in &report.found {
            out.push_str(&format!(
                "- {} (Gewicht {}, {}x)\n",
                keyword.term, keyword.weight, keyword.count
            ));
        }

        out.push_str("\n## Fehlende Keywords\n\n");
        for keyword in &report.missing {
            out.push_str(&format!("- {} (Gewicht {})\n", keyword.term, keyword.weight));
        }

        if !report.gaps.is_empty() {
            out.push_str("\n## Skill-Gaps\n\n");
            for gap in &report.gaps {
                out.push_str(&format!(
                    "- **{}** ({:?}): {}\n",
                    gap.category,
                    gap.priority,
                    gap.items.join(", ")
                ));
            }
        }

        if !report.suggestions.is_empty() {
            out.push_str("\n## Verbesserungsvorschläge\n\n");
            for suggestion in &report.suggestions {
                out.push_str(&format!("- {:?}: {}\n", suggestion.priority, suggestion.text));
            }
        }

        if let Some(requirements) = &document.requirements {
            out.push_str("\n## Anforderungen\n\n");
            for requirement in requirements {
                out.push_str(&format!(
                    "- ({:.2}) {}\n",
                    requirement.importance, requirement.text
                ));
            }
        }

        out.push_str(&format!(
            "\n---\nErstellt am {} mit job-matcher {}\n",
            document.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            document.metadata.engine_version
        ));

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Picks the formatter matching the requested output format.
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn format(
        document: &ReportDocument,
        format: &OutputFormat,
        use_colors: bool,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => ConsoleFormatter::new(use_colors).format_report(document),
            OutputFormat::Json => JsonFormatter::new(true).format_report(document),
            OutputFormat::Markdown => MarkdownFormatter.format_report(document),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::engine::MatchEngine;

    fn document() -> ReportDocument {
        let config = Config::default();
        let engine = MatchEngine::new(&config).unwrap();
        let report = engine.analyze(
            "Erforderlich: Python und SQL Kenntnisse. Wünschenswert: Erfahrung mit Cloud.",
            "Ich habe Erfahrung mit Python und AWS.",
        );
        ReportDocument::new(report, None, &config.language.language)
    }

    #[test]
    fn test_console_output_contains_sections() {
        let text = ConsoleFormatter::new(false)
            .format_report(&document())
            .unwrap();
        assert!(text.contains("Match-Score"));
        assert!(text.contains("python"));
        assert!(text.contains("sql"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let json = JsonFormatter::new(false).format_report(&document()).unwrap();
        let parsed: ReportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.report.score, 63);
    }

    #[test]
    fn test_markdown_output() {
        let markdown = MarkdownFormatter.format_report(&document()).unwrap();
        assert!(markdown.starts_with("# Job-Match Analyse"));
        assert!(markdown.contains("**Match-Score:** 63 %"));
    }
}
