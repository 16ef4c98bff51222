//! Configuration management for the job matcher

use crate::error::{JobMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: LanguageProfile,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Immutable language tables driving the pipeline. Everything that is
/// language-specific lives here so the engine itself stays language-agnostic
/// and can be unit-tested with substitute profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Language tag, informational only (shown in report metadata).
    pub language: String,

    /// Common function words dropped during tokenization.
    pub stop_words: Vec<String>,

    /// Words kept in the token stream (they carry requirement context for
    /// their neighbors) but never emitted as candidate keywords: the cue
    /// vocabulary itself plus generic posting filler.
    pub candidate_exclusions: Vec<String>,

    /// Requirement-strength cues, checked in priority order: a context
    /// containing a required cue yields weight 3, a preferred cue weight 2,
    /// anything else weight 1.
    pub required_cues: Vec<String>,
    pub preferred_cues: Vec<String>,

    /// Multi-word technical/process phrases recognized as single keywords
    /// (regex sources, matched against the raw lowercase job text).
    pub compound_patterns: Vec<String>,

    /// Regex alternation identifying technical/tooling terms among missing
    /// keywords, and the label of the resulting gap category.
    pub technical_gap_pattern: String,
    pub technical_gap_label: String,

    /// Same for interpersonal/soft-skill terms.
    pub soft_skill_gap_pattern: String,
    pub soft_skill_gap_label: String,

    /// Pattern indicating quantified achievements in a resume (numbers next
    /// to percent signs or unit words).
    pub quantifier_pattern: String,

    /// Canonical skill term -> alternate surface forms.
    pub synonyms: HashMap<String, Vec<String>>,

    /// Human-readable suggestion texts.
    pub suggestions: SuggestionTexts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionTexts {
    /// Score band texts, lowest band first.
    pub barely_matching: String,
    pub add_missing_keywords: String,
    pub good_base: String,
    pub fine_tuning: String,
    /// Prefix for the "most important missing terms" suggestion; the terms
    /// are appended as a quoted, comma-separated list.
    pub important_missing_prefix: String,
    pub add_quantified_results: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Job descriptions shorter than this (trimmed) short-circuit to the
    /// zero report.
    pub min_job_text_chars: usize,
    /// Tokens shorter than this are dropped.
    pub min_token_chars: usize,
    /// Context window radius (in tokens) for requirement-cue lookup.
    pub context_window: usize,
    /// Single-word candidates need this many occurrences unless a cue
    /// raised their weight.
    pub min_occurrences: usize,
    /// How many missing terms the "important missing" suggestion names.
    pub max_named_missing: usize,
    /// Sentences shorter than this are skipped by the requirement analyzer.
    pub min_sentence_chars: usize,
    /// Requirement sentences below this importance are dropped.
    pub min_requirement_importance: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: LanguageProfile::german(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_job_text_chars: 50,
            min_token_chars: 3,
            context_window: 5,
            min_occurrences: 2,
            max_named_missing: 3,
            min_sentence_chars: 20,
            min_requirement_importance: 0.5,
        }
    }
}

impl LanguageProfile {
    /// Default working-language profile (German job postings).
    pub fn german() -> Self {
        let stop_words = [
            "und", "oder", "der", "die", "das", "ein", "eine", "für", "mit", "von",
            "zu", "bei", "auf", "aus", "nach", "über", "unter", "durch", "als",
            "ist", "sind", "werden", "wird", "haben", "hat", "sein", "kann",
            "sowie", "auch", "wenn", "dann", "dass", "sich", "wir", "sie", "ihr",
            "uns", "unser", "ihre", "deine", "meine", "man", "mehr", "sehr",
            "gerne", "gute", "guten", "guter", "neue", "neuen", "neuer", "erste",
        ];

        let candidate_exclusions = [
            // requirement-cue vocabulary
            "muss", "müssen", "erforderlich", "voraussetzung", "voraussetzungen",
            "zwingend", "wünschenswert", "idealerweise", "vorteil", "plus",
            "bonus", "optional",
            // generic posting filler
            "kenntnisse", "kenntnissen", "erfahrung", "erfahrungen",
            "aufgaben", "profil", "bieten", "suchen",
        ];

        let compound_patterns = [
            "projektmanagement",
            "teamführung",
            "kundenbetreuung",
            "qualitätssicherung",
            "software-entwicklung",
            "web-entwicklung",
            "datenanalyse",
            "prozessoptimierung",
            "change management",
            "stakeholder management",
            "requirement engineering",
            "business intelligence",
            "machine learning",
            "deep learning",
            "user experience",
            "agile methoden",
            "continuous integration",
            "full.?stack",
            "front.?end",
            "back.?end",
        ];

        let synonyms: HashMap<String, Vec<String>> = [
            ("javascript", vec!["js", "ecmascript", "es6", "es2015"]),
            ("python", vec!["py", "python3"]),
            ("typescript", vec!["ts"]),
            ("react", vec!["reactjs", "react.js"]),
            ("vue", vec!["vuejs", "vue.js"]),
            ("angular", vec!["angularjs", "angular.js"]),
            ("node", vec!["nodejs", "node.js"]),
            ("sql", vec!["mysql", "postgresql", "postgres", "sqlite", "mssql"]),
            ("agile", vec!["scrum", "kanban", "sprint"]),
            ("cloud", vec!["aws", "azure", "gcp", "google cloud"]),
            ("ci/cd", vec!["jenkins", "gitlab ci", "github actions", "devops"]),
            ("kommunikation", vec!["kommunikativ", "kommunikationsstark"]),
            ("teamarbeit", vec!["teamfähig", "teamplayer", "teamorientiert"]),
            ("projektmanagement", vec!["pm", "projektleitung", "projektmanager"]),
        ]
        .into_iter()
        .map(|(k, v)| {
            (
                k.to_string(),
                v.into_iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect();

        Self {
            language: "de".to_string(),
            stop_words: stop_words.iter().map(|s| s.to_string()).collect(),
            candidate_exclusions: candidate_exclusions.iter().map(|s| s.to_string()).collect(),
            required_cues: ["muss", "erforderlich", "voraussetzung", "zwingend"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            preferred_cues: ["wünschenswert", "idealerweise", "von vorteil", "gerne"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            compound_patterns: compound_patterns.iter().map(|s| s.to_string()).collect(),
            synonyms,
            technical_gap_pattern:
                "java|python|javascript|typescript|react|vue|angular|node|sql|aws|azure|docker\
                 |kubernetes|git|api|cloud|agile|scrum|devops|ci|cd|html|css|php|ruby|go|rust\
                 |swift|kotlin"
                    .to_string(),
            technical_gap_label: "Technische Skills".to_string(),
            soft_skill_gap_pattern:
                "kommunikation|team|führung|organisation|präsentation|verhandlung|kreativ\
                 |analytisch|selbstständig|flexibel|belastbar|motivation|empathie|konflikt\
                 |problem|lösung"
                    .to_string(),
            soft_skill_gap_label: "Soft Skills".to_string(),
            quantifier_pattern:
                r"\d+\s*%|\d+\s*(euro|€|umsatz|kunden|mitarbeiter|projekt)".to_string(),
            suggestions: SuggestionTexts {
                barely_matching:
                    "Ihr Profil stimmt kaum mit der Stelle überein. Überprüfen Sie die Anforderungen."
                        .to_string(),
                add_missing_keywords:
                    "Ergänzen Sie fehlende Keywords in Ihrem Kurzprofil und den Erfahrungen."
                        .to_string(),
                good_base: "Gute Basis! Fügen Sie noch einige fehlende Schlüsselbegriffe hinzu."
                    .to_string(),
                fine_tuning: "Sehr gute Übereinstimmung! Kleine Optimierungen sind noch möglich."
                    .to_string(),
                important_missing_prefix: "Wichtige fehlende Begriffe".to_string(),
                add_quantified_results:
                    "Fügen Sie messbare Ergebnisse hinzu (Zahlen, Prozente, Beträge).".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                JobMatcherError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JobMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-matcher")
            .join("config.toml")
    }
}
