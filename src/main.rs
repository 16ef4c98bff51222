//! Job matcher: resume and job posting matching with keyword gap analysis

use clap::Parser;
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::Config;
use job_matcher::error::{JobMatcherError, Result};
use job_matcher::input::InputManager;
use job_matcher::output::formatter::ReportGenerator;
use job_matcher::output::report::ReportDocument;
use job_matcher::processing::engine::MatchEngine;
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            job,
            resume,
            output,
            save,
            detailed,
        } => {
            info!("Starting job match analysis");

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Job posting file: {}", e)))?;
            cli::validate_file_extension(&resume, &["txt", "md", "pdf"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(JobMatcherError::InvalidInput)?;

            let job_text = InputManager::read_text(&job)?;
            let resume_text = InputManager::read_text(&resume)?;

            let engine = MatchEngine::new(&config)?;
            let report = engine.analyze(&job_text, &resume_text);
            let requirements = if detailed || config.output.detailed {
                Some(engine.analyze_requirements(&job_text))
            } else {
                None
            };

            let document = ReportDocument::new(report, requirements, &config.language.language);
            let rendered =
                ReportGenerator::format(&document, &output_format, config.output.color_output)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    JobMatcherError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                info!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}
