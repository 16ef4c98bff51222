//! Job matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{JobMatcherError, Result};
pub use processing::engine::{MatchEngine, MatchReport};
