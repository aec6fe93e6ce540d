//! Boundary to the external analysis service.
//!
//! The service turns expression text into derivative, integral, domain,
//! range and critical points. Nothing here ever fails outward: transport
//! and decoding problems turn into [`AnalysisResult::fallback`].

pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod extract;
pub mod gemini;
pub mod oracle;
pub mod prompt;

// Re-exports
pub use analysis::AnalysisResult;
pub use analyzer::{interpret_response, Analyzer};
pub use config::{oracle_from_config, ConfigError, OracleConfig};
pub use error::OracleError;
pub use extract::extract_json;
pub use gemini::GeminiOracle;
pub use oracle::{Oracle, UnavailableOracle};
pub use prompt::build_prompt;
