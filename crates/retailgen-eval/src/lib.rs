//! Read-only analysis of a generated retail dataset.

pub mod engine;
pub mod errors;
pub mod loader;
pub mod report;
pub mod summary;

pub use engine::{AnalysisEngine, AnalysisResult, AnalyzeOptions, SUMMARY_FILE};
pub use errors::EvalError;
pub use loader::load_dataset;
pub use report::{render_analysis_report, render_generation_summary};
pub use summary::DatasetSummary;
