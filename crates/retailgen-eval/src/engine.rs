use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::EvalError;
use crate::loader::load_dataset;
use crate::report::render_analysis_report;
use crate::summary::DatasetSummary;

/// Default file name for the JSON summary.
pub const SUMMARY_FILE: &str = "analysis_summary.json";

/// Options for dataset analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Also write the summary as JSON to this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_path: Option<PathBuf>,
}

/// Result of a dataset analysis.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub dataset_dir: PathBuf,
    pub summary: DatasetSummary,
    pub report: String,
    pub summary_path: Option<PathBuf>,
}

/// Loads a persisted dataset and describes it. Never writes into the
/// dataset files.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    options: AnalyzeOptions,
}

impl AnalysisEngine {
    pub fn new(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, dataset_dir: &Path) -> Result<AnalysisResult, EvalError> {
        let start = Instant::now();
        let dataset = load_dataset(dataset_dir)?;
        let summary = DatasetSummary::from_dataset(&dataset);
        let report = render_analysis_report(&summary);

        let summary_path = match &self.options.summary_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, serde_json::to_vec_pretty(&summary)?)?;
                Some(path.clone())
            }
            None => None,
        };

        info!(
            dataset_dir = %dataset_dir.display(),
            orders = summary.orders.count,
            order_items = summary.order_items.count,
            duration_ms = start.elapsed().as_millis() as u64,
            "analysis completed"
        );

        Ok(AnalysisResult {
            dataset_dir: dataset_dir.to_path_buf(),
            summary,
            report,
            summary_path,
        })
    }
}
