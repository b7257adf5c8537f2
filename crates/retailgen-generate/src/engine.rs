use std::any::Any;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::{info, warn};

use retailgen_core::{Dataset, GenerationConfig, TableName};

use crate::errors::{GenerationError, Stage};
use crate::generators::{
    LineItemSettings, generate_customers, generate_order_items, generate_orders,
    generate_products, generate_stores,
};
use crate::model::{GenerateOptions, GenerationReport, REPORT_FILE, TableReport};
use crate::output::persist_dataset;
use crate::rng::table_rng;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating and persisting a dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate all tables in memory, then persist them.
    ///
    /// Nothing is written unless every stage succeeded.
    pub fn run(&self, config: &GenerationConfig) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        config.validate()?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let reference_date = config.reference_date();
        info!(
            run_id = %run_id,
            seed = config.seed,
            reference_date = %reference_date,
            customers = config.customers,
            products = config.products,
            stores = config.stores,
            orders = config.orders,
            "generation started"
        );

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            generate_dataset(config, reference_date)
        }));
        let dataset = match outcome {
            Ok(Ok(dataset)) => dataset,
            Ok(Err(err)) => {
                warn!(run_id = %run_id, stage = ?err.stage(), error = %err, "generation failed");
                return Err(err);
            }
            Err(panic) => {
                let message = panic_message(panic);
                warn!(run_id = %run_id, error = %message, "generation panicked");
                return Err(GenerationError::Panicked(message));
            }
        };

        let persisted = persist_dataset(&self.options.out_dir, &dataset).map_err(|err| {
            warn!(run_id = %run_id, error = %err, "persisting dataset failed");
            err.in_stage(Stage::Persist)
        })?;

        let mut report = GenerationReport::new(run_id.clone(), config.seed, reference_date);
        for table in &persisted {
            report.bytes_written += table.bytes_written;
            report.tables.push(TableReport {
                table: table.table.as_str().to_string(),
                file: table.table.file_name().to_string(),
                rows_generated: table.rows,
                bytes_written: table.bytes_written,
            });
        }
        report.duration_ms = start.elapsed().as_millis() as u64;

        if self.options.write_report {
            let report_path = self.options.out_dir.join(REPORT_FILE);
            std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
        }

        info!(
            run_id = %run_id,
            out_dir = %self.options.out_dir.display(),
            order_items = dataset.order_items.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir: self.options.out_dir.clone(),
            dataset,
            report,
        })
    }
}

/// Build the five tables in memory, in dependency order.
///
/// Each table draws from its own stream derived from `config.seed`, so the
/// result is a pure function of the config and the reference date.
pub fn generate_dataset(
    config: &GenerationConfig,
    reference_date: NaiveDate,
) -> Result<Dataset, GenerationError> {
    config.validate()?;

    let customers = run_stage(Stage::Customers, || {
        let mut rng = table_rng(config.seed, TableName::Customers);
        generate_customers(
            config.customers,
            reference_date,
            config.join_window_days,
            &mut rng,
        )
    })?;

    let products = run_stage(Stage::Products, || {
        let mut rng = table_rng(config.seed, TableName::Products);
        let (price_min, price_max) = config.price_bounds();
        generate_products(config.products, price_min, price_max, &mut rng)
    })?;

    let stores = run_stage(Stage::Stores, || {
        let mut rng = table_rng(config.seed, TableName::Stores);
        generate_stores(config.stores, &mut rng)
    })?;

    let mut orders = run_stage(Stage::Orders, || {
        let mut rng = table_rng(config.seed, TableName::Orders);
        generate_orders(&customers, &stores, config.orders, reference_date, &mut rng)
    })?;

    let order_items = run_stage(Stage::OrderItems, || {
        let mut rng = table_rng(config.seed, TableName::OrderItems);
        let settings = LineItemSettings::from(config);
        generate_order_items(&mut orders, &products, &settings, &mut rng)
    })?;

    Ok(Dataset {
        customers,
        products,
        stores,
        orders,
        order_items,
    })
}

fn run_stage<T>(
    stage: Stage,
    build: impl FnOnce() -> Result<Vec<T>, GenerationError>,
) -> Result<Vec<T>, GenerationError> {
    let started = Instant::now();
    let rows = build().map_err(|err| err.in_stage(stage))?;
    info!(
        stage = %stage,
        rows = rows.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "table generated"
    );
    Ok(rows)
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during generation".to_string()
    }
}
