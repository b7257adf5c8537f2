use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use retailgen_core::{ConfigError, GenerationConfig, TableName};
use retailgen_generate::model::REPORT_FILE;
use retailgen_generate::{GenerateOptions, GenerationEngine, GenerationError};

fn hash_file(path: &Path) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0_u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "retailgen_generate_{label}_{}",
        uuid::Uuid::new_v4()
    ));
    dir
}

fn small_config() -> GenerationConfig {
    GenerationConfig {
        seed: 7,
        customers: 50,
        products: 20,
        stores: 5,
        orders: 120,
        reference_date: NaiveDate::from_ymd_opt(2024, 6, 30),
        ..GenerationConfig::default()
    }
}

fn engine(out_dir: &Path) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        out_dir: out_dir.to_path_buf(),
        write_report: true,
    })
}

#[test]
fn generate_is_deterministic() {
    let config = small_config();
    let out_a = temp_out_dir("run_a");
    let out_b = temp_out_dir("run_b");

    engine(&out_a).run(&config).expect("run generation A");
    engine(&out_b).run(&config).expect("run generation B");

    for table in TableName::ALL {
        let hash_a = hash_file(&out_a.join(table.file_name())).expect("hash A");
        let hash_b = hash_file(&out_b.join(table.file_name())).expect("hash B");
        assert_eq!(hash_a, hash_b, "{} should be deterministic", table.file_name());
    }
}

#[test]
fn different_seeds_change_output() {
    let out_a = temp_out_dir("seed_a");
    let out_b = temp_out_dir("seed_b");
    let config_b = GenerationConfig {
        seed: 8,
        ..small_config()
    };

    engine(&out_a).run(&small_config()).expect("run seed 7");
    engine(&out_b).run(&config_b).expect("run seed 8");

    let hash_a = hash_file(&out_a.join("customers.csv")).expect("hash A");
    let hash_b = hash_file(&out_b.join("customers.csv")).expect("hash B");
    assert_ne!(hash_a, hash_b);
}

#[test]
fn headers_follow_the_file_contract() {
    let out_dir = temp_out_dir("headers");
    engine(&out_dir).run(&small_config()).expect("run generation");

    let expected = [
        ("customers.csv", "CustomerID,Name,Email,JoinDate"),
        ("products.csv", "ProductID,ProductName,Category,Price"),
        ("stores.csv", "StoreID,StoreName,Region"),
        (
            "orders.csv",
            "OrderID,OrderDate,CustomerID,StoreID,TotalAmount,PaymentMethod",
        ),
        ("order_items.csv", "OrderID,ProductID,Quantity,UnitPrice"),
    ];
    for (file, header) in expected {
        let content = fs::read_to_string(out_dir.join(file)).expect("read table");
        assert_eq!(content.lines().next(), Some(header), "header of {file}");
        assert!(!out_dir.join(format!("{file}.tmp")).exists());
    }
}

#[test]
fn money_and_dates_are_formatted() {
    let out_dir = temp_out_dir("formats");
    engine(&out_dir).run(&small_config()).expect("run generation");

    let mut reader = csv::Reader::from_path(out_dir.join("orders.csv")).expect("open orders");
    for record in reader.records() {
        let record = record.expect("orders record");
        let date = record.get(1).expect("OrderDate");
        assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(), "{date}");
        let total = record.get(4).expect("TotalAmount");
        let (_, cents) = total.split_once('.').expect("two decimals");
        assert_eq!(cents.len(), 2, "{total}");
    }
}

#[test]
fn report_records_row_counts() {
    let out_dir = temp_out_dir("report");
    let result = engine(&out_dir).run(&small_config()).expect("run generation");

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out_dir.join(REPORT_FILE)).expect("read generation_report.json"),
    )
    .expect("parse report");
    let tables = report
        .get("tables")
        .and_then(|value| value.as_array())
        .expect("tables array");
    assert_eq!(tables.len(), 5);
    assert_eq!(result.report.rows_for("customers"), Some(50));
    assert_eq!(result.report.rows_for("orders"), Some(120));
    assert_eq!(
        result.report.rows_for("order_items"),
        Some(result.dataset.order_items.len() as u64)
    );
}

#[test]
fn scenario_row_counts() {
    let config = GenerationConfig {
        seed: 42,
        customers: 1000,
        products: 200,
        stores: 25,
        orders: 2500,
        max_items_per_order: 8,
        reference_date: NaiveDate::from_ymd_opt(2025, 1, 15),
        ..GenerationConfig::default()
    };
    let out_dir = temp_out_dir("scenario");
    let result = engine(&out_dir).run(&config).expect("run generation");

    let count_rows = |file: &str| {
        let mut reader = csv::Reader::from_path(out_dir.join(file)).expect("open table");
        reader.records().count()
    };
    assert_eq!(count_rows("customers.csv"), 1000);
    assert_eq!(count_rows("products.csv"), 200);
    assert_eq!(count_rows("stores.csv"), 25);
    assert_eq!(count_rows("orders.csv"), 2500);
    let items = count_rows("order_items.csv");
    assert!((2500..=20000).contains(&items), "{items} order items");
    assert_eq!(items, result.dataset.order_items.len());
}

#[test]
fn zero_customers_fails_without_output() {
    let config = GenerationConfig {
        customers: 0,
        ..small_config()
    };
    let out_dir = temp_out_dir("zero_customers");
    let err = engine(&out_dir).run(&config).unwrap_err();

    assert!(matches!(
        err,
        GenerationError::Config(ConfigError::Invalid(_))
    ));
    assert!(!out_dir.exists());
    assert!(!out_dir.join("customers.csv").exists());
}

#[test]
fn failed_run_keeps_previous_output() {
    let out_dir = temp_out_dir("previous");
    engine(&out_dir).run(&small_config()).expect("first run");
    let before = hash_file(&out_dir.join("orders.csv")).expect("hash before");

    let broken = GenerationConfig {
        orders: 0,
        ..small_config()
    };
    assert!(engine(&out_dir).run(&broken).is_err());

    let after = hash_file(&out_dir.join("orders.csv")).expect("hash after");
    assert_eq!(before, after);
}

#[test]
fn failed_write_discards_staged_tables() {
    let out_dir = temp_out_dir("staging");
    engine(&out_dir).run(&small_config()).expect("first run");
    let before = hash_file(&out_dir.join("customers.csv")).expect("hash before");

    // A directory in the way makes staging orders.csv fail.
    fs::create_dir_all(out_dir.join("orders.csv.tmp")).expect("block orders staging");
    let config = GenerationConfig {
        seed: 8,
        ..small_config()
    };
    let err = engine(&out_dir).run(&config).unwrap_err();

    assert_eq!(err.stage(), Some(retailgen_generate::Stage::Persist));
    for table in TableName::ALL {
        if table != TableName::Orders {
            let staged = out_dir.join(format!("{}.tmp", table.file_name()));
            assert!(!staged.exists(), "{} left behind", staged.display());
        }
    }
    let after = hash_file(&out_dir.join("customers.csv")).expect("hash after");
    assert_eq!(before, after);
}
