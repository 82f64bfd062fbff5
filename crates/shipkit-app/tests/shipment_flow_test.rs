//! End-to-end tests: shipment file -> plan -> quote

use rust_decimal_macros::dec;
use shipkit_app::config::Config;
use shipkit_app::input::load_shipment;
use shipkit_app::quote::quote_shipment;
use shipkit_app::rates::{RateBracket, RateTable};
use shipkit_domain::{plan, PackingStrategy};
use shipkit_types::Error;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn config_with_rates() -> Config {
    let mut config = Config::default();
    config.rate_table.brackets = vec![
        RateBracket { max_weight: 20.0, price: dec!(14.25) },
        RateBracket { max_weight: 70.0, price: dec!(41.00) },
        RateBracket { max_weight: 150.0, price: dec!(88.50) },
    ];
    config
}

#[test]
fn test_uniform_json_shipment() {
    let dir = tempdir().unwrap();
    let path = write_file(
        &dir,
        "order.json",
        r#"{"weight_each": 10, "quantity": 35, "max_quantity": 1000}"#,
    );
    let config = config_with_rates();
    let request = load_shipment(&path, &config.limits).unwrap();
    let result = plan(&request).unwrap();

    let weights: Vec<f64> = result.iter().map(|b| b.weight).collect();
    assert_eq!(weights, vec![150.0, 150.0, 50.0]);

    let rates = RateTable::new(&config.rate_table).unwrap();
    let quote = quote_shipment(&request, &rates).unwrap();
    assert_eq!(quote.num_packages, 3);
    assert_eq!(quote.total.amount, dec!(218.00));
    assert_eq!(quote.total.currency, "USD");
}

#[test]
fn test_itemized_toml_shipment_with_overrides() {
    let dir = tempdir().unwrap();
    let path = write_file(
        &dir,
        "order.toml",
        r#"
max_weight = 70
max_quantity = 100

[[items]]
id = "bolts"
unit_weight = 0.5
quantity = 300

[[items]]
id = "brackets"
unit_weight = 2.0
quantity = 45
"#,
    );
    let request = load_shipment(&path, &Config::default().limits).unwrap();
    assert_eq!(request.limits.max_weight, 70.0);

    let result = plan(&request).unwrap();
    assert_eq!(result.strategy, PackingStrategy::Consolidated);
    assert_eq!(result.total_quantity(), 345);
    assert!(result.iter().all(|b| b.weight <= 70.0 && b.quantity <= 100));
    // bolts fill three count-limited boxes before any leftovers
    assert_eq!(result.boxes[0].item_id.as_deref(), Some("bolts"));
    assert_eq!(result.boxes[0].quantity, 100);
}

#[test]
fn test_csv_item_list() {
    let dir = tempdir().unwrap();
    let path = write_file(
        &dir,
        "items.csv",
        "id,unit_weight,quantity\nlamp,12.5,2\nrug,30,1\nvase,4.25,3\n",
    );
    let request = load_shipment(&path, &Config::default().limits).unwrap();
    assert_eq!(request.items.len(), 3);

    let result = plan(&request).unwrap();
    assert_eq!(result.strategy, PackingStrategy::Pooled);
    assert_eq!(result.len(), 1);
    assert!((result.total_weight() - 67.75).abs() < 1e-9);
}

#[test]
fn test_package_over_rate_table_fails_quote() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "order.json", r#"{"weight_each": 50, "quantity": 3}"#);
    let mut config = config_with_rates();
    config.rate_table.brackets.truncate(2);

    let request = load_shipment(&path, &config.limits).unwrap();
    let rates = RateTable::new(&config.rate_table).unwrap();
    let err = quote_shipment(&request, &rates).unwrap_err();
    assert!(matches!(err, Error::Rate(_)));
}

#[test]
fn test_unknown_extension_and_missing_file() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "order.yaml", "weight_each: 1");
    assert!(matches!(
        load_shipment(&path, &Config::default().limits),
        Err(Error::UnsupportedFormat(_))
    ));
    assert!(matches!(
        load_shipment(&dir.path().join("absent.json"), &Config::default().limits),
        Err(Error::FileNotFound(_))
    ));
}

#[test]
fn test_invalid_shipment_surfaces_validation_error() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "order.json", r#"{"items": [{"id": "safe", "unit_weight": 400, "quantity": 1}]}"#);
    let request = load_shipment(&path, &Config::default().limits).unwrap();
    let rates = RateTable::new(&config_with_rates().rate_table).unwrap();
    let err = quote_shipment(&request, &rates).unwrap_err();
    assert!(matches!(err, Error::Packing(_)));
    assert!(err.to_string().contains("safe"));
}
