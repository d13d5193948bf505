//! Min-max normalization bounds, ordering and the constant-column case

use rusty_tide::data::loader::parse_csv;
use rusty_tide::data::model::IndicatorDataset;
use rusty_tide::data::normalize::{EPSILON, NormalizedDataset, min_max};

#[test]
fn test_output_within_unit_range() {
    let values = [7.08, 3.2, 9.9, 5.5, 0.0, 14.0];
    let norm = min_max(&values);
    assert_eq!(norm.len(), values.len());
    for v in &norm {
        assert!(*v >= 0.0 && *v <= 1.0 + EPSILON, "{v} out of range");
    }
    // Minimum maps to exactly zero, maximum slightly below one.
    assert_eq!(norm[4], 0.0);
    assert!(norm[5] < 1.0);
    assert!((norm[5] - 1.0).abs() < 1e-6);
}

#[test]
fn test_preserves_relative_order() {
    let values = [204.9, 129.4, 224.2, 214.4, 181.1, 188.3];
    let norm = min_max(&values);
    for i in 0..values.len() {
        for j in 0..values.len() {
            if values[i] < values[j] {
                assert!(norm[i] < norm[j]);
            }
        }
    }
}

#[test]
fn test_constant_column_maps_to_zero() {
    let norm = min_max(&[3.5; 5]);
    assert!(norm.iter().all(|v| v.abs() < 1e-12));
}

#[test]
fn test_epsilon_applied_to_nonzero_range() {
    let norm = min_max(&[0.0, 1.0]);
    assert_eq!(norm[1], 1.0 / (1.0 + EPSILON));
}

#[test]
fn test_empty_input() {
    assert!(min_max(&[]).is_empty());
}

#[test]
fn test_normalized_dataset_per_column() {
    let table = parse_csv("ph,Hardness,Potability\n6,100,0\n8,300,1\n7,200,0\n").unwrap();
    let ds = IndicatorDataset::from_table(&table, "Potability").unwrap();
    let norm = NormalizedDataset::new(&ds);

    assert_eq!(norm.len(), 2);
    let ph = norm.get("ph").unwrap();
    let hardness = norm.get("Hardness").unwrap();
    assert!((ph[2] - 0.5).abs() < 1e-6);
    assert!((hardness[2] - 0.5).abs() < 1e-6);
    assert!(norm.get("Potability").is_none());

    let names: Vec<&str> = norm.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["ph", "Hardness"]);
}
