//! Summary statistics, histograms, density and correlation

use rusty_tide::data::loader::parse_csv;
use rusty_tide::data::stats::{
    CorrelationMatrix, Summary, gaussian_kde, histogram, pearson, pearson_pairwise, value_counts,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_summary() {
    let s = Summary::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(s.count, 8);
    assert!(close(s.mean, 5.0));
    assert!(close(s.median, 4.5));
    // Sample standard deviation: sqrt(32 / 7)
    assert!(close(s.std, (32.0_f64 / 7.0).sqrt()));
    assert!(close(s.min, 2.0));
    assert!(close(s.max, 9.0));
    assert!(close(s.range, 7.0));
}

#[test]
fn test_summary_edge_cases() {
    assert!(Summary::of(&[]).is_none());
    let single = Summary::of(&[3.0]).unwrap();
    assert_eq!(single.std, 0.0);
    assert_eq!(single.median, 3.0);
}

#[test]
fn test_summary_rows_use_two_decimals() {
    let rows = Summary::of(&[1.0, 2.0]).unwrap().rows();
    assert_eq!(rows[0], ("Count", "2".to_string()));
    assert_eq!(rows[1], ("Mean", "1.50".to_string()));
}

#[test]
fn test_histogram_counts_every_value() {
    let values: Vec<f64> = (0..100).map(f64::from).collect();
    let bins = histogram(&values, 10);
    assert_eq!(bins.len(), 10);
    assert!(bins.iter().all(|b| b.count == 10));
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
    assert!(close(bins[0].start, 0.0));
    assert!(close(bins[9].end, 99.0));
}

#[test]
fn test_histogram_constant_values() {
    let bins = histogram(&[4.0; 6], 30);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].count, 6);
    assert!(close(bins[0].center(), 4.0));
}

#[test]
fn test_kde_integrates_to_about_one() {
    let values: Vec<f64> = (0..200).map(|i| (f64::from(i) * 0.37).sin() * 3.0).collect();
    let curve = gaussian_kde(&values, 200);
    assert_eq!(curve.len(), 200);
    let step = curve[1].0 - curve[0].0;
    let area: f64 = curve.iter().map(|(_, d)| d * step).sum();
    // Tails beyond [min, max] are cut off.
    assert!(area > 0.8 && area < 1.05, "area = {area}");
    assert!(curve.iter().all(|(_, d)| *d >= 0.0));
}

#[test]
fn test_kde_constant_values_is_empty() {
    assert!(gaussian_kde(&[1.0; 10], 50).is_empty());
}

#[test]
fn test_pearson() {
    let a = [1.0, 2.0, 3.0, 4.0];
    assert!(close(pearson(&a, &[2.0, 4.0, 6.0, 8.0]), 1.0));
    assert!(close(pearson(&a, &[8.0, 6.0, 4.0, 2.0]), -1.0));
    assert!(pearson(&a, &[5.0; 4]).is_nan());
}

#[test]
fn test_pearson_pairwise_skips_incomplete_pairs() {
    let a = [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)];
    let b = [Some(2.0), Some(4.0), Some(100.0), Some(6.0), None];
    // Only rows 0, 1 and 3 have both values.
    assert!(close(pearson_pairwise(&a, &b), 1.0));
    assert!(pearson_pairwise(&[None, Some(1.0)], &[Some(1.0), None]).is_nan());
}

#[test]
fn test_correlation_matrix() {
    let table = parse_csv("a,b,c,Potability\n1,2,5,0\n2,4,5,1\n3,6,5,0\n").unwrap();
    let names = ["a", "b", "c"].map(String::from);
    let m = CorrelationMatrix::pairwise(&table, &names);

    assert_eq!(m.names, vec!["a", "b", "c"]);
    assert!(close(m.get(0, 1).unwrap(), 1.0));
    assert!(close(m.get(1, 0).unwrap(), 1.0));
    assert_eq!(m.get(2, 2), Some(1.0));
    assert!(m.get(0, 2).unwrap().is_nan());
    assert!(m.get(3, 0).is_none());
}

#[test]
fn test_correlation_uses_every_complete_pair() {
    // Row 2 misses `c`; the a/b coefficient still uses all four rows.
    let table = parse_csv("a,b,c\n1,1,1\n2,3,2\n3,2,\n4,4,4\n").unwrap();
    let names = ["a", "b", "c"].map(String::from);
    let m = CorrelationMatrix::pairwise(&table, &names);

    let ab = pearson(&[1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 2.0, 4.0]);
    assert!(close(m.get(0, 1).unwrap(), ab));
    assert!(close(ab, 0.8));
    assert!(close(m.get(0, 2).unwrap(), 1.0));
}

#[test]
fn test_value_counts() {
    let counts = value_counts(&[0.0, 1.0, 0.0, 0.0, 1.0]);
    assert_eq!(counts.get(&0), Some(&3));
    assert_eq!(counts.get(&1), Some(&2));
    assert_eq!(counts.len(), 2);
}
