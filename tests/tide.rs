//! Tide-table scraping: row selection, cell positions and timestamp resolution

use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use rusty_tide::data::tide::{TideRecord, load_tide_file, parse_tide_heights, resolve_timestamps};

const PAGE: &str = r#"
<html><body>
<table>
  <tr><th>Month</th><th>Day</th><th>Time</th><th>Height</th></tr>
  <tr><td>01</td><td>02</td><td>03:15</td><td>2.1</td><td>09:40</td><td>0.6</td></tr>
  <tr><td>01</td><td>03</td><td>04:05</td></tr>
  <tr><td>01</td><td>04</td><td>04:50</td><td>&nbsp;</td><td>11:02</td><td>abc</td><td>17:30</td><td>1.9</td></tr>
</table>
</body></html>
"#;

fn dt(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap()
}

#[test]
fn test_extracts_heights_at_odd_offsets() {
    let records = parse_tide_heights(PAGE).unwrap();
    assert_eq!(
        records,
        vec![
            TideRecord {
                date: "01-02".to_string(),
                time: Some("03:15".to_string()),
                height: 2.1,
            },
            TideRecord {
                date: "01-02".to_string(),
                time: Some("09:40".to_string()),
                height: 0.6,
            },
            TideRecord {
                date: "01-04".to_string(),
                time: Some("17:30".to_string()),
                height: 1.9,
            },
        ]
    );
}

#[test]
fn test_short_and_header_rows_are_ignored() {
    let html = "<table><tr><td>1</td><td>2</td><td>3.5</td></tr>\
                <tr><th>a</th><th>b</th><th>c</th><th>4.0</th></tr></table>";
    assert!(parse_tide_heights(html).unwrap().is_empty());
}

#[test]
fn test_malformed_cells_are_not_substituted() {
    let html = "<table><tr><td>02</td><td>01</td><td>x</td><td>--</td><td>y</td><td></td></tr></table>";
    assert!(parse_tide_heights(html).unwrap().is_empty());
}

#[test]
fn test_non_breaking_spaces_are_stripped() {
    let html = "<table><tr><td>02</td><td>01</td><td>06:00</td><td>&nbsp;1.3&nbsp;</td></tr></table>";
    let records = parse_tide_heights(html).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].height, 1.3);
}

#[test]
fn test_nested_tables_are_scanned_per_table() {
    let html = "<table><tr><td>\
                  <table><tr><td>03</td><td>01</td><td>01:00</td><td>1.0</td></tr></table>\
                </td></tr></table>";
    // The inner row is reached from both the outer and the inner table.
    let records = parse_tide_heights(html).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.height == 1.0));
}

#[test]
fn test_document_without_tables() {
    assert!(parse_tide_heights("<p>no tides today</p>").unwrap().is_empty());
}

#[test]
fn test_resolve_timestamps() {
    let records = parse_tide_heights(PAGE).unwrap();
    let times = resolve_timestamps(&records, 2023).unwrap();
    assert_eq!(
        times,
        vec![dt(1, 2, 3, 15), dt(1, 2, 9, 40), dt(1, 4, 17, 30)]
    );
}

#[test]
fn test_resolve_timestamps_from_month_day_label() {
    let page = r#"
<table>
  <tr><td>01月15日</td><td>06:30</td><td>x</td><td>1.2</td></tr>
  <tr><td>12月31日</td><td>23:05</td><td>y</td><td>0.4</td><td>z</td><td>1.8</td></tr>
</table>
"#;
    let records = parse_tide_heights(page).unwrap();
    assert_eq!(records[0].date, "01月15日-06:30");
    assert_eq!(
        resolve_timestamps(&records, 2023).unwrap(),
        vec![dt(1, 15, 6, 30), dt(12, 31, 23, 5), dt(12, 31, 23, 5)]
    );
}

#[test]
fn test_resolve_timestamps_accepts_compact_time() {
    let records = vec![TideRecord {
        date: "01-15".to_string(),
        time: Some("0630".to_string()),
        height: 1.0,
    }];
    assert_eq!(
        resolve_timestamps(&records, 2023).unwrap(),
        vec![dt(1, 15, 6, 30)]
    );
}

#[test]
fn test_resolve_timestamps_is_all_or_nothing() {
    let records = vec![
        TideRecord {
            date: "01-02".to_string(),
            time: Some("03:15".to_string()),
            height: 2.1,
        },
        TideRecord {
            date: "01-31".to_string(),
            time: None,
            height: 1.0,
        },
    ];
    assert!(resolve_timestamps(&records, 2023).is_none());
    assert!(resolve_timestamps(&[], 2023).is_none());
}

#[test]
fn test_record_label() {
    let with_time = TideRecord {
        date: "01-02".to_string(),
        time: Some("03:15".to_string()),
        height: 2.1,
    };
    assert_eq!(with_time.label(), "01-02 03:15");
}

#[test]
fn test_load_tide_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PAGE.as_bytes()).unwrap();
    let records = load_tide_file(file.path()).unwrap();
    assert_eq!(records.len(), 3);
}
