use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use scraper::{ElementRef, Html, Selector};

// ---------------------------------------------------------------------------
// Tide records scraped from an HTML tide table
// ---------------------------------------------------------------------------

/// One height reading from a tide-table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TideRecord {
    /// `"{cell0}-{cell1}"` of the row, e.g. `"01-15"`.
    pub date: String,
    /// Text of the cell right before the height, usually `HH:MM`.
    pub time: Option<String>,
    /// Tide height in metres.
    pub height: f64,
}

impl TideRecord {
    /// Axis label: date and time when the time cell is present.
    pub fn label(&self) -> String {
        match &self.time {
            Some(t) => format!("{} {t}", self.date),
            None => self.date.clone(),
        }
    }
}

/// Read a UTF-8 HTML page from disk and scrape it.
pub fn load_tide_file(path: &Path) -> Result<Vec<TideRecord>> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("reading tide page {}", path.display()))?;
    let records = parse_tide_heights(&html)?;
    log::info!("Parsed {} tide readings from {}", records.len(), path.display());
    Ok(records)
}

/// Scan every `<table>`, every row within it, in document order.
///
/// Rows with fewer than four `<td>` cells are ignored. Cells at 3, 5, 7, …
/// are heights, each preceded by its time cell. Empty or non-numeric
/// height cells are skipped. A row inside a nested table is visited once
/// per enclosing table.
pub fn parse_tide_heights(html: &str) -> Result<Vec<TideRecord>> {
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    let doc = Html::parse_document(html);
    let mut records = Vec::new();

    for table in doc.select(&table_sel) {
        for tr in table.select(&row_sel) {
            let cells: Vec<String> = tr.select(&cell_sel).map(cell_text).collect();
            if cells.len() < 4 {
                continue;
            }
            let date = format!("{}-{}", cells[0], cells[1]);
            for i in (3..cells.len()).step_by(2) {
                let h = cells[i].replace('\u{a0}', "").replace("&nbsp;", "");
                let h = h.trim();
                if h.is_empty() {
                    continue;
                }
                match h.parse::<f64>() {
                    Ok(height) => {
                        let time = Some(cells[i - 1].clone()).filter(|t| !t.is_empty());
                        records.push(TideRecord {
                            date: date.clone(),
                            time,
                            height,
                        });
                    }
                    Err(_) => log::debug!("Skipping non-numeric tide cell '{h}' in row {date}"),
                }
            }
        }
    }
    Ok(records)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector '{css}': {e}"))
}

fn cell_text(td: ElementRef<'_>) -> String {
    td.text().collect::<String>().trim().to_string()
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Resolve every record to a timestamp in `year`.
///
/// All-or-nothing: returns `None` when any record lacks a parseable
/// month, day or time, so the caller falls back to an index axis.
/// `year` is needed because the pages only carry month and day.
pub fn resolve_timestamps(records: &[TideRecord], year: i32) -> Option<Vec<NaiveDateTime>> {
    if records.is_empty() {
        return None;
    }
    records.iter().map(|r| resolve_one(r, year)).collect()
}

/// Two row layouts are understood:
/// * `MM月DD日` then `HH:MM` in the first two cells, so the date label is a
///   full `"%m月%d日-%H:%M"` timestamp;
/// * month and day in the first two cells, with the time taken from the
///   cell before the height.
fn resolve_one(record: &TideRecord, year: i32) -> Option<NaiveDateTime> {
    let labelled = format!("{year}年{}", record.date);
    if let Ok(ts) = NaiveDateTime::parse_from_str(&labelled, "%Y年%m月%d日-%H:%M") {
        return Some(ts);
    }

    let (month, day) = record.date.split_once('-')?;
    let month: u32 = digits(month).parse().ok()?;
    let day: u32 = digits(day).parse().ok()?;
    let (hour, minute) = parse_time(record.time.as_deref()?)?;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// `HH:MM` or `HHMM`.
fn parse_time(s: &str) -> Option<(u32, u32)> {
    let s = s.trim();
    if let Some((h, m)) = s.split_once(':') {
        return Some((h.trim().parse().ok()?, m.trim().parse().ok()?));
    }
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some((s[..2].parse().ok()?, s[2..].parse().ok()?));
    }
    None
}
