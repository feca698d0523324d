use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::domain::entities::record::{parse_work_date, NewPieceRecord};

const DATE_HEADERS: &[&str] = &["日期", "date"];
const PRODUCT_HEADERS: &[&str] = &["品項", "品项", "product"];
const QUANTITY_HEADERS: &[&str] = &["數量", "数量", "quantity"];
const NOTE_HEADERS: &[&str] = &["備註", "备注", "note"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RecordColumns {
    date: usize,
    product: usize,
    quantity: usize,
    note: Option<usize>,
}

fn find_header(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().trim_start_matches('\u{feff}');
        names.iter().any(|name| header.eq_ignore_ascii_case(name))
    })
}

fn record_columns(headers: &StringRecord) -> Result<RecordColumns> {
    let required = |names: &[&str]| {
        find_header(headers, names).ok_or_else(|| anyhow!("csv is missing column: {}", names[0]))
    };
    Ok(RecordColumns {
        date: required(DATE_HEADERS)?,
        product: required(PRODUCT_HEADERS)?,
        quantity: required(QUANTITY_HEADERS)?,
        note: find_header(headers, NOTE_HEADERS),
    })
}

pub fn read_records_csv<R: Read>(input: R) -> Result<Vec<NewPieceRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers().context("failed to read csv headers")?.clone();
    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }
    let columns = record_columns(&headers)?;

    let mut records = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 1;
        let record = record.with_context(|| format!("failed to parse csv line {line}"))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        let field = |col: usize| record.get(col).unwrap_or("").trim();
        let work_date = parse_work_date(field(columns.date))
            .ok_or_else(|| anyhow!("line {line}: invalid date: {}", field(columns.date)))?;
        let quantity = field(columns.quantity)
            .parse::<i64>()
            .map_err(|_| anyhow!("line {line}: invalid quantity: {}", field(columns.quantity)))?;
        let new_record = NewPieceRecord {
            work_date,
            product: field(columns.product).to_string(),
            quantity,
            note: columns.note.map(field).unwrap_or("").to_string(),
        };
        if let Some(problem) = new_record.validation_error() {
            anyhow::bail!("line {line}: {problem}");
        }
        records.push(new_record);
    }

    Ok(records)
}

pub fn read_records_csv_file(csv_path: &Path) -> Result<Vec<NewPieceRecord>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    read_records_csv(file).with_context(|| format!("failed to import {}", csv_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn reads_records_with_optional_note_column() {
        let input = "日期,品項,數量,備註\n2024-03-08,襯衫,12,加急\n2024-03-09,長褲,5,\n";

        let records = read_records_csv(input.as_bytes()).expect("csv should parse");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].work_date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(records[0].product, "襯衫");
        assert_eq!(records[0].quantity, 12);
        assert_eq!(records[0].note, "加急");
        assert_eq!(records[1].note, "");
    }

    #[test]
    fn accepts_reordered_columns_without_note() {
        let input = "數量,日期,品項\n7,2024-01-02,外套\n";

        let records = read_records_csv(input.as_bytes()).expect("csv should parse");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity, 7);
        assert_eq!(records[0].product, "外套");
        assert_eq!(records[0].note, "");
    }

    #[test]
    fn skips_blank_lines() {
        let input = "日期,品項,數量\n2024-01-02,外套,1\n,,\n2024-01-03,外套,2\n";

        let records = read_records_csv(input.as_bytes()).expect("csv should parse");

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_required_column_is_rejected() {
        let input = "日期,品項\n2024-01-02,外套\n";

        let err = read_records_csv(input.as_bytes()).expect_err("should fail");

        assert!(err.to_string().contains("數量"), "unexpected error: {err:#}");
    }

    #[test]
    fn bad_quantity_names_the_line() {
        let input = "日期,品項,數量\n2024-01-02,外套,1\n2024-01-03,外套,abc\n";

        let err = read_records_csv(input.as_bytes()).expect_err("should fail");

        assert!(err.to_string().contains("line 2"), "unexpected error: {err:#}");
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let input = "日期,品項,數量\n2024-01-02,外套,-3\n";

        let err = read_records_csv(input.as_bytes()).expect_err("should fail");

        assert!(err.to_string().contains("line 1"), "unexpected error: {err:#}");
    }

    #[test]
    fn quantity_above_limit_is_rejected() {
        let input = format!("日期,品項,數量\n2024-01-02,外套,{}\n", i64::MAX);

        let err = read_records_csv(input.as_bytes()).expect_err("should fail");

        assert!(err.to_string().contains("line 1"), "unexpected error: {err:#}");
    }
}
