use chrono::NaiveDate;

use crate::domain::entities::user::UserId;

pub const WORK_DATE_FORMAT: &str = "%Y-%m-%d";
pub const MAX_QUANTITY: i64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub i64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceRecord {
    pub id: RecordId,
    pub user_id: UserId,
    pub work_date: NaiveDate,
    pub product: String,
    pub quantity: i64,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPieceRecord {
    pub work_date: NaiveDate,
    pub product: String,
    pub quantity: i64,
    pub note: String,
}

impl NewPieceRecord {
    /// Returns the first problem with this record, if any.
    pub fn validation_error(&self) -> Option<String> {
        if self.product.trim().is_empty() {
            return Some("品項不可空白".to_string());
        }
        if self.quantity < 0 {
            return Some(format!("數量不可為負數：{}", self.quantity));
        }
        if self.quantity > MAX_QUANTITY {
            return Some(format!("數量不可超過 {MAX_QUANTITY}：{}", self.quantity));
        }
        None
    }
}

pub fn parse_work_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), WORK_DATE_FORMAT).ok()
}

pub fn format_work_date(date: NaiveDate) -> String {
    date.format(WORK_DATE_FORMAT).to_string()
}
