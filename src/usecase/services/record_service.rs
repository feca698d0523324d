use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::record::{
    format_work_date, NewPieceRecord, PieceRecord, RecordId,
};
use crate::domain::entities::table::{CellAlign, ColumnDef, TableConfig, TableLayout};
use crate::domain::entities::user::{ResolvedWorkshopSettings, UserId};
use crate::infra::import::csv::read_records_csv_file;
use crate::usecase::ports::repo::{RecordRepository, RepoError};

pub const RECORDS_TABLE_ID: &str = "my-records";

pub struct RecordService {
    repo: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub fn list_records(&self, user_id: UserId) -> Result<Vec<PieceRecord>, RepoError> {
        self.repo.list_records(user_id)
    }

    pub fn add_record(
        &self,
        user_id: UserId,
        record: NewPieceRecord,
    ) -> Result<RecordId, RepoError> {
        if let Some(problem) = record.validation_error() {
            return Err(RepoError::Validation(problem));
        }
        let ids = self.repo.insert_records(user_id, std::slice::from_ref(&record))?;
        ids.into_iter()
            .next()
            .ok_or_else(|| RepoError::Storage("record insert returned no id".to_string()))
    }

    /// Imports every row of the file or none of them.
    pub fn import_csv(&self, user_id: UserId, path: &Path) -> Result<usize, RepoError> {
        let records = read_records_csv_file(path).map_err(|err| {
            warn!(path = %path.display(), "csv import rejected: {err:#}");
            RepoError::Validation(format!("{err:#}"))
        })?;
        let ids = self.repo.insert_records(user_id, &records)?;
        info!(user_id = user_id.0, path = %path.display(), count = ids.len(), "records imported");
        Ok(ids.len())
    }
}

pub fn records_table_columns(settings: &ResolvedWorkshopSettings) -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("work_date", "日期"),
        ColumnDef::new("product", "品項"),
        ColumnDef::new("quantity", format!("數量（{}）", settings.piece_unit))
            .aligned(CellAlign::Right),
        ColumnDef::new("note", "備註"),
    ]
}

pub fn records_table_config(
    records: &[PieceRecord],
    settings: &ResolvedWorkshopSettings,
) -> TableConfig {
    TableConfig {
        id: RECORDS_TABLE_ID.to_string(),
        columns: records_table_columns(settings),
        data: records
            .iter()
            .map(|record| {
                vec![
                    format_work_date(record.work_date),
                    record.product.clone(),
                    record.quantity.to_string(),
                    record.note.clone(),
                ]
            })
            .collect(),
        is_loading: false,
        layout: TableLayout::Auto,
    }
}

/// Saturates instead of overflowing on rows stored before quantities were
/// bounded.
pub fn total_quantity(records: &[PieceRecord]) -> i64 {
    records
        .iter()
        .fold(0_i64, |total, record| total.saturating_add(record.quantity))
}
