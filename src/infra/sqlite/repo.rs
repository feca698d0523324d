use std::path::PathBuf;

use crate::domain::entities::record::{NewPieceRecord, PieceRecord, RecordId};
use crate::domain::entities::user::{User, UserId, WorkshopSettings};
use crate::infra::sqlite::queries::{
    clear_session, find_or_create_user, insert_records, list_records, load_session_user_id,
    load_user, save_session, upsert_workshop_settings,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{RecordRepository, RepoError, UserRepository};

pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl UserRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(RepoError::storage)
    }

    fn find_or_create_user(&self, username: &str) -> Result<User, RepoError> {
        find_or_create_user(&self.db_path, username).map_err(RepoError::storage)
    }

    fn save_workshop_settings(
        &self,
        id: UserId,
        settings: &WorkshopSettings,
    ) -> Result<(), RepoError> {
        upsert_workshop_settings(&self.db_path, id.0, settings).map_err(RepoError::storage)
    }

    fn load_session_user(&self) -> Result<Option<User>, RepoError> {
        let session_user_id =
            load_session_user_id(&self.db_path).map_err(RepoError::storage)?;
        let Some(user_id) = session_user_id else {
            return Ok(None);
        };
        load_user(&self.db_path, user_id).map_err(RepoError::storage)
    }

    fn save_session(&self, id: UserId) -> Result<(), RepoError> {
        save_session(&self.db_path, id.0).map_err(RepoError::storage)
    }

    fn clear_session(&self) -> Result<(), RepoError> {
        clear_session(&self.db_path).map_err(RepoError::storage)
    }
}

impl RecordRepository for SqliteRepo {
    fn list_records(&self, user_id: UserId) -> Result<Vec<PieceRecord>, RepoError> {
        list_records(&self.db_path, user_id.0).map_err(RepoError::storage)
    }

    fn insert_records(
        &self,
        user_id: UserId,
        records: &[NewPieceRecord],
    ) -> Result<Vec<RecordId>, RepoError> {
        let ids = insert_records(&self.db_path, user_id.0, records).map_err(RepoError::storage)?;
        Ok(ids.into_iter().map(RecordId).collect())
    }
}
