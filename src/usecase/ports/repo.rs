use crate::domain::entities::record::{NewPieceRecord, PieceRecord, RecordId};
use crate::domain::entities::user::{User, UserId, WorkshopSettings};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Storage(String),
}

impl RepoError {
    pub fn storage(err: anyhow::Error) -> Self {
        RepoError::Storage(format!("{err:#}"))
    }
}

pub trait UserRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn find_or_create_user(&self, username: &str) -> Result<User, RepoError>;
    fn save_workshop_settings(
        &self,
        id: UserId,
        settings: &WorkshopSettings,
    ) -> Result<(), RepoError>;

    fn load_session_user(&self) -> Result<Option<User>, RepoError>;
    fn save_session(&self, id: UserId) -> Result<(), RepoError>;
    fn clear_session(&self) -> Result<(), RepoError>;
}

pub trait RecordRepository: Send + Sync {
    fn list_records(&self, user_id: UserId) -> Result<Vec<PieceRecord>, RepoError>;
    fn insert_records(
        &self,
        user_id: UserId,
        records: &[NewPieceRecord],
    ) -> Result<Vec<RecordId>, RepoError>;
}
