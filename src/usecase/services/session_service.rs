use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::{User, UserId, WorkshopSettings};
use crate::usecase::ports::repo::{RepoError, UserRepository};

pub struct SessionService {
    repo: Arc<dyn UserRepository>,
}

fn normalize_setting(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl SessionService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn restore(&self) -> Result<Option<User>, RepoError> {
        self.repo.init()?;
        self.repo.load_session_user()
    }

    pub fn sign_in(&self, username: &str) -> Result<User, RepoError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(RepoError::Validation("使用者名稱不可空白".to_string()));
        }

        let user = self.repo.find_or_create_user(username)?;
        self.repo.save_session(user.id)?;
        info!(user_id = user.id.0, username, "signed in");
        Ok(user)
    }

    pub fn sign_out(&self) -> Result<(), RepoError> {
        self.repo.clear_session()?;
        info!("signed out");
        Ok(())
    }

    /// Blank values are stored as absent so the defaults apply again.
    pub fn update_workshop_settings(
        &self,
        user_id: UserId,
        settings: WorkshopSettings,
    ) -> Result<WorkshopSettings, RepoError> {
        let settings = WorkshopSettings {
            piece_unit: normalize_setting(settings.piece_unit),
            business_label: normalize_setting(settings.business_label),
        };
        self.repo.save_workshop_settings(user_id, &settings)?;
        info!(
            user_id = user_id.0,
            piece_unit = ?settings.piece_unit,
            business_label = ?settings.business_label,
            "workshop settings updated"
        );
        Ok(settings)
    }
}
