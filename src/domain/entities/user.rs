pub const DEFAULT_PIECE_UNIT: &str = "打";
pub const DEFAULT_BUSINESS_LABEL: &str = "工坊";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Display settings of the workshop a user belongs to, as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkshopSettings {
    pub piece_unit: Option<String>,
    pub business_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub workshop: Option<WorkshopSettings>,
}

/// Workshop settings with defaults substituted; both fields are always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWorkshopSettings {
    pub piece_unit: String,
    pub business_label: String,
}

impl Default for ResolvedWorkshopSettings {
    fn default() -> Self {
        Self {
            piece_unit: DEFAULT_PIECE_UNIT.to_string(),
            business_label: DEFAULT_BUSINESS_LABEL.to_string(),
        }
    }
}

impl ResolvedWorkshopSettings {
    pub fn from_settings(settings: Option<&WorkshopSettings>) -> Self {
        // An empty piece unit falls back, an empty business label does not.
        let piece_unit = settings
            .and_then(|s| s.piece_unit.as_deref())
            .filter(|unit| !unit.is_empty())
            .unwrap_or(DEFAULT_PIECE_UNIT)
            .to_string();
        let business_label = settings
            .and_then(|s| s.business_label.as_deref())
            .unwrap_or(DEFAULT_BUSINESS_LABEL)
            .to_string();

        Self {
            piece_unit,
            business_label,
        }
    }
}

pub fn resolve_workshop_settings(user: Option<&User>) -> ResolvedWorkshopSettings {
    ResolvedWorkshopSettings::from_settings(user.and_then(|u| u.workshop.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user_with(workshop: Option<WorkshopSettings>) -> User {
        User {
            id: UserId(1),
            username: "amei".to_string(),
            workshop,
        }
    }

    #[test]
    fn no_user_resolves_to_defaults() {
        assert_eq!(
            resolve_workshop_settings(None),
            ResolvedWorkshopSettings {
                piece_unit: "打".to_string(),
                business_label: "工坊".to_string(),
            }
        );
    }

    #[test]
    fn user_without_workshop_resolves_to_defaults() {
        let user = user_with(None);

        assert_eq!(
            resolve_workshop_settings(Some(&user)),
            ResolvedWorkshopSettings::default()
        );
    }

    #[test]
    fn configured_workshop_values_pass_through() {
        let user = user_with(Some(WorkshopSettings {
            piece_unit: Some("件".to_string()),
            business_label: Some("阳光制衣厂".to_string()),
        }));

        assert_eq!(
            resolve_workshop_settings(Some(&user)),
            ResolvedWorkshopSettings {
                piece_unit: "件".to_string(),
                business_label: "阳光制衣厂".to_string(),
            }
        );
    }

    #[test]
    fn empty_workshop_resolves_to_defaults() {
        let user = user_with(Some(WorkshopSettings::default()));

        assert_eq!(
            resolve_workshop_settings(Some(&user)),
            ResolvedWorkshopSettings::default()
        );
    }

    #[test]
    fn empty_piece_unit_falls_back_but_empty_label_is_kept() {
        let user = user_with(Some(WorkshopSettings {
            piece_unit: Some(String::new()),
            business_label: Some(String::new()),
        }));

        let resolved = resolve_workshop_settings(Some(&user));

        assert_eq!(resolved.piece_unit, DEFAULT_PIECE_UNIT);
        assert_eq!(resolved.business_label, "");
    }

    #[test]
    fn fields_resolve_independently() {
        let only_unit = user_with(Some(WorkshopSettings {
            piece_unit: Some("雙".to_string()),
            business_label: None,
        }));
        let only_label = user_with(Some(WorkshopSettings {
            piece_unit: None,
            business_label: Some("林家鞋坊".to_string()),
        }));

        let resolved_unit = resolve_workshop_settings(Some(&only_unit));
        let resolved_label = resolve_workshop_settings(Some(&only_label));

        assert_eq!(resolved_unit.piece_unit, "雙");
        assert_eq!(resolved_unit.business_label, DEFAULT_BUSINESS_LABEL);
        assert_eq!(resolved_label.piece_unit, DEFAULT_PIECE_UNIT);
        assert_eq!(resolved_label.business_label, "林家鞋坊");
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let user = user_with(Some(WorkshopSettings {
            piece_unit: Some("件".to_string()),
            business_label: None,
        }));

        assert_eq!(
            resolve_workshop_settings(Some(&user)),
            resolve_workshop_settings(Some(&user))
        );
    }
}
