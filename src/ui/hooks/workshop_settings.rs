use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::user::{resolve_workshop_settings, ResolvedWorkshopSettings};
use crate::ui::state::auth_store::{AuthStore, Subscription};

/// Calls `on_change` whenever the resolved workshop settings of `store`
/// change. Updates that leave both resolved values untouched are skipped.
pub fn watch_workshop_settings(
    store: &AuthStore,
    on_change: impl Fn(ResolvedWorkshopSettings) + 'static,
) -> Subscription {
    let last = RefCell::new(resolve_workshop_settings(store.current_user().as_ref()));
    store.subscribe(move |user| {
        let next = resolve_workshop_settings(user);
        if *last.borrow() == next {
            return;
        }
        last.replace(next.clone());
        on_change(next);
    })
}

/// Resolved workshop settings of the signed-in user, kept current for the
/// lifetime of the calling component.
pub fn use_workshop_settings() -> Signal<ResolvedWorkshopSettings> {
    let store = use_context::<AuthStore>();
    let settings = use_signal(|| resolve_workshop_settings(store.current_user().as_ref()));

    use_hook(move || {
        Rc::new(watch_workshop_settings(&store, move |next| {
            let mut settings = settings;
            settings.set(next);
        }))
    });

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::{User, UserId, WorkshopSettings};
    use dioxus::dioxus_core::VirtualDom;

    fn recorder() -> (
        Rc<RefCell<Vec<ResolvedWorkshopSettings>>>,
        impl Fn(ResolvedWorkshopSettings) + 'static,
    ) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_for_listener = seen.clone();
        (seen, move |next| seen_for_listener.borrow_mut().push(next))
    }

    fn user(workshop: Option<WorkshopSettings>) -> User {
        User {
            id: UserId(1),
            username: "amei".to_string(),
            workshop,
        }
    }

    #[test]
    fn workshop_change_is_delivered_to_watchers() {
        let store = AuthStore::new(Some(user(None)));
        let (seen, on_change) = recorder();
        let _subscription = watch_workshop_settings(&store, on_change);

        store.update_workshop(WorkshopSettings {
            piece_unit: Some("件".to_string()),
            business_label: Some("阳光制衣厂".to_string()),
        });

        assert_eq!(
            *seen.borrow(),
            vec![ResolvedWorkshopSettings {
                piece_unit: "件".to_string(),
                business_label: "阳光制衣厂".to_string(),
            }]
        );
    }

    #[test]
    fn updates_that_resolve_identically_are_skipped() {
        let store = AuthStore::new(None);
        let (seen, on_change) = recorder();
        let _subscription = watch_workshop_settings(&store, on_change);

        // Signing in a user without settings still resolves to the defaults.
        store.set_user(Some(user(None)));
        store.update_workshop(WorkshopSettings::default());

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn sign_out_falls_back_to_defaults() {
        let store = AuthStore::new(Some(user(Some(WorkshopSettings {
            piece_unit: Some("件".to_string()),
            business_label: None,
        }))));
        let (seen, on_change) = recorder();
        let _subscription = watch_workshop_settings(&store, on_change);

        store.sign_out();

        assert_eq!(*seen.borrow(), vec![ResolvedWorkshopSettings::default()]);
    }

    #[test]
    fn dropped_watch_stops_receiving_changes() {
        let store = AuthStore::new(Some(user(None)));
        let (seen, on_change) = recorder();
        let subscription = watch_workshop_settings(&store, on_change);

        drop(subscription);
        store.update_workshop(WorkshopSettings {
            piece_unit: Some("件".to_string()),
            business_label: None,
        });

        assert!(seen.borrow().is_empty());
        assert_eq!(store.listener_count(), 0);
    }

    #[derive(Clone)]
    struct CapturedSettings(Rc<RefCell<Option<Signal<ResolvedWorkshopSettings>>>>);

    #[component]
    fn SettingsConsumer() -> Element {
        let settings = use_workshop_settings();
        *use_context::<CapturedSettings>().0.borrow_mut() = Some(settings);
        let piece_unit = settings().piece_unit;
        rsx! { "{piece_unit}" }
    }

    #[test]
    fn hook_tracks_store_until_view_is_dropped() {
        let store = AuthStore::new(Some(user(None)));
        let captured = CapturedSettings(Rc::new(RefCell::new(None)));
        let mut dom = VirtualDom::new(SettingsConsumer)
            .with_root_context(store.clone())
            .with_root_context(captured.clone());
        dom.rebuild_in_place();

        let settings = (*captured.0.borrow()).expect("hook should have run");
        assert_eq!(
            dom.in_runtime(|| settings.peek().clone()),
            ResolvedWorkshopSettings::default()
        );
        assert_eq!(store.listener_count(), 1);

        dom.in_runtime(|| {
            store.update_workshop(WorkshopSettings {
                piece_unit: Some("件".to_string()),
                business_label: Some("阳光制衣厂".to_string()),
            })
        });
        assert_eq!(
            dom.in_runtime(|| settings.peek().clone()),
            ResolvedWorkshopSettings {
                piece_unit: "件".to_string(),
                business_label: "阳光制衣厂".to_string(),
            }
        );

        drop(dom);
        assert_eq!(store.listener_count(), 0);
    }
}
