use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::user::User;
use crate::ui::state::auth_store::AuthStore;

/// The signed-in user, re-read whenever the auth store changes.
pub fn use_current_user() -> Signal<Option<User>> {
    let store = use_context::<AuthStore>();
    let user = use_signal(|| store.current_user());

    use_hook(move || {
        Rc::new(store.subscribe(move |next| {
            let mut user = user;
            let current = user.peek().clone();
            if current.as_ref() != next {
                user.set(next.cloned());
            }
        }))
    });

    user
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::entities::user::UserId;
    use dioxus::dioxus_core::VirtualDom;

    #[derive(Clone)]
    struct CapturedUser(Rc<RefCell<Option<Signal<Option<User>>>>>);

    #[component]
    fn UserConsumer() -> Element {
        let user = use_current_user();
        *use_context::<CapturedUser>().0.borrow_mut() = Some(user);
        let name = user().map(|user| user.username).unwrap_or_default();
        rsx! { "{name}" }
    }

    #[test]
    fn hook_follows_sign_in_and_out_until_view_is_dropped() {
        let store = AuthStore::new(None);
        let captured = CapturedUser(Rc::new(RefCell::new(None)));
        let mut dom = VirtualDom::new(UserConsumer)
            .with_root_context(store.clone())
            .with_root_context(captured.clone());
        dom.rebuild_in_place();

        let user = (*captured.0.borrow()).expect("hook should have run");
        assert_eq!(dom.in_runtime(|| user.peek().clone()), None);
        assert_eq!(store.listener_count(), 1);

        let amei = User {
            id: UserId(5),
            username: "amei".to_string(),
            workshop: None,
        };
        dom.in_runtime(|| store.set_user(Some(amei.clone())));
        assert_eq!(dom.in_runtime(|| user.peek().clone()), Some(amei));

        dom.in_runtime(|| store.sign_out());
        assert_eq!(dom.in_runtime(|| user.peek().clone()), None);

        drop(dom);
        assert_eq!(store.listener_count(), 0);
    }
}
