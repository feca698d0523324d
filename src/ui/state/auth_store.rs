use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::domain::entities::user::{User, WorkshopSettings};

type Listener = Rc<dyn Fn(Option<&User>)>;

struct AuthState {
    user: Option<User>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Shared auth/user state for the UI thread.
///
/// Cloning yields another handle to the same state. The app provides one
/// instance through context; tests build their own.
#[derive(Clone)]
pub struct AuthStore {
    inner: Rc<RefCell<AuthState>>,
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<RefCell<AuthState>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.store.upgrade() {
            state
                .borrow_mut()
                .listeners
                .retain(|(listener_id, _)| *listener_id != self.id);
        }
    }
}

impl AuthStore {
    pub fn new(user: Option<User>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AuthState {
                user,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.borrow().user.clone()
    }

    pub fn workshop_settings(&self) -> Option<WorkshopSettings> {
        self.inner
            .borrow()
            .user
            .as_ref()
            .and_then(|user| user.workshop.clone())
    }

    pub fn set_user(&self, user: Option<User>) {
        self.inner.borrow_mut().user = user;
        self.notify();
    }

    pub fn sign_out(&self) {
        self.set_user(None);
    }

    /// Replaces the current user's workshop settings. Does nothing when
    /// nobody is signed in.
    pub fn update_workshop(&self, settings: WorkshopSettings) {
        {
            let mut state = self.inner.borrow_mut();
            let Some(user) = state.user.as_mut() else {
                return;
            };
            user.workshop = Some(settings);
        }
        self.notify();
    }

    pub fn subscribe(&self, listener: impl Fn(Option<&User>) + 'static) -> Subscription {
        let mut state = self.inner.borrow_mut();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push((id, Rc::new(listener)));
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // Listeners run outside the borrow so they can read the store.
        let (user, listeners) = {
            let state = self.inner.borrow();
            let listeners: Vec<Listener> = state
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect();
            (state.user.clone(), listeners)
        };
        for listener in listeners {
            listener(user.as_ref());
        }
    }
}
