use crate::models::UserIdentity;
use crate::storage::EntryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
    pub user: UserIdentity,
}

impl AppState {
    pub fn new(store: EntryStore, user: UserIdentity) -> Self {
        Self {
            store: Arc::new(store),
            user,
        }
    }
}
