use std::sync::Arc;

use sqlx::MySqlPool;

use crate::users::{MySqlUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn from_pool(db: MySqlPool) -> Self {
        Self::from_store(Arc::new(MySqlUserStore::new(db)))
    }

    pub fn from_store(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
