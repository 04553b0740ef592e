use crate::config::Config;
use crate::db::Store;
use crate::notify::Notifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Store,
    pub notifier: Notifier,
}
