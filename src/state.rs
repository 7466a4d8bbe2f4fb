use crate::{config::Config, store::SharedStore};
use axum::extract::FromRef;

/// Everything a request handler may touch. Built once in `main` (or per test)
/// and handed to the router.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: SharedStore, config: Config) -> Self {
        Self { store, config }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
