use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    /// The file-backed user store; the canonical record list lives here.
    pub store: UserStore,
    /// Live session ids mapped to the logged-in user's id.
    pub sessions: Arc<Mutex<HashMap<String, u64>>>,
    pub flash_store: Arc<Mutex<HashMap<String, Vec<String>>>>,
    pub public_base_url: String,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(store: UserStore, public_base_url: String) -> Self {
        AppState {
            store,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            flash_store: Arc::new(Mutex::new(HashMap::new())),
            public_base_url,
            custom_css: None,
        }
    }
}
