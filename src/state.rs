use crate::store::DataStore;

#[derive(Clone)]
pub struct AppState {
    pub store: DataStore,
}
