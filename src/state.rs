use crate::errors::StoreError;
use crate::models::AppData;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::timeout;

const PERSIST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn commit(
        &self,
        guard: &mut MutexGuard<'_, AppData>,
        staged: AppData,
    ) -> Result<(), StoreError> {
        match timeout(PERSIST_TIMEOUT, persist_data(&self.data_path, &staged)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(StoreError::StorageUnavailable(
                    "timed out writing the data file".to_string(),
                ));
            }
        }
        **guard = staged;
        Ok(())
    }
}
