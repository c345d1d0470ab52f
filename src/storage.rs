use crate::errors::StoreError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(data).map_err(|err| unavailable(&err))?;
    // write-then-rename so a crash mid-write leaves the previous file intact
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload).await.map_err(|err| unavailable(&err))?;
    fs::rename(&tmp, path).await.map_err(|err| unavailable(&err))?;
    Ok(())
}

fn unavailable(err: &dyn std::error::Error) -> StoreError {
    StoreError::StorageUnavailable(err.to_string())
}
