use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::LinguessError;

const APP_NAME: &str = "linguess";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            tracing::warn!("Could not create {}: {}", app_dir.display(), e);
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), LinguessError> {
    save_json_in(&get_app_data_dir(), data, filename)
}

pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, LinguessError> {
    load_json_in(&get_app_data_dir(), filename)
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    load_json_or_default_in(&get_app_data_dir(), filename)
}

pub fn data_file_exists(filename: &str) -> bool {
    get_app_data_dir().join(filename).exists()
}

pub fn save_json_in<T: Serialize>(
    dir: &Path,
    data: &T,
    filename: &str,
) -> Result<(), LinguessError> {
    let file_path = dir.join(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    tracing::info!("Data saved to: {}", file_path.display());
    Ok(())
}

/// Missing files yield `T::default()`.
pub fn load_json_in<T: DeserializeOwned + Default>(
    dir: &Path,
    filename: &str,
) -> Result<T, LinguessError> {
    let file_path = dir.join(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    tracing::info!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn load_json_or_default_in<T: DeserializeOwned + Default>(dir: &Path, filename: &str) -> T {
    match load_json_in::<T>(dir, filename) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
