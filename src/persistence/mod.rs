use std::{
    fs::{
        self,
        File,
    },
    io::Write,
    path::{
        Path,
        PathBuf,
    },
};

use log::debug;
use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::TangoError;

const APP_NAME: &str = "tango";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join(APP_NAME)
    } else {
        PathBuf::from(".")
    }
}

/// JSON files under one directory. Each engine owns its own `Storage`, so tests and
/// parallel profiles never share files.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn app_default() -> Self {
        Self::new(get_app_data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.path(filename).exists()
    }

    /// Writes to a sibling temp file and renames it over the target, so a crash
    /// leaves either the old file or the new one.
    pub fn save_json<T: Serialize + ?Sized>(
        &self,
        data: &T,
        filename: &str,
    ) -> Result<(), TangoError> {
        fs::create_dir_all(&self.root)?;

        let file_path = self.path(filename);
        let tmp_path = self.path(&format!("{}.tmp", filename));
        let json = serde_json::to_string_pretty(data)?;

        if let Err(e) = Self::write_synced(&tmp_path, json.as_bytes())
            .and_then(|()| fs::rename(&tmp_path, &file_path))
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!("event=save_json file={}", file_path.display());
        Ok(())
    }

    fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    /// `Ok(None)` when the file does not exist. Bytes that are not valid UTF-8 JSON
    /// come back as `TangoError::Json`.
    pub fn load_json<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>, TangoError> {
        let file_path = self.path(filename);

        if !file_path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&file_path)?;
        let data: T = serde_json::from_slice(&bytes)?;
        debug!("event=load_json file={}", file_path.display());
        Ok(Some(data))
    }

    pub fn delete(&self, filename: &str) -> Result<(), TangoError> {
        let file_path = self.path(filename);
        if file_path.exists() {
            fs::remove_file(&file_path)?;
            debug!("event=delete_file file={}", file_path.display());
        }
        Ok(())
    }
}
