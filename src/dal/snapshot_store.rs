use std::path::PathBuf;

use tokio::{fs, io::AsyncWriteExt};

use crate::domain::PollError;

const FILE_PREFIX: &str = "extr";
const FILE_EXTENSION: &str = "json";

/// Writes snapshots as `extr.<unix_seconds>.json` files under one directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SnapshotStore { dir: dir.into() }
    }

    pub fn path_for(&self, timestamp: i64) -> PathBuf {
        self.dir.join(snapshot_file_name(timestamp))
    }

    /// Creates the output directory if it is missing. Safe to call when it exists.
    pub async fn prepare(&self) -> Result<(), PollError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| PollError::Io {
                path: self.dir.clone(),
                source,
            })
    }

    /// Writes `pretty_json` to the file for `timestamp`, replacing any file of the same name.
    pub async fn persist(&self, pretty_json: &str, timestamp: i64) -> Result<PathBuf, PollError> {
        self.prepare().await?;

        let path = self.path_for(timestamp);
        let io_err = |source| PollError::Io {
            path: path.clone(),
            source,
        };

        let mut file = fs::File::create(&path).await.map_err(io_err)?;
        file.write_all(pretty_json.as_bytes())
            .await
            .map_err(io_err)?;
        file.flush().await.map_err(io_err)?;

        Ok(path)
    }
}

pub fn snapshot_file_name(timestamp: i64) -> String {
    format!("{}.{}.{}", FILE_PREFIX, timestamp, FILE_EXTENSION)
}
