// File: relay-core/src/diagnostics/writer.rs

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::Error;
use crate::diagnostics::ProxySnapshot;

type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Writes snapshots to `<dir>/<product>-dump-<YYYY-MM-DD-HH-mm-ss>.json`.
///
/// Files are opened create-only: two dumps in the same second produce one file
/// and one `AlreadyExists` error.
#[derive(Clone)]
pub struct SnapshotWriter {
    directory: PathBuf,
    product: String,
    clock: Clock,
}

impl SnapshotWriter {
    /// Writes into the current working directory.
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            directory: PathBuf::from("."),
            product: product.into(),
            clock: Arc::new(Local::now),
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Local> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn file_name_at(&self, at: DateTime<Local>) -> String {
        format!("{}-dump-{}.json", self.product, at.format("%Y-%m-%d-%H-%M-%S"))
    }

    /// Returns the absolute path of the new file.
    pub async fn write(&self, snapshot: &ProxySnapshot) -> Result<PathBuf, Error> {
        let body = serde_json::to_string_pretty(snapshot)?;
        let path = self.directory.join(self.file_name_at((self.clock)()));

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(body.as_bytes()).await?;
        file.flush().await?;

        Ok(std::path::absolute(&path)?)
    }
}
