use anyhow::*;
use std::result::Result::{Err, Ok};
use directories_next::BaseDirs;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;


/// Summary of one completed quiz session. Written once, never updated.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
    pub category: String,
    /// RFC 3339 completion time.
    pub timestamp: String,
}

/// Append-only log of completed sessions. Reads are best-effort: corrupt
/// or missing storage is an empty history, never an error.
pub trait ScoreStore {
    fn append(&mut self, record: &ScoreRecord) -> Result<()>;
    fn load_all(&self) -> Vec<ScoreRecord>;
}

/// Score log persisted as one CSV row per record.
pub struct CsvScoreStore {
    path: PathBuf,
}

impl CsvScoreStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        CsvScoreStore { path: path.into() }
    }

    /// Places the log in the per-user data directory.
    pub fn open_default() -> Result<Self> {
        let mut path = BaseDirs::new()
            .context("could not locate system directories")?
            .data_dir()
            .to_path_buf();
        path.push("medquiz");
        std::fs::create_dir_all(&path)
            .with_context(|| format!("could not create {}", path.display()))?;
        path.push("scores.csv");
        Ok(CsvScoreStore { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for CsvScoreStore {
    fn append(&mut self, record: &ScoreRecord) -> Result<()> {
        let write_headers = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("could not open score log at {}", self.path.display()))?;
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(write_headers)
            .from_writer(file);
        csv_writer.serialize(record)?;
        csv_writer.flush()?;
        Ok(())
    }

    fn load_all(&self) -> Vec<ScoreRecord> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(_) => return Vec::new(),
        };
        csv::Reader::from_reader(file)
            .deserialize::<ScoreRecord>()
            .filter_map(|record| record.ok())
            .collect()
    }
}

/// Non-persistent store. Clones share the same history, so a copy kept by
/// a test or caller observes records appended by the quiz session.
#[derive(Clone, Default)]
pub struct MemoryScoreStore {
    records: Arc<RwLock<Vec<ScoreRecord>>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn append(&mut self, record: &ScoreRecord) -> Result<()> {
        self.records.write().push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> Vec<ScoreRecord> {
        self.records.read().clone()
    }
}
