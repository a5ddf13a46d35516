//! Shared owner of the live index.
//!
//! An [`Engine`] wraps the corpus directory and the current [`Index`]
//! generation. Queries read a snapshot; ingestion appends a record and
//! rebuilds. Rebuilds construct the new generation off-lock and publish it
//! with a pointer swap, so readers never observe a half-built index.

use crate::answer::{compose, Answer};
use crate::config;
use crate::corpus::{load_corpus, LoadStats};
use crate::index::Index;
use crate::score::rank;
use parking_lot::{Mutex, RwLock};
use serde_json::json;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Thread-safe handle to the live index.
///
/// Cloning an `Engine` produces a new handle to the same shared index.
#[derive(Clone)]
pub struct Engine {
    corpus_dir: PathBuf,
    index: Arc<RwLock<Arc<Index>>>,
    /// Serializes appends so concurrent records land as whole lines.
    append_lock: Arc<Mutex<()>>,
}

impl Engine {
    /// Creates an engine over `corpus_dir` and builds the first index
    /// generation from its current contents.
    pub fn new(corpus_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let engine = Self {
            corpus_dir: corpus_dir.into(),
            index: Arc::new(RwLock::new(Arc::new(Index::build(Vec::new())))),
            append_lock: Arc::new(Mutex::new(())),
        };
        engine.rebuild()?;
        Ok(engine)
    }

    /// Returns a consistent snapshot of the current index generation.
    /// The snapshot stays valid across later rebuilds.
    pub fn snapshot(&self) -> Arc<Index> {
        Arc::clone(&self.index.read())
    }

    /// Reloads the corpus and atomically publishes a fresh index generation.
    ///
    /// Loading, tokenizing, and frequency counting happen before the write
    /// lock is taken; the lock is held only for the pointer swap. On error
    /// the previous generation stays live.
    pub fn rebuild(&self) -> io::Result<LoadStats> {
        let (chunks, stats) = load_corpus(&self.corpus_dir)?;
        let next = Arc::new(Index::build(chunks));
        tracing::info!(
            files = stats.files,
            records = stats.records,
            skipped_lines = stats.skipped_lines,
            empty_records = stats.empty_records,
            dropped_windows = stats.dropped_windows,
            chunks = next.chunk_count(),
            terms = next.term_count(),
            "Corpus indexed"
        );
        *self.index.write() = next;
        Ok(stats)
    }

    /// Appends one ingested record to the ingestion file as a JSON line,
    /// creating the corpus directory on demand. Safe to call from multiple
    /// threads: each record is written as one whole line. Does not rebuild;
    /// callers follow up with [`Engine::rebuild`].
    pub fn append_record(&self, title: &str, text: &str, url: &str) -> io::Result<()> {
        let record = json!({ "title": title, "text": text, "url": url });
        let mut line = record.to_string();
        line.push('\n');

        // One locked write_all per record: concurrent appends land as whole
        // lines, never interleaved fragments.
        let _guard = self.append_lock.lock();
        fs::create_dir_all(&self.corpus_dir)?;
        let path = self.corpus_dir.join(config::INGESTED_FILE);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Ranks the current index against `query` and composes the reply.
    pub fn ask(&self, query: &str) -> Answer {
        let index = self.snapshot();
        let ranking = rank(&index, query);
        compose(&index, &ranking)
    }
}
