//! Corpus loading from a directory of line-delimited JSON records.
//!
//! Every `*.jsonl` file is read line by line; each line is one record.
//! Records come from heterogeneous collectors (articles, transcripts,
//! forum posts), so the body text is picked by priority fallback across
//! the field names the collectors emit. Malformed lines are skipped and
//! counted, never fatal.

use crate::chunk::{window_text, Chunk};
use crate::config;
use serde_json::Value;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Aggregated outcome of one corpus load, logged after every rebuild.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadStats {
    /// Files opened and scanned.
    pub files: usize,
    /// Records successfully parsed.
    pub records: usize,
    /// Lines that failed JSON parsing or reading.
    pub skipped_lines: usize,
    /// Parsed records with no usable text.
    pub empty_records: usize,
    /// Chunks produced.
    pub chunks: usize,
    /// Windows discarded below the minimum chunk length.
    pub dropped_windows: usize,
}

/// First non-empty string among `keys`, in priority order.
///
/// Empty strings count as absent: the collectors emit `""` for fields they
/// could not fill, and non-string values are collector bugs we skip over.
fn first_nonempty(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        record
            .get(k)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Appends the chunks for one parsed record.
fn chunk_record(record: &Value, source_file: &str, chunks: &mut Vec<Chunk>, stats: &mut LoadStats) {
    let body = first_nonempty(record, &["text", "transcript", "selftext"]).unwrap_or_default();
    let title = first_nonempty(record, &["title"]).unwrap_or_default();
    let link = first_nonempty(record, &["link", "url"]);

    let combined = format!("{}\n{}", title, body);
    let combined = combined.trim();
    if combined.is_empty() {
        stats.empty_records += 1;
        return;
    }

    let windows = window_text(combined);
    let raw_windows = combined.chars().count().div_ceil(config::CHUNK_WINDOW_CHARS);
    stats.dropped_windows += raw_windows - windows.len();

    for text in windows {
        chunks.push(Chunk {
            text,
            link: link.clone(),
            source_file: source_file.to_string(),
        });
    }
}

/// Scans `dir` for `*.jsonl` files and produces the ordered chunk sequence.
///
/// Files are visited in file-name order so chunk positions are reproducible
/// across loads of the same directory snapshot. A directory that does not
/// exist yet yields an empty corpus; unreadable files are skipped with a
/// warning.
pub fn load_corpus(dir: &Path) -> io::Result<(Vec<Chunk>, LoadStats)> {
    let mut stats = LoadStats::default();
    let mut chunks = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("Corpus directory {:?} does not exist yet", dir);
            return Ok((chunks, stats));
        }
        Err(e) => return Err(e),
    };

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("jsonl"))
        .collect();
    paths.sort();

    for path in paths {
        let file = match fs::File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Skipping unreadable corpus file {:?}: {}", path, e);
                continue;
            }
        };
        stats.files += 1;
        let source_file = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    // Read error mid-file (e.g. invalid UTF-8): give up on
                    // the rest of this file, keep the lines already parsed.
                    tracing::warn!("Read error in {:?}: {}", path, e);
                    stats.skipped_lines += 1;
                    break;
                }
            };
            let record: Value = match serde_json::from_str(&line) {
                Ok(v) => v,
                Err(_) => {
                    stats.skipped_lines += 1;
                    continue;
                }
            };
            stats.records += 1;
            chunk_record(&record, &source_file, &mut chunks, &mut stats);
        }
    }

    stats.chunks = chunks.len();
    Ok((chunks, stats))
}
