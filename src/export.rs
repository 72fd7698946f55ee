//! JSONL export — serialize an entity stream as one JSON object per line.
//!
//! This is the human-readable interchange path between ingestion pipelines
//! and graph loaders. Each line is a tagged envelope
//! (`{"type": "Gene", "data": {...}}`), so heterogeneous streams stay
//! self-describing and a reader for one schema variant rejects lines from
//! the other.

use std::io::{BufRead, Write};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Error, Result};

/// Write entities as JSONL. Returns the number of records written.
///
/// Works for either variant's `Entity` enum (or any serializable record).
pub fn write_jsonl<'a, T, I>(entities: I, writer: &mut dyn Write) -> Result<usize>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut count = 0;
    for entity in entities {
        serde_json::to_writer(&mut *writer, entity)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    debug!(records = count, "wrote JSONL export");
    Ok(count)
}

/// Read a JSONL export back. Blank lines are skipped; a malformed line fails
/// with its line number attached.
pub fn read_jsonl<T: DeserializeOwned>(reader: impl BufRead) -> Result<Vec<T>> {
    let mut entities = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entity = serde_json::from_str(&line)
            .map_err(|source| Error::ExportLine { line: idx + 1, source })?;
        entities.push(entity);
    }
    debug!(records = entities.len(), "read JSONL export");
    Ok(entities)
}
