use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::round::Round;

/// Optional line-oriented narration sink for game engines.
///
/// Narration is a side channel, not a core contract: every engine works
/// with [`Narration::off`]. Lines are indented by nesting depth (one tab
/// per level) and write failures are deliberately ignored.
pub struct Narration<'a> {
    sink: Option<&'a mut dyn Write>,
}

impl<'a> Narration<'a> {
    pub fn off() -> Self {
        Self { sink: None }
    }

    pub fn to(sink: &'a mut dyn Write) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn line(&mut self, depth: usize, message: &str) {
        if let Some(sink) = self.sink.as_mut() {
            for _ in 0..depth {
                let _ = write!(sink, "\t");
            }
            let _ = writeln!(sink, "{}", message);
        }
    }
}

/// Complete record of one played round, as written to history files.
/// Serialized to JSONL format, one record per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN).
    pub round_id: String,
    /// RNG seed the game was created with (enables deterministic replay).
    pub seed: Option<u64>,
    /// Roster names, indexed by player id.
    pub players: Vec<String>,
    /// The full round tree: halves, mini-rounds, turns.
    pub round: Round,
    /// Timestamp when the record was written (RFC3339 format).
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`RoundRecord`]s to a JSONL history file. The writer is
/// buffered and flushed per record so partially written games remain
/// readable.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Id-only logger without a backing file, for tests.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut record = record.clone();
        if record.ts.is_none() {
            record.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
        if let Some(writer) = &mut self.writer {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        Ok(())
    }
}
