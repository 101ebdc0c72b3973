use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use schocken_engine::logger::RoundRecord;

use crate::error::CliError;

/// Aggregates statistics from a JSONL round-history file.
///
/// Malformed lines are skipped with a warning on the error stream. The
/// command fails if the file cannot be read or contains no valid records.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let file = File::open(input)?;
    let reader = BufReader::new(file);

    let mut rounds_lost: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_rounds = 0u32;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: RoundRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(parse_err) => {
                let _ = writeln!(
                    err,
                    "Warning: skipping malformed record on line {}: {}",
                    line_no + 1,
                    parse_err
                );
                continue;
            }
        };
        total_rounds += 1;
        let loser_index = record.round.lost_by.0 as usize;
        let loser = record
            .players
            .get(loser_index)
            .cloned()
            .unwrap_or_else(|| record.round.lost_by.to_string());
        *rounds_lost.entry(loser).or_insert(0) += 1;
    }

    if total_rounds == 0 {
        return Err(CliError::InvalidInput(format!(
            "no valid round records in {}",
            input
        )));
    }

    writeln!(out, "Rounds analyzed: {}", total_rounds)?;
    writeln!(out, "Rounds lost per player:")?;
    for (name, count) in &rounds_lost {
        writeln!(out, "  {}: {}", name, count)?;
    }
    Ok(())
}
