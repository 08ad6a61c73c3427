#![cfg(feature = "std")]

//! Writing and reading training records.

use std::io::{BufRead, Read, Write};

use anyhow::Context;

/// On-disk encoding of a batch of training records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// One JSON array per line.
    Jsonl,
    /// The whole batch as a single bincode `Vec<Vec<i8>>`.
    Bincode,
}

pub fn write_records<W: Write>(
    mut writer: W,
    records: &[Vec<i8>],
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writer.write_all(b"\n")?;
            }
        }
        Format::Bincode => {
            bincode::serialize_into(&mut writer, records)?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn read_jsonl<R: BufRead>(reader: R) -> anyhow::Result<Vec<Vec<i8>>> {
    let mut records = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("malformed record on line {}", n + 1))?;
        records.push(record);
    }
    Ok(records)
}

pub fn read_bincode<R: Read>(reader: R) -> anyhow::Result<Vec<Vec<i8>>> {
    Ok(bincode::deserialize_from(reader)?)
}
