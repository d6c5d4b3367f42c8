//! Line-delimited JSON loading: a buffered line reader plus `read_json`,
//! which loads a whole file into memory as ordered records.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Minimal NDJSON line reader with buffering and `\r?\n` trimming.
pub struct NdjsonReader<R: BufRead> {
    rdr: R,
}

impl NdjsonReader<BufReader<File>> {
    pub fn open(path: &Path, buf_bytes: usize) -> io::Result<Self> {
        let f = File::open(path)?;
        Ok(Self { rdr: BufReader::with_capacity(buf_bytes.max(8 * 1024), f) })
    }
}

impl<R: BufRead> NdjsonReader<R> {
    pub fn new(rdr: R) -> Self {
        Self { rdr }
    }

    /// Fill `buf` with the next line, line terminator removed. `Ok(0)` means EOF;
    /// otherwise the raw byte count including the terminator.
    pub fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        let keep = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(keep);
        Ok(n)
    }
}

/// Load every record of a line-delimited JSON file.
///
/// Returns `(count, records)` where `count == records.len()`. Blank lines are
/// skipped; the first line that is not valid JSON aborts the whole load.
pub fn read_json(path: &Path) -> Result<(usize, Vec<Value>)> {
    read_json_buffered(path, 64 * 1024)
}

pub fn read_json_buffered(path: &Path, buf_bytes: usize) -> Result<(usize, Vec<Value>)> {
    let rdr = NdjsonReader::open(path, buf_bytes)
        .with_context(|| format!("open {}", path.display()))?;
    let out = read_records(rdr).with_context(|| format!("read {}", path.display()))?;
    tracing::info!(path = %path.display(), records = out.0, "Loaded tweets");
    Ok(out)
}

/// Same as [`read_json`] over any buffered reader.
pub fn read_json_from<R: BufRead>(rdr: R) -> Result<(usize, Vec<Value>)> {
    read_records(NdjsonReader::new(rdr))
}

fn read_records<R: BufRead>(mut rdr: NdjsonReader<R>) -> Result<(usize, Vec<Value>)> {
    let mut records = Vec::new();
    let mut line = String::new();
    let mut line_no = 0usize;
    while rdr.read_line(&mut line)? > 0 {
        line_no += 1;
        if line.trim().is_empty() { continue; }
        let v: Value = serde_json::from_str(&line)
            .with_context(|| format!("line {line_no}: invalid JSON"))?;
        records.push(v);
    }
    Ok((records.len(), records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn counts_match_records_and_skip_blank_lines() {
        let input = "{\"a\":1}\r\n\n{\"a\":2}\n{\"a\":3}\n";
        let (n, recs) = read_json_from(Cursor::new(input)).unwrap();
        assert_eq!(n, 3);
        assert_eq!(recs.len(), n);
        assert_eq!(recs[1]["a"], 2);
    }

    #[test]
    fn read_line_strips_terminators() {
        let mut rdr = NdjsonReader::new(Cursor::new("ab\r\ncd\nef"));
        let mut buf = String::new();
        assert_eq!(rdr.read_line(&mut buf).unwrap(), 4);
        assert_eq!(buf, "ab");
        assert_eq!(rdr.read_line(&mut buf).unwrap(), 3);
        assert_eq!(buf, "cd");
        assert_eq!(rdr.read_line(&mut buf).unwrap(), 2);
        assert_eq!(buf, "ef");
        assert_eq!(rdr.read_line(&mut buf).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn bad_line_aborts_with_line_number() {
        let input = "{\"a\":1}\n{not json}\n{\"a\":3}\n";
        let err = read_json_from(Cursor::new(input)).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "got: {err:#}");
    }

    #[test]
    fn empty_input_is_zero_records() {
        let (n, recs) = read_json_from(Cursor::new("")).unwrap();
        assert_eq!(n, 0);
        assert!(recs.is_empty());
    }
}
