//! Delimited-text record source.
//!
//! [`CsvSource`] yields the raw rows of a file in order, header excluded.
//! [`load_records`] turns those rows into [`MatchRecord`]s under a
//! [`MalformedPolicy`].
//!
//! Rows go through the `csv` reader, so blank lines are skipped rather than
//! reported as malformed, and quoted fields are unquoted (`"A, B"` is one
//! field holding `A, B`).

use crate::error::{LoadError, RecordError};
use crate::MatchRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// What to do with a row that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole load on the first bad row.
    #[default]
    Abort,
    /// Log a warning, drop the row and keep going.
    Skip,
}

/// One data row, split into fields but not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based source line; the header is line 1.
    pub line: u64,
    pub fields: Vec<String>,
}

/// Row counts from one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows: usize,
    pub parsed: usize,
    pub skipped: usize,
}

/// Reader over a delimited file with exactly one header row.
pub struct CsvSource<R> {
    reader: csv::Reader<R>,
    origin: PathBuf,
}

impl CsvSource<File> {
    /// Open `path` for reading.
    pub fn open(path: &Path, delimiter: u8) -> Result<Self, LoadError> {
        let reader = builder(delimiter)
            .from_path(path)
            .map_err(|source| LoadError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            reader,
            origin: path.to_path_buf(),
        })
    }
}

impl<R: Read> CsvSource<R> {
    /// Read rows from any byte source, e.g. an in-memory buffer.
    pub fn from_reader(reader: R, delimiter: u8) -> Self {
        Self {
            reader: builder(delimiter).from_reader(reader),
            origin: PathBuf::from("<reader>"),
        }
    }

    /// Where rows are read from, for messages.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Data rows in file order. The header row is consumed, never yielded.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<RawRow, LoadError>> + '_ {
        let origin = self.origin.clone();
        let mut next_line = 2;
        self.reader.records().map(move |result| {
            let line = next_line;
            next_line += 1;
            match result {
                Ok(record) => {
                    let line = record.position().map_or(line, |p| p.line());
                    next_line = line + 1;
                    Ok(RawRow {
                        line,
                        fields: record.iter().map(str::to_string).collect(),
                    })
                }
                Err(err) => {
                    if let csv::ErrorKind::Utf8 { pos, .. } = err.kind() {
                        let line = pos.as_ref().map_or(line, |p| p.line());
                        return Err(RecordError::Encoding { line }.into());
                    }
                    Err(LoadError::SourceUnavailable {
                        path: origin.clone(),
                        source: err,
                    })
                }
            }
        })
    }
}

fn builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Field counts are checked by the record parser, not the reader.
    builder
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::None);
    builder
}

/// Parse every row from `source` into records.
///
/// Under [`MalformedPolicy::Abort`] the first bad row fails the load. Under
/// [`MalformedPolicy::Skip`] bad rows are logged and counted in
/// [`LoadStats::skipped`]. Source I/O failures abort under either policy.
pub fn load_records<R: Read>(
    source: &mut CsvSource<R>,
    policy: MalformedPolicy,
) -> Result<(Vec<MatchRecord>, LoadStats), LoadError> {
    let mut records = Vec::new();
    let mut stats = LoadStats::default();

    for row in source.rows() {
        let parsed = row.and_then(|row| {
            MatchRecord::from_fields(row.line, &row.fields).map_err(LoadError::from)
        });
        stats.rows += 1;
        match parsed {
            Ok(record) => {
                stats.parsed += 1;
                records.push(record);
            }
            Err(LoadError::Malformed(err)) if policy == MalformedPolicy::Skip => {
                log::warn!("skipping row: {err}");
                stats.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    log::debug!(
        "{} rows read, {} parsed, {} skipped",
        stats.rows,
        stats.parsed,
        stats.skipped
    );
    Ok((records, stats))
}

/// Open `path` and load all records from it.
pub fn load_path(
    path: &Path,
    delimiter: u8,
    policy: MalformedPolicy,
) -> Result<(Vec<MatchRecord>, LoadStats), LoadError> {
    log::info!("loading records from {}", path.display());
    let mut source = CsvSource::open(path, delimiter)?;
    let (records, stats) = load_records(&mut source, policy)?;
    log::info!("loaded {} records", records.len());
    Ok((records, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "date,time,home,away,homeGoals,awayGoals,info\n";

    fn load_str(text: &str, policy: MalformedPolicy) -> Result<(Vec<MatchRecord>, LoadStats), LoadError> {
        let mut source = CsvSource::from_reader(text.as_bytes(), b',');
        load_records(&mut source, policy)
    }

    #[test]
    fn test_header_is_skipped() {
        let text = format!("{HEADER}16.08.2019,20:30,A,B,2,2,BUNDESLIGA\n");
        let (records, stats) = load_str(&text, MalformedPolicy::Abort).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].home_team(), "A");
        assert_eq!(
            stats,
            LoadStats {
                rows: 1,
                parsed: 1,
                skipped: 0
            }
        );
    }

    #[test]
    fn test_header_only_is_empty() {
        let (records, stats) = load_str(HEADER, MalformedPolicy::Abort).unwrap();
        assert!(records.is_empty());
        assert_eq!(stats.rows, 0);
    }

    #[test]
    fn test_rows_report_line_numbers() {
        let text = format!("{HEADER}a,b,c,d,1,2,x\ne,f,g,h,3,4,y\n");
        let mut source = CsvSource::from_reader(text.as_bytes(), b',');
        let lines: Vec<u64> = source.rows().map(|r| r.unwrap().line).collect();
        assert_eq!(lines, vec![2, 3]);
    }

    #[test]
    fn test_abort_on_malformed() {
        let text = format!("{HEADER}d,t,A,B,1,0,X\nd,t,A,B,x,0,X\nd,t,A,B,1,0,X\n");
        let err = load_str(&text, MalformedPolicy::Abort).unwrap_err();
        match err {
            LoadError::Malformed(e) => assert_eq!(e.line(), 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skip_malformed() {
        let text = format!("{HEADER}d,t,A,B,1,0,X\nd,t,A,B\nd,t,C,D,2,0,X\n");
        let (records, stats) = load_str(&text, MalformedPolicy::Skip).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].home_team(), "C");
        assert_eq!(
            stats,
            LoadStats {
                rows: 3,
                parsed: 2,
                skipped: 1
            }
        );
    }

    #[test]
    fn test_invalid_utf8_row() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"d,t,A,B,1,0,X\n");
        bytes.extend_from_slice(b"d,t,\xff\xfe,B,1,0,X\n");
        bytes.extend_from_slice(b"d,t,C,D,2,0,X\n");

        let mut source = CsvSource::from_reader(bytes.as_slice(), b',');
        let (records, stats) = load_records(&mut source, MalformedPolicy::Skip).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            stats,
            LoadStats {
                rows: 3,
                parsed: 2,
                skipped: 1
            }
        );

        let mut source = CsvSource::from_reader(bytes.as_slice(), b',');
        let err = load_records(&mut source, MalformedPolicy::Abort).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Malformed(RecordError::Encoding { line: 3 })
        ));
        assert_eq!(
            err.to_string(),
            "malformed record: line 3: row is not valid UTF-8"
        );
    }

    #[test]
    fn test_blank_lines_and_quotes() {
        let text = format!("{HEADER}d,t,A,B,1,0,X\n\nd,t,\"C, Jr.\",D,2,0,X\n");
        let (records, stats) = load_str(&text, MalformedPolicy::Abort).unwrap();
        assert_eq!(stats.rows, 2);
        assert_eq!(records[1].home_team(), "C, Jr.");
    }

    #[test]
    fn test_semicolon_delimiter() {
        let text = "date;time;home;away;hg;ag;info\nd;t;A;B;1;0;X\n";
        let mut source = CsvSource::from_reader(text.as_bytes(), b';');
        let (records, _) = load_records(&mut source, MalformedPolicy::Abort).unwrap();
        assert_eq!(records[0].away_team(), "B");
    }

    #[test]
    fn test_load_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{HEADER}d,18:30,A,B,0,1,BUNDESLIGA\n").unwrap();
        let (records, stats) = load_path(file.path(), b',', MalformedPolicy::Abort).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(stats.parsed, 1);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("games.csv");
        let err = load_path(&missing, b',', MalformedPolicy::Skip).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_malformed_policy_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: MalformedPolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"skip\"").unwrap();
        assert_eq!(w.policy, MalformedPolicy::Skip);
    }
}
