//! Ingestion of PARAMETER files into a [`Store`].

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::assignment::{classify, trim_line};
use super::lines::LineScanner;
use crate::error::{BenchEnvError, Result};
use crate::store::Store;

/// What happened to the lines of one ingested file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub lines: usize,
    /// Assignments put into the store.
    pub accepted: usize,
    /// Lines that are not assignments at all.
    pub skipped: usize,
    /// Assignments whose value was not well quoted.
    pub rejected: usize,
}

/// Scans `content` and puts every accepted assignment into `store`.
pub fn ingest_bytes(store: &mut Store, content: &[u8]) -> IngestReport {
    let mut report = IngestReport::default();

    for (index, raw) in LineScanner::new(content).enumerate() {
        report.lines += 1;
        let line = trim_line(&raw);

        match classify(line) {
            Ok(assignment) => {
                let previous = store.put(assignment.name, assignment.value);
                debug!(
                    line = index + 1,
                    key = assignment.name,
                    overwritten = previous.is_some(),
                    "accepted assignment"
                );
                report.accepted += 1;
            }
            Err(reason) if reason.is_skip() => {
                report.skipped += 1;
            }
            Err(reason) => {
                debug!(line = index + 1, %reason, "rejected assignment");
                report.rejected += 1;
            }
        }
    }

    report
}

/// Reads a PARAMETER file and adds its variables to `store`.
///
/// Fails without touching the store when the file is missing or unreadable.
/// Individual malformed lines never fail the ingestion.
pub fn read_parameter_file(store: &mut Store, path: impl AsRef<Path>) -> Result<IngestReport> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() || !path.exists() {
        warn!(path = %path.display(), "PARAMETER file doesn't exist");
        return Err(BenchEnvError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read(path).map_err(|source| BenchEnvError::ParameterRead {
        path: path.to_path_buf(),
        source,
    })?;

    let report = ingest_bytes(store, &content);
    info!(
        path = %path.display(),
        lines = report.lines,
        accepted = report.accepted,
        rejected = report.rejected,
        "read PARAMETER file"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingests_mixed_content() {
        let mut store = Store::new();
        let content = b"# kernel settings\r\n\
            BENCHIT_KERNEL_MIN=32000\r\n\
            BENCHIT_KERNEL_COMMENT='single threaded'\n\
            BENCHIT_KERNEL_BAD='open\n\
            benchit_lower=1\n\
            BENCHIT_HOME=$HOME\n\
            \n\
              BENCHIT_KERNEL_CPU_LIST=\"0,1,4\"   ";

        let report = ingest_bytes(&mut store, content);

        assert_eq!(
            report,
            IngestReport { lines: 8, accepted: 3, skipped: 4, rejected: 1 }
        );
        assert_eq!(store.get("BENCHIT_KERNEL_MIN"), Some("32000"));
        assert_eq!(store.get("BENCHIT_KERNEL_COMMENT"), Some("'single threaded'"));
        assert_eq!(store.get("BENCHIT_KERNEL_CPU_LIST"), Some("\"0,1,4\""));
        assert_eq!(store.get("BENCHIT_KERNEL_BAD"), None);
        assert_eq!(store.get("benchit_lower"), None);
        assert_eq!(store.get("BENCHIT_HOME"), None);
    }

    #[test]
    fn later_lines_overwrite_earlier_ones() {
        let mut store = Store::new();
        store.put("BENCHIT_KERNEL_RUNS", "6");
        ingest_bytes(&mut store, b"BENCHIT_KERNEL_RUNS=2\nBENCHIT_KERNEL_RUNS=3\n");
        assert_eq!(store.get("BENCHIT_KERNEL_RUNS"), Some("3"));
        assert_eq!(store.size(), Some(1));
    }

    #[test]
    fn unicode_spaces_are_not_trimmed() {
        let mut store = Store::new();
        let report = ingest_bytes(&mut store, "FOO=bar\u{a0}\n\u{3000}BAR=x\n".as_bytes());

        assert_eq!(report.accepted, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(store.get("FOO"), Some("bar\u{a0}"));
        assert_eq!(store.get("BAR"), None);
    }

    #[test]
    fn empty_content_reports_nothing() {
        let mut store = Store::new();
        assert_eq!(ingest_bytes(&mut store, b""), IngestReport::default());
        assert_eq!(store.size(), None);
    }

    #[test]
    fn empty_path_is_file_not_found() {
        let mut store = Store::new();
        let err = read_parameter_file(&mut store, "").unwrap_err();
        assert!(matches!(err, BenchEnvError::FileNotFound(_)));
    }
}
