use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::score::ScoreReport;
use crate::session::SessionConfig;

/// One scored session as stored in the history file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub date: DateTime<Local>,
    pub duration: String,
    pub difficulty: String,
    pub elapsed_secs: f64,
    pub words: usize,
    pub wpm: f64,
    pub matched: bool,
    pub completed: bool,
}

impl HistoryRecord {
    pub fn new(session: &SessionConfig, report: &ScoreReport) -> Self {
        Self {
            date: Local::now(),
            duration: session.duration.to_string(),
            difficulty: session.difficulty.to_string(),
            elapsed_secs: report.elapsed_secs,
            words: report.word_count,
            wpm: (report.wpm * 100.0).round() / 100.0,
            matched: report.matched,
            completed: report.completed_before_deadline,
        }
    }
}

/// Append-only CSV log of results
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &HistoryRecord) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // If the file doesn't exist yet, we need to emit a header
        let needs_header = !self.path.exists();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_all(&self) -> crate::Result<Vec<HistoryRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader
            .deserialize()
            .collect::<Result<Vec<HistoryRecord>, _>>()?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SessionResult;
    use crate::score::score;
    use crate::session::resolve;
    use tempfile::tempdir;

    fn record(text: &str, elapsed_millis: u64) -> HistoryRecord {
        let session = resolve("30 seconds", "Basic sentences");
        let result = SessionResult {
            elapsed_millis,
            submitted_text: text.to_string(),
            completed_before_deadline: text == session.reference_text,
        };
        let report = score(&result, &session.reference_text);
        HistoryRecord::new(&session, &report)
    }

    #[test]
    fn test_first_append_writes_header() {
        let dir = tempdir().unwrap();
        let log = ResultLog::with_path(dir.path().join("history.csv"));

        log.append(&record("The quick brown fox", 30_000)).unwrap();

        let text = fs::read_to_string(log.path()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("date,duration,difficulty,elapsed_secs,words,wpm,matched,completed")
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_appends_accumulate_without_repeating_header() {
        let dir = tempdir().unwrap();
        let log = ResultLog::with_path(dir.path().join("state").join("history.csv"));

        log.append(&record("The quick brown fox", 30_000)).unwrap();
        log.append(&record("The quick brown fox jumps over the lazy dog", 12_000))
            .unwrap();

        let text = fs::read_to_string(log.path()).unwrap();
        assert_eq!(text.matches("date,duration").count(), 1);

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert!(!records[0].matched);
        assert_eq!(records[0].wpm, 8.0);
        assert!(records[1].matched);
        assert!(records[1].completed);
        assert_eq!(records[1].wpm, 45.0);
        assert_eq!(records[1].duration, "30 seconds");
    }

    #[test]
    fn test_wpm_is_rounded_to_cents() {
        let r = record("The quick brown", 7_000);
        assert_eq!(r.wpm, 25.71);
    }
}
