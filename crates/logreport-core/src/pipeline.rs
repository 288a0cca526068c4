use crate::Result;
use crate::filter::DateFilter;
use crate::record::RecordReader;
use crate::report::{self, Report};
use std::path::PathBuf;

/// Everything one run needs: where to read, what to build, which day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub files: Vec<PathBuf>,
    pub report: String,
    pub date: Option<String>,
}

impl ReportRequest {
    pub fn new(files: Vec<PathBuf>, report: impl Into<String>) -> Self {
        Self {
            files,
            report: report.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Load, filter and aggregate in one pass.
///
/// The strategy is resolved before any file is touched. A file that cannot
/// be read fails the run and no report is produced.
pub fn generate_report(request: &ReportRequest) -> Result<Report> {
    let strategy = report::lookup(&request.report)?;

    let records = RecordReader::from_files(&request.files)?;
    let loaded = records.len();

    let records = DateFilter::parse(request.date.as_deref()).apply(records);
    tracing::debug!(
        "Generating '{}' report from {} of {} records",
        strategy.name(),
        records.len(),
        loaded
    );

    strategy.report(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::report::Cell;
    use std::fs;
    use tempfile::TempDir;

    fn two_files(dir: &TempDir) -> Vec<PathBuf> {
        let a = dir.path().join("a.log");
        let b = dir.path().join("b.log");
        fs::write(
            &a,
            "{\"url\":\"/a\",\"response_time\":\"1.0\",\"@timestamp\":\"2024-01-01T10:00:00\"}\n",
        )
        .unwrap();
        fs::write(
            &b,
            "{\"url\":\"/a\",\"response_time\":2.0,\"@timestamp\":\"2024-01-02T10:00:00\"}\n",
        )
        .unwrap();
        vec![a, b]
    }

    #[test]
    fn test_report_across_files() {
        let dir = TempDir::new().unwrap();
        let request = ReportRequest::new(two_files(&dir), "average");

        let report = generate_report(&request).unwrap();

        assert_eq!(
            report.rows(),
            &[vec![Cell::from("/a"), Cell::from(2u64), Cell::from("1.500")]]
        );
    }

    #[test]
    fn test_report_for_single_date() {
        let dir = TempDir::new().unwrap();
        let request = ReportRequest::new(two_files(&dir), "average").with_date("2024-01-01");

        let report = generate_report(&request).unwrap();

        assert_eq!(
            report.rows(),
            &[vec![Cell::from("/a"), Cell::from(1u64), Cell::from("1.000")]]
        );
    }

    #[test]
    fn test_malformed_date_matches_no_date() {
        let dir = TempDir::new().unwrap();
        let files = two_files(&dir);

        let unfiltered = generate_report(&ReportRequest::new(files.clone(), "average")).unwrap();
        let malformed =
            generate_report(&ReportRequest::new(files, "average").with_date("not-a-date")).unwrap();

        assert_eq!(unfiltered, malformed);
    }

    #[test]
    fn test_unknown_report_fails_before_reading() {
        let request = ReportRequest::new(vec![PathBuf::from("/nonexistent/x.log")], "median");

        assert!(matches!(
            generate_report(&request),
            Err(Error::UnknownReport(_))
        ));
    }

    #[test]
    fn test_missing_file_fails_the_run() {
        let dir = TempDir::new().unwrap();
        let mut files = two_files(&dir);
        files.push(dir.path().join("missing.log"));

        let result = generate_report(&ReportRequest::new(files, "average"));

        assert!(matches!(result, Err(Error::Read { .. })));
    }
}
