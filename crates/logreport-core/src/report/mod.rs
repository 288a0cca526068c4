mod average;

pub use average::AverageResponseTime;

use crate::record::Record;
use crate::{Error, Result};
use std::fmt;

/// A single value in a report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(u64),
}

impl Cell {
    /// Whether the value reads as a number (used for column alignment)
    pub fn is_numeric(&self) -> bool {
        match self {
            Cell::Count(_) => true,
            Cell::Text(text) => text.parse::<f64>().is_ok(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Count(count) => write!(f, "{}", count),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<u64> for Cell {
    fn from(count: u64) -> Self {
        Cell::Count(count)
    }
}

/// One output row; its length always equals the strategy's header count.
pub type SummaryRow = Vec<Cell>;

/// Headers and rows produced by one strategy run
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    headers: Vec<String>,
    rows: Vec<SummaryRow>,
}

impl Report {
    /// Build a report, rejecting rows whose width differs from the headers
    pub fn new(headers: Vec<String>, rows: Vec<SummaryRow>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|row| row.len() != headers.len()) {
            return Err(Error::ReportShape {
                expected: headers.len(),
                found: row.len(),
            });
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A named aggregation turning records into report rows.
///
/// Implementations hold no state between runs: `generate` is a pure
/// function of its input and must tolerate records missing any field it
/// looks for.
pub trait ReportStrategy {
    /// Registry key, as accepted by `--report`
    fn name(&self) -> &'static str;

    /// Column titles, identical on every call
    fn headers(&self) -> Vec<String>;

    fn generate(&self, records: &[Record]) -> Vec<SummaryRow>;

    /// Generate rows and pair them with this strategy's headers
    fn report(&self, records: &[Record]) -> Result<Report> {
        Report::new(self.headers(), self.generate(records))
    }
}

type StrategyConstructor = fn() -> Box<dyn ReportStrategy>;

fn boxed<S: ReportStrategy + Default + 'static>() -> Box<dyn ReportStrategy> {
    Box::new(S::default())
}

/// Every report the tool can produce, keyed by name.
static REGISTRY: &[(&str, StrategyConstructor)] = &[(
    AverageResponseTime::NAME,
    boxed::<AverageResponseTime>,
)];

/// Names of all registered reports, in registration order
pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Instantiate the strategy registered under `name`
pub fn lookup(name: &str) -> Result<Box<dyn ReportStrategy>> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, constructor)| constructor())
        .ok_or_else(|| Error::UnknownReport(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_average() {
        assert_eq!(names(), vec!["average"]);

        let strategy = lookup("average").unwrap();
        assert_eq!(strategy.name(), "average");
    }

    #[test]
    fn test_registry_names_match_strategies() {
        for name in names() {
            assert_eq!(lookup(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_lookup_unknown_report() {
        match lookup("median") {
            Err(Error::UnknownReport(name)) => assert_eq!(name, "median"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("median should not be registered"),
        }
    }

    #[test]
    fn test_report_rejects_mismatched_rows() {
        let headers = vec!["A".to_string(), "B".to_string()];
        let rows = vec![vec![Cell::from("x")]];

        let result = Report::new(headers, rows);

        assert!(matches!(
            result,
            Err(Error::ReportShape {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_cell_display_and_numeric_detection() {
        assert_eq!(Cell::from(3u64).to_string(), "3");
        assert_eq!(Cell::from("1.500").to_string(), "1.500");
        assert!(Cell::from(3u64).is_numeric());
        assert!(Cell::from("1.500").is_numeric());
        assert!(!Cell::from("/api/users").is_numeric());
    }
}
