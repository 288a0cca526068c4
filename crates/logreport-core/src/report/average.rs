use super::{Cell, ReportStrategy, SummaryRow};
use crate::record::Record;
use indexmap::IndexMap;
use serde_json::Value;

/// Field used as the grouping key
pub const URL_FIELD: &str = "url";

/// Field holding the request duration
pub const RESPONSE_TIME_FIELD: &str = "response_time";

/// Request count and mean response time per endpoint.
///
/// Rows come out in the order endpoints were first seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageResponseTime;

impl AverageResponseTime {
    pub const NAME: &'static str = "average";
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct EndpointStats {
    count: u64,
    total_time: f64,
}

impl EndpointStats {
    fn observe(&mut self, response_time: f64) {
        self.count += 1;
        self.total_time += response_time;
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total_time / self.count as f64
    }
}

impl ReportStrategy for AverageResponseTime {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn headers(&self) -> Vec<String> {
        ["Endpoint", "Requests Count", "Average Response Time"]
            .iter()
            .map(|h| h.to_string())
            .collect()
    }

    fn generate(&self, records: &[Record]) -> Vec<SummaryRow> {
        tracing::debug!("Computing average response time per endpoint");

        let mut endpoints: IndexMap<&str, EndpointStats> = IndexMap::new();
        let mut skipped = 0usize;

        for record in records {
            let Some((endpoint, response_time)) = observation(record) else {
                skipped += 1;
                continue;
            };

            endpoints.entry(endpoint).or_default().observe(response_time);
        }

        if skipped > 0 {
            tracing::debug!(
                "Skipped {} record(s) without a usable url or response_time",
                skipped
            );
        }

        tracing::info!(
            "Average report complete: {} endpoints from {} records",
            endpoints.len(),
            records.len() - skipped
        );

        endpoints
            .into_iter()
            .map(|(endpoint, stats)| {
                vec![
                    Cell::from(endpoint),
                    Cell::from(stats.count),
                    Cell::Text(format!("{:.3}", stats.average())),
                ]
            })
            .collect()
    }
}

/// Pull the endpoint and response time out of a record, if both are usable
fn observation(record: &Record) -> Option<(&str, f64)> {
    let endpoint = record.get_str(URL_FIELD)?;
    let response_time = record.get(RESPONSE_TIME_FIELD).and_then(as_number)?;
    Some((endpoint, response_time))
}

/// Interpret a JSON value as a number the way log producers tend to emit it.
///
/// Numbers are taken as-is, strings are trimmed and parsed, booleans count
/// as 1 and 0. Null, arrays and objects are not numbers.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
