use crate::table;
use anyhow::{Context, Result};
use logreport_core::pipeline::{self, ReportRequest};
use logreport_core::report::Report;
use std::io::{self, Write};

/// Build the requested report without printing it
pub fn build_report(request: &ReportRequest) -> Result<Report> {
    tracing::debug!(
        "Building '{}' report from {} file(s)",
        request.report,
        request.files.len()
    );

    pipeline::generate_report(request)
        .with_context(|| format!("Failed to generate '{}' report", request.report))
}

pub fn execute(request: &ReportRequest) -> Result<()> {
    if let Some(date) = &request.date {
        tracing::debug!("Restricting records to {}", date);
    }

    // Nothing is printed unless the whole report was built
    let report = build_report(request)?;

    let rendered = table::render_grid(report.headers(), report.rows());
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;

    tracing::debug!("Printed {} report rows", report.rows().len());

    Ok(())
}
