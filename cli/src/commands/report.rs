use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use eonmap_common::{config::Config, info, success, warn};
use eonmap_core::report::{Report, ReportSummary};
use eonmap_core::service::ReportService;
use eonmap_core::source::DirectorySource;

use crate::{mprint, terminal::{colors, print}};

pub fn report(directory: &Path, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    info!("Reading inventory from {}", directory.display());

    let service = ReportService::new(Box::new(DirectorySource::new(directory)));
    let report: Report = service
        .generate()
        .with_context(|| format!("failed to build report from '{}'", directory.display()))?;

    write_report(&report, io::stdout().lock()).context("failed to write report to stdout")?;

    report_ends(&report, start_time.elapsed(), cfg);
    Ok(())
}

/// The report goes out in a single write once every asset has been joined.
fn write_report(report: &Report, mut out: impl Write) -> io::Result<()> {
    if report.is_empty() {
        return Ok(());
    }

    out.write_all(report.render().as_bytes())?;
    out.flush()
}

fn report_ends(report: &Report, total_time: Duration, cfg: &Config) {
    let summary: &ReportSummary = &report.summary;

    if summary.malformed() > 0 {
        warn!("{} malformed records were skipped", summary.malformed());
    }

    if report.is_empty() {
        warn!("No matching assets found");
    }

    if cfg.quiet == 0 {
        print::header("Inventory Summary", cfg.quiet);
        print_summary(summary);
    }
    print_footer(report.lines.len(), total_time, cfg);
}

fn summary_rows(summary: &ReportSummary) -> [(&'static str, usize); 8] {
    [
        ("CMDB entries", summary.cmdb_entries),
        ("Deployment keys", summary.deployment_keys),
        ("Deployments skipped", summary.deployments_skipped),
        ("Assets read", summary.assets_read),
        ("Assets skipped", summary.assets_malformed),
        ("Without CMDB entry", summary.assets_without_cmdb),
        ("Without deployment", summary.assets_without_deployment),
        ("Assets matched", summary.assets_matched),
    ]
}

fn print_summary(summary: &ReportSummary) {
    let rows = summary_rows(summary);

    print::set_key_width(rows.iter().map(|(key, _)| *key));
    for (key, count) in rows {
        let value: ColoredString = if count == 0 {
            count.to_string().color(colors::TEXT_DEFAULT)
        } else {
            count.to_string().color(colors::ACCENT)
        };
        print::aligned_line(key, value);
    }
}

fn print_footer(lines_len: usize, total_time: Duration, cfg: &Config) {
    let lines: ColoredString = format!("{lines_len} report lines").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString =
        &format!("Report Complete: {lines} written in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
