use std::fmt::{self, Write as _};

use colored::*;
use eonmap_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

pub const PRINT_TARGET: &str = "eonmap::print";

/// Installs the global subscriber. Everything goes to stderr so stdout carries only
/// the report.
pub fn init_logging(cfg: &Config) {
    let directive = match (cfg.verbose, cfg.quiet) {
        (true, _) => "debug",
        (false, 0 | 1) => "info",
        (false, _) => "error",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .event_format(EonmapFormatter)
        .init();
}

pub struct EonmapFormatter;

impl<S, N> FormatEvent<S, N> for EonmapFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if let Some(raw) = fields.raw_msg {
            return writeln!(writer, "{raw}");
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (*meta.level(), fields.status.as_deref()) {
                (Level::INFO, Some("success")) => ("[+]", |s| s.green().bold()),
                (Level::TRACE, _) => ("[ ]", |s| s.dimmed()),
                (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                (Level::INFO, _) => ("[*]", |s| s.cyan().bold()),
                (Level::WARN, _) => ("[!]", |s| s.yellow().bold()),
                (Level::ERROR, _) => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} {}", color_func(symbol.into()), fields.message)?;
        if !fields.extra.is_empty() {
            write!(writer, " {}", fields.extra.as_str().dimmed())?;
        }

        writeln!(writer)
    }
}

/// Splits an event into its message, the formatter's control fields and the rest.
#[derive(Default)]
struct EventFields {
    message: String,
    raw_msg: Option<String>,
    status: Option<String>,
    extra: String,
}

impl EventFields {
    fn push_extra(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.extra.is_empty() {
            self.extra.push(' ');
        }
        let _ = write!(self.extra, "{}={}", field.name(), value);
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            _ => self.push_extra(field, format_args!("{value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "raw_msg" => self.raw_msg = Some(format!("{value:?}")),
            "status" => self.status = Some(format!("{value:?}")),
            _ => self.push_extra(field, format_args!("{value:?}")),
        }
    }
}
