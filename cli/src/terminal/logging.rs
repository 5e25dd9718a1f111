use colored::*;
use solid_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::colors;

/// Events on this target are printed verbatim, without a status glyph.
pub const PRINT_TARGET: &str = "solid::print";

pub struct SolidFormatter;

impl<S, N> FormatEvent<S, N> for SolidFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            write!(writer, "{} ", glyph(meta.level()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Status marker written in front of every non-print event.
fn glyph(level: &Level) -> ColoredString {
    match *level {
        Level::ERROR => "[-]".color(colors::FAILURE).bold(),
        Level::WARN => "[*]".color(colors::WARNING).bold(),
        Level::INFO => "[+]".color(colors::PRIMARY).bold(),
        Level::DEBUG => "[?]".color(colors::ACCENT),
        Level::TRACE => "[ ]".color(colors::SEPARATOR),
    }
}

fn default_filter(cfg: &Config) -> EnvFilter {
    EnvFilter::new(format!("{},{PRINT_TARGET}=info", cfg.log_directive()))
}

pub fn init_logging(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(cfg));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(SolidFormatter)
        .init();
}
