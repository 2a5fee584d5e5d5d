//! `typelore` - evaluate the declarations and print a report.
//!
//! ```text
//! typelore [--text | --json] [--y-calls N] [NAME...]
//! ```
//!
//! `NAME` restricts the report to the named declarations (`absurd`, `unit`,
//! `x`, `y`). Flags override `TYPELORE_FORMAT`, which overrides
//! `~/.typelore/config.toml`.

mod report;

use std::env;
use std::io::{Write, stderr, stdout};

use anyhow::{Context, Result, bail};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use typelore_config::{LoreConfig, MAX_Y_CALLS, OutputFormat, Settings};
use typelore_types::Declaration;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Stdout carries the report; logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(stderr).with_target(false))
        .with(env_filter)
        .init();
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Overrides {
    format: Option<OutputFormat>,
    y_calls: Option<usize>,
    declarations: Vec<Declaration>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Overrides> {
    let mut overrides = Overrides::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => overrides.format = Some(OutputFormat::Json),
            "--text" => overrides.format = Some(OutputFormat::Text),
            "--y-calls" => {
                let raw = args.next().context("--y-calls needs a value")?;
                let count: usize = raw
                    .parse()
                    .with_context(|| format!("invalid --y-calls value: {raw}"))?;
                if count > MAX_Y_CALLS {
                    bail!("--y-calls {count} exceeds the maximum of {MAX_Y_CALLS}");
                }
                overrides.y_calls = Some(count);
            }
            other if other.starts_with('-') => bail!("unknown argument: {other}"),
            name => {
                let decl = Declaration::from_name(name)
                    .with_context(|| format!("unknown declaration: {name}"))?;
                if !overrides.declarations.contains(&decl) {
                    overrides.declarations.push(decl);
                }
            }
        }
    }
    Ok(overrides)
}

/// Flags > env > config file > defaults.
fn effective_settings(
    overrides: &Overrides,
    config: Option<&LoreConfig>,
    env_format: Option<OutputFormat>,
) -> Settings {
    let mut settings = Settings::resolve_with(config, env_format);
    if let Some(format) = overrides.format {
        settings.format = format;
    }
    if let Some(y_calls) = overrides.y_calls {
        settings.y_calls = y_calls;
    }
    settings
}

fn main() -> Result<()> {
    init_tracing();

    let overrides = parse_args(env::args().skip(1))?;
    let config = LoreConfig::load();
    let settings = effective_settings(&overrides, config.as_ref(), OutputFormat::from_env());
    tracing::debug!(?settings, "Resolved settings");

    let entries = if overrides.declarations.is_empty() {
        report::collect(&Declaration::ALL, settings.y_calls)
    } else {
        report::collect(&overrides.declarations, settings.y_calls)
    };
    let rendered = match settings.format {
        OutputFormat::Text => report::render_text(&entries),
        OutputFormat::Json => {
            let mut json = report::render_json(&entries).context("serializing report")?;
            json.push('\n');
            json
        }
    };

    stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("writing report")?;
    Ok(())
}
