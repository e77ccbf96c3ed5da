//! Output formatting for command results.
//!
//! Every subcommand prints through [`OutputFormat`] so text, rich and JSON
//! renderings stay consistent.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use roadplanner_lib::{RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain human-readable text.
    #[default]
    Text,
    /// Markdown-flavoured text with per-leg distances.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// Result of seeding the road network database.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeedOutput {
    pub database: String,
    pub routes: usize,
}

/// Cities known to the loaded road network.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CitiesOutput {
    pub count: usize,
    pub cities: Vec<String>,
}

impl OutputFormat {
    /// Print a planned route.
    pub fn render_route(self, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => emit(&summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Rich => emit(&summary.render(RouteRenderMode::RichText)),
            OutputFormat::Json => {
                let json = summary.to_json().context("failed to serialise route")?;
                emit_line(&json)
            }
        }
    }

    /// Print the outcome of a seed run.
    pub fn render_seed(self, output: &SeedOutput) -> Result<()> {
        match self {
            OutputFormat::Text | OutputFormat::Rich => emit_line(&format!(
                "Seeded {} routes into {}",
                output.routes, output.database
            )),
            OutputFormat::Json => emit_json(output),
        }
    }

    /// Print the list of cities.
    pub fn render_cities(self, output: &CitiesOutput) -> Result<()> {
        match self {
            OutputFormat::Text => {
                let mut text = format!("{} cities:\n", output.count);
                for city in &output.cities {
                    text.push_str(city);
                    text.push('\n');
                }
                emit(&text)
            }
            OutputFormat::Rich => {
                let mut text = format!("**{} cities**\n", output.count);
                for city in &output.cities {
                    text.push_str(&format!("* {city}\n"));
                }
                emit(&text)
            }
            OutputFormat::Json => emit_json(output),
        }
    }
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    emit_line(&json)
}

fn emit_line(line: &str) -> Result<()> {
    emit(&format!("{line}\n"))
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")
}
