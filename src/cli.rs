//! Command-line surface: argument parsing and the headless commands.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::api::{InputMode, MoodInterval, ProgressCallback, SummaryClient, SummaryResult};
use crate::config::Config;
use crate::popup::{PopupController, PopupSurface};
use crate::ui::form::{FormController, FormIntent};
use crate::youtube::{FixedTab, OembedClient, TAB_URL_ENV};

#[derive(Debug, Parser)]
#[command(name = "summarizer", version, about = "Summarize text, PDFs and YouTube videos")]
pub struct Cli {
    /// Config file (default: ~/.config/summarizer/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the summarization backend base URL (beats SUMMARIZER_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive form (default)
    Form,

    /// Summarize TEXT, or stdin when absent
    Text { text: Option<String> },

    /// Summarize a PDF (10 MB limit)
    Pdf { path: PathBuf },

    /// Summarize a YouTube video by URL, falling back to the active tab
    Youtube {
        url: Option<String>,

        #[command(flatten)]
        tab: TabArgs,
    },

    /// Summarize the active tab if it is a YouTube watch page
    Open {
        #[command(flatten)]
        tab: TabArgs,
    },

    /// Check that the backend is up
    Health,
}

#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct TabArgs {
    /// URL of the page currently open in the browser
    #[arg(long, value_name = "URL", env = TAB_URL_ENV)]
    pub tab_url: Option<String>,

    /// Ask for per-interval mood analysis
    #[arg(long)]
    pub mood: bool,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Form)
    }

    /// Load the config file and apply env and flag overrides, in that order.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.apply_env_overrides();
        config.override_api_url(self.api_url.clone());
        config.validate()?;
        Ok(config)
    }
}

/// Popup surface printing status lines to `err` and the output to `out`.
pub struct ConsoleSurface<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> ConsoleSurface<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> PopupSurface for ConsoleSurface<O, E> {
    fn set_title(&mut self, title: Option<&str>) {
        if let Some(title) = title {
            let _ = writeln!(self.err, "{}", title);
        }
    }

    fn set_status(&mut self, status: &str) {
        let _ = writeln!(self.err, "{}", status);
    }

    fn set_output(&mut self, output: &str) {
        if !output.is_empty() {
            let _ = writeln!(self.out, "{}", output);
        }
    }
}

/// Run a headless command. Returns whether it ended in success.
pub async fn execute(command: Command, config: &Config) -> anyhow::Result<bool> {
    let client = SummaryClient::new(config.backend.clone())?;
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    match command {
        Command::Form => anyhow::bail!("the interactive form is not a headless command"),
        Command::Health => match client.health().await {
            Ok(message) => {
                writeln!(out, "{}", message)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(err, "{} unreachable: {}", client.base_url(), e)?;
                Ok(false)
            }
        },
        Command::Text { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read text from stdin")?;
                    buf
                }
            };
            let mut form = FormController::new();
            form.dispatch(FormIntent::SetText(text));
            run_form(&mut form, &client, &mut out, &mut err).await
        }
        Command::Pdf { path } => {
            let mut form = FormController::new();
            form.dispatch(FormIntent::SwitchMode(InputMode::Pdf));
            if !form.select_file(&path) {
                if let Some(notice) = &form.state().notice {
                    writeln!(err, "{}", notice.message())?;
                }
                return Ok(false);
            }
            if let Some(file) = &form.state().file {
                writeln!(err, "{} ({} KB)", file.name, file.size_kb())?;
            }
            run_form(&mut form, &client, &mut out, &mut err).await
        }
        Command::Youtube { url, tab } => {
            let mut popup = popup(config, client, tab)?;
            let result = popup.on_summarize(url.as_deref().unwrap_or("")).await;
            Ok(finish_popup(result, &mut out)?)
        }
        Command::Open { tab } => {
            let mut popup = popup(config, client, tab)?;
            match popup.on_open().await {
                Some(result) => Ok(finish_popup(Some(result), &mut out)?),
                None => {
                    writeln!(err, "Active tab is not a YouTube watch page; nothing to do.")?;
                    Ok(true)
                }
            }
        }
    }
}

type ConsolePopup = PopupController<FixedTab, ConsoleSurface<std::io::Stdout, std::io::Stderr>>;

fn popup(config: &Config, client: SummaryClient, tab: TabArgs) -> anyhow::Result<ConsolePopup> {
    let oembed = OembedClient::new(&config.oembed)?;
    Ok(PopupController::new(
        client,
        oembed,
        FixedTab::new(tab.tab_url),
        ConsoleSurface::new(std::io::stdout(), std::io::stderr()),
    )
    .with_mood_analysis(tab.mood || config.backend.analyze_mood))
}

fn finish_popup(result: Option<SummaryResult>, out: &mut impl Write) -> std::io::Result<bool> {
    let Some(result) = result else {
        return Ok(false);
    };
    write_mood(out, result.mood_intervals())?;
    Ok(result.is_success())
}

async fn run_form(
    form: &mut FormController,
    client: &SummaryClient,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    let on_progress: ProgressCallback = Arc::new(|pct| {
        eprint!("\rUploading: {}%", pct);
        if pct >= 100 {
            eprintln!();
        }
    });

    let Some(result) = form.summarize(client, Some(on_progress)).await else {
        if let Some(notice) = &form.state().notice {
            writeln!(err, "{}", notice.message())?;
        }
        return Ok(false);
    };

    write_result(&result, out, err)?;
    Ok(result.is_success())
}

/// Print the status line to `err` and the output region to `out`.
pub fn write_result(
    result: &SummaryResult,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(err, "{}", result.status_line())?;
    if !result.output_text().is_empty() {
        writeln!(out, "{}", result.output_text())?;
    }
    write_mood(out, result.mood_intervals())
}

fn write_mood(out: &mut impl Write, intervals: &[MoodInterval]) -> std::io::Result<()> {
    if intervals.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Mood:")?;
    for interval in intervals {
        writeln!(
            out,
            "  {:.1}s-{:.1}s  {} ({:.2})",
            interval.start, interval.end, interval.mood, interval.score
        )?;
    }
    Ok(())
}
