use std::path::PathBuf;

use crate::prelude::{print, println, *};
use clap::Parser;

mod config;
mod error;
mod explain;
mod input;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert the text on stdin, or on the clipboard when nothing is piped in, into a Markdown link.

Recognizes GitHub URLs and issue titles copied from the GitHub UI, JIRA keys and
URLs, Notion pages, phone numbers, Raycast deep links and any other http(s) URL.
Input that matches nothing is printed back unchanged.

EXAMPLES:
  echo 'PLAT-192' | mdtool
  echo '(890) 123-4567' | mdtool
  mdtool --write-clipboard
  echo 'https://github.com/org/repo/pull/1' | mdtool --explain"
)]
pub struct App {
    /// Path to the YAML config file [default: ~/.config/mdtool/config.yaml]
    #[clap(long, env = "MDTOOL_CONFIG")]
    config: Option<PathBuf>,

    /// Print every detection, vote and the winning pair instead of just the result
    #[clap(long)]
    explain: bool,

    /// Print the explain report as JSON (implies --explain)
    #[clap(long)]
    json: bool,

    /// Also copy the result to the clipboard
    #[clap(long)]
    write_clipboard: bool,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(
        short,
        long,
        env = "MDTOOL_VERBOSE",
        global = true,
        default_value = "false"
    )]
    verbose: bool,
}

fn main() -> Result<()> {
    let app = App::parse();

    let default_filter = if app.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    color_eyre::install()?;

    run(app)
}

fn run(app: App) -> Result<()> {
    let config = config::load(app.config.as_deref())?;

    let source = input::Source::detect();
    let raw = input::read(source)?;
    let prepared = mdtool_core::prepare_input(&raw);
    if prepared.is_empty() {
        log::debug!("Nothing to convert");
        return Ok(());
    }

    let explanation = mdtool_core::explain(prepared, &config)?;
    for finding in &explanation.findings {
        log::debug!(
            "{} detected {} (confidence {})",
            finding.detector.name(),
            finding.detection.content_type().as_str(),
            finding.detection.confidence
        );
    }
    match explanation.winner {
        Some(ballot) => log::debug!(
            "Winner: detection {} with {} (score {})",
            ballot.detection,
            ballot.renderer.name(),
            ballot.score
        ),
        None => log::debug!("No winner, echoing input"),
    }

    if app.json {
        println!("{}", explain::to_json(&explanation)?);
    } else if app.explain {
        explain::print(&explanation);
    } else {
        print!("{}", explanation.output);
    }

    if app.write_clipboard {
        input::write_clipboard(&explanation.output)?;
    }

    Ok(())
}
