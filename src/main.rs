use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spstats::{cli, config, types::TrackSortKey, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show playlist metadata, track count and total duration
    Info(PlaylistArg),

    /// List the tracks of a playlist
    Tracks(TracksOptions),

    /// Chart the most frequent artists, labels and genres
    Stats(StatsOptions),

    /// Dump the complete playlist snapshot as JSON
    Raw(PlaylistArg),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistArg {
    /// Playlist id, open.spotify.com URL or spotify:playlist: URI
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist id, open.spotify.com URL or spotify:playlist: URI
    pub playlist: String,

    /// Column to sort by (playlist order when omitted)
    #[clap(long, value_enum)]
    pub sort: Option<TrackSortKey>,

    /// Sort descending
    #[clap(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct StatsOptions {
    /// Playlist id, open.spotify.com URL or spotify:playlist: URI
    pub playlist: String,

    /// Number of entries per chart
    #[clap(long, default_value_t = 15)]
    pub top: usize,

    /// Skip album label and artist genre lookups
    #[clap(long)]
    pub no_enrich: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Info(opt) => cli::info(opt.playlist).await,
        Command::Tracks(opt) => cli::tracks(opt.playlist, opt.sort, opt.desc).await,
        Command::Stats(opt) => cli::stats(opt.playlist, opt.top, !opt.no_enrich).await,
        Command::Raw(opt) => cli::raw(opt.playlist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
