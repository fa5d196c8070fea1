mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdc", version, about = "Convert markdown topics into card deck data modules")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Convert one topic (or `all`) into content modules
    Convert(ConvertArgs),

    /// Create a markdown template for a new topic
    New(NewArgs),

    /// Persist an edited deck received as JSON
    Save(SaveArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Topic id, or `all` for every markdown file in markdown_dir
    pub target: String,

    /// Print the per-document report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Topic id, also the file name (letters, digits, '_' and '-')
    pub topic_id: String,

    /// Topic title
    #[arg(required = true, num_args = 1..)]
    pub title: Vec<String>,

    /// Description for the topic index
    #[arg(long)]
    pub description: Option<String>,

    /// Number of content card placeholders
    #[arg(long, default_value_t = 1)]
    pub cards: usize,

    /// Leave out the main text section
    #[arg(long)]
    pub no_main_text: bool,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// JSON request file (`{"topicId": ..., "contentData": {...}}`); stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Convert(args) => {
            cmd::convert::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::New(args) => {
            cmd::new::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Save(args) => {
            cmd::save::run(cli.config.as_deref(), cli.profile.as_deref(), &args)?;
        }
    }
    Ok(())
}
