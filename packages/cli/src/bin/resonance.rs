use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::generate::GenerateArgs;
use cli::refine::RefineArgs;
use cli::social::SocialArgs;
use resonance_cli::config::{init_tracing, load_environment};
use resonance_cli::render;

#[derive(Parser)]
#[command(name = "resonance")]
#[command(about = "Resonance - find the words for what you feel and mean")]
#[command(version)]
struct Cli {
    /// Log at debug level when RUST_LOG is not set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn an emotion, recipient, scenario and purpose into a sentence to say
    Generate(GenerateArgs),
    /// Get feedback on a message and an improved version of it
    Refine(RefineArgs),
    /// Understand a confusing social situation
    Social(SocialArgs),
    /// List the preset tags accepted by generate and refine
    Presets {
        /// Also show example refinement topics
        #[arg(long)]
        topics: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    load_environment();
    init_tracing(cli.verbose);

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => cli::generate::run(args).await,
        Commands::Refine(args) => cli::refine::run(args).await,
        Commands::Social(args) => cli::social::run(args).await,
        Commands::Presets { topics } => {
            println!("{}", "🏷️  Preset tags".blue().bold());
            println!("{}", render::preset_table());
            println!(
                "{}",
                "Pick 'Other' or pass a --custom-* flag to use your own words".dimmed()
            );
            if topics {
                print!("{}", render::topic_groups());
            }
            Ok(())
        }
    }
}
