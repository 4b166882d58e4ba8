// ABOUTME: `resonance social` explains a confusing social situation
// ABOUTME: Missed cues, other perspectives, unwritten rules and patterns

use clap::Args;
use resonance_assist::{SocialAnalyzer, SocialSession};
use resonance_cli::config::build_client;
use resonance_cli::form::social_situation;
use resonance_cli::render;

use super::session::settle_or_fail;

#[derive(Args, Debug)]
pub struct SocialArgs {
    /// What happened
    #[arg(short, long)]
    situation: String,
    /// Someone who was there; repeat or separate with commas
    #[arg(short, long = "person", required = true)]
    people: Vec<String>,
    /// How you reacted
    #[arg(long)]
    reaction: Option<String>,
    /// How the others reacted
    #[arg(long)]
    others: Option<String>,
    /// What confused you
    #[arg(long)]
    confusing: Option<String>,
    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: SocialArgs) -> anyhow::Result<()> {
    let situation = social_situation(
        &args.situation,
        &args.people,
        args.reaction.as_deref(),
        args.others.as_deref(),
        args.confusing.as_deref(),
    )?;
    let session = SocialSession::new(SocialAnalyzer::new(build_client()?));

    session.submit(situation)?;
    let analysis = settle_or_fail(&session, "Thinking it through").await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render::social_analysis(&analysis));
    }
    Ok(())
}
