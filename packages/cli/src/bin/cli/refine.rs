// ABOUTME: `resonance refine` asks for feedback on a message the user wrote
// ABOUTME: Prints the four analysis sections, or the parsed JSON with --json

use clap::Args;
use resonance_assist::{ExpressionRefiner, RefinementSession};
use resonance_cli::config::build_client;
use resonance_cli::form::refinement_request;
use resonance_cli::render;

use super::session::settle_or_fail;

#[derive(Args, Debug)]
pub struct RefineArgs {
    /// The message you want feedback on
    #[arg(short, long)]
    content: String,
    /// email, conversation, meeting, presentation, feedback, request or other
    #[arg(long, default_value = "conversation")]
    context: String,
    /// Who will read or hear it
    #[arg(short, long, default_value = "")]
    audience: String,
    /// What you want the message to achieve
    #[arg(short, long, default_value = "")]
    goal: String,
    /// Extra background for the assistant
    #[arg(long)]
    note: Option<String>,
    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: RefineArgs) -> anyhow::Result<()> {
    let request = refinement_request(
        &args.content,
        &args.context,
        &args.audience,
        &args.goal,
        args.note.as_deref(),
    )?;
    let session = RefinementSession::new(ExpressionRefiner::new(build_client()?));

    session.submit(request)?;
    let analysis = settle_or_fail(&session, "Reading your message").await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render::expression_analysis(&analysis));
    }
    Ok(())
}
