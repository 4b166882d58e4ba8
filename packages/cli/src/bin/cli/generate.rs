// ABOUTME: `resonance generate` builds an expression from tags and offers to regenerate it
// ABOUTME: Each regeneration starts from the original answers plus the newest note

use std::io::IsTerminal;

use clap::Args;
use colored::*;
use inquire::Text;
use resonance_assist::{ExpressionGenerator, ExpressionSession};
use resonance_cli::config::build_client;
use resonance_cli::form::{expression_request, GenerateFlags, SlotFlags};
use resonance_cli::render;

use super::session::{settle, settle_or_fail};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// How you feel (see `resonance presets`)
    #[arg(short, long)]
    emotion: Option<String>,
    /// Your own word for the feeling, used instead of the preset
    #[arg(long)]
    custom_emotion: Option<String>,
    /// How strongly you feel it, from 1 to 10
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
    intensity: Option<u8>,
    /// Who you are talking to
    #[arg(short, long)]
    recipient: Option<String>,
    #[arg(long)]
    custom_recipient: Option<String>,
    /// Where it is happening
    #[arg(short, long)]
    scenario: Option<String>,
    #[arg(long)]
    custom_scenario: Option<String>,
    /// What you want to achieve
    #[arg(short, long)]
    purpose: Option<String>,
    #[arg(long)]
    custom_purpose: Option<String>,
    /// What happened, in your own words
    #[arg(long)]
    situation: Option<String>,
    /// Anything else the assistant should know
    #[arg(long)]
    note: Option<String>,
    /// Print one expression and exit without offering to regenerate
    #[arg(long)]
    no_interactive: bool,
}

impl From<&GenerateArgs> for GenerateFlags {
    fn from(args: &GenerateArgs) -> Self {
        GenerateFlags {
            emotion: SlotFlags::new(args.emotion.clone(), args.custom_emotion.clone()),
            intensity: args.intensity,
            recipient: SlotFlags::new(args.recipient.clone(), args.custom_recipient.clone()),
            scenario: SlotFlags::new(args.scenario.clone(), args.custom_scenario.clone()),
            purpose: SlotFlags::new(args.purpose.clone(), args.custom_purpose.clone()),
            situation: args.situation.clone(),
            note: args.note.clone(),
        }
    }
}

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let request = expression_request(&GenerateFlags::from(&args))?;
    let session = ExpressionSession::new(ExpressionGenerator::new(build_client()?));

    session.submit(request)?;
    let result = settle_or_fail(&session, "Finding the words").await?;
    println!("{}", render::expression(&result));

    if args.no_interactive || !std::io::stdin().is_terminal() {
        return Ok(());
    }

    loop {
        let note = Text::new("Add more details and regenerate:")
            .with_help_message("Leave empty to finish")
            .prompt()?;
        if note.trim().is_empty() {
            break;
        }

        session.regenerate(Some(note.as_str()))?;
        let Some(snapshot) = settle(&session, "Trying again").await else {
            continue;
        };

        match (snapshot.state.result(), snapshot.state.failure()) {
            (Some(result), _) => println!("{}", render::expression(result)),
            (None, Some(failure)) => {
                eprintln!("{}", render::failure(failure));
                if let Some(previous) = &snapshot.last_result {
                    println!("{}", "Your last expression is still:".dimmed());
                    println!("{}", render::expression(previous));
                }
            }
            (None, None) => {}
        }
    }

    Ok(())
}
