// ABOUTME: Terminal rendering for generated expressions, analyses and preset catalogs
// ABOUTME: Builds strings so the binary only decides where to print them

use std::fmt::Write;

use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use resonance_assist::{Failure, FailureKind};
use resonance_core::presets::{self, Preset};
use resonance_core::{CommunicationContext, ExpressionAnalysis, ExpressionResult, SocialAnalysis};

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title.blue().bold());
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {} {}", format!("{}:", label).bold(), value);
}

fn bullets(out: &mut String, items: &[String]) {
    if items.is_empty() {
        let _ = writeln!(out, "  {}", "(none)".dimmed());
    }
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
}

pub fn expression(result: &ExpressionResult) -> String {
    format!(
        "{}\n\n{}\n",
        "💬 Your expression".green().bold(),
        result.text
    )
}

pub fn expression_analysis(analysis: &ExpressionAnalysis) -> String {
    let mut out = String::new();

    let breakdown = &analysis.message_breakdown;
    heading(&mut out, "📝 Message Breakdown");
    field(&mut out, "Main idea", &breakdown.main_idea);
    field(&mut out, "Action needed", &breakdown.action_needed);
    bullets(&mut out, &breakdown.supporting_points);

    let feedback = &analysis.communication_feedback;
    heading(&mut out, "🎯 Communication Feedback");
    for tone in &feedback.tone_feedback {
        field(&mut out, "Tone", &tone.what_we_noticed);
        field(&mut out, "  Effect", &tone.how_it_might_affect);
        field(&mut out, "  Try", &tone.gentler_way);
    }
    for clarity in &feedback.clarity_feedback {
        field(&mut out, "Clarity", &clarity.unclear_part);
        field(&mut out, "  Why", &clarity.why_it_matters);
        field(&mut out, "  Try", &clarity.clearer_way);
    }
    for context in &feedback.context_feedback {
        field(&mut out, "Context", &context.missing_info);
        field(&mut out, "  Why", &context.why_it_helps);
        field(&mut out, "  Try", &context.how_to_add);
    }

    let guidance = &analysis.emotional_guidance;
    heading(&mut out, "💭 Emotional Guidance");
    field(&mut out, "Feeling", &guidance.emotional_awareness.your_feeling);
    field(
        &mut out,
        "Understanding",
        &guidance.emotional_awareness.understanding_why,
    );
    field(
        &mut out,
        "Impact",
        &guidance.emotional_awareness.impact_on_others,
    );
    field(&mut out, "Challenge", &guidance.balanced_expression.challenge);
    field(&mut out, "Validation", &guidance.balanced_expression.validation);
    field(
        &mut out,
        "Better approach",
        &guidance.balanced_expression.better_approach,
    );

    heading(&mut out, "✨ Improved Version");
    let _ = writeln!(
        out,
        "  {}",
        analysis.improved_version.suggestion.green()
    );
    field(&mut out, "Why", &analysis.improved_version.explanation);

    out
}

pub fn social_analysis(analysis: &SocialAnalysis) -> String {
    let mut out = String::new();

    heading(&mut out, "👀 Cues You Might Have Missed");
    bullets(&mut out, &analysis.missed_cues);

    heading(&mut out, "🧭 Other Perspectives");
    for perspective in &analysis.perspectives {
        let _ = writeln!(out, "  {}", perspective.person.cyan().bold());
        field(&mut out, "  Viewpoint", &perspective.viewpoint);
        field(&mut out, "  Reasoning", &perspective.reasoning);
    }

    heading(&mut out, "📏 Unwritten Rules");
    bullets(&mut out, &analysis.social_rules);

    heading(&mut out, "🔁 Patterns To Notice");
    bullets(&mut out, &analysis.patterns);

    out
}

pub fn failure(failure: &Failure) -> String {
    let label = match failure.kind {
        FailureKind::Timeout => "Timed out:",
        FailureKind::MalformedResponse => "Unreadable answer:",
        _ => "Error:",
    };
    format!("{} {}", label.red().bold(), failure.message)
}

fn preset_labels(catalog: &[Preset]) -> String {
    catalog
        .iter()
        .map(|preset| match preset.emoji {
            Some(emoji) => format!("{} {}", emoji, preset.label),
            None => preset.label.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every catalog the forms offer, as one table
pub fn preset_table() -> Table {
    let contexts = CommunicationContext::ALL
        .iter()
        .map(CommunicationContext::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Option", "Presets"]);

    table.add_row(vec!["--emotion".to_string(), preset_labels(presets::EMOTIONS)]);
    table.add_row(vec![
        "--emotion (detailed)".to_string(),
        preset_labels(presets::DETAILED_EMOTIONS),
    ]);
    table.add_row(vec!["--recipient".to_string(), preset_labels(presets::RECIPIENTS)]);
    table.add_row(vec!["--scenario".to_string(), preset_labels(presets::SCENARIOS)]);
    table.add_row(vec!["--purpose".to_string(), preset_labels(presets::PURPOSES)]);
    table.add_row(vec!["--context".to_string(), contexts]);
    table.add_row(vec![
        "--audience".to_string(),
        presets::REFINE_AUDIENCES.join(", "),
    ]);
    table.add_row(vec!["--goal".to_string(), presets::REFINE_GOALS.join(", ")]);

    table
}

/// Example topics grouped the way the refiner screen suggests them
pub fn topic_groups() -> String {
    let mut out = String::new();
    for group in presets::TOPIC_GROUPS {
        heading(&mut out, group.title);
        let _ = writeln!(out, "  {}", group.description.dimmed());
        for example in group.examples {
            let _ = writeln!(out, "  • {}", example);
        }
    }
    out
}
