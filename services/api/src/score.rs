use clap::Args;
use dossier_scoring::config::AppConfig;
use dossier_scoring::error::AppError;
use dossier_scoring::scoring::{
    criteria, grade_scale, DimensionView, GradeSheetImporter, Labeled, ScoreCard, ScoreRequest,
    ScoringService, ScoringSession,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV grade sheet with `Criterion,Grade,Comment` columns
    #[arg(long)]
    pub(crate) grades: PathBuf,
    /// Highlight to attach to the score card (repeatable)
    #[arg(long = "highlight")]
    pub(crate) highlights: Vec<String>,
    /// Print the score card as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        grades,
        highlights,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = ScoringService::new(&config.scoring);
    let entries = GradeSheetImporter::from_path(&grades, service.engine())?;
    let session = ScoringSession::restore(service.engine(), entries, None)?;

    if !session.is_complete() {
        println!(
            "Grade sheet {}: {}/{} criteria graded",
            grades.display(),
            session.graded_count(),
            session.entries().len()
        );
        render_risk_profile(&service.risk_profile(session.entries())?);
    }

    let card = service.score_card(ScoreRequest {
        grades: session.entries().to_vec(),
        highlights: highlights.into_iter().map(Labeled::PlainText).collect(),
    })?;

    if json {
        let rendered = serde_json::to_string_pretty(&card).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_score_card(&card);
    }

    Ok(())
}

pub(crate) fn run_criteria() {
    println!("Scoring grid");
    for criterion in criteria() {
        println!(
            "- [{}] {} (x{}): {}",
            criterion.index, criterion.name, criterion.weight, criterion.description
        );
    }

    println!("\nGrade scale");
    for entry in grade_scale() {
        println!(
            "- {:<2} {:>3}-{:<3} {} ({})",
            entry.code.as_str(),
            entry.min_score,
            entry.max_score,
            entry.label,
            entry.tier.label()
        );
    }
}

fn render_score_card(card: &ScoreCard) {
    println!(
        "Final score: {:.1} -> {} ({}, {})",
        card.final_score,
        card.grade,
        card.grade_label,
        card.tier.label()
    );

    render_risk_profile(&card.risk_profile);

    if !card.highlights.is_empty() {
        println!("\nHighlights");
        for highlight in &card.highlights {
            println!("- {}", highlight.summary());
        }
    }
}

fn render_risk_profile(profile: &[DimensionView]) {
    println!("\nRisk profile");
    for view in profile {
        match (view.score, view.tier) {
            (Some(score), Some(tier)) => println!(
                "- {:<24} {:>4.1} [{:<10}] {}",
                view.label,
                score,
                "#".repeat(usize::from(view.width_pct / 10)),
                tier.label()
            ),
            _ => println!("- {:<24}  n/a", view.label),
        }
    }
}
