use crate::score::{run_criteria, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dossier_scoring::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dossier Scoring",
    about = "Score crowdfunding financing dossiers and serve the scoring API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an analyst grade sheet exported as CSV
    Score(ScoreArgs),
    /// Print the criteria grid, weights and grade scale
    Criteria,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Criteria => {
            run_criteria();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["dossier-scoring"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "dossier-scoring",
            "score",
            "--grades",
            "grille.csv",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.grades.to_str(), Some("grille.csv"));
                assert!(args.json);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }
}
