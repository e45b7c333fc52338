use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr};

use crate::api::{ApiNumber, ProjectionPayload, projection_from_payload, run_http_server};
use crate::core::{DEFAULT_AMOUNT, DEFAULT_MONTHS, ProjectionSummary};
use crate::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "tradingpro",
    about = "Investment simulator: monthly compounding at a fixed 6.5% rate"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the simulator page and its JSON API.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
        bind: IpAddr,
    },
    /// Print a single projection.
    Project {
        #[arg(
            long,
            default_value = DEFAULT_AMOUNT,
            allow_hyphen_values = true,
            help = "Initial amount in euros; any text is accepted"
        )]
        amount: String,
        #[arg(
            long,
            default_value = DEFAULT_MONTHS,
            allow_hyphen_values = true,
            help = "Duration in months; any text is accepted"
        )]
        months: String,
        #[arg(long, help = "Print the API response body instead of labelled lines")]
        json: bool,
    },
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Serve { port, bind } => run_http_server(bind, port).await,
        Command::Project {
            amount,
            months,
            json,
        } => {
            let payload = ProjectionPayload {
                amount: Some(ApiNumber::Text(amount)),
                months: Some(ApiNumber::Text(months)),
            };
            let summary = projection_from_payload(&payload);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", render_summary(&summary));
            }
            Ok(())
        }
    }
}

fn render_summary(summary: &ProjectionSummary) -> String {
    format!(
        "Investissement Initial: {}\nValeur Projetée: {}\nGain Potentiel: {}",
        summary.formatted.initial, summary.formatted.projected, summary.formatted.gain
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projection;

    #[test]
    fn project_defaults_match_page_initial_state() {
        let cli = Cli::try_parse_from(["tradingpro", "project"]).expect("valid args");
        let Command::Project { amount, months, json } = cli.command else {
            panic!("expected project command");
        };
        assert_eq!(amount, "10000");
        assert_eq!(months, "12");
        assert!(!json);
    }

    #[test]
    fn project_accepts_negative_and_non_numeric_text() {
        let args = [
            "tradingpro",
            "project",
            "--amount",
            "abc",
            "--months",
            "-3",
        ];
        let cli = Cli::try_parse_from(args).expect("valid args");
        let Command::Project { amount, months, .. } = cli.command else {
            panic!("expected project command");
        };
        assert_eq!(amount, "abc");
        assert_eq!(months, "-3");
    }

    #[test]
    fn serve_defaults_to_all_interfaces_on_8080() {
        let cli = Cli::try_parse_from(["tradingpro", "serve"]).expect("valid args");
        let Command::Serve { port, bind } = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(port, 8080);
        assert_eq!(bind, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    #[test]
    fn serve_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["tradingpro", "serve", "--port", "70000"]).is_err());
    }

    #[test]
    fn render_summary_prints_three_labelled_amounts() {
        let rendered = render_summary(&projection(1_000.0, 1));
        assert_eq!(
            rendered,
            "Investissement Initial: 1\u{202f}000,00\u{a0}€\n\
             Valeur Projetée: 1\u{202f}065,00\u{a0}€\n\
             Gain Potentiel: 65,00\u{a0}€"
        );
    }
}
