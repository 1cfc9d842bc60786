use crate::adapters::{OutputFormat, ScriptedEvent};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "partner-filter")]
#[command(about = "Replay partner directory filter events against a saved page")]
pub struct CliArgs {
    /// Saved HTML of the partner page
    #[arg(long)]
    pub page: String,

    /// Widget configuration (TOML); built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// URL path of the page, used for locale detection (e.g. /fr/partenaires)
    #[arg(long)]
    pub path: Option<String>,

    /// Events in order: search:TEXT, select:VALUE, link:TEXT, all, enter, reset
    #[arg(short, long = "event")]
    pub events: Vec<ScriptedEvent>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log as JSON lines instead of compact text
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = CliArgs::try_parse_from([
            "partner-filter",
            "--page",
            "partners.html",
            "-e",
            "link:ESG Software",
            "-e",
            "search:green",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.page, "partners.html");
        assert_eq!(
            args.events,
            vec![
                ScriptedEvent::Link("ESG Software".to_string()),
                ScriptedEvent::Search("green".to_string())
            ]
        );
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_invalid_event_is_rejected() {
        let result = CliArgs::try_parse_from(["partner-filter", "--page", "p.html", "-e", "jump:1"]);
        assert!(result.is_err());
    }
}
