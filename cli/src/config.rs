//! Command-line and environment configuration.

use clap::{Parser, Subcommand, ValueEnum};
use questions_core::ClassLevel;

pub const BASE_URL_ENV: &str = "QUESTIONS_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";

#[derive(Parser, Debug)]
#[command(name = "questions", version, about = "Fetch and render exam questions", long_about = None)]
pub struct Cli {
    /// Base URL of the questions API
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Skip the startup connection test
    #[arg(long)]
    pub skip_probe: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch questions for a subject and class level and print them as HTML
    Fetch {
        subject: String,
        /// ss2 or ss3
        class_level: ClassLevel,
        #[arg(long)]
        year: Option<String>,
        /// Id of the element the fragment is rendered into
        #[arg(long, default_value = "questions")]
        container: String,
    },
    /// Fetch one of the preset subject/class pairs and print them as HTML
    Preset {
        preset: Preset,
        #[arg(long)]
        year: Option<String>,
    },
    /// Print the subject list as JSON
    Subjects,
    /// Print the API connection test result as JSON
    Test,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    ChemistrySs2,
    ChemistrySs3,
    PhysicsSs2,
    PhysicsSs3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_parses_class_level_case_insensitively() {
        let cli = Cli::try_parse_from(["questions", "--base-url", "http://x/api", "fetch", "physics", "SS3", "--year", "2010"])
            .unwrap();
        assert_eq!(cli.base_url, "http://x/api");
        match cli.command {
            Command::Fetch {
                subject,
                class_level,
                year,
                container,
            } => {
                assert_eq!(subject, "physics");
                assert_eq!(class_level, ClassLevel::Ss3);
                assert_eq!(year.as_deref(), Some("2010"));
                assert_eq!(container, "questions");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn fetch_rejects_unknown_class_level() {
        assert!(Cli::try_parse_from(["questions", "fetch", "physics", "ss1"]).is_err());
    }

    #[test]
    fn preset_names_are_kebab_case() {
        let cli = Cli::try_parse_from(["questions", "--skip-probe", "preset", "chemistry-ss3"]).unwrap();
        assert!(cli.skip_probe);
        assert!(matches!(
            cli.command,
            Command::Preset {
                preset: Preset::ChemistrySs3,
                year: None
            }
        ));
    }
}
