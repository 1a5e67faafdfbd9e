mod config;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use questions_core::{MemoryDocument, QuestionsEnvelope, QuestionsSession, Transport};

use config::{Cli, Command, Preset};

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    log::debug!("using questions API at {}", cli.base_url);
    let mut session = QuestionsSession::connect(&cli.base_url);

    if !cli.skip_probe {
        probe(&session);
    }

    match cli.command {
        Command::Fetch {
            subject,
            class_level,
            year,
            container,
        } => {
            session.fetch_questions(&subject, class_level, year.as_deref())?;
            print_held(&session, &container);
        }
        Command::Preset { preset, year } => {
            fetch_preset(&mut session, preset, year.as_deref())?;
            print_held(&session, "questions");
        }
        Command::Subjects => {
            let subjects = session.get_available_subjects()?;
            println!("{}", serde_json::to_string_pretty(&subjects)?);
        }
        Command::Test => {
            let result = session.test_connection()?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}

/// Startup connection test. Only logs; never stops the command.
fn probe<T: Transport>(session: &QuestionsSession<T>) {
    match session.test_connection() {
        Ok(result) => log::info!("API connection test: {result}"),
        Err(e) => log::warn!("API connection test failed: {e}"),
    }
}

fn fetch_preset<T: Transport>(
    session: &mut QuestionsSession<T>,
    preset: Preset,
    year: Option<&str>,
) -> Result<QuestionsEnvelope, questions_core::ApiError> {
    match preset {
        Preset::ChemistrySs2 => session.fetch_ss2_chemistry(year),
        Preset::ChemistrySs3 => session.fetch_ss3_chemistry(year),
        Preset::PhysicsSs2 => session.fetch_ss2_physics(year),
        Preset::PhysicsSs3 => session.fetch_ss3_physics(year),
    }
}

fn print_held<T: Transport>(session: &QuestionsSession<T>, container: &str) {
    let mut doc = MemoryDocument::with_elements([container]);
    session.render(&mut doc, container, None);
    print!("{}", doc.html(container).unwrap_or_default());
}
