// analysis-client-rs/src/main.rs
// `analyze` CLI: submit study notes to the Analysis Service from a terminal

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use analysis_client::{AnalysisClient, AnalysisForm, ViewState};

#[derive(Parser, Debug)]
#[command(name = "analyze")]
#[command(about = "Analyze study notes for learning gaps against an exam goal")]
struct Args {
    /// Learning goal (e.g., "crack JEE math, improve algebra")
    #[arg(short, long, value_name = "TEXT")]
    goal: String,

    /// Response language
    #[arg(short, long, default_value = "English")]
    language: String,

    /// Read notes from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    notes: Option<PathBuf>,

    /// Analysis Service URL (default: ANALYSIS_SERVICE_ADDR or localhost)
    #[arg(long, env = "ANALYSIS_SERVICE_ADDR", value_name = "URL")]
    url: Option<String>,
}

fn read_notes(path: Option<&std::path::Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let notes = match read_notes(args.notes.as_deref()) {
        Ok(notes) => notes,
        Err(e) => {
            eprintln!("failed to read notes: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match args.url {
        Some(url) => AnalysisClient::new(url),
        None => AnalysisClient::from_env(),
    };

    let mut form = AnalysisForm::new(client);
    form.set_text(notes);
    form.set_goal(args.goal);
    form.set_language(args.language);
    form.submit().await;

    match form.state() {
        ViewState::Result(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        ViewState::Error(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        // submit() always resolves to a terminal state before returning
        ViewState::Idle | ViewState::Loading => ExitCode::FAILURE,
    }
}
