mod config;
mod input;
mod model;
mod report;
mod tracing;
mod validate;

use std::path::PathBuf;

use crate::config::RenderPaths;
use crate::input::submissions::load_submissions;
use crate::model::rank::sort_submissions;
use crate::report::write_reports;
use crate::validate::validate_submission;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match parse_args(&args)? {
        Command::Render => {
            let paths = RenderPaths::default();
            let n = run_render(&paths)?;
            println!("Updated leaderboard.md and leaderboard.html with {} entries", n);
            Ok(())
        }
        Command::Validate {
            predictions_path,
            test_nodes_path,
        } => {
            validate_submission(&predictions_path, &test_nodes_path).map_err(|e| e.to_string())?;
            println!("VALID SUBMISSION");
            Ok(())
        }
    }
}

fn run_render(paths: &RenderPaths) -> Result<usize, String> {
    let mut records = load_submissions(&paths.source_csv).map_err(|e| e.to_string())?;
    sort_submissions(&mut records);
    write_reports(&records, paths).map_err(|e| e.to_string())?;
    Ok(records.len())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Render,
    Validate {
        predictions_path: PathBuf,
        test_nodes_path: PathBuf,
    },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("missing command (use render|validate)".to_string());
    }
    let mut args = args.to_vec();
    let cmd = args.remove(0);
    match cmd.as_str() {
        "render" => {
            if let Some(extra) = args.first() {
                return Err(format!("unknown argument: {}", extra));
            }
            Ok(Command::Render)
        }
        "validate" => {
            if args.len() != 2 {
                return Err(
                    "validate expects two arguments: <predictions.csv> <test_nodes.csv>"
                        .to_string(),
                );
            }
            Ok(Command::Validate {
                predictions_path: PathBuf::from(&args[0]),
                test_nodes_path: PathBuf::from(&args[1]),
            })
        }
        other => Err(format!("unsupported command: {} (use render|validate)", other)),
    }
}
