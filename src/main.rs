// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chartmate CLI entrypoint.
//!
//! By default this runs the interactive TUI on the built-in demo session.
//! `--intake <file.json>` starts from a real intake record instead;
//! `--export <path>` skips the TUI, generates once with the built-in
//! collaborator, and writes the paginated report. Deployments with a real
//! model service implement `assist::NoteAssistant` and use the library
//! surface directly.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use chartmate::assist::scripted::{demo_intake, ScriptedAssistant};
use chartmate::assist::NoteAssistant;
use chartmate::export::{write_document, WriteDurability};
use chartmate::model::{IntakeRecord, Session};
use chartmate::render::{render_report, PageOptions};
use chartmate::tui::{self, TuiConfig};

const DEFAULT_EXPORT_PATH: &str = "chartmate-report.txt";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--demo] [--width <cols>] [--page-rows <rows>] [--durable-writes]\n  {program} --intake <file.json> [--width <cols>] [--page-rows <rows>] [--durable-writes]\n  {program} [--intake <file.json>] --export <path> [--width <cols>] [--page-rows <rows>] [--durable-writes]\n\nTUI mode (default) browses and edits the generated report; 'x' exports to\n{DEFAULT_EXPORT_PATH}. --export runs headless: generate once, paginate, write, exit.\n\n--demo uses a built-in intake and cannot be combined with --intake.\n--durable-writes opts into slower, best-effort durable export writes\n(fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    intake: Option<String>,
    export: Option<String>,
    width: Option<usize>,
    page_rows: Option<usize>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--intake" => {
                if options.intake.is_some() {
                    return Err(());
                }
                options.intake = Some(args.next().ok_or(())?);
            }
            "--export" => {
                if options.export.is_some() {
                    return Err(());
                }
                options.export = Some(args.next().ok_or(())?);
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.width = Some(raw.parse().map_err(|_| ())?);
            }
            "--page-rows" => {
                if options.page_rows.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.page_rows = Some(raw.parse().map_err(|_| ())?);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.intake.is_some() {
        return Err(());
    }

    Ok(options)
}

fn load_intake(options: &CliOptions) -> Result<IntakeRecord, Box<dyn Error>> {
    match &options.intake {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(demo_intake()),
    }
}

fn page_options(options: &CliOptions) -> PageOptions {
    let mut page = PageOptions::default();
    if let Some(width) = options.width {
        page.content_width = width.max(20);
    }
    if let Some(rows) = options.page_rows {
        page.page_rows = rows.max(8);
    }
    page
}

fn durability(options: &CliOptions) -> WriteDurability {
    if options.durable_writes {
        WriteDurability::Durable
    } else {
        WriteDurability::BestEffort
    }
}

fn run_headless_export(options: &CliOptions, export_path: &str) -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let intake = load_intake(options)?;
    let assistant = ScriptedAssistant::new();
    let output = assistant.generate_note(&intake)?;

    let mut session = Session::new(intake);
    session.apply_generated(1, &output);

    let doc = render_report(session.report(), &page_options(options));
    write_document(&PathBuf::from(export_path), &doc, durability(options))?;
    Ok(())
}

fn run_tui(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let session = if options.intake.is_some() {
        Session::new(load_intake(options)?)
    } else {
        tui::demo_session()
    };

    let assistant: Arc<dyn NoteAssistant> = Arc::new(ScriptedAssistant::new());
    let config = TuiConfig {
        export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        page_options: page_options(options),
        durability: durability(options),
    };
    tui::run_with_session(session, assistant, config)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "chartmate".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        match &options.export {
            Some(path) => run_headless_export(&options, path),
            None => run_tui(&options),
        }
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn defaults_to_the_demo_tui() {
        let options = parse(&[]).expect("parse");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn accepts_export_with_geometry() {
        let options =
            parse(&["--export", "out.txt", "--width", "72", "--page-rows", "40"]).expect("parse");
        assert_eq!(options.export.as_deref(), Some("out.txt"));
        assert_eq!(options.width, Some(72));
        assert_eq!(options.page_rows, Some(40));
    }

    #[test]
    fn rejects_demo_combined_with_intake() {
        assert!(parse(&["--demo", "--intake", "intake.json"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags_and_missing_values() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["--intake"]).is_err());
        assert!(parse(&["--width", "not-a-number"]).is_err());
    }
}
