//! Numbered console menu.
//!
//! # Responsibility
//! - Loop over the five menu actions until exit or end of input.
//! - Validate user input here; invalid input never reaches the store.
//!
//! # Invariants
//! - Store errors are reported and the loop continues.
//! - Only writes to the output stream can abort the menu.

use crate::actions;
use crate::session::{CliResult, StoreSession};
use log::warn;
use quotebook_core::{render_detail, QuoteOrder};
use std::io::{BufRead, Write};

const MENU_TEXT: &str = "\nQuotebook
1. Seed baseline quotes
2. List quotes
3. Remove duplicate quotes
4. Bulk-generate quotes
5. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    SeedBaseline,
    List,
    Dedupe,
    BulkSeed,
    Exit,
}

fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().parse::<u8>().ok()? {
        1 => Some(MenuChoice::SeedBaseline),
        2 => Some(MenuChoice::List),
        3 => Some(MenuChoice::Dedupe),
        4 => Some(MenuChoice::BulkSeed),
        5 => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Runs the menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    session: &StoreSession,
    bulk_count: usize,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    writeln!(out, "Initializing quote store...")?;
    match actions::init_store(session) {
        Ok(()) => writeln!(out, "Quote store ready: {}", session.db_path().display())?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }

    loop {
        write!(out, "{MENU_TEXT}Choose an action: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(());
        };

        let Some(choice) = parse_choice(&line) else {
            writeln!(out, "Invalid choice, please enter a number from 1 to 5.")?;
            continue;
        };

        let outcome = match choice {
            MenuChoice::SeedBaseline => actions::seed_baseline(session).map(|report| {
                format!("Seeding finished: {}.", actions::describe_seed(&report))
            }),
            MenuChoice::List => {
                if browse(session, input, out)? {
                    continue;
                }
                writeln!(out)?;
                return Ok(());
            }
            MenuChoice::Dedupe => actions::remove_duplicates(session)
                .map(|deleted| format!("Cleanup finished, removed {deleted} duplicate quote(s).")),
            MenuChoice::BulkSeed => {
                writeln!(out, "Generating {bulk_count} quotes...")?;
                actions::seed_bulk_reporting(session, bulk_count, out).map(|report| {
                    format!("Bulk generation finished: {}.", actions::describe_seed(&report))
                })
            }
            MenuChoice::Exit => {
                writeln!(out, "Bye.")?;
                return Ok(());
            }
        };

        match outcome {
            Ok(message) => writeln!(out, "{message}")?,
            Err(err) => {
                warn!("event=menu_action module=cli status=error choice={choice:?}");
                writeln!(out, "Error: {err}")?;
            }
        }
    }
}

// Returns `false` when input ended while browsing.
fn browse<R: BufRead, W: Write>(
    session: &StoreSession,
    input: &mut R,
    out: &mut W,
) -> CliResult<bool> {
    let quotes = match actions::list_all(session, QuoteOrder::default()) {
        Ok(quotes) => quotes,
        Err(err) => {
            writeln!(out, "Error: {err}")?;
            return Ok(true);
        }
    };

    if quotes.is_empty() {
        writeln!(out, "No quotes stored yet.")?;
        return Ok(true);
    }

    writeln!(out, "\n{} quote(s) stored:\n", quotes.len())?;
    for (position, quote) in quotes.iter().enumerate() {
        writeln!(
            out,
            "{}. [{}] {} - {}",
            position + 1,
            quote.id,
            quote.content,
            quote.author.as_deref().unwrap_or("")
        )?;
    }

    loop {
        write!(out, "\nEnter a number to view details, or 0 to return: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        match line.trim().parse::<usize>() {
            Ok(0) => return Ok(true),
            Ok(position) if position <= quotes.len() => {
                write!(out, "\n{}", render_detail(&quotes[position - 1]))?;
                return Ok(true);
            }
            Ok(_) => writeln!(out, "No quote at that number.")?,
            Err(_) => writeln!(out, "Please enter a number.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::{parse_choice, run_menu, MenuChoice};
    use crate::session::StoreSession;
    use quotebook_core::seed::catalog::BASELINE_CATALOG;
    use std::io::Cursor;

    fn drive(session: &StoreSession, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_menu(session, 12, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn temp_session() -> (tempfile::TempDir, StoreSession) {
        let dir = tempfile::tempdir().unwrap();
        let session = StoreSession::new(dir.path().join("quotes.db"));
        (dir, session)
    }

    #[test]
    fn choices_parse_only_menu_numbers() {
        assert_eq!(parse_choice(" 1\n"), Some(MenuChoice::SeedBaseline));
        assert_eq!(parse_choice("5"), Some(MenuChoice::Exit));
        assert_eq!(parse_choice("6"), None);
        assert_eq!(parse_choice("seed"), None);
    }

    #[test]
    fn invalid_input_is_reprompted() {
        let (_dir, session) = temp_session();
        let output = drive(&session, "abc\n9\n5\n");
        assert_eq!(
            output
                .matches("Invalid choice, please enter a number from 1 to 5.")
                .count(),
            2
        );
        assert!(output.ends_with("Bye.\n"));
    }

    #[test]
    fn seeding_twice_inserts_once_then_skips() {
        let (_dir, session) = temp_session();
        let output = drive(&session, "1\n1\n5\n");
        let total = BASELINE_CATALOG.len();
        assert!(output.contains(&format!("inserted {total} new quote(s), skipped 0 existing")));
        assert!(output.contains(&format!("inserted 0 new quote(s), skipped {total} existing")));
    }

    #[test]
    fn list_then_view_detail() {
        let (_dir, session) = temp_session();
        let output = drive(&session, "1\n2\nx\n99\n3\n5\n");
        assert!(output.contains("1. [1] 朽木不可雕也 - 孔子"));
        assert!(output.contains("Please enter a number."));
        assert!(output.contains("No quote at that number."));
        assert!(output.contains("ID: 3"));
        assert!(output.contains("Quote: 三人行，必有我师焉"));
    }

    #[test]
    fn bulk_then_dedupe_reports_counts() {
        let (_dir, session) = temp_session();
        let output = drive(&session, "4\n3\n5\n");
        assert!(output.contains("Generating 12 quotes..."));
        assert!(output.contains("inserted 12 new quote(s), skipped 0 existing"));
        assert!(output.contains("removed 0 duplicate quote(s)"));
    }

    #[test]
    fn bulk_of_hundreds_prints_progress_lines() {
        let (_dir, session) = temp_session();
        let mut input = Cursor::new(b"4\n5\n".to_vec());
        let mut out = Vec::new();
        run_menu(&session, 120, &mut input, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        let progress = output.find("Progress: 100/120").unwrap();
        let finished = output.find("Bulk generation finished").unwrap();
        assert!(progress < finished);
        assert!(output.contains("inserted 120 new quote(s), skipped 0 existing"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (_dir, session) = temp_session();
        let output = drive(&session, "2\n");
        assert!(output.contains("No quotes stored yet."));
    }
}
