//! Interactive paginated table front end.
//!
//! # Responsibility
//! - Parse table commands into view actions or store actions.
//! - Reload the current page after every command and render it.
//!
//! # Invariants
//! - All UI state lives in `TableViewState`; this loop only threads it
//!   through `apply` and `render_table`.
//! - Store failures become the status line; they never end the loop.

use crate::actions;
use crate::session::{CliResult, StoreSession};
use quotebook_core::{
    render_detail, render_table, Column, QuoteId, SortDirection, SortField, TableAction,
    TableViewState,
};
use std::io::{BufRead, Write};

const HELP_TEXT: &str = "commands:
  f | p | n | l          first / previous / next / last page
  g <page>               jump to a page
  sort <field>           id, content, author, era, created_at
  dir [asc|desc]         set (or flip) the sort direction
  col <column>           show/hide id, content, author, era, meaning, created_at
  show <id>              print every field of one quote
  init | seed | bulk     initialize store / seed baseline / bulk-generate
  dedupe                 remove duplicate quotes
  r                      reload
  q                      quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum TableCommand {
    View(TableAction),
    FlipDirection,
    Show(QuoteId),
    Init,
    Seed,
    Bulk,
    Dedupe,
    Refresh,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<TableCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(TableCommand::Refresh);
    };
    let arg = words.next();

    let command = match (head.to_ascii_lowercase().as_str(), arg) {
        ("f" | "first", None) => TableCommand::View(TableAction::FirstPage),
        ("p" | "prev", None) => TableCommand::View(TableAction::PrevPage),
        ("n" | "next", None) => TableCommand::View(TableAction::NextPage),
        ("l" | "last", None) => TableCommand::View(TableAction::LastPage),
        ("g" | "goto", Some(page)) => match page.parse::<u32>() {
            Ok(page) => TableCommand::View(TableAction::GoTo(page)),
            Err(_) => return Err(format!("`{page}` is not a page number")),
        },
        ("sort", Some(field)) => {
            TableCommand::View(TableAction::SortBy(SortField::parse_lenient(field)))
        }
        ("dir", None) => TableCommand::FlipDirection,
        ("dir", Some(direction)) => TableCommand::View(TableAction::SortDirection(
            SortDirection::parse_lenient(direction),
        )),
        ("col", Some(name)) => match Column::parse(name) {
            Some(column) => TableCommand::View(TableAction::ToggleColumn(column)),
            None => return Err(format!("unknown column `{name}`")),
        },
        ("show", Some(id)) => match id.parse::<QuoteId>() {
            Ok(id) => TableCommand::Show(id),
            Err(_) => return Err(format!("`{id}` is not a quote id")),
        },
        ("init", None) => TableCommand::Init,
        ("seed", None) => TableCommand::Seed,
        ("bulk", None) => TableCommand::Bulk,
        ("dedupe", None) => TableCommand::Dedupe,
        ("r" | "refresh", None) => TableCommand::Refresh,
        ("h" | "help" | "?", None) => TableCommand::Help,
        ("q" | "quit" | "exit", None) => TableCommand::Quit,
        _ => return Err(format!("unrecognized command `{}`", line.trim())),
    };

    if words.next().is_some() {
        return Err(format!("too many arguments in `{}`", line.trim()));
    }
    Ok(command)
}

/// Runs the table view until `q` or end of input.
pub fn run_table<R: BufRead, W: Write>(
    session: &StoreSession,
    page_size: u32,
    bulk_count: usize,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let mut state = TableViewState::new(page_size);
    writeln!(out, "Type `help` for commands.")?;

    loop {
        state = reload(session, state, out)?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                state = state.apply(TableAction::Status(message));
                continue;
            }
        };

        let status = match command {
            TableCommand::View(action) => {
                state = state.apply(action);
                continue;
            }
            TableCommand::FlipDirection => {
                let flipped = state.order.direction.reversed();
                state = state.apply(TableAction::SortDirection(flipped));
                continue;
            }
            TableCommand::Show(id) => {
                match actions::find_quote(session, id) {
                    Ok(Some(quote)) => write!(out, "{}", render_detail(&quote))?,
                    Ok(None) => writeln!(out, "No quote with id {id}.")?,
                    Err(err) => writeln!(out, "Error: {err}")?,
                }
                continue;
            }
            TableCommand::Init => {
                actions::init_store(session).map(|()| "Store initialized".to_string())
            }
            TableCommand::Seed => actions::seed_baseline(session)
                .map(|report| format!("Seeding finished: {}", actions::describe_seed(&report))),
            TableCommand::Bulk => {
                writeln!(out, "Generating {bulk_count} quotes...")?;
                actions::seed_bulk_reporting(session, bulk_count, out).map(|report| {
                    format!("Bulk generation finished: {}", actions::describe_seed(&report))
                })
            }
            TableCommand::Dedupe => actions::remove_duplicates(session)
                .map(|deleted| format!("Removed {deleted} duplicate quote(s)")),
            TableCommand::Refresh => Ok("Ready".to_string()),
            TableCommand::Help => {
                writeln!(out, "{HELP_TEXT}")?;
                continue;
            }
            TableCommand::Quit => return Ok(()),
        };

        let status = status.unwrap_or_else(|err| format!("Error: {err}"));
        state = state.apply(TableAction::Status(status));
    }
}

// Fetches the current page, clamps the page number, and prints the table.
fn reload<W: Write>(
    session: &StoreSession,
    state: TableViewState,
    out: &mut W,
) -> CliResult<TableViewState> {
    let fetch = |state: &TableViewState| {
        actions::list_page(session, state.page, state.page_size, state.order)
    };

    let (state, rows) = match fetch(&state) {
        Ok(page) => {
            let requested = state.page;
            let state = state.apply(TableAction::Loaded {
                total_pages: page.total_pages,
            });
            if state.page == requested {
                (state, page.items)
            } else {
                match fetch(&state) {
                    Ok(page) => (state, page.items),
                    Err(err) => (
                        state.apply(TableAction::Status(format!("Error: {err}"))),
                        Vec::new(),
                    ),
                }
            }
        }
        Err(err) => (
            state.apply(TableAction::Status(format!("Error: {err}"))),
            Vec::new(),
        ),
    };

    write!(out, "\n{}", render_table(&state, &rows))?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run_table, TableCommand};
    use crate::session::StoreSession;
    use quotebook_core::{Column, SortDirection, SortField, TableAction};
    use std::io::Cursor;

    fn drive(script: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let session = StoreSession::new(dir.path().join("quotes.db"));
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_table(&session, 2, 15, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_navigation_and_sorting() {
        assert_eq!(
            parse_command("n\n"),
            Ok(TableCommand::View(TableAction::NextPage))
        );
        assert_eq!(
            parse_command("sort AUTHOR"),
            Ok(TableCommand::View(TableAction::SortBy(SortField::Author)))
        );
        assert_eq!(
            parse_command("sort nonsense"),
            Ok(TableCommand::View(TableAction::SortBy(SortField::Id)))
        );
        assert_eq!(
            parse_command("dir desc"),
            Ok(TableCommand::View(TableAction::SortDirection(
                SortDirection::Descending
            )))
        );
        assert_eq!(parse_command("dir"), Ok(TableCommand::FlipDirection));
        assert_eq!(
            parse_command("col meaning"),
            Ok(TableCommand::View(TableAction::ToggleColumn(Column::Meaning)))
        );
        assert_eq!(
            parse_command("g 3"),
            Ok(TableCommand::View(TableAction::GoTo(3)))
        );
        assert_eq!(parse_command("   "), Ok(TableCommand::Refresh));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(parse_command("col pinyin").is_err());
        assert!(parse_command("show abc").is_err());
        assert!(parse_command("n 2").is_err());
        assert!(parse_command("g last").is_err());
        assert!(parse_command("jump").is_err());
    }

    #[test]
    fn seed_then_page_through_table() {
        let output = drive("seed\nsort id\ndir asc\ng 2\nl\nn\nq\n");
        assert!(output.contains("Seeding finished: inserted 5 new quote(s)"));
        assert!(output.contains("page 1/3 | sort: id asc"));
        assert!(output.contains("page 2/3 | sort: id asc"));
        assert!(output.contains("nav: f p - -"));
        assert!(output.contains("page 3/3 | sort: id asc"));
        assert!(output.contains("天时不如地利，地利不如人和"));
    }

    #[test]
    fn bad_command_shows_in_status_line() {
        let output = drive("jump\nq\n");
        assert!(output.contains("unrecognized command `jump`"));
    }

    #[test]
    fn show_prints_detail_or_not_found() {
        let output = drive("seed\nshow 2\nshow 99\nq\n");
        assert!(output.contains("Quote: 学而时习之，不亦说乎"));
        assert!(output.contains("No quote with id 99."));
    }

    #[test]
    fn bulk_and_dedupe_update_status() {
        let output = drive("bulk\ndedupe\n");
        assert!(output.contains("Generating 15 quotes..."));
        assert!(output.contains("inserted 15 new quote(s)"));
        assert!(output.contains("Removed 0 duplicate quote(s)"));
        assert!(output.contains("page 1/8"));
    }
}
