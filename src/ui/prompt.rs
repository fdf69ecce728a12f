//! Line-oriented presenter
//!
//! Prints the queue and the reserve stack, prints the menu, reads one line,
//! runs the selection and prints what the journal recorded for it. Works over
//! any reader/writer pair, so it runs the same on a terminal, a pipe or a
//! test buffer.

use crate::game::action::{Action, Selection};
use crate::game::engine::Game;
use crate::journal::{JournalLine, Severity};
use crate::memory::piece::Piece;
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 54;

/// Drive `game` from `input` until the player exits or input runs out
pub fn run_prompt<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    write_lines(out, game.journal().lines())?;

    let mut line = String::new();
    loop {
        write!(out, "{}", format_state(game))?;
        write!(out, "{}", format_menu())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like choosing 0
            writeln!(out)?;
            say_goodbye(game, out)?;
            break;
        }

        let mark = game.journal().len();
        match Selection::parse(&line) {
            Ok(Selection::Run(action)) => {
                let _ = game.apply(action);
            }
            Ok(Selection::Exit) => {
                say_goodbye(game, out)?;
                break;
            }
            Err(e) => {
                tracing::debug!(input = line.trim(), "rejected menu input");
                game.note(Severity::Refused, e.to_string());
            }
        }
        writeln!(out)?;
        write_lines(out, game.journal().since(mark))?;
    }

    Ok(())
}

fn say_goodbye<W: Write>(game: &mut Game, out: &mut W) -> io::Result<()> {
    let mark = game.journal().len();
    game.note(Severity::Info, "Game over.");
    write_lines(out, game.journal().since(mark))
}

fn write_lines<W: Write>(out: &mut W, lines: &[JournalLine]) -> io::Result<()> {
    for line in lines {
        let tag = match line.severity {
            Severity::Info => "",
            Severity::Success => "[ok] ",
            Severity::Warning => "[warn] ",
            Severity::Refused => "[no] ",
        };
        writeln!(out, "{}{}", tag, line.text)?;
    }
    Ok(())
}

fn bracketed<'a>(pieces: impl Iterator<Item = &'a Piece>) -> String {
    pieces
        .map(|piece| format!("[{}]", piece.name()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Current queue and reserve stack as text
pub fn format_state(game: &Game) -> String {
    let queue = game.queue();
    let reserve = game.reserve();

    let queue_line = if queue.is_empty() {
        "[EMPTY]".to_string()
    } else {
        format!("FRONT -> {} <- REAR", bracketed(queue.iter()))
    };
    let reserve_line = if reserve.is_empty() {
        "[EMPTY]".to_string()
    } else {
        format!("TOP -> {} <- BASE", bracketed(reserve.iter()))
    };

    format!(
        "\n{title:=^width$}\nFIFO PLAY (circular queue, {}/{}): {}\nLIFO RESERVE (stack, {}/{}): {}\n{rule}\n",
        queue.len(),
        queue.capacity(),
        queue_line,
        reserve.len(),
        reserve.capacity(),
        reserve_line,
        title = " CURRENT STATE ",
        width = RULE_WIDTH,
        rule = "=".repeat(RULE_WIDTH),
    )
}

/// The numbered menu followed by the input prompt
pub fn format_menu() -> String {
    let mut menu = String::from("\n--- STRATEGIC ACTIONS ---\n");
    for action in Action::ALL {
        menu.push_str(&format!("{} - {}\n", action.key(), action.label()));
    }
    menu.push_str("0 - Quit\nChoose an action: ");
    menu
}
