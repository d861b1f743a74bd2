//! The interactive prompt: read a line, parse it, dispatch, print.
//!
//! Command errors are printed and the loop continues. Only the exit command
//! or the end of input stops it. I/O errors on the prompt streams themselves
//! are returned.

use super::parser::{help_lines, parse_command, CommandKind, ParsedCommand};
use super::print::{render_messages, render_result};
use addrbook::api::{BookApi, CmdMessage, CmdResult};
use addrbook::error::{BookError, Result};
use addrbook::store::DataStore;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter command: ";

pub fn run_loop<S, R, W>(api: &mut BookApi<S>, mut input: R, out: &mut W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            tracing::debug!("end of input, leaving");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            writeln!(
                out,
                "{}",
                render_messages(&[CmdMessage::warning("Command not found!")])
            )?;
            continue;
        };

        tracing::debug!(kind = ?command.kind, args = command.args.len(), "dispatching");
        let rendered = match dispatch(api, &command) {
            Ok(result) => render_result(&result),
            Err(e) => {
                if !e.is_user_error() {
                    tracing::error!(error = %e, "command failed");
                }
                render_messages(&[CmdMessage::error(e.to_string())])
            }
        };
        if !rendered.is_empty() {
            writeln!(out, "{}", rendered)?;
        }

        if command.kind == CommandKind::Exit {
            return Ok(());
        }
    }
}

pub fn dispatch<S: DataStore>(api: &mut BookApi<S>, command: &ParsedCommand) -> Result<CmdResult> {
    let kind = command.kind;
    let args = command.args.as_slice();

    match kind {
        CommandKind::Hello => Ok(api.hello()),
        CommandKind::Add => {
            arity(kind, args, 2, 1)?;
            api.add_contact(args[0], args[1], args.get(2).copied())
        }
        CommandKind::Change => {
            arity(kind, args, 3, 0)?;
            api.change_phone(args[0], args[1], args[2])
        }
        CommandKind::Remove => {
            arity(kind, args, 2, 0)?;
            api.remove_phone(args[0], args[1])
        }
        CommandKind::Delete => {
            arity(kind, args, 1, 0)?;
            api.delete_contact(args[0])
        }
        CommandKind::Phone => {
            arity(kind, args, 1, 0)?;
            api.phones(args[0])
        }
        CommandKind::ShowAll => {
            arity(kind, args, 0, 1)?;
            let page_size = args.first().map(|s| parse_page_size(s)).transpose()?;
            api.show_all(page_size)
        }
        CommandKind::Search => {
            if args.is_empty() {
                return Err(insufficient(kind));
            }
            api.search(&args.join(" "))
        }
        CommandKind::Birthday => {
            arity(kind, args, 1, 0)?;
            api.birthday(args[0])
        }
        CommandKind::Note => {
            if args.is_empty() {
                return Err(insufficient(kind));
            }
            api.add_note(&args.join(" "))
        }
        CommandKind::Notes => {
            let keyword = args.join(" ");
            api.notes(Some(keyword.as_str()).filter(|k| !k.is_empty()))
        }
        CommandKind::Help => {
            let mut result = CmdResult::default();
            for line in help_lines() {
                result.add_message(CmdMessage::info(line));
            }
            Ok(result)
        }
        CommandKind::Exit => Ok(CmdResult::default().with_message(CmdMessage::info("Good bye!"))),
    }
}

fn arity(kind: CommandKind, args: &[&str], required: usize, optional: usize) -> Result<()> {
    if args.len() < required {
        return Err(insufficient(kind));
    }
    if let Some(extra) = args.get(required + optional) {
        return Err(BookError::UnexpectedArgument(extra.to_string()));
    }
    Ok(())
}

fn insufficient(kind: CommandKind) -> BookError {
    BookError::InsufficientArguments {
        usage: kind.usage().to_string(),
    }
}

fn parse_page_size(value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| BookError::InvalidArgument(format!("page size must be a number, got {}", value)))
}
