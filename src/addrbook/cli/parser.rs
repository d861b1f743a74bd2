//! Turns a typed line into a [`CommandKind`] and its argument tokens.
//!
//! Command words are looked up case-insensitively in a static table. The
//! first word is tried on its own, then together with the second word, which
//! is how `show all` and `good bye` are recognized. Arguments keep their case.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Remove,
    Delete,
    Phone,
    ShowAll,
    Search,
    Birthday,
    Note,
    Notes,
    Help,
    Exit,
}

impl CommandKind {
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Hello => "hello",
            CommandKind::Add => "add <name> <phone> [DD-MM-YYYY]",
            CommandKind::Change => "change <name> <old_phone> <new_phone>",
            CommandKind::Remove => "remove <name> <phone>",
            CommandKind::Delete => "delete <name>",
            CommandKind::Phone => "phone <name>",
            CommandKind::ShowAll => "show all [page_size]",
            CommandKind::Search => "search <query>",
            CommandKind::Birthday => "birthday <name>",
            CommandKind::Note => "note <text>",
            CommandKind::Notes => "notes [keyword]",
            CommandKind::Help => "help",
            CommandKind::Exit => "exit | close | good bye",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommandKind::Hello => "Say hello",
            CommandKind::Add => "Add a phone to a contact, creating it if needed",
            CommandKind::Change => "Replace one of a contact's phones",
            CommandKind::Remove => "Remove one of a contact's phones",
            CommandKind::Delete => "Delete a contact",
            CommandKind::Phone => "Show a contact's phones",
            CommandKind::ShowAll => "List all contacts, page by page",
            CommandKind::Search => "Find contacts by name or phone fragment",
            CommandKind::Birthday => "Days until a contact's next birthday",
            CommandKind::Note => "Save a note",
            CommandKind::Notes => "List notes, or those containing a keyword",
            CommandKind::Help => "Show this list",
            CommandKind::Exit => "Leave",
        }
    }
}

/// Every spelling the prompt accepts. Order is the order `help` lists them.
const COMMAND_TABLE: &[(&str, CommandKind)] = &[
    ("hello", CommandKind::Hello),
    ("add", CommandKind::Add),
    ("change", CommandKind::Change),
    ("remove", CommandKind::Remove),
    ("delete", CommandKind::Delete),
    ("phone", CommandKind::Phone),
    ("show all", CommandKind::ShowAll),
    ("search", CommandKind::Search),
    ("birthday", CommandKind::Birthday),
    ("note", CommandKind::Note),
    ("notes", CommandKind::Notes),
    ("help", CommandKind::Help),
    ("good bye", CommandKind::Exit),
    ("close", CommandKind::Exit),
    ("exit", CommandKind::Exit),
];

static COMMANDS: Lazy<HashMap<&'static str, CommandKind>> =
    Lazy::new(|| COMMAND_TABLE.iter().copied().collect());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub kind: CommandKind,
    pub args: Vec<&'a str>,
}

/// `None` when the line does not start with a known command.
pub fn parse_command(line: &str) -> Option<ParsedCommand<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = tokens.first()?;

    if let Some(kind) = lookup(first) {
        return Some(ParsedCommand {
            kind,
            args: tokens[1..].to_vec(),
        });
    }

    if tokens.len() >= 2 {
        let two_words = format!("{} {}", tokens[0], tokens[1]);
        if let Some(kind) = lookup(&two_words) {
            return Some(ParsedCommand {
                kind,
                args: tokens[2..].to_vec(),
            });
        }
    }

    None
}

fn lookup(word: &str) -> Option<CommandKind> {
    COMMANDS.get(word.to_lowercase().as_str()).copied()
}

/// One line per command kind, in table order.
pub fn help_lines() -> Vec<String> {
    let mut seen = Vec::new();
    let mut lines = Vec::new();
    for (_, kind) in COMMAND_TABLE {
        if seen.contains(kind) {
            continue;
        }
        seen.push(*kind);
        lines.push(format!("{:<40} {}", kind.usage(), kind.description()));
    }
    lines
}
