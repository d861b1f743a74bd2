use addrbook::api::{CmdMessage, CmdResult, MessageLevel};
use addrbook::config::BookConfig;
use addrbook::model::Record;
use addrbook::notes::Note;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PAGE_SEPARATOR: &str = "----";
const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;

/// Everything a command produced, ready to print.
pub(super) fn render_result(result: &CmdResult) -> String {
    let mut blocks = Vec::new();

    if !result.pages.is_empty() {
        blocks.push(render_pages(&result.pages));
    }
    if !result.listed_records.is_empty() {
        blocks.push(render_records(&result.listed_records));
    }
    if !result.listed_notes.is_empty() {
        blocks.push(render_notes(&result.listed_notes));
    }
    if let Some(config) = &result.config {
        blocks.push(render_config(config));
    }
    if !result.messages.is_empty() {
        blocks.push(render_messages(&result.messages));
    }

    blocks.join("\n")
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let text = message.content.as_str();
            match message.level {
                MessageLevel::Info => text.normal().to_string(),
                MessageLevel::Success => text.green().to_string(),
                MessageLevel::Warning => text.yellow().to_string(),
                MessageLevel::Error => text.red().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_records(records: &[Record]) -> String {
    records
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_pages(pages: &[Vec<Record>]) -> String {
    pages
        .iter()
        .map(|page| render_records(page))
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", PAGE_SEPARATOR.dimmed()))
}

fn render_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|note| {
            let available = LINE_WIDTH.saturating_sub(TIME_WIDTH + 1);
            let text = truncate_to_width(&note.text.replace('\n', " "), available);
            let padding = available.saturating_sub(text.width());
            format!(
                "{}{} {}",
                text,
                " ".repeat(padding),
                format_time_ago(note.created_at).dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_config(config: &BookConfig) -> String {
    ["page-size", "contacts-file", "notes-file"]
        .iter()
        .filter_map(|key| config.get(key).map(|v| format!("{} = {}", key, v)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook::api::CmdResult;

    fn plain() {
        colored::control::set_override(false);
    }

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut r = Record::new(name);
        for p in phones {
            r.add_phone(p).unwrap();
        }
        r
    }

    #[test]
    fn pages_are_separated() {
        plain();
        let result = CmdResult::default().with_pages(vec![
            vec![record("Ann", &["1111111111"]), record("Bob", &[])],
            vec![record("Cy", &["2222222222", "3333333333"])],
        ]);
        assert_eq!(
            render_result(&result),
            "Ann: 1111111111\nBob: \n----\nCy: 2222222222, 3333333333"
        );
    }

    #[test]
    fn messages_follow_listings() {
        plain();
        let result = CmdResult::default()
            .with_listed_records(vec![record("Ann", &["1111111111"])])
            .with_message(CmdMessage::info("done"));
        assert_eq!(render_result(&result), "Ann: 1111111111\ndone");
    }

    #[test]
    fn long_notes_are_truncated() {
        plain();
        let note = Note::new("x".repeat(200));
        let out = render_notes(&[note]);
        assert!(out.contains('…'));
        assert!(out.width() <= LINE_WIDTH);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn config_lines() {
        let out = render_config(&BookConfig::default());
        assert!(out.starts_with("page-size = 5\n"));
    }
}
