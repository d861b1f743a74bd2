use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::notes::{Note, Notebook};

pub fn add(notebook: &mut Notebook, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BookError::InsufficientArguments {
            usage: "note <text>".to_string(),
        });
    }
    let note = Note::new(text);
    notebook.add_note(note.clone());
    Ok(CmdResult::default()
        .with_listed_notes(vec![note])
        .with_message(CmdMessage::success("Note added.")))
}

/// All notes, or those containing `keyword` when one is given.
pub fn list(notebook: &Notebook, keyword: Option<&str>) -> Result<CmdResult> {
    let notes: Vec<Note> = match keyword {
        Some(keyword) => notebook.search_notes(keyword).into_iter().cloned().collect(),
        None => notebook.notes().to_vec(),
    };
    if notes.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No notes found.")));
    }
    Ok(CmdResult::default().with_listed_notes(notes))
}
