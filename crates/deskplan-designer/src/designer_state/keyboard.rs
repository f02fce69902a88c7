use serde::{Deserialize, Serialize};

use super::DesignerState;
use crate::input::Modifiers;

/// Editing command bound to a keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCommand {
    Undo,
    Redo,
    Copy,
    Paste,
    Delete,
}

impl KeyCommand {
    /// Resolves a key name (as reported by the input layer) and modifiers.
    ///
    /// Ctrl and Cmd are interchangeable. Letter keys match either case.
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        if key == "Delete" || key == "Backspace" {
            return Some(KeyCommand::Delete);
        }
        if !modifiers.command() {
            return None;
        }
        match key.to_ascii_lowercase().as_str() {
            "z" if modifiers.shift => Some(KeyCommand::Redo),
            "z" => Some(KeyCommand::Undo),
            "y" => Some(KeyCommand::Redo),
            "c" => Some(KeyCommand::Copy),
            "v" => Some(KeyCommand::Paste),
            _ => None,
        }
    }
}

impl DesignerState {
    /// Handles a key press. Keys typed into a text field are left alone.
    ///
    /// Returns the command that was run, if any.
    pub fn handle_key(
        &mut self,
        key: &str,
        modifiers: Modifiers,
        in_text_field: bool,
    ) -> Option<KeyCommand> {
        if in_text_field {
            return None;
        }
        let command = KeyCommand::from_key(key, modifiers)?;

        match command {
            KeyCommand::Undo => {
                self.undo();
            }
            KeyCommand::Redo => {
                self.redo();
            }
            KeyCommand::Copy => {
                self.copy();
            }
            KeyCommand::Paste => {
                self.paste();
            }
            KeyCommand::Delete => {
                if self.selection.is_empty() {
                    return None;
                }
                let ids = self.selection.ids().to_vec();
                self.delete_items(&ids);
            }
        }
        Some(command)
    }
}
