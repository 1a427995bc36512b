use crate::models::{BarreMap, DotMap, FretDiagram, FretProperty, MarkerMap, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Copy of everything an edit gesture can change on a diagram
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FretDataSnapshot {
    pub strings: i32,
    pub barres: BarreMap,
    pub dots: DotMap,
    pub markers: MarkerMap,
}

impl FretDataSnapshot {
    pub fn capture(fd: &FretDiagram) -> Self {
        Self {
            strings: fd.strings(),
            barres: fd.barres(),
            dots: fd.dots(),
            markers: fd.markers(),
        }
    }

    /// Put the snapshot back verbatim.
    pub fn restore(&self, fd: &mut FretDiagram) {
        // Empty the maps first so the string count change shifts nothing.
        fd.set_barres(BarreMap::new());
        fd.set_dots(DotMap::new());
        fd.set_markers(MarkerMap::new());
        fd.set_strings(self.strings);

        fd.set_barres(self.barres.clone());
        fd.set_dots(self.dots.clone());
        fd.set_markers(self.markers.clone());
    }
}

/// Represents a reversible edit command
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Dots, markers, barres (and string count) before and after an edit
    FretData {
        before: FretDataSnapshot,
        after: FretDataSnapshot,
    },
    /// A scalar property change
    Property {
        property: FretProperty,
        old: PropertyValue,
        new: PropertyValue,
    },
    /// A batch of commands grouped together (e.g., one inspector change)
    Batch {
        commands: Vec<Command>,
    },
}

impl Command {
    /// Execute this command on the diagram
    pub fn execute(&self, fd: &mut FretDiagram) -> Result<(), String> {
        match self {
            Command::FretData { after, .. } => {
                after.restore(fd);
                Ok(())
            }
            Command::Property { property, new, .. } => {
                fd.set_property(*property, *new);
                Ok(())
            }
            Command::Batch { commands } => {
                for cmd in commands {
                    cmd.execute(fd)?;
                }
                Ok(())
            }
        }
    }

    /// Undo this command (reverse the operation)
    pub fn undo(&self, fd: &mut FretDiagram) -> Result<(), String> {
        match self {
            Command::FretData { before, .. } => {
                before.restore(fd);
                Ok(())
            }
            Command::Property { property, old, .. } => {
                fd.set_property(*property, *old);
                Ok(())
            }
            Command::Batch { commands } => {
                // Undo batch in reverse order
                for cmd in commands.iter().rev() {
                    cmd.undo(fd)?;
                }
                Ok(())
            }
        }
    }

    /// Whether applying the command would change nothing
    pub fn is_noop(&self) -> bool {
        match self {
            Command::FretData { before, after } => before == after,
            Command::Property { old, new, .. } => old == new,
            Command::Batch { commands } => commands.iter().all(Command::is_noop),
        }
    }
}

/// Manages undo/redo command history
///
/// Commands pushed between `begin_batch` and `finalize_batch` become one
/// undo step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UndoStack {
    /// Stack of commands that can be undone
    pub commands: VecDeque<Command>,
    /// Current position in the stack (for redo support)
    pub current_index: usize,
    /// Maximum number of commands to keep in history
    max_size: usize,
    /// Current batch being accumulated (if any)
    #[serde(skip)]
    current_batch: Option<Vec<Command>>,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(100)
    }
}

impl PartialEq for UndoStack {
    fn eq(&self, other: &Self) -> bool {
        // Only compare serialized fields (skip transient fields)
        self.commands == other.commands
            && self.current_index == other.current_index
            && self.max_size == other.max_size
    }
}

impl UndoStack {
    /// Create a new undo stack with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            commands: VecDeque::new(),
            current_index: 0,
            max_size,
            current_batch: None,
        }
    }

    /// Start grouping pushed commands into one undo step
    pub fn begin_batch(&mut self) {
        self.finalize_batch();
        self.current_batch = Some(Vec::new());
    }

    /// Add an already applied command; no-op commands are dropped
    pub fn push(&mut self, command: Command) {
        if command.is_noop() {
            return;
        }

        match self.current_batch {
            Some(ref mut batch) => batch.push(command),
            None => self.record(command),
        }
    }

    /// Finalize the current batch and add it to the undo stack
    pub fn finalize_batch(&mut self) {
        if let Some(mut batch) = self.current_batch.take() {
            let command = match batch.len() {
                0 => return,
                1 => batch.remove(0),
                _ => Command::Batch { commands: batch },
            };
            self.record(command);
        }
    }

    fn record(&mut self, command: Command) {
        // Truncate any redo history when new command is added
        self.commands.truncate(self.current_index);
        self.commands.push_back(command);
        self.current_index = self.commands.len();

        // Enforce max size
        if self.commands.len() > self.max_size {
            self.commands.pop_front();
            self.current_index = self.current_index.saturating_sub(1);
        }
    }

    /// Undo the last command
    pub fn undo(&mut self, fd: &mut FretDiagram) -> Result<(), String> {
        // Finalize any pending batch first
        self.finalize_batch();

        if !self.can_undo() {
            return Err("No undo history available".to_string());
        }

        self.current_index -= 1;
        let command = &self.commands[self.current_index];
        command.undo(fd)
    }

    /// Redo the last undone command
    pub fn redo(&mut self, fd: &mut FretDiagram) -> Result<(), String> {
        if !self.can_redo() {
            return Err("No redo history available".to_string());
        }

        let command = &self.commands[self.current_index];
        command.execute(fd)?;
        self.current_index += 1;
        Ok(())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.current_index < self.commands.len()
    }

    /// Clear all undo history
    pub fn clear(&mut self) {
        self.commands.clear();
        self.current_index = 0;
        self.current_batch = None;
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.current_index
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.commands.len() - self.current_index
    }
}
