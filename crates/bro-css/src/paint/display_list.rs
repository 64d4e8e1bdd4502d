//! The display list: an ordered, backend-agnostic list of draw commands.

use crate::layout::Rect;
use crate::value::Color;

/// A single paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    /// Fill `1` (the rectangle) with `0` (the color).
    SolidColor(Color, Rect),
}

/// An ordered sequence of draw commands, executed back-to-front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// An empty display list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the end of the list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// The commands, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Number of commands in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// `true` if no commands have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
