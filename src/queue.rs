//! Fixed-capacity command queue that replays cyclically.

use crate::command::Command;
use crate::types::FaderError;
use heapless::Vec;

/// An ordered, appendable sequence of [`Command`]s with a cursor.
///
/// Commands run in insertion order. After the last command completes the cursor wraps
/// to the first one, so the queue replays until it is cleared.
///
/// # Type Parameters
/// * `N` - Maximum number of commands the queue can hold
#[derive(Debug, Clone)]
pub struct CommandQueue<const N: usize> {
    commands: Vec<Command, N>,
    cursor: usize,
    cycles: u32,
}

impl<const N: usize> CommandQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            cursor: 0,
            cycles: 0,
        }
    }

    /// Appends a command at the back.
    ///
    /// # Errors
    /// * `QueueFull` - The queue already holds `N` commands
    pub fn append(&mut self, command: Command) -> Result<(), FaderError> {
        self.commands.push(command).map_err(|_| FaderError::QueueFull)
    }

    /// Removes every command and rewinds the cursor.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
        self.cycles = 0;
    }

    /// The command under the cursor, if any.
    pub fn current(&self) -> Option<&Command> {
        self.commands.get(self.cursor)
    }

    /// The most recently appended command.
    pub fn last(&self) -> Option<&Command> {
        self.commands.last()
    }

    /// Moves the cursor to the next command, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if self.commands.is_empty() {
            return;
        }

        if self.cursor + 1 < self.commands.len() {
            self.cursor += 1;
        } else {
            self.cursor = 0;
            self.cycles = self.cycles.wrapping_add(1);
        }
    }

    /// Index of the command under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of times the whole queue has been played through since the last clear.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no commands are queued.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Free slots left.
    pub fn remaining_capacity(&self) -> usize {
        N - self.commands.len()
    }

    /// All queued commands in execution order.
    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    fn snap(level: u16) -> Command {
        Command::snap(Srgb::new(level, level, level))
    }

    #[test]
    fn cursor_wraps_after_last_command() {
        let mut queue = CommandQueue::<4>::new();
        queue.append(snap(1)).unwrap();
        queue.append(snap(2)).unwrap();
        queue.append(snap(3)).unwrap();

        queue.advance();
        queue.advance();
        assert_eq!(queue.cursor(), 2);
        assert_eq!(queue.cycles(), 0);

        queue.advance();
        assert_eq!(queue.cursor(), 0);
        assert_eq!(queue.cycles(), 1);
        assert_eq!(queue.current(), Some(&snap(1)));
    }

    #[test]
    fn single_command_queue_wraps_onto_itself() {
        let mut queue = CommandQueue::<2>::new();
        queue.append(snap(9)).unwrap();
        queue.advance();
        assert_eq!(queue.cursor(), 0);
        assert_eq!(queue.cycles(), 1);
    }

    #[test]
    fn append_fails_when_full() {
        let mut queue = CommandQueue::<1>::new();
        queue.append(snap(1)).unwrap();
        assert_eq!(queue.append(snap(2)), Err(FaderError::QueueFull));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.remaining_capacity(), 0);
    }

    #[test]
    fn clear_rewinds_everything() {
        let mut queue = CommandQueue::<4>::new();
        queue.append(snap(1)).unwrap();
        queue.append(snap(2)).unwrap();
        queue.advance();
        queue.advance();
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.cursor(), 0);
        assert_eq!(queue.cycles(), 0);
        assert!(queue.current().is_none());
    }

    #[test]
    fn advance_on_empty_queue_is_noop() {
        let mut queue = CommandQueue::<4>::new();
        queue.advance();
        assert_eq!(queue.cursor(), 0);
        assert_eq!(queue.cycles(), 0);
    }

    #[test]
    fn last_tracks_most_recent_append() {
        let mut queue = CommandQueue::<4>::new();
        assert!(queue.last().is_none());
        queue.append(snap(1)).unwrap();
        queue.append(snap(2)).unwrap();
        assert_eq!(queue.last(), Some(&snap(2)));
    }
}
