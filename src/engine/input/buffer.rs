// Input buffering so presses are not lost between ticks

use super::action::Command;
use std::collections::VecDeque;

/// Maximum number of buffered commands to store
const MAX_BUFFER_SIZE: usize = 8;

/// How long a command remains in the buffer (in ticks)
pub const BUFFER_DURATION: u32 = 5;

/// A single buffered command
#[derive(Debug, Clone, Copy)]
pub struct BufferedCommand {
    pub command: Command,
    pub ticks_remaining: u32,
}

impl BufferedCommand {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            ticks_remaining: BUFFER_DURATION,
        }
    }

    pub fn age(&mut self) {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.ticks_remaining == 0
    }
}

/// Short-lived command memory
///
/// A jump pressed while the body is briefly airborne (one tick of a landing
/// bounce, say) stays pending for a few ticks and fires on the next contact.
#[derive(Debug, Default)]
pub struct InputBuffer {
    buffer: VecDeque<BufferedCommand>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(MAX_BUFFER_SIZE),
        }
    }

    /// Buffer a command; a command already pending is not duplicated
    pub fn push(&mut self, command: Command) {
        if let Some(pending) = self.buffer.iter_mut().find(|b| b.command == command) {
            pending.ticks_remaining = BUFFER_DURATION;
            return;
        }

        self.buffer.push_back(BufferedCommand::new(command));
        if self.buffer.len() > MAX_BUFFER_SIZE {
            self.buffer.pop_front();
        }
    }

    pub fn has(&self, command: Command) -> bool {
        self.buffer.iter().any(|b| b.command == command)
    }

    /// Remove a pending command; returns whether it was pending
    pub fn consume(&mut self, command: Command) -> bool {
        if let Some(pos) = self.buffer.iter().position(|b| b.command == command) {
            self.buffer.remove(pos);
            true
        } else {
            false
        }
    }

    /// Age every pending command and drop the expired ones; call once per tick
    pub fn update(&mut self) {
        for pending in &mut self.buffer {
            pending.age();
        }
        self.buffer.retain(|b| !b.is_expired());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
