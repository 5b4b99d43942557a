//! In-memory sink.
//!
//! Keeps every forwarded message so callers (mostly tests and the CLI) can
//! inspect what made it past the filters. With a capacity set, the oldest
//! message is evicted once the buffer is full.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::channel::Channel;
use crate::message::Message;

/// Records messages in memory.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    messages: Mutex<VecDeque<Message>>,
    capacity: Option<usize>,
}

impl MemoryChannel {
    /// Unbounded buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding at most `capacity` messages. Storage grows on demand,
    /// so a huge bound costs nothing until it is filled.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: Mutex::new(VecDeque::new()),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Snapshot of recorded messages, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().iter().cloned().collect()
    }

    /// Texts of recorded messages, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.lock().iter().map(|m| m.text().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Message>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Channel for MemoryChannel {
    fn log(&self, message: &Message) {
        let mut messages = self.lock();
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while messages.len() >= capacity {
                messages.pop_front();
            }
        }
        messages.push_back(message.clone());
    }
}
