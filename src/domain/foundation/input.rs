//! Keyboard input events forwarded by the page host.

use serde::{Deserialize, Serialize};

/// A key identity, reduced to the keys the workbench reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

/// A key press together with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyEvent {
    /// A key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    /// A key press with the control modifier held.
    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}
