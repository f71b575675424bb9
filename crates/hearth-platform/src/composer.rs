//! Message composer: the multi-line input box.
//!
//! Enter submits the buffer. Shift+Enter inserts a line break instead and
//! never submits. The composer does not clear itself on submit; the caller
//! clears it once the session has accepted the message.

/// A key the composer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
}

/// Modifier key state at the time of the press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: true,
    };
}

/// The result of feeding one key to the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerAction {
    /// The buffer changed.
    Edited,
    /// Submit the current buffer (untrimmed).
    Submit(String),
    /// Nothing happened.
    Consumed,
}

#[derive(Debug, Default)]
pub struct Composer {
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_key(&mut self, key: Key, mods: Modifiers) -> ComposerAction {
        match key {
            Key::Enter if mods.shift => {
                self.buffer.push('\n');
                ComposerAction::Edited
            }
            Key::Enter => ComposerAction::Submit(self.buffer.clone()),
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    ComposerAction::Edited
                } else {
                    ComposerAction::Consumed
                }
            }
            // Control chords are not text.
            Key::Char(_) if mods.ctrl || mods.alt => ComposerAction::Consumed,
            Key::Char(c) => {
                self.buffer.push(c);
                ComposerAction::Edited
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
