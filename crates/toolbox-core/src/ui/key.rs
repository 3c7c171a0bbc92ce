//! Terminal-independent key events

/// One discrete input event.
///
/// Screens decide what a key means; the same `Char('b')` is "back" in a menu
/// and a letter in a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Tab,
    CtrlC,
    Char(char),
    /// Several characters delivered at once (e.g. a paste)
    Paste(String),
}

/// Keys for typing `text` one character at a time. Used to script sessions in tests.
#[doc(hidden)]
pub fn keys_for(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}
