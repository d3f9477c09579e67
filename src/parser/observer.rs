//! Parse progress notifications.

/// Receives progress notifications while a keymap is parsed.
///
/// Notifications are informational only; they never affect the result.
pub trait ParseObserver {
    /// Called before the keys of a layer are split.
    fn parsing_layer(&mut self, name: &str);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ParseObserver for Silent {
    fn parsing_layer(&mut self, _name: &str) {}
}

/// Records the names of parsed layers, in order.
impl ParseObserver for Vec<String> {
    fn parsing_layer(&mut self, name: &str) {
        self.push(name.to_string());
    }
}
