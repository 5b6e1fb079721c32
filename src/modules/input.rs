use eframe::egui::{Event, Key};

/// Everything the keyboard can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GrowHeight,
    ShrinkHeight,
    GrowWidth,
    ShrinkWidth,
    /// Moves the grid origin up, offset y - 1
    OffsetUp,
    OffsetDown,
    OffsetLeft,
    OffsetRight,
    RefreshTints,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::ArrowUp => Self::GrowHeight,
            Key::ArrowDown => Self::ShrinkHeight,
            Key::ArrowRight => Self::GrowWidth,
            Key::ArrowLeft => Self::ShrinkWidth,
            Key::W => Self::OffsetUp,
            Key::S => Self::OffsetDown,
            Key::A => Self::OffsetLeft,
            Key::D => Self::OffsetRight,
            Key::R => Self::RefreshTints,
            _ => return None,
        };

        Some(command)
    }
}

/// Commands for this tick's key events, in order. Only fresh presses count,
/// releases and auto-repeat are dropped.
pub fn commands(events: &[Event]) -> Vec<Command> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => Command::from_key(*key),
            _ => None,
        })
        .collect()
}
