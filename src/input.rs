/// Numeric key codes delivered by `KeyboardEvent.keyCode`
pub mod keys {
    pub const SHIFT: u32 = 16;
    pub const SPACE: u32 = 32;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;

    /// Held to skip the per frame foreground clear (motion trails)
    pub const TRAIL: u32 = SHIFT;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Down,
    Up,
    Press,
}

/// Raw keyboard input as it arrives from the browser, between frames
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key_code: u32,
}

impl KeyEvent {
    pub fn down(key_code: u32) -> Self {
        KeyEvent {
            kind: KeyEventKind::Down,
            key_code,
        }
    }

    pub fn up(key_code: u32) -> Self {
        KeyEvent {
            kind: KeyEventKind::Up,
            key_code,
        }
    }

    pub fn press(key_code: u32) -> Self {
        KeyEvent {
            kind: KeyEventKind::Press,
            key_code,
        }
    }
}
