use crate::command::{Command, CommandBuffer, Direction};
use crate::entity::{Entity, PlayerState};
use crate::input::{keys, KeyEvent, KeyEventKind};
use std::collections::HashMap;

// ==================== ControlSchema ====================
/// Raw input -> Command
/// - total : unmapped input is `Command::Null`, never an error
pub trait ControlSchema {
    fn process_input(&self, event: KeyEvent) -> Command;
}

/// Binding table keyed by (event kind, key code)
/// ┌──────────┬────────────────────┬────────────────────┐
/// │ key      │ Down               │ Up                 │
/// ├──────────┼────────────────────┼────────────────────┤
/// │ A        │ moveLeft  (active) │ moveLeft  (idle)   │
/// │ D        │ moveRight (active) │ moveRight (idle)   │
/// │ W        │ moveUp    (active) │ moveUp    (idle)   │
/// │ S        │ moveDown  (active) │ moveDown  (idle)   │
/// │ Space    │ fire               │ -                  │
/// └──────────┴────────────────────┴────────────────────┘
#[derive(Debug, Clone)]
pub struct KeyboardSchema {
    bindings: HashMap<(KeyEventKind, u32), Command>,
}

impl KeyboardSchema {
    pub fn empty() -> Self {
        KeyboardSchema {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, kind: KeyEventKind, key_code: u32, command: Command) {
        self.bindings.insert((kind, key_code), command);
    }

    /// Down activates, Up releases
    fn bind_direction(&mut self, key_code: u32, direction: Direction) {
        self.bind(
            KeyEventKind::Down,
            key_code,
            Command::Move {
                direction,
                active: true,
            },
        );
        self.bind(
            KeyEventKind::Up,
            key_code,
            Command::Move {
                direction,
                active: false,
            },
        );
    }
}

impl Default for KeyboardSchema {
    fn default() -> Self {
        let mut schema = KeyboardSchema::empty();
        schema.bind_direction(keys::A, Direction::Left);
        schema.bind_direction(keys::D, Direction::Right);
        schema.bind_direction(keys::W, Direction::Up);
        schema.bind_direction(keys::S, Direction::Down);
        schema.bind(KeyEventKind::Down, keys::SPACE, Command::Fire);
        schema
    }
}

impl ControlSchema for KeyboardSchema {
    fn process_input(&self, event: KeyEvent) -> Command {
        match self.bindings.get(&(event.kind, event.key_code)) {
            Some(command) => *command,
            None => {
                log::trace!("unmapped input {:?}", event);
                Command::Null
            }
        }
    }
}

// ==================== Controller ====================
/// Drives an entity from some control source, once per tick
pub trait Controller<S: 'static> {
    /// Stage input for the next tick, never applied immediately
    fn process_input(&mut self, event: KeyEvent);
    /// Apply everything staged since the last tick, then forget it
    fn update(&mut self, actor: &mut Entity<S>);
}

/// Keyboard driven controller for the player
pub struct PlayerController {
    schema: Box<dyn ControlSchema>,
    buffer: CommandBuffer,
}

impl PlayerController {
    pub fn new(schema: Box<dyn ControlSchema>) -> Self {
        PlayerController {
            schema,
            buffer: CommandBuffer::new(),
        }
    }

    pub fn buffer(&self) -> &CommandBuffer {
        &self.buffer
    }
}

impl Controller<PlayerState> for PlayerController {
    fn process_input(&mut self, event: KeyEvent) {
        let command = self.schema.process_input(event);
        self.buffer.add(command);
    }

    fn update(&mut self, actor: &mut Entity<PlayerState>) {
        self.buffer.execute_commands(actor);
        self.buffer.empty();
    }
}
