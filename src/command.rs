use crate::entity::{Entity, PlayerState};
use std::collections::HashMap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// ┌──────────────── Command Table ─────────────────────────────┐
/// │  name        →  effect on the player when executed         │
/// ├────────────────────────────────────────────────────────────┤
/// │  moveLeft    →  move_state.left  = active                  │
/// │  moveRight   →  move_state.right = active                  │
/// │  moveUp      →  move_state.up    = active                  │
/// │  moveDown    →  move_state.down  = active                  │
/// │  fire        →  weapon fires + recharges, if charged       │
/// │  null        →  nothing (unmapped input)                   │
/// └────────────────────────────────────────────────────────────┘
/// Every command touches a field no other command touches, so a tick's
/// commands give the same result in any execution order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move { direction: Direction, active: bool },
    Fire,
    Null,
}

impl Command {
    /// Stable dedup key inside a CommandBuffer
    pub fn name(&self) -> &'static str {
        match self {
            Command::Move { direction, .. } => match direction {
                Direction::Left => "moveLeft",
                Direction::Right => "moveRight",
                Direction::Up => "moveUp",
                Direction::Down => "moveDown",
            },
            Command::Fire => "fire",
            Command::Null => "null",
        }
    }

    pub fn execute(&self, actor: &mut Entity<PlayerState>) {
        match *self {
            Command::Move { direction, active } => {
                let move_state = &mut actor.state.move_state;
                match direction {
                    Direction::Left => move_state.left = active,
                    Direction::Right => move_state.right = active,
                    Direction::Up => move_state.up = active,
                    Direction::Down => move_state.down = active,
                }
            }
            Command::Fire => {
                let position = actor.position;
                let weapon = &mut actor.state.weapon;
                if weapon.is_charged() {
                    weapon.fire(position);
                    weapon.recharge();
                }
            }
            Command::Null => {}
        }
    }
}

/// Latest command per name, applied once per tick then cleared
/// - a second `moveLeft` before the tick replaces the first, never stacks
#[derive(Debug, Default)]
pub struct CommandBuffer {
    buffer: HashMap<&'static str, Command>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        CommandBuffer::default()
    }

    pub fn add(&mut self, command: Command) {
        self.buffer.insert(command.name(), command);
    }

    pub fn remove(&mut self, command: &Command) {
        self.buffer.remove(command.name());
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.buffer.get(name)
    }

    /// Order is whatever the map yields, see the table on `Command`
    pub fn execute_commands(&self, actor: &mut Entity<PlayerState>) {
        for command in self.buffer.values() {
            command.execute(actor);
        }
    }

    pub fn empty(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
