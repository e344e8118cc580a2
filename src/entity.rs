use crate::control::Controller;
use crate::input::KeyEvent;
use crate::render::{Point, Size, Surface};
use crate::sprite::Sprite;
use crate::timestep::Timestepper;
use crate::vector::Vector;
use crate::weapon::Weapon;
use std::rc::Rc;

/// ┌─────────────────────────── Entity Composition ──────────────────────────┐
/// │                                                                         │
/// │   Entity<S>                                                             │
/// │   ├─ position : Vector                                                  │
/// │   ├─ sprite   : Rc<Sprite>            (shared, read only)               │
/// │   ├─ stepper  : Rc<dyn Timestepper<S>> (movement rule for this kind)    │
/// │   └─ state    : S                      (kind specific data)             │
/// │                                                                         │
/// │   Player     = Entity<PlayerState> + Box<dyn Controller<PlayerState>>   │
/// │   Projectile = Entity<Payload>                                          │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// Steppers are typed by `S` : a bullet rule only ever sees `Entity<Payload>`.
pub struct Entity<S: 'static> {
    pub position: Vector,
    sprite: Rc<Sprite>,
    stepper: Rc<dyn Timestepper<S>>,
    pub state: S,
}

impl<S: 'static> Entity<S> {
    pub fn new(
        position: Vector,
        sprite: Rc<Sprite>,
        stepper: Rc<dyn Timestepper<S>>,
        state: S,
    ) -> Self {
        Entity {
            position,
            sprite,
            stepper,
            state,
        }
    }

    pub fn sprite(&self) -> &Rc<Sprite> {
        &self.sprite
    }

    pub fn update(&mut self, dt: f64) {
        // stepper needs `&mut self`, so step through our own handle to it
        let stepper = Rc::clone(&self.stepper);
        stepper.step(dt, self);
    }

    /// Draws at the floor-rounded position
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(
            &self.sprite,
            Point {
                x: self.position.x.floor() as i32,
                y: self.position.y.floor() as i32,
            },
        );
    }

    /// True once the sprite's bounding box has fully left `playfield`
    pub fn is_outside(&self, playfield: Size) -> bool {
        let Vector { x, y } = self.position;
        x > f64::from(playfield.width)
            || x + self.sprite.width() < 0.0
            || y > f64::from(playfield.height)
            || y + self.sprite.height() < 0.0
    }
}

// ==================== Player ====================
/// Currently held directions
/// - velocity is derived from this every tick, never stored
/// - left + right (or up + down) held together cancel out
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MoveState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveState {
    /// -1 / 0 / +1 per axis, diagonals are NOT normalized
    pub fn velocity(&self) -> Vector {
        fn axis(negative: bool, positive: bool) -> f64 {
            f64::from(i8::from(positive) - i8::from(negative))
        }
        Vector::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

pub struct PlayerState {
    pub move_state: MoveState,
    pub weapon: Weapon,
}

impl PlayerState {
    pub fn new(weapon: Weapon) -> Self {
        PlayerState {
            move_state: MoveState::default(),
            weapon,
        }
    }
}

pub struct Player {
    entity: Entity<PlayerState>,
    controller: Box<dyn Controller<PlayerState>>,
}

impl Player {
    pub fn new(entity: Entity<PlayerState>, controller: Box<dyn Controller<PlayerState>>) -> Self {
        Player { entity, controller }
    }

    /// Stage only, nothing moves until the next `update`
    pub fn process_input(&mut self, event: KeyEvent) {
        self.controller.process_input(event);
    }

    /// Buffered commands first, then the timestepper
    pub fn update(&mut self, dt: f64) {
        self.controller.update(&mut self.entity);
        self.entity.update(dt);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.entity.render(surface);
    }

    pub fn entity(&self) -> &Entity<PlayerState> {
        &self.entity
    }

    pub fn position(&self) -> Vector {
        self.entity.position
    }

    pub fn move_state(&self) -> MoveState {
        self.entity.state.move_state
    }

    pub fn weapon(&self) -> &Weapon {
        &self.entity.state.weapon
    }
}

// ==================== Projectile ====================
/// `power` rides along for future damage logic, nothing reads it yet
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Payload {
    pub power: f64,
}

pub type Projectile = Entity<Payload>;
