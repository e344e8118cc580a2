use crate::entity::{Entity, Payload, PlayerState};
use crate::vector::Vector;

/// Per entity kind movement rule
/// - `dt` is in seconds and never negative
/// - reads and writes only what already lives on the entity, never input
pub trait Timestepper<S: 'static> {
    fn step(&self, dt: f64, actor: &mut Entity<S>);
}

/// MoveState driven movement + weapon cooldown
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlayerTimestepper {
    speed: f64,
}

impl PlayerTimestepper {
    pub fn new(speed: f64) -> Self {
        PlayerTimestepper { speed }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Timestepper<PlayerState> for PlayerTimestepper {
    fn step(&self, dt: f64, actor: &mut Entity<PlayerState>) {
        let velocity = actor.state.move_state.velocity();
        actor.position.translate(velocity.mul(self.speed * dt));
        actor.state.weapon.cool_down(dt);
    }
}

/// Straight line at constant velocity, no acceleration
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimpleBulletTimestepper {
    velocity: Vector,
}

impl SimpleBulletTimestepper {
    pub fn new(velocity: Vector) -> Self {
        SimpleBulletTimestepper { velocity }
    }
}

impl Timestepper<Payload> for SimpleBulletTimestepper {
    fn step(&self, dt: f64, actor: &mut Entity<Payload>) {
        actor.position.translate(self.velocity.mul(dt));
    }
}
