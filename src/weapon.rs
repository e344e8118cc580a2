use crate::entity::Projectile;
use crate::render::{Size, Surface};
use crate::vector::Vector;
use std::cell::RefCell;
use std::rc::Rc;

/// Builds a projectile at the firing position
pub type ProjectileFactory = Box<dyn Fn(Vector) -> Projectile>;

// ==================== Weapon ====================
/// Fire rate limited projectile spawner
/// - `0 <= recharge_timer <= recharge_time`
/// - `fire` does NOT check the timer, the caller (Fire command) does
pub struct Weapon {
    name: String,
    description: String,
    recharge_time: f64,
    recharge_timer: f64,
    factory: ProjectileFactory,
    // ELI5: single threaded wasm, so Rc<RefCell> instead of Arc<Mutex>
    // - the Game holds the other handle and drives update/render
    magazine: Rc<RefCell<ProjectileManager>>,
}

impl Weapon {
    pub fn new(
        name: &str,
        description: &str,
        recharge_time: f64,
        factory: ProjectileFactory,
        magazine: Rc<RefCell<ProjectileManager>>,
    ) -> Self {
        Weapon {
            name: name.to_string(),
            description: description.to_string(),
            recharge_time: recharge_time.max(0.0),
            recharge_timer: 0.0,
            factory,
            magazine,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recharge_time(&self) -> f64 {
        self.recharge_time
    }

    pub fn recharge_timer(&self) -> f64 {
        self.recharge_timer
    }

    pub fn is_charged(&self) -> bool {
        self.recharge_timer == 0.0
    }

    /// Spawns one projectile into the manager
    pub fn fire(&mut self, position: Vector) {
        let projectile = (self.factory)(position);
        log::debug!(
            "{} fired at ({:.1}, {:.1})",
            self.name,
            projectile.position.x,
            projectile.position.y
        );
        self.magazine.borrow_mut().add(projectile);
    }

    /// Restart the countdown after a shot
    pub fn recharge(&mut self) {
        self.recharge_timer = self.recharge_time;
    }

    /// Counts down by `dt`, floored at 0
    pub fn cool_down(&mut self, dt: f64) {
        self.recharge_timer = (self.recharge_timer - dt).max(0.0);
    }
}

// ==================== ProjectileManager ====================
/// Live projectiles in firing order (oldest first)
pub struct ProjectileManager {
    playfield: Size,
    projectiles: Vec<Projectile>,
}

impl ProjectileManager {
    pub fn new(playfield: Size) -> Self {
        ProjectileManager {
            playfield,
            projectiles: Vec::new(),
        }
    }

    pub fn add(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Step every projectile once, then drop the ones that left the playfield
    pub fn update(&mut self, dt: f64) {
        for projectile in self.projectiles.iter_mut() {
            projectile.update(dt);
        }
        let playfield = self.playfield;
        let before = self.projectiles.len();
        self.projectiles
            .retain(|projectile| !projectile.is_outside(playfield));
        let culled = before - self.projectiles.len();
        if culled > 0 {
            log::trace!("culled {} projectile(s), {} live", culled, self.len());
        }
    }

    /// Painter's order : oldest shot first
    pub fn render(&self, surface: &mut dyn Surface) {
        for projectile in &self.projectiles {
            projectile.render(surface);
        }
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}
