use crate::config::GameConfig;
use crate::control::{KeyboardSchema, PlayerController};
use crate::engine::Simulation;
use crate::entity::{Entity, Payload, Player, PlayerState};
use crate::input::{keys, KeyEvent, KeyEventKind};
use crate::render::{Rect, Size, Surface};
use crate::sprite::SpriteCache;
use crate::timestep::{PlayerTimestepper, SimpleBulletTimestepper, Timestepper};
use crate::vector::Vector;
use crate::weapon::{ProjectileFactory, ProjectileManager, Weapon};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// ┌───────────────────────────── Frame Flow ───────────────────────────────┐
/// │                                                                        │
/// │   keydown / keyup           engine.rs                 game.rs          │
/// │  ┌────────────────┐  queue  ┌──────────┐  drain  ┌─────────────────┐   │
/// │  │ browser.rs     ├────────►│ GameLoop ├────────►│ process_input() │   │
/// │  │ key listeners  │         │  (rAF)   │         │  stage Command  │   │
/// │  └────────────────┘         └────┬─────┘         └─────────────────┘   │
/// │                                  │ update(dt)                          │
/// │                                  ▼                                     │
/// │  1. Player                                                             │
/// │     ├─► Controller.update : buffered Commands -> MoveState / fire      │
/// │     └─► Timestepper.step  : MoveState -> position, weapon cooldown     │
/// │  2. ProjectileManager.update : step bullets, cull off-screen ones      │
/// │  3. clear foreground (skipped while the trail key is held)             │
/// │  4. render player, then projectiles oldest first                       │
/// │                                                                        │
/// └────────────────────────────────────────────────────────────────────────┘
pub struct Game<S: Surface> {
    player: Player,
    projectiles: Rc<RefCell<ProjectileManager>>,
    sprites: SpriteCache,
    playfield: Size,
    background: S,
    foreground: S,
    trail: bool,
}

impl<S: Surface> Game<S> {
    pub fn new(config: &GameConfig, background: S, foreground: S) -> Self {
        let playfield = config.playfield.size();
        let mut sprites = SpriteCache::new(config.sprites.clone());
        let projectiles = Rc::new(RefCell::new(ProjectileManager::new(playfield)));

        let player_sprite = sprites.get(&config.player.sprite);
        let weapon = Self::build_weapon(
            config,
            &mut sprites,
            player_sprite.width(),
            Rc::clone(&projectiles),
        );
        let entity: Entity<PlayerState> = Entity::new(
            config.player.spawn,
            player_sprite,
            Rc::new(PlayerTimestepper::new(config.player.speed)),
            PlayerState::new(weapon),
        );
        let controller = PlayerController::new(Box::new(KeyboardSchema::default()));

        log::info!(
            "game ready : {}x{} playfield, {} ({:.2}s recharge)",
            playfield.width,
            playfield.height,
            config.weapon.name,
            config.weapon.recharge_time
        );

        Game {
            player: Player::new(entity, Box::new(controller)),
            projectiles,
            sprites,
            playfield,
            background,
            foreground,
            trail: false,
        }
    }

    /// Bullets spawn centred above the player's sprite
    fn build_weapon(
        config: &GameConfig,
        sprites: &mut SpriteCache,
        shooter_width: f64,
        projectiles: Rc<RefCell<ProjectileManager>>,
    ) -> Weapon {
        let bullet_sprite = sprites.get(&config.weapon.sprite);
        let muzzle = Vector::new(
            (shooter_width - bullet_sprite.width()) / 2.0,
            -bullet_sprite.height(),
        );
        let stepper: Rc<dyn Timestepper<Payload>> = Rc::new(SimpleBulletTimestepper::new(
            config.weapon.projectile_velocity,
        ));
        let power = config.weapon.power;
        let factory: ProjectileFactory = Box::new(move |position: Vector| {
            Entity::new(
                position.add(muzzle),
                Rc::clone(&bullet_sprite),
                Rc::clone(&stepper),
                Payload { power },
            )
        });
        Weapon::new(
            &config.weapon.name,
            &config.weapon.description,
            config.weapon.recharge_time,
            factory,
            projectiles,
        )
    }

    /// Sole ingestion point for keyboard input
    /// - the trail key toggles the clear policy
    /// - everything is handed to the player's controller to be staged
    pub fn process_input(&mut self, event: KeyEvent) {
        if event.key_code == keys::TRAIL {
            match event.kind {
                KeyEventKind::Down => self.trail = true,
                KeyEventKind::Up => self.trail = false,
                KeyEventKind::Press => {}
            }
        }
        self.player.process_input(event);
    }

    /// One tick : simulate then redraw the foreground
    /// - `dt` is seconds since the previous tick, used as is
    pub fn update(&mut self, dt: f64) {
        self.player.update(dt);
        self.projectiles.borrow_mut().update(dt);

        if !self.trail {
            self.foreground.clear(&Rect::covering(self.playfield));
        }
        self.player.render(&mut self.foreground);
        self.projectiles.borrow().render(&mut self.foreground);
    }

    /// HUD line for the equipped weapon
    pub fn status(&self) -> String {
        let weapon = self.player.weapon();
        if weapon.is_charged() {
            format!("{}: ready", weapon.name())
        } else {
            format!("{}: {:.2}s", weapon.name(), weapon.recharge_timer())
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn projectiles(&self) -> Ref<'_, ProjectileManager> {
        self.projectiles.borrow()
    }

    pub fn sprites(&self) -> &SpriteCache {
        &self.sprites
    }

    pub fn playfield(&self) -> Size {
        self.playfield
    }

    pub fn is_trailing(&self) -> bool {
        self.trail
    }

    pub fn background(&self) -> &S {
        &self.background
    }

    pub fn foreground(&self) -> &S {
        &self.foreground
    }
}

impl<S: Surface> Simulation for Game<S> {
    fn process_input(&mut self, event: KeyEvent) {
        Game::process_input(self, event);
    }

    fn update(&mut self, dt: f64) {
        Game::update(self, dt);
    }

    fn status(&self) -> String {
        Game::status(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Point;
    use crate::sprite::Sprite;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Rect),
        Draw(String, Point),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, rect: &Rect) {
            self.calls.push(Call::Clear(*rect));
        }

        fn draw_sprite(&mut self, sprite: &Sprite, position: Point) {
            self.calls.push(Call::Draw(sprite.name().to_string(), position));
        }
    }

    fn game() -> Game<Recorder> {
        Game::new(&GameConfig::default(), Recorder::default(), Recorder::default())
    }

    #[test]
    fn frame_clears_then_draws_player_then_projectiles() {
        let mut game = game();
        game.process_input(KeyEvent::down(keys::SPACE));
        game.update(0.0);

        let calls = &game.foreground().calls;
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[0],
            Call::Clear(Rect::covering(Size {
                width: 600,
                height: 640
            }))
        );
        assert_eq!(
            calls[1],
            Call::Draw("player".to_string(), Point { x: 300, y: 320 })
        );
        // 32 wide player, 6 wide bullet -> 13px in, 12px tall -> above
        assert_eq!(
            calls[2],
            Call::Draw("bullet".to_string(), Point { x: 313, y: 308 })
        );
        assert!(game.background().calls.is_empty());
    }

    #[test]
    fn trail_key_suppresses_clear_while_held() {
        let mut game = game();
        game.process_input(KeyEvent::down(keys::TRAIL));
        game.update(0.016);
        assert!(game.is_trailing());
        assert!(!game
            .foreground()
            .calls
            .iter()
            .any(|call| matches!(call, Call::Clear(_))));

        game.process_input(KeyEvent::up(keys::TRAIL));
        game.update(0.016);
        assert!(!game.is_trailing());
        assert!(game
            .foreground()
            .calls
            .iter()
            .any(|call| matches!(call, Call::Clear(_))));
    }

    #[test]
    fn input_is_not_applied_before_update() {
        let mut game = game();
        game.process_input(KeyEvent::down(keys::D));
        game.process_input(KeyEvent::down(keys::SPACE));
        assert_eq!(game.player().move_state(), Default::default());
        assert!(game.projectiles().is_empty());

        game.update(0.5);
        assert!(game.player().move_state().right);
        assert_eq!(game.player().position(), Vector::new(350.0, 320.0));
        assert_eq!(game.projectiles().len(), 1);
    }

    #[test]
    fn sprites_are_shared_through_the_cache() {
        let mut game = game();
        game.process_input(KeyEvent::down(keys::SPACE));
        game.update(0.3);
        game.process_input(KeyEvent::down(keys::SPACE));
        game.update(0.0);

        let projectiles = game.projectiles();
        assert_eq!(projectiles.len(), 2);
        assert!(Rc::ptr_eq(
            projectiles.projectiles()[0].sprite(),
            projectiles.projectiles()[1].sprite()
        ));
        assert_eq!(game.sprites().len(), 2);
    }

    #[test]
    fn status_reports_weapon_charge() {
        let mut game = game();
        assert_eq!(game.status(), "Pea Shooter: ready");
        game.process_input(KeyEvent::down(keys::SPACE));
        game.update(0.1);
        assert_eq!(game.status(), "Pea Shooter: 0.15s");
    }
}
