use approx::assert_relative_eq;
use arcade_shooter::config::GameConfig;
use arcade_shooter::game::Game;
use arcade_shooter::input::{keys, KeyEvent};
use arcade_shooter::render::{Point, Rect, Surface};
use arcade_shooter::sprite::Sprite;
use arcade_shooter::vector::Vector;

/// Counts what the game asked the layer to do
#[derive(Default)]
struct Tally {
    clears: usize,
    draws: Vec<(String, Point)>,
}

impl Surface for Tally {
    fn clear(&mut self, _rect: &Rect) {
        self.clears += 1;
    }

    fn draw_sprite(&mut self, sprite: &Sprite, position: Point) {
        self.draws.push((sprite.name().to_string(), position));
    }
}

fn game_with(config: GameConfig) -> Game<Tally> {
    Game::new(&config, Tally::default(), Tally::default())
}

/// Ticks of `step` seconds adding up to exactly `seconds`
fn run_for(game: &mut Game<Tally>, seconds: f64, step: f64) {
    let mut elapsed = 0.0;
    while seconds - elapsed > 1e-9 {
        let dt = step.min(seconds - elapsed);
        game.update(dt);
        elapsed += dt;
    }
}

#[test]
fn holding_right_for_one_second() {
    let mut game = game_with(GameConfig::default());
    assert_eq!(game.player().position(), Vector::new(300.0, 320.0));

    game.process_input(KeyEvent::down(keys::D));
    run_for(&mut game, 1.0, 0.016);

    assert_relative_eq!(game.player().position().x, 400.0, epsilon = 1e-9);
    assert_relative_eq!(game.player().position().y, 320.0);
}

#[test]
fn second_shot_inside_recharge_window_is_ignored() {
    let mut config = GameConfig::default();
    config.weapon.recharge_time = 3.0;
    config.weapon.projectile_velocity = Vector::new(0.0, -100.0);
    let mut game = game_with(config);

    game.process_input(KeyEvent::down(keys::SPACE));
    game.process_input(KeyEvent::up(keys::SPACE));
    run_for(&mut game, 1.0, 0.016);

    game.process_input(KeyEvent::down(keys::SPACE));
    game.update(0.0);

    assert_eq!(game.projectiles().len(), 1);
    assert_relative_eq!(
        game.player().weapon().recharge_timer(),
        2.0,
        epsilon = 1e-9
    );
}

#[test]
fn weapon_fires_again_once_recharged() {
    let mut config = GameConfig::default();
    config.weapon.recharge_time = 0.5;
    let mut game = game_with(config);

    game.process_input(KeyEvent::down(keys::SPACE));
    game.update(0.016);
    run_for(&mut game, 0.5, 0.016);
    game.process_input(KeyEvent::down(keys::SPACE));
    game.update(0.016);

    assert_eq!(game.projectiles().len(), 2);
}

#[test]
fn projectiles_are_culled_after_leaving_the_top() {
    let mut game = game_with(GameConfig::default());
    game.process_input(KeyEvent::down(keys::SPACE));
    game.update(0.0);
    assert_eq!(game.projectiles().len(), 1);

    // 308px to the top edge + 12px sprite at 300px/s
    run_for(&mut game, 1.0, 0.016);
    assert_eq!(game.projectiles().len(), 1);
    run_for(&mut game, 0.1, 0.016);
    assert!(game.projectiles().is_empty());
}

#[test]
fn releasing_a_key_stops_motion() {
    let mut game = game_with(GameConfig::default());
    game.process_input(KeyEvent::down(keys::W));
    game.update(0.5);
    game.process_input(KeyEvent::up(keys::W));
    game.update(0.5);

    assert_relative_eq!(game.player().position().y, 270.0);
    assert!(!game.player().move_state().up);
}

#[test]
fn opposing_keys_cancel_out() {
    let mut game = game_with(GameConfig::default());
    game.process_input(KeyEvent::down(keys::A));
    game.process_input(KeyEvent::down(keys::D));
    run_for(&mut game, 1.0, 0.016);

    assert_eq!(game.player().position(), Vector::new(300.0, 320.0));
}

#[test]
fn events_between_ticks_collapse_to_the_latest() {
    let mut game = game_with(GameConfig::default());
    game.process_input(KeyEvent::down(keys::S));
    game.process_input(KeyEvent::up(keys::S));
    game.update(1.0);

    assert_eq!(game.player().position(), Vector::new(300.0, 320.0));
}

#[test]
fn large_dt_is_not_clamped() {
    let mut game = game_with(GameConfig::default());
    game.process_input(KeyEvent::down(keys::D));
    game.update(10.0);

    assert_relative_eq!(game.player().position().x, 1300.0);
}

#[test]
fn unmapped_keys_are_ignored() {
    let mut game = game_with(GameConfig::default());
    for key_code in [0, 13, 27, 37, 38, 39, 40, 81, 255] {
        game.process_input(KeyEvent::down(key_code));
        game.process_input(KeyEvent::press(key_code));
    }
    game.update(1.0);

    assert_eq!(game.player().position(), Vector::new(300.0, 320.0));
    assert!(game.projectiles().is_empty());
}

#[test]
fn every_frame_redraws_unless_trailing() {
    let mut game = game_with(GameConfig::default());
    run_for(&mut game, 0.048, 0.016);
    assert_eq!(game.foreground().clears, 3);
    assert_eq!(game.foreground().draws.len(), 3);

    game.process_input(KeyEvent::down(keys::TRAIL));
    run_for(&mut game, 0.048, 0.016);
    assert_eq!(game.foreground().clears, 3);
    assert_eq!(game.foreground().draws.len(), 6);
    assert_eq!(game.background().clears, 0);
}
