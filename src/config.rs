use crate::render::Size;
use crate::sprite::SpriteBlueprint;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Constants related to HTML elements
pub mod html {
    pub const BACKGROUND_ID: &str = "background";
    pub const FOREGROUND_ID: &str = "foreground";
    pub const HUD_ID: &str = "hud";
    pub const CONFIG_PATH: &str = "game.json";
}

/// Tunables for one session
/// - every field has a default, so `game.json` may list only overrides
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub debug: bool,
    pub playfield: PlayfieldConfig,
    pub player: PlayerConfig,
    pub weapon: WeaponConfig,
    pub sprites: HashMap<String, SpriteBlueprint>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let mut sprites = HashMap::new();
        sprites.insert("player".to_string(), SpriteBlueprint::default());
        sprites.insert("bullet".to_string(), SpriteBlueprint::new(6, 12, "gold"));
        GameConfig {
            debug: false,
            playfield: PlayfieldConfig::default(),
            player: PlayerConfig::default(),
            weapon: WeaponConfig::default(),
            sprites,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: i32,
    pub height: i32,
}

impl PlayfieldConfig {
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        PlayfieldConfig {
            width: 600,
            height: 640,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn: Vector,
    /// pixels per second along each held axis
    pub speed: f64,
    pub sprite: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            spawn: Vector::new(300.0, 320.0),
            speed: 100.0,
            sprite: "player".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub name: String,
    pub description: String,
    /// seconds between shots
    pub recharge_time: f64,
    /// pixels per second, negative y is up
    pub projectile_velocity: Vector,
    pub power: f64,
    pub sprite: String,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        WeaponConfig {
            name: "Pea Shooter".to_string(),
            description: "Fires a single pea straight up".to_string(),
            recharge_time: 0.25,
            projectile_velocity: Vector::new(0.0, -300.0),
            power: 1.0,
            sprite: "bullet".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(
            r#"{ "debug": true, "weapon": { "recharge_time": 3.0 } }"#,
        )
        .expect("config should parse");
        assert!(config.debug);
        assert_eq!(config.weapon.recharge_time, 3.0);
        assert_eq!(config.weapon.name, "Pea Shooter");
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.playfield.size(), Size { width: 600, height: 640 });
    }

    #[test]
    fn sprite_blueprints_deserialize() {
        let config: GameConfig = serde_json::from_str(
            r#"{ "sprites": { "bullet": { "width": 4, "fill": "red" } } }"#,
        )
        .expect("config should parse");
        let bullet = &config.sprites["bullet"];
        assert_eq!(bullet.width, 4);
        assert_eq!(bullet.height, 32);
        assert_eq!(bullet.fill, "red");
        // explicit map replaces the default one
        assert!(!config.sprites.contains_key("player"));
    }

    #[test]
    fn empty_object_is_default() {
        let config: GameConfig = serde_json::from_str("{}").expect("config should parse");
        assert_eq!(config, GameConfig::default());
    }
}
