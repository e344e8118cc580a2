// ┌──────────────────────────────────────────────────────────────────────────┐
// │                         Sprite Module Layout                             │
// ├────────────────┬─────────────────────────────────────────────────────────┤
// │ mod.rs         │ Sprite handle + SpriteBlueprint (how to bake a bitmap)  │
// │ cache.rs       │ SpriteCache : name -> Rc<Sprite>, memoized per session  │
// └────────────────┴─────────────────────────────────────────────────────────┘
// The bitmap itself is baked by whichever Surface draws the sprite, so the
// simulation only ever holds the handle.
pub mod cache;

pub use cache::SpriteCache;

use crate::render::Size;
use serde::{Deserialize, Serialize};

/// Opaque renderable handle
/// - shared read-only between entities through `Rc<Sprite>`
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    name: String,
    size: Size,
    fill: String,
}

impl Sprite {
    pub fn new(name: &str, blueprint: &SpriteBlueprint) -> Self {
        Sprite {
            name: name.to_string(),
            size: Size {
                width: blueprint.width,
                height: blueprint.height,
            },
            fill: blueprint.fill.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.width.into()
    }

    pub fn height(&self) -> f64 {
        self.size.height.into()
    }

    /// CSS colour used when the bitmap is baked
    pub fn fill(&self) -> &str {
        &self.fill
    }
}

/// How a named sprite should look once baked
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpriteBlueprint {
    pub width: i32,
    pub height: i32,
    pub fill: String,
}

impl SpriteBlueprint {
    pub fn new(width: i32, height: i32, fill: &str) -> Self {
        SpriteBlueprint {
            width,
            height,
            fill: fill.to_string(),
        }
    }
}

impl Default for SpriteBlueprint {
    fn default() -> Self {
        SpriteBlueprint::new(32, 32, "steelblue")
    }
}
