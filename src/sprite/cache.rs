use crate::sprite::{Sprite, SpriteBlueprint};
use std::collections::HashMap;
use std::rc::Rc;

/// Name keyed sprite factory
/// - lives as long as the Game that owns it (one per session)
/// - the same name always hands back the same `Rc<Sprite>`
/// - names without a blueprint fall back to `SpriteBlueprint::default()`
#[derive(Debug, Default)]
pub struct SpriteCache {
    blueprints: HashMap<String, SpriteBlueprint>,
    sprites: HashMap<String, Rc<Sprite>>,
}

impl SpriteCache {
    pub fn new(blueprints: HashMap<String, SpriteBlueprint>) -> Self {
        SpriteCache {
            blueprints,
            sprites: HashMap::new(),
        }
    }

    pub fn get(&mut self, name: &str) -> Rc<Sprite> {
        if let Some(sprite) = self.sprites.get(name) {
            return Rc::clone(sprite);
        }
        let sprite = Rc::new(match self.blueprints.get(name) {
            Some(blueprint) => Sprite::new(name, blueprint),
            None => {
                log::warn!("No blueprint for sprite '{}', using default", name);
                Sprite::new(name, &SpriteBlueprint::default())
            }
        });
        self.sprites.insert(name.to_string(), Rc::clone(&sprite));
        sprite
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
