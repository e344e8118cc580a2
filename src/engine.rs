use crate::browser;
use crate::input::KeyEvent;
use crate::render::{Point, Rect, Surface};
use crate::sprite::Sprite;
use anyhow::{anyhow, Result};
// ELI5: web assembly is a single threaded environment, so Rc RefCell > Mutex
use futures::channel::mpsc::UnboundedReceiver;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

/// What the GameLoop drives once per animation frame
pub trait Simulation {
    /// Stage one keyboard event, applied on the next `update`
    fn process_input(&mut self, event: KeyEvent);
    /// Advance by `dt` seconds and redraw
    fn update(&mut self, dt: f64);
    /// One line of HUD text
    fn status(&self) -> String;
}

pub struct GameLoop {
    last_frame: f64,
}

type SharedLoopClosure = Rc<RefCell<Option<browser::LoopClosure>>>;

impl GameLoop {
    /// ┌─────────── per animation frame ───────────┐
    /// │ 1. drain queued key events -> stage       │
    /// │ 2. dt = (now - last) / 1000, NOT clamped  │
    /// │ 3. simulation.update(dt)                  │
    /// │ 4. hud <- simulation.status()             │
    /// └───────────────────────────────────────────┘
    pub fn start(
        mut simulation: impl Simulation + 'static,
        mut key_events: UnboundedReceiver<KeyEvent>,
        hud: Option<HtmlElement>,
    ) -> Result<()> {
        let mut game_loop = GameLoop {
            last_frame: browser::now()?,
        };
        let f: SharedLoopClosure = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(browser::create_raf_closure(move |perf: f64| {
            while let Ok(Some(event)) = key_events.try_next() {
                simulation.process_input(event);
            }
            let dt = (perf - game_loop.last_frame) / 1000.0;
            game_loop.last_frame = perf;
            simulation.update(dt);
            if let Some(hud) = &hud {
                hud.set_text_content(Some(&simulation.status()));
            }
            if let Some(closure) = f.borrow().as_ref() {
                if let Err(err) = browser::request_animation_frame(closure) {
                    log::error!("GameLoop stopped : {:#}", err);
                }
            }
        }));

        browser::request_animation_frame(
            g.borrow()
                .as_ref()
                .ok_or_else(|| anyhow!("GameLoop: Loop is None"))?,
        )?;

        Ok(())
    }
}

/// Surface over one canvas' 2d context
/// - each sprite's bitmap is baked once into an offscreen canvas, by name
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    bitmaps: HashMap<String, HtmlCanvasElement>,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        CanvasSurface {
            context,
            bitmaps: HashMap::new(),
        }
    }

    pub fn from_canvas_id(id: &str) -> Result<Self> {
        Ok(CanvasSurface::new(browser::context(&browser::canvas(id)?)?))
    }

    fn bitmap(&mut self, sprite: &Sprite) -> Result<&HtmlCanvasElement> {
        if !self.bitmaps.contains_key(sprite.name()) {
            let bitmap = bake(sprite)?;
            self.bitmaps.insert(sprite.name().to_string(), bitmap);
        }
        self.bitmaps
            .get(sprite.name())
            .ok_or_else(|| anyhow!("No bitmap baked for sprite '{}'", sprite.name()))
    }
}

/// Filled square inset by 2px, in the sprite's colour
fn bake(sprite: &Sprite) -> Result<HtmlCanvasElement> {
    let size = sprite.size();
    let canvas = browser::create_canvas_element()?;
    canvas.set_width(size.width.max(0) as u32);
    canvas.set_height(size.height.max(0) as u32);
    let context = browser::context(&canvas)?;
    context.set_fill_style_str(sprite.fill());
    context.fill_rect(
        2.0,
        2.0,
        f64::from(size.width - 4),
        f64::from(size.height - 4),
    );
    Ok(canvas)
}

impl Surface for CanvasSurface {
    fn clear(&mut self, rect: &Rect) {
        self.context.clear_rect(
            rect.position.x.into(),
            rect.position.y.into(),
            rect.size.width.into(),
            rect.size.height.into(),
        );
    }

    fn draw_sprite(&mut self, sprite: &Sprite, position: Point) {
        let context = self.context.clone();
        let drawn = self.bitmap(sprite).and_then(|bitmap| {
            context
                .draw_image_with_html_canvas_element(
                    bitmap,
                    position.x.into(),
                    position.y.into(),
                )
                .map_err(|err| anyhow!("drawImage failed : {:#?}", err))
        });
        if let Err(err) = drawn {
            log::error!("Could not draw sprite '{}' : {:#}", sprite.name(), err);
        }
    }
}
