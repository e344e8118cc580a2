use crate::input::KeyEvent;
use anyhow::{anyhow, Result};
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use serde::de::DeserializeOwned;
use std::future::Future;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[rustfmt::skip]
use web_sys::{
    Document,
    Window,
    CanvasRenderingContext2d,
    HtmlCanvasElement,
    HtmlElement,
    KeyboardEvent,
    Response,
};

// ==================== Constants ====================
mod html {
    pub const CONTEXT_2D: &str = "2d";
    pub const CANVAS_TAG: &str = "canvas";
}

pub type LoopClosure = Closure<dyn FnMut(f64)>;
type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("Window not found"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("No Document Found"))
}

pub fn canvas(id: &str) -> Result<HtmlCanvasElement> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("No Canvas Element found with ID : '{}'", id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| anyhow!("Error converting {:#?} to HtmlCanvasElement", element))
}

/// Offscreen canvas, used to bake sprite bitmaps
pub fn create_canvas_element() -> Result<HtmlCanvasElement> {
    document()?
        .create_element(html::CANVAS_TAG)
        .map_err(|err| anyhow!("Could not create canvas element : {:#?}", err))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| anyhow!("Error converting {:#?} to HtmlCanvasElement", element))
}

pub fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context(html::CONTEXT_2D)
        // Result<Option<Object>, JsValue>
        // - map the JsValue error into anyhow
        // - map the None case to an error too
        .map_err(|js_value| anyhow!("Error getting context : {:#?}", js_value))?
        .ok_or_else(|| anyhow!("No 2d context found"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|element| {
            anyhow!(
                "Error converting {:#?} to CanvasRenderingContext2d",
                element
            )
        })
}

/// HUD is optional, a page without one still plays
pub fn element(id: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn now() -> Result<f64> {
    Ok(window()?
        .performance()
        .ok_or_else(|| anyhow!("Performance object not found"))?
        .now())
}

pub fn create_raf_closure(f: impl FnMut(f64) + 'static) -> LoopClosure {
    Closure::wrap(Box::new(f))
}

pub fn request_animation_frame(callback: &LoopClosure) -> Result<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|err| anyhow!("Cannot request animation frame {:#?}", err))
}

pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Keyboard listeners on the window
/// - handlers only queue a KeyEvent, the GameLoop drains it before `update`
pub fn keyboard_events() -> Result<UnboundedReceiver<KeyEvent>> {
    let window = window()?;
    let (sender, receiver) = unbounded();

    let onkeydown = key_closure(sender.clone(), KeyEvent::down);
    let onkeyup = key_closure(sender.clone(), KeyEvent::up);
    let onkeypress = key_closure(sender, KeyEvent::press);

    window.set_onkeydown(Some(onkeydown.as_ref().unchecked_ref()));
    window.set_onkeyup(Some(onkeyup.as_ref().unchecked_ref()));
    window.set_onkeypress(Some(onkeypress.as_ref().unchecked_ref()));

    // listeners live as long as the page
    onkeydown.forget();
    onkeyup.forget();
    onkeypress.forget();

    Ok(receiver)
}

fn key_closure(sender: UnboundedSender<KeyEvent>, to_event: fn(u32) -> KeyEvent) -> KeyClosure {
    Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if sender.unbounded_send(to_event(event.key_code())).is_err() {
            log::warn!("key event dropped, game loop is gone");
        }
    }) as Box<dyn FnMut(KeyboardEvent)>)
}

pub async fn fetch_json<T>(json_path: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let resp_value = fetch_with_str(json_path).await?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|element| anyhow!("error converting [{:#?}] to Response", element))?;
    if !resp.ok() {
        return Err(anyhow!("{} responded with status {}", json_path, resp.status()));
    }
    let json = resp
        .json()
        .map_err(|err| anyhow!("Could not get JSON from response [{:#?}]", err))?;

    let json_value = JsFuture::from(json)
        .await
        .map_err(|err| anyhow!("error fetching [{:#?}]", err))?;

    serde_wasm_bindgen::from_value(json_value)
        .map_err(|err| anyhow!("error converting response : {:#?}", err))
}

async fn fetch_with_str(resource: &str) -> Result<JsValue> {
    let resp = window()?.fetch_with_str(resource);

    JsFuture::from(resp)
        .await
        .map_err(|err| anyhow!("error fetching : {:#?}", err))
}

// ==================== Logging ====================
/// `log` sink writing to the browser console
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger, only the first call has any effect
pub fn init_logging(level: log::LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
