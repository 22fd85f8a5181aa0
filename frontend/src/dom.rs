//! Thin helpers over `web-sys` for a page whose markup already exists.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DocumentReadyState, Event, EventTarget, Window};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("browser window or document is not available")]
    NoDocument,
    #[error("element '{0}' not found")]
    MissingElement(String),
    #[error("element '{selector}' is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoDocument)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn element_by_id<T: JsCast>(id: &str) -> Result<T, DomError> {
    let selector = format!("#{id}");
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(selector.clone()))?;
    cast(element, selector)
}

pub fn query_selector<T: JsCast>(selector: &str) -> Result<T, DomError> {
    let element = document()?
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))?;
    cast(element, selector.to_string())
}

/// Every match of `selector` in document order. Nodes of another type are
/// skipped.
pub fn query_all<T: JsCast>(selector: &str) -> Result<Vec<T>, DomError> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

fn cast<T: JsCast>(element: web_sys::Element, selector: String) -> Result<T, DomError> {
    element
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType {
            selector,
            expected: std::any::type_name::<T>(),
        })
}

/// Adds a listener that lives as long as the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Resolves once the initial markup is parsed.
pub async fn dom_content_loaded() -> Result<(), DomError> {
    let document = document()?;
    if document.ready_state() != DocumentReadyState::Loading {
        return Ok(());
    }
    let (sender, receiver) = futures::channel::oneshot::channel::<()>();
    let mut sender = Some(sender);
    listen(&document, "DOMContentLoaded", move |_event| {
        if let Some(sender) = sender.take() {
            let _ = sender.send(());
        }
    })?;
    let _ = receiver.await;
    Ok(())
}
