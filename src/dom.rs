//! Small DOM helpers shared by the components.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, Node, NodeList, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document.body().ok_or_else(|| JsValue::from_str("no body"))
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, JsValue> {
    document.query_selector(selector)
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(document.query_selector_all(selector)?))
}

/// Every matching element that is an `HtmlElement` (so it has `style`).
pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Text of the first descendant matching `selector`.
pub fn child_text(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.text_content())
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        tracing::warn!(class, "class update failed: {:?}", err);
    }
}

/// Set (or clear, with `None`) an inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: Option<&str>) {
    let style = element.style();
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
    if let Err(err) = result {
        tracing::warn!(property, "style update failed: {:?}", err);
    }
}

/// Whether the event target lies inside `container` (inclusive).
pub fn contains_target(container: &Element, target: Option<&EventTarget>) -> bool {
    let node = target.and_then(|t| t.dyn_ref::<Node>());
    node.is_some() && container.contains(node)
}

/// Whether the event target is `element` itself.
pub fn is_target(element: &Element, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<Node>())
        .map_or(false, |node| node.is_same_node(Some(element)))
}
