//! Writes the core's element effects to the document.
//!
//! Browser calls that fail are logged at `warn` and otherwise ignored; the
//! page keeps working with whatever did apply.

use interactions::effect::Effect;
use interactions::geometry::Point;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions};

use crate::elements::PageElements;
use crate::markup;

/// Log a failed browser call.
pub fn report<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

/// Apply an element-targeted effect. Effects whose element is absent, and
/// effects without a target, are ignored.
pub fn apply(elements: &PageElements, effect: &Effect) {
    let Some(el) = effect.target().and_then(|target| elements.resolve(target)) else {
        return;
    };
    match effect {
        Effect::SetClass { class, on, .. } => {
            report(el.class_list().toggle_with_force(class, *on), "classList.toggle");
        }
        Effect::SetAttribute { name, value, .. } => report(el.set_attribute(name, value), "setAttribute"),
        Effect::SetText { text, .. } => el.set_text_content(Some(text)),
        Effect::SetStyle { property, value, .. } => set_style(el, property, value),
        Effect::SetDisabled { disabled, .. } => set_disabled(el, *disabled),
        Effect::SetButtonLabel { label, .. } => el.set_inner_html(&markup::button_label(*label)),
        Effect::ResetForm { .. } => {
            if let Some(form) = el.dyn_ref::<HtmlFormElement>() {
                form.reset();
            }
        }
        _ => {}
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let style = el.style();
    if value.is_empty() {
        report(style.remove_property(property), "style.removeProperty");
    } else {
        report(style.set_property(property, value), "style.setProperty");
    }
}

fn set_disabled(el: &HtmlElement, disabled: bool) {
    if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        report(el.set_attribute("disabled", ""), "setAttribute");
    } else {
        report(el.remove_attribute("disabled"), "removeAttribute");
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        report(window.alert_with_message(message), "alert");
    }
}

pub fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Append a `span.ripple` to `host` at local point `at`.
pub fn spawn_ripple(document: &Document, host: &HtmlElement, at: Point) -> Option<HtmlElement> {
    let ripple = document.create_element("span").ok()?.dyn_into::<HtmlElement>().ok()?;
    ripple.set_class_name(markup::RIPPLE_CLASS);
    for (property, value) in markup::ripple_position(at) {
        set_style(&ripple, property, &value);
    }
    report(host.append_child(&ripple), "appendChild");
    Some(ripple)
}

/// Add the ripple and theme-transition stylesheet to `<head>`.
pub fn inject_styles(document: &Document) {
    let Some(head) = document.head() else {
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(markup::INJECTED_CSS));
            report(head.append_child(&style), "appendChild");
        }
        Err(err) => log::warn!("could not create style element: {err:?}"),
    }
}
