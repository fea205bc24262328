//! Browser controller: owns the core and turns DOM events into core calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Page::mount` collects the element bundle, builds `LandingCore`, and wires
//! one listener per interactive element. Every listener measures what its
//! handler needs, calls the core, then applies the returned effects.
//!
//! DESIGN
//! ======
//! The core borrow always ends before effects are applied, so an effect that
//! calls back into the core (timers, animation frames, observer callbacks)
//! never overlaps a live borrow. Listeners are leaked with `Closure::forget`;
//! the page lives as long as the document does.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use interactions::effect::{Deferred, Effect, RippleId, TaskId};
use interactions::engine::LandingCore;
use interactions::geometry::{Point, Rect, Size};
use interactions::layout::{AnchorClick, ScrollFrame, SectionBox};
use interactions::waitlist::WaitlistFields;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, EventTarget, FormData, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent, Node, Window,
};

use crate::dom::{self, report};
use crate::elements::PageElements;
use crate::markup;
use crate::storage::{self, LocalStorageStore};
use crate::timers::Timers;

type Core = LandingCore<LocalStorageStore>;

pub struct Page {
    window: Window,
    document: Document,
    elements: PageElements,
    core: RefCell<Core>,
    timers: RefCell<Timers>,
    ripples: RefCell<HashMap<RippleId, HtmlElement>>,
    counter_observer: RefCell<Option<IntersectionObserver>>,
}

impl Page {
    /// Build the controller for `document` and wire every listener.
    pub fn mount(window: Window, document: Document) -> Rc<Self> {
        dom::inject_styles(&document);
        let elements = PageElements::collect(&document);
        let config = markup::read_config(elements.config_json().as_deref());
        let store = LocalStorageStore::open(&window);
        let core = LandingCore::new(elements.layout(), store, storage::prefers_dark(&window), config);

        let page = Rc::new(Self {
            window,
            document,
            elements,
            core: RefCell::new(core),
            timers: RefCell::new(Timers::default()),
            ripples: RefCell::new(HashMap::new()),
            counter_observer: RefCell::new(None),
        });

        page.handle(LandingCore::init);
        page.wire_theme();
        page.wire_navigation();
        page.wire_scroll();
        page.wire_widgets();
        page.wire_waitlist();
        page.wire_cosmetics();
        page.observe_counters();
        page.wire_window_load();

        let frame = page.scroll_frame();
        page.handle(|core| core.on_scroll(&frame));
        log::info!("landing page mounted");
        page
    }

    // --- Dispatch ---

    fn handle(self: &Rc<Self>, f: impl FnOnce(&mut Core) -> Vec<Effect>) {
        let effects = f(&mut *self.core.borrow_mut());
        self.dispatch(effects);
    }

    fn dispatch(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { id, delay_ms, task } => self.schedule(id, delay_ms, task),
                Effect::Cancel { id } => {
                    if !self.timers.borrow_mut().cancel(id) {
                        log::debug!("task {} already settled", id.0);
                    }
                }
                Effect::RequestFrame { counter } => self.request_frame(counter),
                Effect::UnobserveCounter { index } => self.unobserve_counter(index),
                Effect::SpawnRipple { id, host, at } => {
                    let Some(host) = self.elements.ripple_hosts.get(host) else {
                        continue;
                    };
                    if let Some(ripple) = dom::spawn_ripple(&self.document, host, at) {
                        self.ripples.borrow_mut().insert(id, ripple);
                    }
                }
                Effect::RemoveRipple { id } => {
                    if let Some(ripple) = self.ripples.borrow_mut().remove(&id) {
                        ripple.remove();
                    }
                }
                Effect::Alert(message) => dom::alert(&message),
                Effect::ScrollTo { top } => dom::scroll_to(top),
                other => dom::apply(&self.elements, &other),
            }
        }
    }

    fn schedule(self: &Rc<Self>, id: TaskId, delay_ms: u32, task: Deferred) {
        let page = Rc::downgrade(self);
        self.timers.borrow_mut().schedule(id, delay_ms, move || {
            let Some(page) = page.upgrade() else {
                return;
            };
            page.timers.borrow_mut().mark_fired(id);
            page.handle(|core| core.run_deferred(task));
        });
    }

    fn request_frame(self: &Rc<Self>, counter: usize) {
        let page = Rc::clone(self);
        let callback = Closure::once_into_js(move |_timestamp: f64| {
            page.handle(|core| core.on_counter_frame(counter));
        });
        report(self.window.request_animation_frame(callback.unchecked_ref()), "requestAnimationFrame");
    }

    fn unobserve_counter(&self, index: usize) {
        let observer = self.counter_observer.borrow();
        if let (Some(observer), Some(counter)) = (observer.as_ref(), self.elements.counters.get(index)) {
            observer.unobserve(counter);
        }
    }

    fn listen<E>(self: &Rc<Self>, target: &EventTarget, event: &str, handler: impl Fn(&Rc<Self>, E) + 'static)
    where
        E: JsCast + 'static,
    {
        let page = Rc::clone(self);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(&page, event);
            }
        });
        report(target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()), event);
        closure.forget();
    }

    // --- Wiring ---

    fn wire_theme(self: &Rc<Self>) {
        if let Some(toggle) = &self.elements.theme_toggle {
            self.listen(toggle, "click", |page, _: Event| page.handle(Core::toggle_theme));
        }
    }

    fn wire_window_load(self: &Rc<Self>) {
        // `load` has already fired when the script runs after it.
        if self.document.ready_state() == "complete" {
            self.handle(Core::on_window_load);
        } else {
            self.listen(&self.window, "load", |page, _: Event| page.handle(Core::on_window_load));
        }
    }

    fn wire_navigation(self: &Rc<Self>) {
        if let Some(button) = &self.elements.mobile_menu_button {
            self.listen(button, "click", |page, _: Event| page.handle(Core::on_mobile_menu_click));
        }
        for link in &self.elements.nav_links {
            self.listen(link, "click", |page, _: Event| page.handle(Core::on_nav_link_click));
        }
        for anchor in &self.elements.anchors {
            let href = anchor.get_attribute("href").unwrap_or_default();
            self.listen(anchor, "click", move |page, event: Event| {
                event.prevent_default();
                let click = page.anchor_click(&href);
                page.handle(|core| core.on_anchor_click(&click));
            });
        }
        if let Some(button) = &self.elements.back_to_top {
            self.listen(button, "click", |page, event: Event| {
                event.prevent_default();
                page.handle(Core::on_back_to_top_click);
            });
        }
    }

    fn wire_scroll(self: &Rc<Self>) {
        self.listen(&self.window, "scroll", |page, _: Event| {
            let frame = page.scroll_frame();
            page.handle(|core| core.on_scroll(&frame));
        });
    }

    fn wire_widgets(self: &Rc<Self>) {
        for (index, button) in self.elements.tab_buttons.iter().enumerate() {
            self.listen(button, "click", move |page, _: Event| page.handle(|core| core.on_tab_click(index)));
        }
        for (index, question) in self.elements.faq_questions.iter().enumerate() {
            if let Some(question) = question {
                self.listen(question, "click", move |page, _: Event| {
                    page.handle(|core| core.on_faq_question_click(index));
                });
            }
        }
        for (index, button) in self.elements.faq_more.iter().enumerate() {
            self.listen(button, "click", move |page, _: Event| page.handle(|core| core.on_faq_more_click(index)));
        }
        for target in &self.elements.modal_close {
            self.listen(target, "click", |page, _: Event| page.handle(Core::on_modal_close_click));
        }
        self.listen(&self.document, "keydown", |page, event: KeyboardEvent| {
            let key = event.key();
            page.handle(|core| core.on_key_down(&key));
        });
    }

    fn wire_waitlist(self: &Rc<Self>) {
        let Some(form) = &self.elements.waitlist_form else {
            return;
        };
        self.listen(form, "submit", |page, event: Event| {
            event.prevent_default();
            let fields = page.elements.waitlist_form.as_ref().map(waitlist_fields).unwrap_or_default();
            page.handle(|core| core.on_waitlist_submit(&fields));
        });
    }

    fn wire_cosmetics(self: &Rc<Self>) {
        if !self.elements.blobs.is_empty() {
            self.listen(&self.window, "mousemove", |page, event: MouseEvent| {
                let viewport = page.viewport();
                page.handle(|core| core.on_mouse_move(client_point(&event), viewport));
            });
        }
        for (index, card) in self.elements.feature_cards.iter().enumerate() {
            self.listen(card, "mousemove", move |page, event: MouseEvent| {
                let Some(card) = page.elements.feature_cards.get(index) else {
                    return;
                };
                let rect = bounds(card);
                page.handle(|core| core.on_card_move(index, client_point(&event), rect));
            });
            self.listen(card, "mouseleave", move |page, _: Event| page.handle(|core| core.on_card_leave(index)));
        }
        for (index, host) in self.elements.ripple_hosts.iter().enumerate() {
            self.listen(host, "click", move |page, event: MouseEvent| {
                let Some(host) = page.elements.ripple_hosts.get(index) else {
                    return;
                };
                let rect = bounds(host);
                let disabled = host.class_list().contains(markup::DISABLED_CLASS);
                page.handle(|core| core.on_ripple_click(index, client_point(&event), rect, disabled));
            });
        }
    }

    fn observe_counters(self: &Rc<Self>) {
        if self.elements.counters.is_empty() {
            return;
        }
        let page = Rc::clone(self);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let target: &Node = &target;
                    let index = page.elements.counters.iter().position(|c| c.is_same_node(Some(target)));
                    if let Some(index) = index {
                        page.handle(|core| core.on_counter_visible(index));
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.core.borrow().config().counter_visibility));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                for counter in &self.elements.counters {
                    observer.observe(counter);
                }
                *self.counter_observer.borrow_mut() = Some(observer);
            }
            Err(err) => log::warn!("counter observer unavailable: {err:?}"),
        }
        callback.forget();
    }

    // --- Measurements ---

    fn scroll_frame(&self) -> ScrollFrame {
        ScrollFrame {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            viewport_height: self.viewport().height,
            sections: self
                .elements
                .sections
                .iter()
                .map(|s| SectionBox { id: s.id(), top: f64::from(s.offset_top()), height: f64::from(s.offset_height()) })
                .collect(),
            reveal_tops: self.elements.reveal.iter().map(|el| el.get_bounding_client_rect().top()).collect(),
        }
    }

    fn viewport(&self) -> Size {
        let number = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(number(self.window.inner_width()), number(self.window.inner_height()))
    }

    fn anchor_click(&self, href: &str) -> AnchorClick {
        let target_top = if href == "#" {
            None
        } else {
            self.document
                .query_selector(href)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| f64::from(el.offset_top()))
        };
        AnchorClick {
            href: href.to_owned(),
            target_top,
            header_height: self.elements.header.as_ref().map(|h| f64::from(h.offset_height())),
        }
    }
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn bounds(el: &HtmlElement) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn waitlist_fields(form: &HtmlFormElement) -> WaitlistFields {
    let Ok(data) = FormData::new_with_form(form) else {
        return WaitlistFields::default();
    };
    WaitlistFields { name: data.get("name").as_string(), email: data.get("email").as_string() }
}
