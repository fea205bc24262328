//! Element references collected once at mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every selector lookup happens here. The controller never queries the
//! document for widgets afterwards; it resolves the core's [`Target`]s
//! against this bundle and skips any that are absent.

use interactions::effect::Target;
use interactions::layout::{FaqMore, PageLayout};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::markup;

pub struct PageElements {
    pub root: Option<HtmlElement>,
    pub body: Option<HtmlElement>,
    pub header: Option<HtmlElement>,
    pub nav: Option<HtmlElement>,
    pub mobile_menu_button: Option<HtmlElement>,
    pub preloader: Option<HtmlElement>,
    pub theme_toggle: Option<HtmlElement>,
    pub sun_icon: Option<HtmlElement>,
    pub moon_icon: Option<HtmlElement>,
    pub toggle_glow: Option<HtmlElement>,
    pub back_to_top: Option<HtmlElement>,
    pub modal: Option<HtmlElement>,
    pub modal_title: Option<HtmlElement>,
    pub modal_body: Option<HtmlElement>,
    pub modal_close: Vec<HtmlElement>,
    pub waitlist_form: Option<HtmlFormElement>,
    pub submit_button: Option<HtmlElement>,
    pub config_script: Option<Element>,

    pub nav_links: Vec<HtmlElement>,
    pub anchors: Vec<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub reveal: Vec<HtmlElement>,
    pub tab_buttons: Vec<HtmlElement>,
    pub tab_panes: Vec<HtmlElement>,
    pub faq_items: Vec<HtmlElement>,
    /// `.faq-question` of each `.faq-item`, aligned with `faq_items`.
    pub faq_questions: Vec<Option<HtmlElement>>,
    pub faq_more: Vec<HtmlElement>,
    pub blobs: Vec<HtmlElement>,
    pub feature_cards: Vec<HtmlElement>,
    pub counters: Vec<HtmlElement>,
    pub ripple_hosts: Vec<HtmlElement>,
}

impl PageElements {
    pub fn collect(document: &Document) -> Self {
        let by_id = |id: &str| document.get_element_by_id(id).and_then(html);
        let theme_toggle = by_id(markup::THEME_TOGGLE_ID);
        let modal = by_id(markup::MODAL_ID);
        let waitlist_form = document
            .get_element_by_id(markup::WAITLIST_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let faq_items = all(document, markup::FAQ_ITEMS);

        Self {
            root: document.document_element().and_then(html),
            body: document.body(),
            header: first(document, markup::HEADER),
            nav: first(document, markup::NAV),
            mobile_menu_button: by_id(markup::MOBILE_MENU_ID),
            preloader: first(document, markup::PRELOADER),
            sun_icon: theme_toggle.as_ref().and_then(|t| first_in(t, markup::SUN_ICON)),
            moon_icon: theme_toggle.as_ref().and_then(|t| first_in(t, markup::MOON_ICON)),
            toggle_glow: theme_toggle.as_ref().and_then(|t| first_in(t, markup::TOGGLE_GLOW)),
            theme_toggle,
            back_to_top: by_id(markup::BACK_TO_TOP_ID),
            modal_title: modal.as_ref().and_then(|m| first_in(m, markup::MODAL_TITLE)),
            modal_body: modal.as_ref().and_then(|m| first_in(m, markup::MODAL_BODY)),
            modal_close: modal.as_ref().map_or_else(Vec::new, |m| all_in(m, markup::MODAL_CLOSE)),
            modal,
            submit_button: waitlist_form.as_ref().and_then(|f| first_in(f, markup::SUBMIT_BUTTON)),
            waitlist_form,
            config_script: document.get_element_by_id(markup::CONFIG_SCRIPT_ID),
            nav_links: all(document, markup::NAV_LINKS),
            anchors: all(document, markup::ANCHORS),
            sections: all(document, markup::SECTIONS),
            reveal: all(document, markup::REVEAL),
            tab_buttons: all(document, markup::TAB_BUTTONS),
            tab_panes: all(document, markup::TAB_PANES),
            faq_questions: faq_items.iter().map(|item| first_in(item, markup::FAQ_QUESTION)).collect(),
            faq_items,
            faq_more: all(document, markup::FAQ_MORE),
            blobs: all(document, markup::BLOBS),
            feature_cards: all(document, markup::FEATURE_CARDS),
            counters: all(document, markup::COUNTERS),
            ripple_hosts: all(document, markup::RIPPLE_HOSTS),
        }
    }

    /// Static description handed to the core.
    pub fn layout(&self) -> PageLayout {
        PageLayout {
            nav_link_hrefs: self.nav_links.iter().map(|l| l.get_attribute("href").unwrap_or_default()).collect(),
            tab_keys: self.tab_buttons.iter().map(|b| b.get_attribute("data-tab")).collect(),
            tab_pane_ids: self.tab_panes.iter().map(|pane| pane.id()).collect(),
            faq_items: self.faq_items.len(),
            faq_more: self
                .faq_more
                .iter()
                .map(|b| FaqMore { title: b.get_attribute("data-title"), detail: b.get_attribute("data-detail") })
                .collect(),
            counter_targets: self.counters.iter().map(|c| c.get_attribute("data-count")).collect(),
            blobs: self.blobs.len(),
            feature_cards: self.feature_cards.len(),
            reveal_targets: self.reveal.len(),
            ripple_hosts: self.ripple_hosts.len(),
            has_modal: self.modal.is_some(),
            has_theme_icons: self.sun_icon.is_some() && self.moon_icon.is_some() && self.toggle_glow.is_some(),
            has_mobile_menu: self.mobile_menu_button.is_some() && self.nav.is_some(),
            has_waitlist_form: self.waitlist_form.is_some(),
        }
    }

    /// Body of `#landing-config`, if present.
    pub fn config_json(&self) -> Option<String> {
        self.config_script.as_ref().and_then(|s| s.text_content())
    }

    pub fn resolve(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Root => self.root.as_ref(),
            Target::Body => self.body.as_ref(),
            Target::Header => self.header.as_ref(),
            Target::Nav => self.nav.as_ref(),
            Target::MobileMenuButton => self.mobile_menu_button.as_ref(),
            Target::Preloader => self.preloader.as_ref(),
            Target::ThemeSunIcon => self.sun_icon.as_ref(),
            Target::ThemeMoonIcon => self.moon_icon.as_ref(),
            Target::ThemeGlow => self.toggle_glow.as_ref(),
            Target::BackToTop => self.back_to_top.as_ref(),
            Target::Modal => self.modal.as_ref(),
            Target::ModalTitle => self.modal_title.as_ref(),
            Target::ModalBody => self.modal_body.as_ref(),
            Target::WaitlistForm => self.waitlist_form.as_deref(),
            Target::SubmitButton => self.submit_button.as_ref(),
            Target::NavLink(i) => self.nav_links.get(i),
            Target::Reveal(i) => self.reveal.get(i),
            Target::TabButton(i) => self.tab_buttons.get(i),
            Target::TabPane(i) => self.tab_panes.get(i),
            Target::FaqItem(i) => self.faq_items.get(i),
            Target::Blob(i) => self.blobs.get(i),
            Target::FeatureCard(i) => self.feature_cards.get(i),
            Target::Counter(i) => self.counters.get(i),
            Target::RippleHost(i) => self.ripple_hosts.get(i),
        }
    }
}

fn html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn first(document: &Document, selector: &str) -> Option<HtmlElement> {
    document.query_selector(selector).ok().flatten().and_then(html)
}

fn first_in(parent: &Element, selector: &str) -> Option<HtmlElement> {
    parent.query_selector(selector).ok().flatten().and_then(html)
}

fn all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect(),
        Err(err) => {
            log::warn!("bad selector {selector}: {err:?}");
            Vec::new()
        }
    }
}

fn all_in(parent: &Element, selector: &str) -> Vec<HtmlElement> {
    parent.query_selector_all(selector).map_or_else(
        |_| Vec::new(),
        |list| {
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .collect()
        },
    )
}
