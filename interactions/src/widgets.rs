//! Tabs, FAQ accordion, FAQ modal, and mobile menu.
//!
//! DESIGN
//! ======
//! Each widget keeps the minimal state needed to answer "what is open" and
//! emits class/attribute effects that bring the DOM in line. Clearing effects
//! are emitted for every sibling on each change, so a DOM edited behind the
//! widget's back is still corrected on the next interaction.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use crate::consts::{ACTIVE, SHOW};
use crate::effect::{Effect, Target};

// =============================================================
// Tabs
// =============================================================

/// Tab buttons keyed by `data-tab`; panes matched by id `{key}-tab`.
#[derive(Debug, Clone, Default)]
pub struct Tabs {
    keys: Vec<Option<String>>,
    pane_ids: Vec<String>,
    active_button: Option<usize>,
    active_pane: Option<usize>,
}

impl Tabs {
    #[must_use]
    pub fn new(keys: Vec<Option<String>>, pane_ids: Vec<String>) -> Self {
        Self { keys, pane_ids, active_button: None, active_pane: None }
    }

    #[must_use]
    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    #[must_use]
    pub fn active_pane(&self) -> Option<usize> {
        self.active_pane
    }

    /// Index of the pane a button's key selects.
    #[must_use]
    pub fn pane_for(&self, button: usize) -> Option<usize> {
        let key = self.keys.get(button)?.as_deref()?;
        let pane_id = format!("{key}-tab");
        self.pane_ids.iter().position(|id| *id == pane_id)
    }

    /// Activate `button` and its pane, deactivating every other button and pane.
    pub fn select(&mut self, button: usize) -> Vec<Effect> {
        if button >= self.keys.len() {
            return Vec::new();
        }
        let mut effects: Vec<Effect> = (0..self.keys.len())
            .map(|i| Effect::class(Target::TabButton(i), ACTIVE, false))
            .chain((0..self.pane_ids.len()).map(|i| Effect::class(Target::TabPane(i), ACTIVE, false)))
            .collect();

        effects.push(Effect::class(Target::TabButton(button), ACTIVE, true));
        self.active_button = Some(button);
        self.active_pane = self.pane_for(button);
        if let Some(pane) = self.active_pane {
            effects.push(Effect::class(Target::TabPane(pane), ACTIVE, true));
        }
        effects
    }
}

// =============================================================
// Accordion
// =============================================================

/// FAQ items with at most one open.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    #[must_use]
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Open `item`, or close it if it is already open. Any other item closes.
    pub fn toggle(&mut self, item: usize) -> Vec<Effect> {
        if item >= self.len {
            return Vec::new();
        }
        let was_open = self.open == Some(item);
        let mut effects: Vec<Effect> = (0..self.len).map(|i| Effect::class(Target::FaqItem(i), ACTIVE, false)).collect();
        if was_open {
            self.open = None;
        } else {
            self.open = Some(item);
            effects.push(Effect::class(Target::FaqItem(item), ACTIVE, true));
        }
        effects
    }
}

// =============================================================
// Modal
// =============================================================

pub const DEFAULT_MODAL_TITLE: &str = "More info";

/// The FAQ detail modal. Visibility is mirrored in the `show` class and `aria-hidden`.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    present: bool,
    open: bool,
    title: String,
    body: String,
}

impl Modal {
    #[must_use]
    pub fn new(present: bool) -> Self {
        Self { present, ..Self::default() }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Show the modal with `title` (default "More info") and `detail` (default empty).
    pub fn open(&mut self, title: Option<&str>, detail: Option<&str>) -> Vec<Effect> {
        if !self.present {
            return Vec::new();
        }
        self.title = title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_MODAL_TITLE).to_owned();
        self.body = detail.unwrap_or_default().to_owned();
        self.open = true;
        vec![
            Effect::text(Target::ModalTitle, self.title.clone()),
            Effect::text(Target::ModalBody, self.body.clone()),
            Effect::class(Target::Modal, SHOW, true),
            Effect::attr(Target::Modal, "aria-hidden", "false"),
        ]
    }

    /// Hide the modal. Closing an already closed modal re-asserts the hidden state.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.present {
            return Vec::new();
        }
        self.open = false;
        vec![Effect::class(Target::Modal, SHOW, false), Effect::attr(Target::Modal, "aria-hidden", "true")]
    }
}

// =============================================================
// Mobile menu
// =============================================================

/// Hamburger button and the nav drawer it opens. Body scrolling is locked while open.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    present: bool,
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn new(present: bool) -> Self {
        Self { present, open: false }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Vec<Effect> {
        if !self.present {
            return Vec::new();
        }
        self.set_open(!self.open)
    }

    /// Close the menu if open; no effects otherwise.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.present || !self.open {
            return Vec::new();
        }
        self.set_open(false)
    }

    fn set_open(&mut self, open: bool) -> Vec<Effect> {
        self.open = open;
        vec![
            Effect::class(Target::MobileMenuButton, ACTIVE, open),
            Effect::class(Target::Nav, ACTIVE, open),
            Effect::style(Target::Body, "overflow", if open { "hidden" } else { "" }),
        ]
    }
}
