use crate::config::InteractionConfig;
use crate::consts::{ACTIVE, HIDDEN, LOADED, SHOW, STICKY, THEME_STORAGE_KEY, THEME_TRANSITION, TILT_RESET};
use crate::cosmetics::{Counter, Tilt, parallax_offset, parallax_transform, parse_count, ripple_origin};
use crate::effect::{Deferred, Effect, RippleId, TaskId, Target};
use crate::geometry::{Point, Rect, Size};
use crate::layout::{AnchorClick, FaqMore, PageLayout, ScrollFrame};
use crate::scheduler::TaskIds;
use crate::scroll;
use crate::settings::SettingsStore;
use crate::theme::{Theme, ThemeIcons, resolve_initial};
use crate::waitlist::{Waitlist, WaitlistFields};
use crate::widgets::{Accordion, MobileMenu, Modal, Tabs};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Landing page controller state: every decision the page makes, with no DOM access.
///
/// Separated from the browser shell so it can be tested without WASM. Each
/// `on_*` handler takes the measurements the shell read for that event and
/// returns the [`Effect`]s to apply.
pub struct LandingCore<S: SettingsStore> {
    config: InteractionConfig,
    store: S,
    tasks: TaskIds,
    next_ripple: u64,

    theme: Theme,
    has_theme_icons: bool,
    theme_transition: Option<TaskId>,
    preloader_task: Option<TaskId>,

    nav_hrefs: Vec<String>,
    nav_active: Vec<Option<bool>>,
    sticky: Option<bool>,
    back_to_top: Option<bool>,
    revealed: Vec<bool>,

    menu: MobileMenu,
    tabs: Tabs,
    accordion: Accordion,
    modal: Modal,
    faq_more: Vec<FaqMore>,
    waitlist: Waitlist,

    blobs: usize,
    feature_cards: usize,
    ripple_hosts: usize,
    live_ripples: Vec<RippleId>,
    counters: Vec<Counter>,
}

impl<S: SettingsStore> LandingCore<S> {
    /// Build the controller from the page description. The starting theme is
    /// resolved from `store`, falling back to `prefers_dark`.
    pub fn new(layout: PageLayout, store: S, prefers_dark: bool, config: InteractionConfig) -> Self {
        let theme = resolve_initial(&store, prefers_dark);
        let counters = layout
            .counter_targets
            .iter()
            .map(|raw| Counter::new(raw.as_deref().map_or(0, parse_count), config.counter_steps))
            .collect();
        Self {
            store,
            tasks: TaskIds::default(),
            next_ripple: 0,
            theme,
            has_theme_icons: layout.has_theme_icons,
            theme_transition: None,
            preloader_task: None,
            nav_active: vec![None; layout.nav_link_hrefs.len()],
            nav_hrefs: layout.nav_link_hrefs,
            sticky: None,
            back_to_top: None,
            revealed: vec![false; layout.reveal_targets],
            menu: MobileMenu::new(layout.has_mobile_menu),
            tabs: Tabs::new(layout.tab_keys, layout.tab_pane_ids),
            accordion: Accordion::new(layout.faq_items),
            modal: Modal::new(layout.has_modal),
            faq_more: layout.faq_more,
            waitlist: Waitlist::new(layout.has_waitlist_form),
            blobs: layout.blobs,
            feature_cards: layout.feature_cards,
            ripple_hosts: layout.ripple_hosts,
            live_ripples: Vec::new(),
            counters,
            config,
        }
    }

    /// Effects for the first paint: theme attribute, toggle icons, and the body `loaded` marker.
    pub fn init(&mut self) -> Vec<Effect> {
        log::debug!("landing core init with {} theme", self.theme);
        let mut effects = self.theme_effects();
        effects.push(Effect::class(Target::Body, LOADED, true));
        effects
    }

    // --- Theme ---

    /// Flip the theme, persist it, and run the transition class for the configured window.
    pub fn toggle_theme(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_STORAGE_KEY, self.theme.as_str());
        log::debug!("theme toggled to {}", self.theme);

        let mut effects = self.theme_effects();
        if let Some(previous) = self.theme_transition.take() {
            effects.push(Effect::Cancel { id: previous });
        }
        let id = self.tasks.next_id();
        self.theme_transition = Some(id);
        effects.push(Effect::class(Target::Root, THEME_TRANSITION, true));
        effects.push(Effect::Schedule {
            id,
            delay_ms: self.config.theme_transition_ms,
            task: Deferred::EndThemeTransition,
        });
        effects
    }

    fn theme_effects(&self) -> Vec<Effect> {
        let mut effects = vec![Effect::attr(Target::Root, "data-theme", self.theme.as_str())];
        if self.has_theme_icons {
            let icons = ThemeIcons::for_theme(self.theme);
            effects.extend([
                Effect::class(Target::ThemeSunIcon, ACTIVE, icons.sun),
                Effect::class(Target::ThemeMoonIcon, ACTIVE, icons.moon),
                Effect::class(Target::ThemeGlow, ACTIVE, icons.glow),
            ]);
        }
        effects
    }

    // --- Window lifecycle ---

    /// Window `load`: schedule the preloader fade. Repeated loads do nothing.
    pub fn on_window_load(&mut self) -> Vec<Effect> {
        if self.preloader_task.is_some() {
            return Vec::new();
        }
        let id = self.tasks.next_id();
        self.preloader_task = Some(id);
        vec![Effect::Schedule { id, delay_ms: self.config.preloader_delay_ms, task: Deferred::HidePreloader }]
    }

    /// Hand back a task the shell scheduled earlier.
    pub fn run_deferred(&mut self, task: Deferred) -> Vec<Effect> {
        match task {
            Deferred::EndThemeTransition => {
                self.theme_transition = None;
                vec![Effect::class(Target::Root, THEME_TRANSITION, false)]
            }
            Deferred::HidePreloader => vec![Effect::class(Target::Preloader, HIDDEN, true)],
            Deferred::RemoveRipple(id) => {
                let before = self.live_ripples.len();
                self.live_ripples.retain(|r| *r != id);
                if before == self.live_ripples.len() {
                    return Vec::new();
                }
                vec![Effect::RemoveRipple { id }]
            }
            Deferred::ResetWaitlist => self.waitlist.reset(),
        }
    }

    // --- Scroll ---

    /// Recompute nav highlight, sticky header, back-to-top, and reveal for one scroll position.
    pub fn on_scroll(&mut self, frame: &ScrollFrame) -> Vec<Effect> {
        let mut effects = Vec::new();

        for (link, active) in scroll::nav_updates(
            &frame.sections,
            &self.nav_hrefs,
            frame.scroll_y,
            self.config.nav_offset_px,
        ) {
            if self.nav_active[link] != Some(active) {
                self.nav_active[link] = Some(active);
                effects.push(Effect::class(Target::NavLink(link), ACTIVE, active));
            }
        }

        let sticky = scroll::is_sticky(frame.scroll_y, self.config.sticky_header_px);
        if self.sticky != Some(sticky) {
            self.sticky = Some(sticky);
            effects.push(Effect::class(Target::Header, STICKY, sticky));
        }

        let show = scroll::shows_back_to_top(frame.scroll_y, self.config.back_to_top_px);
        if self.back_to_top != Some(show) {
            self.back_to_top = Some(show);
            effects.push(Effect::class(Target::BackToTop, SHOW, show));
        }

        for (index, top) in frame.reveal_tops.iter().enumerate() {
            let Some(revealed) = self.revealed.get_mut(index) else {
                break;
            };
            if !*revealed && scroll::should_reveal(*top, frame.viewport_height, self.config.reveal_offset_px) {
                *revealed = true;
                effects.push(Effect::style(Target::Reveal(index), "opacity", "1"));
                effects.push(Effect::style(Target::Reveal(index), "transform", "translateY(0)"));
            }
        }

        effects
    }

    // --- Navigation ---

    pub fn on_mobile_menu_click(&mut self) -> Vec<Effect> {
        self.menu.toggle()
    }

    /// A nav link click closes the mobile menu if it is open.
    pub fn on_nav_link_click(&mut self) -> Vec<Effect> {
        self.menu.close()
    }

    /// In-page anchor click. A bare `#` or a missing target does nothing.
    pub fn on_anchor_click(&mut self, click: &AnchorClick) -> Vec<Effect> {
        if click.href == "#" {
            return Vec::new();
        }
        let Some(target_top) = click.target_top else {
            return Vec::new();
        };
        let top = scroll::anchor_scroll_top(
            target_top,
            click.header_height,
            self.config.anchor_gap_px,
            self.config.fallback_header_px,
        );
        vec![Effect::ScrollTo { top }]
    }

    pub fn on_back_to_top_click(&mut self) -> Vec<Effect> {
        vec![Effect::ScrollTo { top: 0.0 }]
    }

    // --- Tabs / FAQ / modal ---

    pub fn on_tab_click(&mut self, button: usize) -> Vec<Effect> {
        self.tabs.select(button)
    }

    pub fn on_faq_question_click(&mut self, item: usize) -> Vec<Effect> {
        self.accordion.toggle(item)
    }

    pub fn on_faq_more_click(&mut self, button: usize) -> Vec<Effect> {
        let Some(more) = self.faq_more.get(button) else {
            return Vec::new();
        };
        let (title, detail) = (more.title.clone(), more.detail.clone());
        self.modal.open(title.as_deref(), detail.as_deref())
    }

    pub fn on_modal_close_click(&mut self) -> Vec<Effect> {
        self.modal.close()
    }

    /// Document `keydown`. Only Escape is handled: it closes the modal.
    pub fn on_key_down(&mut self, key: &str) -> Vec<Effect> {
        if key == "Escape" { self.modal.close() } else { Vec::new() }
    }

    // --- Waitlist ---

    pub fn on_waitlist_submit(&mut self, fields: &WaitlistFields) -> Vec<Effect> {
        self.waitlist.submit(fields, &mut self.tasks, self.config.form_reset_ms)
    }

    // --- Cosmetics ---

    /// Window `mousemove`: shift every blob by its parallax offset.
    pub fn on_mouse_move(&mut self, pointer: Point, viewport: Size) -> Vec<Effect> {
        (0..self.blobs)
            .map(|index| {
                let offset = parallax_offset(index, pointer, viewport);
                Effect::style(Target::Blob(index), "transform", parallax_transform(offset))
            })
            .collect()
    }

    pub fn on_card_move(&mut self, card: usize, pointer: Point, rect: Rect) -> Vec<Effect> {
        if card >= self.feature_cards {
            return Vec::new();
        }
        let tilt = Tilt::at(pointer, rect);
        vec![
            Effect::style(Target::FeatureCard(card), "transform", tilt.transform()),
            Effect::style(Target::FeatureCard(card), "--glow-x", format!("{}%", tilt.glow_x)),
            Effect::style(Target::FeatureCard(card), "--glow-y", format!("{}%", tilt.glow_y)),
        ]
    }

    pub fn on_card_leave(&mut self, card: usize) -> Vec<Effect> {
        if card >= self.feature_cards {
            return Vec::new();
        }
        vec![Effect::style(Target::FeatureCard(card), "transform", TILT_RESET)]
    }

    /// Click on a ripple host. Hosts carrying the `disabled` class get no ripple.
    pub fn on_ripple_click(&mut self, host: usize, pointer: Point, rect: Rect, host_disabled: bool) -> Vec<Effect> {
        if host >= self.ripple_hosts || host_disabled {
            return Vec::new();
        }
        self.next_ripple += 1;
        let ripple = RippleId(self.next_ripple);
        self.live_ripples.push(ripple);
        let task = self.tasks.next_id();
        vec![
            Effect::style(Target::RippleHost(host), "position", "relative"),
            Effect::style(Target::RippleHost(host), "overflow", "hidden"),
            Effect::SpawnRipple { id: ripple, host, at: ripple_origin(pointer, rect) },
            Effect::Schedule { id: task, delay_ms: self.config.ripple_lifetime_ms, task: Deferred::RemoveRipple(ripple) },
        ]
    }

    /// Counter `index` crossed the visibility threshold: stop observing it and start counting.
    pub fn on_counter_visible(&mut self, index: usize) -> Vec<Effect> {
        let Some(counter) = self.counters.get_mut(index) else {
            return Vec::new();
        };
        let mut effects = vec![Effect::UnobserveCounter { index }];
        if counter.start() {
            effects.push(Effect::RequestFrame { counter: index });
        }
        effects
    }

    /// One animation frame for counter `index`.
    pub fn on_counter_frame(&mut self, index: usize) -> Vec<Effect> {
        let Some(counter) = self.counters.get_mut(index) else {
            return Vec::new();
        };
        let Some(value) = counter.frame() else {
            return Vec::new();
        };
        let mut effects = vec![Effect::text(Target::Counter(index), value.to_string())];
        if counter.current() < counter.target() {
            effects.push(Effect::RequestFrame { counter: index });
        }
        effects
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Indices of nav links currently marked active.
    #[must_use]
    pub fn active_nav_links(&self) -> Vec<usize> {
        self.nav_active
            .iter()
            .enumerate()
            .filter_map(|(i, active)| (*active == Some(true)).then_some(i))
            .collect()
    }

    #[must_use]
    pub fn is_header_sticky(&self) -> bool {
        self.sticky == Some(true)
    }

    #[must_use]
    pub fn is_back_to_top_visible(&self) -> bool {
        self.back_to_top == Some(true)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub fn active_tab(&self) -> Option<usize> {
        self.tabs.active_button()
    }

    #[must_use]
    pub fn active_tab_pane(&self) -> Option<usize> {
        self.tabs.active_pane()
    }

    #[must_use]
    pub fn open_faq(&self) -> Option<usize> {
        self.accordion.open_item()
    }

    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    #[must_use]
    pub fn waitlist(&self) -> &Waitlist {
        &self.waitlist
    }

    #[must_use]
    pub fn live_ripples(&self) -> &[RippleId] {
        &self.live_ripples
    }

    #[must_use]
    pub fn counter(&self, index: usize) -> Option<&Counter> {
        self.counters.get(index)
    }
}
