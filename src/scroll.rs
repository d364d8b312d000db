use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Navigable page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Tuning knobs for scroll and pointer effects. Every field falls back to
/// its default when missing from the content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// How far below the viewport top a section may start and still count as active.
    pub look_ahead: f64,
    /// Height of the fixed nav bar; navigation stops this far above a section.
    pub header_offset: f64,
    /// Scroll offset past which the nav bar turns opaque.
    pub scrolled_threshold: u32,
    pub parallax_factor: f64,
    pub primary_glow_divisor: i32,
    pub secondary_glow_divisor: i32,
    /// Coalesce scroll/pointer updates to one per animation frame.
    pub throttle: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            look_ahead: 200.0,
            header_offset: 80.0,
            scrolled_threshold: 50,
            parallax_factor: 0.5,
            primary_glow_divisor: 20,
            secondary_glow_divisor: 30,
            throttle: true,
        }
    }
}

/// Browser geometry and scrolling, as seen by the page state.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    /// Top offset of the section element, `None` if it is not mounted.
    fn section_top(&self, section: Section) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

/// Last section (in page order) whose top is within `scroll_offset + look_ahead`.
/// Unmounted sections are skipped; `previous` is kept when nothing qualifies.
pub fn resolve_active<I>(tops: I, scroll_offset: f64, look_ahead: f64, previous: Section) -> Section
where
    I: IntoIterator<Item = (Section, Option<f64>)>,
    I::IntoIter: DoubleEndedIterator,
{
    let limit = scroll_offset + look_ahead;
    tops.into_iter()
        .rev()
        .find_map(|(section, top)| top.filter(|t| *t <= limit).map(|_| section))
        .unwrap_or(previous)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
}

/// Pixel offsets of the two background glows. `primary` is anchored to the
/// top-left corner, `secondary` to the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowOffsets {
    pub primary: (f64, f64),
    pub secondary: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub active: Section,
    pub scroll_offset: u32,
    pub pointer: Pointer,
    pub menu_open: bool,
}

impl UiState {
    pub fn on_scroll(&mut self, viewport: &impl Viewport, config: &ScrollConfig) {
        self.scroll_offset = viewport.scroll_y().max(0.0).round() as u32;
        let tops = Section::ALL.map(|section| (section, viewport.section_top(section)));
        self.active = resolve_active(
            tops,
            f64::from(self.scroll_offset),
            config.look_ahead,
            self.active,
        );
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        self.pointer = Pointer { x, y };
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the menu and smooth-scrolls to the section below the nav bar.
    /// Returns the requested scroll target, or `None` when `id` is unknown
    /// or its element is not mounted.
    pub fn scroll_to_section(
        &mut self,
        id: &str,
        viewport: &impl Viewport,
        config: &ScrollConfig,
    ) -> Option<f64> {
        self.menu_open = false;
        let section = id.parse::<Section>().ok()?;
        let top = viewport.section_top(section)?;
        let target = top - config.header_offset;
        viewport.smooth_scroll_to(target);
        Some(target)
    }

    pub fn is_scrolled(&self, config: &ScrollConfig) -> bool {
        self.scroll_offset > config.scrolled_threshold
    }

    pub fn parallax_offset(&self, config: &ScrollConfig) -> f64 {
        f64::from(self.scroll_offset) * config.parallax_factor
    }

    pub fn glow_offsets(&self, config: &ScrollConfig) -> GlowOffsets {
        let Pointer { x, y } = self.pointer;
        let scale = |v: i32, divisor: i32| {
            if divisor == 0 {
                0.0
            } else {
                f64::from(v) / f64::from(divisor)
            }
        };
        GlowOffsets {
            primary: (
                scale(x, config.primary_glow_divisor),
                scale(y, config.primary_glow_divisor),
            ),
            secondary: (
                scale(x, config.secondary_glow_divisor),
                scale(y, config.secondary_glow_divisor),
            ),
        }
    }
}

/// Lets at most one update through per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True if the caller should schedule a frame; false while one is already queued.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn release(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
