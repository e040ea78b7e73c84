//! Section visibility tracking.
//!
//! The landing page has three stacked sections. On every scroll event the
//! tracker scans them bottom-up and activates the first one whose top edge
//! sits above the middle of the viewport. The active section drives the
//! fade-in styling and the nav link highlight.
//!
//! Viewport access goes through the [`Viewport`] trait so the tracker can be
//! tested without a webview.

use serde::{Deserialize, Serialize};

/// Scroll offset past which the scroll-to-top button appears (px).
pub const SCROLL_TOP_THRESHOLD: f64 = 200.0;

/// The three named page sections, in document order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Home,
    Mission,
    About,
}

impl Section {
    /// All sections in document order
    pub const ALL: [Section; 3] = [Section::Home, Section::Mission, Section::About];

    /// DOM element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "main-section",
            Section::Mission => "mission-section",
            Section::About => "about-section",
        }
    }

    /// Label shown in the nav bar
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Mission => "Mission",
            Section::About => "About",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Position of a section's top edge relative to the top of the viewport (px).
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
}

/// Read-only view of the scrolling surface.
pub trait Viewport {
    /// Current vertical scroll offset (px)
    fn scroll_y(&self) -> f64;
    /// Visible height (px)
    fn height(&self) -> f64;
    /// Bounds of a section, or `None` if it is not in the document
    fn section_bounds(&self, section: Section) -> Option<SectionBounds>;
}

/// One scroll event as posted by the webview bridge.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ViewportSample {
    pub scroll_y: f64,
    pub height: f64,
    /// Keyed by DOM id; unknown ids are ignored
    #[serde(default)]
    pub sections: Vec<SampledSection>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SampledSection {
    pub id: String,
    pub top: f64,
}

impl Viewport for ViewportSample {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|s| s.id == section.id())
            .map(|s| SectionBounds { top: s.top })
    }
}

/// What the page should show after a scroll event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScrollState {
    pub active: Section,
    pub show_scroll_top: bool,
}

/// Remembers the active section between scroll events.
#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    state: ScrollState,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.state.active
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Handle one scroll event. If no section qualifies, the previously
    /// active one stays active.
    pub fn on_scroll(&mut self, viewport: &impl Viewport) -> ScrollState {
        if let Some(section) = Self::visible_section(viewport) {
            self.state.active = section;
        }
        self.state.show_scroll_top = viewport.scroll_y() > SCROLL_TOP_THRESHOLD;
        self.state
    }

    /// Bottom-most section whose top is above the viewport midpoint.
    pub fn visible_section(viewport: &impl Viewport) -> Option<Section> {
        let midpoint = viewport.height() / 2.0;
        Section::ALL.into_iter().rev().find(|section| {
            viewport
                .section_bounds(*section)
                .is_some_and(|bounds| bounds.top < midpoint)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scroll_y: f64, tops: &[(Section, f64)]) -> ViewportSample {
        ViewportSample {
            scroll_y,
            height: 800.0,
            sections: tops
                .iter()
                .map(|(section, top)| SampledSection {
                    id: section.id().to_string(),
                    top: *top,
                })
                .collect(),
        }
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("footer"), None);
    }

    #[test]
    fn nav_labels() {
        assert_eq!(Section::Home.nav_label(), "Home");
        assert_eq!(Section::Mission.nav_label(), "Mission");
        assert_eq!(Section::About.nav_label(), "About");
    }

    #[test]
    fn starts_on_home() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), Section::Home);
        assert!(!tracker.state().show_scroll_top);
    }

    #[test]
    fn picks_bottom_most_section_above_midpoint() {
        let mut tracker = SectionTracker::new();
        let viewport = sample(
            900.0,
            &[
                (Section::Home, -900.0),
                (Section::Mission, 100.0),
                (Section::About, 700.0),
            ],
        );
        let state = tracker.on_scroll(&viewport);
        assert_eq!(state.active, Section::Mission);
        assert!(state.show_scroll_top);
    }

    #[test]
    fn midpoint_is_exclusive() {
        let viewport = sample(0.0, &[(Section::Home, 400.0), (Section::Mission, 1200.0)]);
        assert_eq!(SectionTracker::visible_section(&viewport), None);
    }

    #[test]
    fn keeps_previous_when_none_qualifies() {
        let mut tracker = SectionTracker::new();
        tracker.on_scroll(&sample(
            2000.0,
            &[
                (Section::Home, -2000.0),
                (Section::Mission, -1000.0),
                (Section::About, 0.0),
            ],
        ));
        assert_eq!(tracker.active(), Section::About);

        let state = tracker.on_scroll(&sample(0.0, &[]));
        assert_eq!(state.active, Section::About);
        assert!(!state.show_scroll_top);
    }

    #[test]
    fn same_scroll_position_is_idempotent() {
        let mut tracker = SectionTracker::new();
        let viewport = sample(
            1500.0,
            &[
                (Section::Home, -1500.0),
                (Section::Mission, -200.0),
                (Section::About, 350.0),
            ],
        );
        let first = tracker.on_scroll(&viewport);
        let second = tracker.on_scroll(&viewport);
        assert_eq!(first, second);
        assert_eq!(first.active, Section::About);
    }

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        let mut tracker = SectionTracker::new();
        assert!(!tracker.on_scroll(&sample(200.0, &[])).show_scroll_top);
        assert!(tracker.on_scroll(&sample(200.5, &[])).show_scroll_top);
    }

    #[test]
    fn sample_deserializes_from_bridge_json() {
        let json = r#"{
            "scroll_y": 12.5,
            "height": 700,
            "sections": [{ "id": "mission-section", "top": 40 }]
        }"#;
        let sample: ViewportSample = serde_json::from_str(json).unwrap();
        assert_eq!(
            sample.section_bounds(Section::Mission),
            Some(SectionBounds { top: 40.0 })
        );
        assert_eq!(sample.section_bounds(Section::About), None);
    }
}
