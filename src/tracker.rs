use std::fmt;
use std::str::FromStr;

use log::debug;
use web_sys::HtmlElement;

use crate::config::TrackerConfig;

const SECTION_COUNT: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Services,
    Team,
    Testimonials,
    Clients,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; SECTION_COUNT] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Services,
        SectionId::Team,
        SectionId::Testimonials,
        SectionId::Clients,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Team => "team",
            SectionId::Testimonials => "testimonials",
            SectionId::Clients => "clients",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Team => "Team",
            SectionId::Testimonials => "Testimonials",
            SectionId::Clients => "Clients",
            SectionId::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown section: {}", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    // [top, top + height)
    pub fn contains(&self, position: f64) -> bool {
        self.height > 0.0 && position >= self.top && position < self.top + self.height
    }
}

pub trait BoundsProvider {
    fn bounds(&self) -> SectionBounds;
}

impl BoundsProvider for SectionBounds {
    fn bounds(&self) -> SectionBounds {
        *self
    }
}

impl BoundsProvider for HtmlElement {
    fn bounds(&self) -> SectionBounds {
        SectionBounds::new(self.offset_top() as f64, self.offset_height() as f64)
    }
}

pub struct SectionTracker {
    config: TrackerConfig,
    registry: [Option<Box<dyn BoundsProvider>>; SECTION_COUNT],
    active: SectionId,
}

impl SectionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            registry: Default::default(),
            active: SectionId::Hero,
        }
    }

    pub fn register<P>(&mut self, section: SectionId, provider: Option<P>)
    where
        P: BoundsProvider + 'static,
    {
        match provider {
            Some(provider) => {
                if self.is_registered(section) {
                    debug!("Section {} remounted, replacing its bounds", section);
                } else {
                    debug!("Registered section {}", section);
                }
                self.registry[section.index()] = Some(Box::new(provider));
            }
            None => debug!("Section {} not mounted yet, skipping registration", section),
        }
    }

    pub fn is_registered(&self, section: SectionId) -> bool {
        self.registry[section.index()].is_some()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    // Keeps the previous active section when nothing contains the position.
    pub fn evaluate(&mut self, scroll_offset: f64) -> SectionId {
        let position = scroll_offset + self.config.lookahead_px;

        let hit = SectionId::ALL.into_iter().find(|id| {
            self.registry[id.index()]
                .as_ref()
                .map_or(false, |provider| provider.bounds().contains(position))
        });

        if let Some(section) = hit {
            if section != self.active {
                debug!("Active section {} -> {} at {}px", self.active, section, position);
            }
            self.active = section;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tracker_with(sections: &[(SectionId, f64, f64)]) -> SectionTracker {
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        for &(id, top, height) in sections {
            tracker.register(id, Some(SectionBounds::new(top, height)));
        }
        tracker
    }

    fn three_sections() -> SectionTracker {
        tracker_with(&[
            (SectionId::Hero, 0.0, 800.0),
            (SectionId::About, 800.0, 400.0),
            (SectionId::Services, 1200.0, 800.0),
        ])
    }

    #[test]
    fn starts_on_hero() {
        let tracker = SectionTracker::new(TrackerConfig::default());
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn scroll_walkthrough_matches_layout() {
        let mut tracker = three_sections();

        assert_eq!(tracker.evaluate(750.0), SectionId::About);
        assert_eq!(tracker.evaluate(50.0), SectionId::Hero);

        tracker.evaluate(750.0);
        assert_eq!(tracker.evaluate(5000.0), SectionId::About);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn every_offset_inside_a_section_selects_it() {
        let mut tracker = three_sections();
        // effective position = offset + 100
        for offset in (-100..700).step_by(25) {
            assert_eq!(tracker.evaluate(offset as f64), SectionId::Hero, "offset {}", offset);
        }
        for offset in (700..1100).step_by(25) {
            assert_eq!(tracker.evaluate(offset as f64), SectionId::About, "offset {}", offset);
        }
        for offset in (1100..1900).step_by(25) {
            assert_eq!(tracker.evaluate(offset as f64), SectionId::Services, "offset {}", offset);
        }
    }

    #[test]
    fn interval_end_is_exclusive() {
        let mut tracker = three_sections();
        assert_eq!(tracker.evaluate(699.0), SectionId::Hero);
        assert_eq!(tracker.evaluate(700.0), SectionId::About);
    }

    #[test]
    fn gap_between_sections_keeps_previous_state() {
        let mut tracker = tracker_with(&[
            (SectionId::Hero, 0.0, 500.0),
            (SectionId::About, 700.0, 300.0),
        ]);
        assert_eq!(tracker.evaluate(100.0), SectionId::Hero);
        assert_eq!(tracker.evaluate(450.0), SectionId::Hero);
        assert_eq!(tracker.evaluate(450.0), SectionId::Hero);
        assert_eq!(tracker.evaluate(650.0), SectionId::About);
        assert_eq!(tracker.evaluate(500.0), SectionId::About);
    }

    #[test]
    fn re_registering_uses_latest_bounds() {
        let mut tracker = three_sections();
        tracker.register(SectionId::Team, Some(SectionBounds::new(5000.0, 100.0)));
        assert_eq!(tracker.evaluate(4950.0), SectionId::Team);

        tracker.register(SectionId::Team, Some(SectionBounds::new(2000.0, 500.0)));
        assert_eq!(tracker.evaluate(0.0), SectionId::Hero);
        assert_eq!(tracker.evaluate(4950.0), SectionId::Hero);
        assert_eq!(tracker.evaluate(2000.0), SectionId::Team);
    }

    #[test]
    fn missing_provider_is_ignored() {
        let mut tracker = three_sections();
        tracker.register::<SectionBounds>(SectionId::About, None);
        assert!(tracker.is_registered(SectionId::About));
        assert_eq!(tracker.evaluate(750.0), SectionId::About);

        tracker.register::<SectionBounds>(SectionId::Contact, None);
        assert!(!tracker.is_registered(SectionId::Contact));
    }

    #[test]
    fn zero_height_sections_never_match() {
        let mut tracker = tracker_with(&[
            (SectionId::Hero, 0.0, 0.0),
            (SectionId::About, 0.0, 0.0),
            (SectionId::Services, 300.0, 200.0),
        ]);
        assert_eq!(tracker.evaluate(-100.0), SectionId::Hero);
        assert_eq!(tracker.evaluate(250.0), SectionId::Services);
        assert_eq!(tracker.evaluate(-100.0), SectionId::Services);
    }

    // Stands in for an element whose height changes as images load.
    struct Reflowing {
        top: f64,
        height: Rc<Cell<f64>>,
    }

    impl BoundsProvider for Reflowing {
        fn bounds(&self) -> SectionBounds {
            SectionBounds::new(self.top, self.height.get())
        }
    }

    #[test]
    fn bounds_are_read_at_evaluation_time() {
        let height = Rc::new(Cell::new(0.0));
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.register(SectionId::Hero, Some(SectionBounds::new(0.0, 600.0)));
        tracker.register(
            SectionId::About,
            Some(Reflowing { top: 600.0, height: height.clone() }),
        );

        assert_eq!(tracker.evaluate(600.0), SectionId::Hero);
        height.set(400.0);
        assert_eq!(tracker.evaluate(600.0), SectionId::About);
    }

    #[test]
    fn lookahead_is_configurable() {
        let mut tracker = SectionTracker::new(TrackerConfig { lookahead_px: 0.0 });
        tracker.register(SectionId::Hero, Some(SectionBounds::new(0.0, 800.0)));
        tracker.register(SectionId::About, Some(SectionBounds::new(800.0, 400.0)));
        assert_eq!(tracker.evaluate(750.0), SectionId::Hero);
        assert_eq!(tracker.evaluate(800.0), SectionId::About);
    }

    #[test]
    fn section_ids_round_trip_through_dom_ids() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert!("footer".parse::<SectionId>().is_err());
    }

    #[test]
    fn active_reflects_last_evaluation() {
        let mut tracker = three_sections();
        assert_eq!(tracker.active(), SectionId::Hero);
        let section = tracker.evaluate(1500.0);
        assert_eq!(tracker.active(), section);
        tracker.evaluate(-5000.0);
        assert_eq!(tracker.active(), SectionId::Services);
    }
}
