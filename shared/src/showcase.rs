//! State behind the scroll-driven showcase pages: the seasonal menu tabs
//! and the side indicator that follows the section under the viewport centre.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// DOM id of the season's menu panel
    pub fn id(self) -> &'static str {
        match self {
            Season::Spring => "menu-spring",
            Season::Summer => "menu-summer",
            Season::Autumn => "menu-autumn",
            Season::Winter => "menu-winter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Primavera",
            Season::Summer => "Verano",
            Season::Autumn => "Otoño",
            Season::Winter => "Invierno",
        }
    }
}

/// Which seasonal menu is showing. Exactly one tab is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonTabs {
    active: Season,
}

impl Default for SeasonTabs {
    fn default() -> Self {
        Self {
            active: Season::Spring,
        }
    }
}

impl SeasonTabs {
    pub fn active(&self) -> Season {
        self.active
    }

    pub fn is_active(&self, season: Season) -> bool {
        self.active == season
    }

    /// Clicking the tab that is already open does nothing
    pub fn select(&mut self, season: Season) -> bool {
        if self.active == season {
            return false;
        }
        self.active = season;
        true
    }
}

/// Side panel tracking which named section is crossing the viewport centre.
/// Hidden before the first section and after the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    names: Vec<String>,
    active: Option<usize>,
    visible: bool,
}

impl SectionTracker {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            active: None,
            visible: false,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active
            .and_then(|index| self.names.get(index))
            .map(String::as_str)
    }

    /// Section `index` reached the centre line. Unknown indexes are ignored.
    pub fn enter(&mut self, index: usize) -> bool {
        if index >= self.names.len() || (self.active == Some(index) && self.visible) {
            return false;
        }
        self.active = Some(index);
        self.visible = true;
        true
    }

    /// Section `index` left the centre line. Only leaving the first section
    /// upwards or the last one downwards hides the panel; in between the
    /// neighbour takes over through `enter`.
    pub fn leave(&mut self, index: usize) -> bool {
        let at_edge = index == 0 || index + 1 == self.names.len();
        if self.active != Some(index) || !at_edge || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Thumb height as a percentage of the track: one slot per section
    pub fn thumb_height_percent(&self) -> f64 {
        if self.names.is_empty() {
            0.0
        } else {
            100.0 / self.names.len() as f64
        }
    }

    /// Thumb offset from the top of the track, in percent
    pub fn thumb_offset_percent(&self) -> f64 {
        let count = self.names.len();
        match self.active {
            Some(index) if count > 1 => {
                let travel = 100.0 - self.thumb_height_percent();
                index as f64 * travel / (count - 1) as f64
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SectionTracker {
        SectionTracker::new(vec![
            "Onsen".to_string(),
            "Restaurante".to_string(),
            "Spa".to_string(),
            "Jardín".to_string(),
        ])
    }

    #[test]
    fn test_one_tab_active() {
        let mut tabs = SeasonTabs::default();
        assert!(tabs.is_active(Season::Spring));
        assert!(!tabs.select(Season::Spring));

        assert!(tabs.select(Season::Autumn));
        assert_eq!(tabs.active(), Season::Autumn);
        let active: Vec<Season> = Season::ALL.into_iter().filter(|s| tabs.is_active(*s)).collect();
        assert_eq!(active, vec![Season::Autumn]);
    }

    #[test]
    fn test_tracker_follows_sections() {
        let mut sections = tracker();
        assert!(!sections.is_visible());
        assert_eq!(sections.active_name(), None);

        assert!(sections.enter(0));
        assert!(sections.is_visible());
        assert_eq!(sections.active_name(), Some("Onsen"));

        // leaving a middle section is handled by the next one entering
        assert!(sections.enter(1));
        assert!(!sections.leave(1));
        assert!(sections.enter(2));
        assert_eq!(sections.active_name(), Some("Spa"));
        assert!(!sections.enter(9));
    }

    #[test]
    fn test_tracker_hides_past_the_edges() {
        let mut sections = tracker();
        sections.enter(0);
        assert!(sections.leave(0));
        assert!(!sections.is_visible());

        sections.enter(3);
        assert!(sections.is_visible());
        assert!(sections.leave(3));
        assert!(!sections.is_visible());
        assert_eq!(sections.active(), Some(3));
    }

    #[test]
    fn test_thumb_geometry() {
        let mut sections = tracker();
        assert_eq!(sections.thumb_height_percent(), 25.0);
        assert_eq!(sections.thumb_offset_percent(), 0.0);

        sections.enter(3);
        assert_eq!(sections.thumb_offset_percent(), 75.0);
        sections.enter(1);
        assert_eq!(sections.thumb_offset_percent(), 25.0);

        let single = SectionTracker::new(vec!["Onsen".to_string()]);
        assert_eq!(single.thumb_height_percent(), 100.0);
        assert_eq!(single.thumb_offset_percent(), 0.0);

        let empty = SectionTracker::new(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.thumb_height_percent(), 0.0);
    }
}
