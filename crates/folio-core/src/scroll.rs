//! Scroll tracking for the single-page journey view.

use std::fmt;

/// Sections of the journey page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Skills,
            Section::Projects,
            Section::Experience,
            Section::Contact,
        ]
    }

    /// Element id, also the indicator label.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Bounds in the scroll container's content coordinates, from client
    /// rectangles (`getBoundingClientRect`) of the section and the container
    /// plus the container's current `scrollTop`.
    pub fn from_client_rects(
        section_top: f64,
        section_height: f64,
        container_top: f64,
        scroll_top: f64,
    ) -> Self {
        Self {
            top: section_top - container_top + scroll_top,
            height: section_height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Which section holds the middle of the viewport.
///
/// Sections are revealed one at a time: a section is visible exactly when it
/// is the active one.
pub fn active_section(
    scroll_y: f64,
    viewport_height: f64,
    sections: &[(Section, SectionBounds)],
) -> Option<Section> {
    let midpoint = scroll_y + viewport_height / 2.0;
    sections
        .iter()
        .find(|(_, bounds)| bounds.contains(midpoint))
        .map(|(section, _)| *section)
}

/// Page scroll progress in percent, clamped to `0..=100`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(height: f64) -> Vec<(Section, SectionBounds)> {
        Section::all()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                (
                    *s,
                    SectionBounds {
                        top: i as f64 * height,
                        height,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_midpoint_picks_section() {
        let sections = stacked(1000.0);
        assert_eq!(active_section(0.0, 800.0, &sections), Some(Section::Home));
        assert_eq!(active_section(700.0, 800.0, &sections), Some(Section::About));
        assert_eq!(active_section(4800.0, 800.0, &sections), Some(Section::Contact));
        assert_eq!(active_section(9000.0, 800.0, &sections), None);
    }

    #[test]
    fn test_boundary_belongs_to_lower_section() {
        let sections = stacked(1000.0);
        // midpoint lands exactly on 1000
        assert_eq!(active_section(600.0, 800.0, &sections), Some(Section::About));
    }

    #[test]
    fn test_client_rects_map_to_content_coordinates() {
        // Section 95px below the container's top edge, container scrolled 0.
        let about = SectionBounds::from_client_rects(895.0, 800.0, 0.0, 0.0);
        assert_eq!(about, SectionBounds { top: 895.0, height: 800.0 });

        // Same section after scrolling 500px: its client top moved up, its
        // content position did not.
        let scrolled = SectionBounds::from_client_rects(395.0, 800.0, 0.0, 500.0);
        assert_eq!(scrolled, about);

        // Container offset from the viewport top is subtracted out.
        let offset = SectionBounds::from_client_rects(955.0, 800.0, 60.0, 0.0);
        assert_eq!(offset, about);
    }

    #[test]
    fn test_section_activates_when_content_reaches_midpoint() {
        let sections = [
            (Section::Home, SectionBounds::from_client_rects(95.0, 800.0, 0.0, 0.0)),
            (Section::About, SectionBounds::from_client_rects(895.0, 800.0, 0.0, 0.0)),
        ];
        assert_eq!(active_section(450.0, 800.0, &sections), Some(Section::Home));
        assert_eq!(active_section(495.0, 800.0, &sections), Some(Section::About));
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }
}
