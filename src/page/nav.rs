//! Navigation: active-section highlighting and the hamburger menu

/// A section becomes active this many px before its top reaches the viewport top
pub const ACTIVE_SECTION_LEAD: f64 = 200.0;

/// A page section as seen by the highlighter
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Offset of the section top from the document top (px)
    pub top: f64,
}

/// Id of the last section (in document order) whose top, less the lead, has
/// been scrolled past
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - ACTIVE_SECTION_LEAD)
        .last()
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at the active section
pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

/// Contact dropdown links the browser should follow itself (mail, phone);
/// anything else only confirms the copy
pub fn opens_natively(href: &str) -> bool {
    href.starts_with("mailto:") || href.starts_with("tel:")
}

/// Hamburger menu open/closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
