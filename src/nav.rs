pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;
pub const FIXED_HEADER_OFFSET: f64 = 70.0;
pub const SCROLLED_THRESHOLD: f64 = 100.0;
pub const PARALLAX_FACTOR: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Last section, in document order, with `top - 200 <= scroll_y`.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - SECTION_ACTIVATION_OFFSET)
        .map(|section| section.id.as_str())
}

pub fn link_is_active(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

/// Section id an in-page link points to. Bare `#` and external links yield
/// `None` and keep their default navigation.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - FIXED_HEADER_OFFSET
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > SCROLLED_THRESHOLD {
            Self {
                background: "rgba(5, 5, 5, 0.98)",
                box_shadow: "0 2px 20px rgba(0, 255, 136, 0.1)",
            }
        } else {
            Self {
                background: "rgba(10, 10, 10, 0.95)",
                box_shadow: "none",
            }
        }
    }

    pub fn css(self) -> String {
        format!("background: {}; box-shadow: {};", self.background, self.box_shadow)
    }
}

pub fn scroll_indicator_visible(scroll_y: f64) -> bool {
    scroll_y <= SCROLLED_THRESHOLD
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn card_hover_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-10px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("home", 0.0),
            SectionOffset::new("about", 800.0),
            SectionOffset::new("projects", 1_600.0),
        ]
    }

    #[test]
    fn active_section_is_last_whose_offset_top_is_reached() {
        let sections = sections();

        assert_eq!(active_section(&sections, 850.0), Some("about"));
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 599.0), Some("home"));
        assert_eq!(active_section(&sections, 600.0), Some("about"));
        assert_eq!(active_section(&sections, 1_400.0), Some("projects"));
    }

    #[test]
    fn no_section_before_first_offset() {
        let sections = vec![SectionOffset::new("about", 900.0)];
        assert_eq!(active_section(&sections, 100.0), None);
        assert_eq!(active_section(&[], 100.0), None);
    }

    #[test]
    fn exactly_one_link_is_active() {
        let links = ["#home", "#about", "#projects", "https://github.com"];
        let sections = sections();
        let active = active_section(&sections, 850.0);

        let lit: Vec<&str> = links
            .iter()
            .copied()
            .filter(|href| link_is_active(href, active))
            .collect();
        assert_eq!(lit, ["#about"]);
    }

    #[test]
    fn anchor_targets_skip_bare_hash() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/resume.pdf"), None);
        assert_eq!(scroll_target(1_600.0), 1_530.0);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
        assert!(!menu.toggled().closed().is_open());
    }

    #[test]
    fn scroll_effects_switch_past_threshold() {
        assert_eq!(NavbarStyle::for_scroll(100.0).box_shadow, "none");
        assert_eq!(NavbarStyle::for_scroll(101.0).background, "rgba(5, 5, 5, 0.98)");
        assert!(scroll_indicator_visible(100.0));
        assert!(!scroll_indicator_visible(100.5));
        assert_eq!(parallax_offset(240.0), 120.0);
    }
}
