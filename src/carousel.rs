//! Typed configuration for the carousel collaborator.

use serde::Serialize;
use std::collections::BTreeMap;

/// Selector of the element the carousel takes over.
pub const PROJECT_TRACK_SELECTOR: &str = "#projects-track";

const MOBILE_BREAKPOINT_PX: u16 = 768;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub container: &'static str,
    pub items: u8,
    pub slide_by: u8,
    pub speed: u16,
    #[serde(rename = "loop")]
    pub wrap_around: bool,
    pub autoplay: bool,
    pub autoplay_timeout: u32,
    pub autoplay_button_output: bool,
    pub controls: bool,
    pub nav: bool,
    pub mouse_drag: bool,
    /// Breakpoints keyed by minimum viewport width in pixels.
    pub responsive: BTreeMap<u16, CarouselBreakpoint>,
}

#[derive(Serialize, Debug)]
pub struct CarouselBreakpoint {
    pub items: u8,
}

/// Project carousel: two cards per view (one on narrow screens), autoplaying
/// every three seconds, with arrows and nav dots.
pub fn project_carousel() -> CarouselConfig {
    let mut responsive = BTreeMap::new();
    responsive.insert(0, CarouselBreakpoint { items: 1 });
    responsive.insert(MOBILE_BREAKPOINT_PX, CarouselBreakpoint { items: 2 });

    CarouselConfig {
        container: PROJECT_TRACK_SELECTOR,
        items: 2,
        slide_by: 1,
        speed: 500,
        wrap_around: true,
        autoplay: true,
        autoplay_timeout: 3_000,
        autoplay_button_output: false,
        controls: true,
        nav: true,
        mouse_drag: true,
        responsive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_fall_back_to_one_slide() {
        let config = project_carousel();

        assert_eq!(config.items, 2);
        assert_eq!(config.responsive[&0].items, 1);
        assert_eq!(config.responsive[&MOBILE_BREAKPOINT_PX].items, 2);
    }

    #[test]
    fn serialized_form_matches_the_renderer_schema() {
        let raw = serde_json::to_value(project_carousel()).expect("serializable");

        assert_eq!(raw["container"], PROJECT_TRACK_SELECTOR);
        assert_eq!(raw["loop"], true);
        assert_eq!(raw["slideBy"], 1);
        assert_eq!(raw["autoplayTimeout"], 3_000);
        assert_eq!(raw["autoplayButtonOutput"], false);
        assert_eq!(raw["mouseDrag"], true);
        assert_eq!(raw["responsive"]["0"]["items"], 1);
        assert_eq!(raw["responsive"]["768"]["items"], 2);
    }
}
