use crate::theme::Theme;

const SPOTLIGHT_RADIUS_PX: u32 = 600;
const DARK_TINT: &str = "rgba(255, 215, 0, 0.15)";
const LIGHT_TINT: &str = "rgba(127, 29, 29, 0.1)";

/// Last pointer position seen, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

pub fn spotlight_background(theme: Theme, position: PointerPosition) -> String {
    let tint = match theme {
        Theme::Dark => DARK_TINT,
        Theme::Light => LIGHT_TINT,
    };

    format!(
        "background: radial-gradient({SPOTLIGHT_RADIUS_PX}px at {}px {}px, {tint}, transparent 80%);",
        position.x, position.y
    )
}
