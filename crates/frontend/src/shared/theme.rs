//! Visual constants shared by every screen.

pub mod colors {
    pub const PRIMARY: &str = "#008080";
    pub const SECONDARY: &str = "#E0F2F1";
    pub const NEUTRAL: &str = "#D9D9D9";
    pub const BORDER: &str = "#ddd";
    pub const TEXT_DARK: &str = "#000";
    pub const TEXT_LIGHT: &str = "#fff";
    pub const BACKGROUND: &str = "#fff";
    pub const INPUT_BORDER: &str = "#ccc";
    pub const MODAL_OVERLAY: &str = "rgba(0,0,0,0.3)";
    pub const DANGER: &str = "#FF4444";
}

pub mod sizes {
    pub const ICON_SMALL: u32 = 22;
    pub const ICON_MEDIUM: u32 = 28;
    pub const ICON_LARGE: u32 = 40;
    pub const HEADER_HEIGHT: u32 = 56;
    pub const INPUT_HEIGHT: u32 = 44;
    pub const BORDER_RADIUS: u32 = 8;
    pub const MODAL_BORDER_RADIUS: u32 = 16;
}

pub mod spacing {
    pub const XS: u32 = 4;
    pub const SM: u32 = 8;
    pub const MD: u32 = 12;
    pub const LG: u32 = 16;
    pub const XL: u32 = 20;
    pub const XXL: u32 = 24;
}

/// Full-screen modal surface, stacked above the chat screen.
pub fn fullscreen_overlay(z_index: u32) -> String {
    format!(
        "position: fixed; inset: 0; display: flex; flex-direction: column; \
         background: {}; z-index: {};",
        colors::BACKGROUND,
        z_index
    )
}
