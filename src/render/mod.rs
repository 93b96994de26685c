//! Render module - UI rendering

pub mod icons;
pub mod layout;
pub mod menu;
pub mod status;
pub mod strip;
pub mod theme;

pub use layout::{FrameLayout, HitTarget, MenuLayout, Slot, StripLayout, StripOptions};
pub use menu::render_context_menu;
pub use status::render_status_bar;
pub use strip::render_strip;
pub use theme::{parse_color, theme, Theme};
