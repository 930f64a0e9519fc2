//! Color palette for the light dashboard theme.

use ratatui::style::Color;

// --- Background layers ---
pub const PAGE_BG: Color = Color::Rgb(255, 255, 255);
pub const HEADER_ROW_BG: Color = Color::Rgb(248, 250, 252); // #f8fafc
pub const HOVER_BG: Color = Color::Rgb(240, 240, 240); // #f0f0f0
pub const SELECTED_ROW_BG: Color = Color::Rgb(240, 247, 255); // #f0f7ff
pub const POPUP_BG: Color = Color::Rgb(255, 255, 255);

// --- Borders ---
pub const BORDER: Color = Color::Rgb(226, 226, 226); // #e2e2e2
pub const BORDER_ACTIVE: Color = Color::Rgb(97, 134, 102); // #618666

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(97, 134, 102); // #618666
pub const ACCENT_ACTIVE: Color = Color::Rgb(75, 106, 79); // #4b6a4f
pub const LINK: Color = Color::Rgb(26, 140, 255); // #1a8cff

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(18, 18, 18); // #121212
pub const TEXT_MUTED: Color = Color::Rgb(117, 117, 117); // #757575
pub const TEXT_HEADER: Color = Color::Rgb(71, 85, 105); // #475569
pub const TEXT_ON_ACCENT: Color = Color::Rgb(255, 255, 255);

// --- Badges (background, foreground) ---
pub const WARNING_BG: Color = Color::Rgb(255, 243, 214); // #fff3d6
pub const WARNING_FG: Color = Color::Rgb(133, 100, 11); // #85640b
pub const NEUTRAL_BG: Color = Color::Rgb(226, 232, 240); // #e2e8f0
pub const NEUTRAL_FG: Color = Color::Rgb(71, 85, 105); // #475569
pub const SUCCESS_BG: Color = Color::Rgb(211, 242, 227); // #d3f2e3
pub const SUCCESS_FG: Color = Color::Rgb(10, 110, 61); // #0a6e3d
pub const DANGER_BG: Color = Color::Rgb(255, 225, 222); // #ffe1de
pub const DANGER_FG: Color = Color::Rgb(194, 34, 25); // #c22219
pub const DEFAULT_BADGE_BG: Color = Color::Rgb(246, 246, 246); // #f6f6f6
pub const DEFAULT_BADGE_FG: Color = Color::Rgb(84, 84, 84); // #545454

// --- Tab navigation toggles ---
pub const ANSWER_BG: Color = Color::Rgb(220, 207, 252); // #dccffc
pub const ANSWER_ACTIVE_BG: Color = Color::Rgb(201, 184, 249); // #c9b8f9
pub const ANSWER_FG: Color = Color::Rgb(70, 62, 89); // #463e59
pub const EXTRACT_BG: Color = Color::Rgb(250, 194, 175); // #fac2af
pub const EXTRACT_ACTIVE_BG: Color = Color::Rgb(245, 167, 143); // #f5a78f
pub const EXTRACT_FG: Color = Color::Rgb(105, 81, 73); // #695149
