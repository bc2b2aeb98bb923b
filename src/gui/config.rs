use eframe::egui::Color32;

pub struct Config;

impl Config {
    /// Field dimensions in cells: an 800x600 window at 10 px per cell.
    pub const GRID_WIDTH: usize = 80;
    pub const GRID_HEIGHT: usize = 60;

    pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.7;
    pub const DEFAULT_UPDATES_PER_SECOND: f64 = 10.;
    pub const MAX_UPDATES_PER_SECOND: f64 = 240.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;
}
