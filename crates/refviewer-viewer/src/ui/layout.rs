pub const HOME_TOP_PADDING: f32 = 60.0;
pub const NAV_BUTTON_SIZE: [f32; 2] = [120.0, 40.0];
pub const NAV_BUTTON_GAP: f32 = 10.0;

pub const ENTRY_BUTTON_SIZE: [f32; 2] = [160.0, 24.0];
pub const ENTRY_LIST_MAX_HEIGHT: f32 = 420.0;
pub const ELEMENT_CELL: f32 = 32.0;
pub const ELEMENT_CELL_GAP: f32 = 2.0;

// new panel windows cascade from here
pub const PANEL_ORIGIN: [f32; 2] = [40.0, 40.0];
pub const PANEL_CASCADE_STEP: f32 = 24.0;
pub const PANEL_CASCADE_WRAP: usize = 8;

pub const DIALOG_BODY_MAX_HEIGHT: f32 = 360.0;
