pub mod help;
pub mod home;
pub mod layout;
pub mod panels;
pub mod shortcuts;

use bevy::prelude::Resource;

pub use help::help_overlay;
pub use home::home_screen;
pub use panels::panel_windows;
pub use shortcuts::handle_shortcuts;

#[derive(Resource, Default)]
pub struct UiState {
    pub help_open: bool,
}
