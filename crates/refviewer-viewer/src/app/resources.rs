use bevy::prelude::Resource;

use crate::util::config::{self, ViewerConfig, ViewerTheme};

#[derive(Resource)]
pub struct ViewerSettings {
    pub config: ViewerConfig,
}

impl ViewerSettings {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub fn set_theme(&mut self, theme: ViewerTheme) -> anyhow::Result<()> {
        self.config.theme = theme;
        config::save(&self.config)
    }
}
