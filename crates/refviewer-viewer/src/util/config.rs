use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerTheme {
    Light,
    Dark,
}

impl Default for ViewerTheme {
    fn default() -> Self {
        Self::Light
    }
}

impl ViewerTheme {
    pub fn background(self) -> [u8; 3] {
        match self {
            Self::Light => [0xf8, 0xf9, 0xfa],
            Self::Dark => [0x1b, 0x1b, 0x1b],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ViewerTheme,
    pub ui_scale: f32,
    pub dialog_width: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 700.0,
            window_height: 500.0,
            theme: ViewerTheme::Light,
            ui_scale: 1.0,
            dialog_width: 480.0,
        }
    }
}

impl ViewerConfig {
    /// Clamps values a hand-edited file could push out of a usable range.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.window_width.is_finite() || self.window_width < 200.0 {
            self.window_width = defaults.window_width;
        }
        if !self.window_height.is_finite() || self.window_height < 150.0 {
            self.window_height = defaults.window_height;
        }
        if !self.ui_scale.is_finite() {
            self.ui_scale = defaults.ui_scale;
        }
        self.ui_scale = self.ui_scale.clamp(0.5, 3.0);
        if !self.dialog_width.is_finite() {
            self.dialog_width = defaults.dialog_width;
        }
        self.dialog_width = self.dialog_width.clamp(240.0, 1200.0);
        self
    }
}

fn config_file_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "refviewer")?;
    Some(proj.config_dir().join("viewer.toml"))
}

pub fn load_or_default() -> ViewerConfig {
    let Some(path) = config_file_path() else {
        return ViewerConfig::default();
    };
    load_or_default_from_path(&path)
}

fn load_or_default_from_path(path: &Path) -> ViewerConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return ViewerConfig::default();
    };
    toml::from_str::<ViewerConfig>(&contents)
        .map(ViewerConfig::sanitized)
        .unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable viewer config");
            ViewerConfig::default()
        })
}

pub fn save(cfg: &ViewerConfig) -> anyhow::Result<()> {
    let Some(path) = config_file_path() else {
        return Err(anyhow::anyhow!("no config directory available"));
    };
    save_to_path(cfg, &path)
}

fn save_to_path(cfg: &ViewerConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let data = toml::to_string_pretty(cfg).context("failed to serialize viewer config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write viewer config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn viewer_config_roundtrip_save_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("viewer.toml");
        let cfg = ViewerConfig {
            theme: ViewerTheme::Dark,
            ui_scale: 1.25,
            ..ViewerConfig::default()
        };

        save_to_path(&cfg, &path).expect("save config");
        let loaded = load_or_default_from_path(&path);

        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let loaded = load_or_default_from_path(&dir.path().join("absent.toml"));
        assert_eq!(loaded, ViewerConfig::default());
    }

    #[test]
    fn invalid_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("viewer.toml");
        fs::write(&path, "theme = \"sepia\"\n").expect("write");
        assert_eq!(load_or_default_from_path(&path), ViewerConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("viewer.toml");
        fs::write(&path, "theme = \"dark\"\nwindow_width = 900.0\n").expect("write");

        let loaded = load_or_default_from_path(&path);
        assert_eq!(loaded.theme, ViewerTheme::Dark);
        assert_eq!(loaded.window_width, 900.0);
        assert_eq!(loaded.window_height, ViewerConfig::default().window_height);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let cfg = ViewerConfig {
            window_width: 10.0,
            ui_scale: 9.0,
            dialog_width: f32::NAN,
            ..ViewerConfig::default()
        }
        .sanitized();

        assert_eq!(cfg.window_width, 700.0);
        assert_eq!(cfg.ui_scale, 3.0);
        assert_eq!(cfg.dialog_width, 480.0);
    }
}
