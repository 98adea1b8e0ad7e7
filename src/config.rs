use std::path::PathBuf;

use dirs::home_dir;
use log::error;

use crate::slider::RangeConstraints;

fn default_min_space() -> f64 {
  1.0
}

fn default_thumbnail_count() -> usize {
  12
}

fn default_progress_draggable() -> bool {
  true
}

/// Slider configuration, merged from environment variables, the user's config
/// file and built-in defaults, in that order of precedence.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
  /// Smallest selectable window, in seconds.
  #[serde(default = "default_min_space")]
  pub min_space: f64,
  /// Largest selectable window, in seconds; 0 means unbounded.
  #[serde(default)]
  pub max_space: f64,
  /// Whether the progress indicator can be dragged directly.
  #[serde(default = "default_progress_draggable")]
  pub progress_draggable: bool,
  /// Reserved: keep the progress indicator in place during range drags.
  #[serde(default)]
  pub progress_sticky: bool,
  /// Number of thumbnail frames behind the track.
  #[serde(default = "default_thumbnail_count")]
  pub thumbnail_count: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      min_space: default_min_space(),
      max_space: 0.0,
      progress_draggable: default_progress_draggable(),
      progress_sticky: false,
      thumbnail_count: default_thumbnail_count(),
    }
  }
}

impl Config {
  #[must_use]
  pub fn new() -> Self {
    let mut config = Self::from_file().unwrap_or_else(|| {
      let config = Self::default();
      config.init_cfg_file();
      config
    });
    config.apply_env();
    config
  }

  /// The window constraints this configuration describes.
  #[must_use]
  pub fn constraints(&self) -> RangeConstraints {
    RangeConstraints {
      min_space: self.min_space,
      max_space: self.max_space,
    }
  }

  fn config_dir() -> Option<PathBuf> {
    std::env::var("TRIMLINE_CONFIG")
      .ok()
      .map(PathBuf::from)
      .or_else(|| home_dir().map(|p| p.join(".config").join("trimline")))
  }

  fn from_file() -> Option<Self> {
    let path = Self::config_dir()?.join("config.json");
    serde_json::from_str(&std::fs::read_to_string(&path).ok()?)
      .inspect_err(|e| error!("Failed to read config file: {e}"))
      .ok()
  }

  fn apply_env(&mut self) {
    if let Some(min_space) = env_f64("TRIMLINE_MIN_SPACE") {
      self.min_space = min_space;
    }
    if let Some(max_space) = env_f64("TRIMLINE_MAX_SPACE") {
      self.max_space = max_space;
    }
    if let Ok(v) = std::env::var("TRIMLINE_PROGRESS_DRAGGABLE") {
      self.progress_draggable = v != "0" && v != "false";
    }
    if let Some(count) = std::env::var("TRIMLINE_THUMBNAIL_COUNT")
      .ok()
      .and_then(|v| v.parse().ok())
    {
      self.thumbnail_count = count;
    }
  }

  fn init_cfg_file(&self) {
    let Some(dir) = Self::config_dir() else {
      return;
    };
    if !dir.exists() {
      let _ = std::fs::create_dir_all(&dir).inspect_err(|e| {
        error!("Failed to create config directory: {e}");
      });
    }
    let path = dir.join("config.json");
    if !path.exists() {
      match serde_json::to_string_pretty(self) {
        Ok(config) => {
          let _ = std::fs::write(path, config).inspect_err(|e| {
            error!("Failed to write config file: {e}");
          });
        }
        Err(e) => error!("Failed to serialize config: {e}"),
      }
    }
  }
}

fn env_f64(key: &str) -> Option<f64> {
  std::env::var(key).ok().and_then(|v| v.parse().ok())
}
