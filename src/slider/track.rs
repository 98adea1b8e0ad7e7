/// The 1-D coordinate space of the slider: a pixel width spanning the full
/// video duration.
///
/// All conversions are linear and, for a non-degenerate track, invertible.
/// Degenerate geometry (zero width or zero duration) converts to 0 instead of
/// producing NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
  width: f32,
  duration: f64,
}

impl Track {
  #[must_use]
  pub fn new(width: f32, duration: f64) -> Self {
    Self {
      width: width.max(0.0),
      duration: duration.max(0.0),
    }
  }

  #[must_use]
  pub fn width(&self) -> f32 {
    self.width
  }

  #[must_use]
  pub fn duration(&self) -> f64 {
    self.duration
  }

  #[must_use]
  pub fn with_width(self, width: f32) -> Self {
    Self::new(width, self.duration)
  }

  #[must_use]
  pub fn with_duration(self, duration: f64) -> Self {
    Self::new(self.width, duration)
  }

  /// Pixel position of a percentage value.
  #[must_use]
  pub fn position_from_percent(&self, pct: f32) -> f32 {
    pct * self.width / 100.0
  }

  /// Percentage value of a pixel position. Returns 0 on a zero-width track.
  #[must_use]
  pub fn percent_from_position(&self, position: f32) -> f32 {
    if self.width == 0.0 {
      return 0.0;
    }
    position * 100.0 / self.width
  }

  /// Seconds represented by a percentage value.
  #[must_use]
  pub fn seconds_from_percent(&self, pct: f32) -> f64 {
    self.duration * f64::from(pct) / 100.0
  }

  /// Percentage value of a time. Returns 0 on a zero-duration track.
  #[allow(clippy::cast_possible_truncation)]
  #[must_use]
  pub fn percent_from_seconds(&self, seconds: f64) -> f32 {
    if self.duration == 0.0 {
      return 0.0;
    }
    (seconds * 100.0 / self.duration) as f32
  }

  /// Pixels spanned by a time interval of the given length.
  #[must_use]
  pub fn position_span(&self, seconds: f64) -> f32 {
    self.position_from_percent(self.percent_from_seconds(seconds))
  }
}
