use async_trait::async_trait;
use thiserror::Error;

/// Errors from a [`DurationProbe`].
#[derive(Error, Debug)]
pub enum ProbeError {
  #[error("unknown video source: {id}")]
  UnknownSource { id: String },
  #[error("no duration available for {id}")]
  DurationUnavailable { id: String },
}

/// Looks up the duration of a video source, in seconds.
///
/// Performed once when the source changes. Implementations typically wrap a
/// media framework; the slider only consumes the resulting number and keeps
/// operating with duration 0 until the probe answers.
#[async_trait]
pub trait DurationProbe: Send + Sync {
  async fn duration(&self, source: &str) -> Result<f64, ProbeError>;
}

/// A probe with a fixed answer, for demos and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe {
  seconds: f64,
}

impl FixedProbe {
  #[must_use]
  pub fn new(seconds: f64) -> Self {
    Self {
      seconds: seconds.max(0.0),
    }
  }
}

#[async_trait]
impl DurationProbe for FixedProbe {
  async fn duration(&self, _source: &str) -> Result<f64, ProbeError> {
    Ok(self.seconds)
  }
}
