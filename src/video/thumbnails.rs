use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use log::{debug, error};

/// The images painted behind the track, ordered left to right.
pub type ThumbnailStrip = Vec<RgbaImage>;

/// Produces a strip of `count` frames sampled across a video's duration.
///
/// Idempotent; when requests overlap only the latest result matters. The
/// slider state machine never touches thumbnails, they exist for rendering
/// only.
#[async_trait]
pub trait ThumbnailProvider: Send + Sync {
  async fn thumbnails(&self, source: &str, duration: f64, count: usize) -> Result<ThumbnailStrip>;
}

/// Renders shaded placeholder frames instead of decoding video, for demos and
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderThumbnailer {
  width: u32,
  height: u32,
}

impl Default for PlaceholderThumbnailer {
  fn default() -> Self {
    Self {
      width: 80,
      height: 45,
    }
  }
}

impl PlaceholderThumbnailer {
  #[must_use]
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      width: width.max(1),
      height: height.max(1),
    }
  }
}

#[async_trait]
impl ThumbnailProvider for PlaceholderThumbnailer {
  async fn thumbnails(&self, _source: &str, _duration: f64, count: usize) -> Result<ThumbnailStrip> {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let strip = (0..count)
      .map(|i| {
        // Brightness ramps along the strip so adjacent frames can be told
        // apart in the demo.
        let t = i as f32 / count.max(1) as f32;
        let base = 40.0 + 120.0 * t;
        RgbaImage::from_fn(self.width, self.height, |x, y| {
          let shade = base + 30.0 * (y as f32 / self.height as f32) - 10.0 * (x as f32 / self.width as f32);
          Rgba([shade as u8, shade as u8, (shade * 1.2).min(255.0) as u8, 255])
        })
      })
      .collect();
    Ok(strip)
  }
}

/// Single-slot background thumbnail generation.
///
/// At most one generation pass runs at a time: a request while one is in
/// flight is dropped, not queued. A completed strip lands in the result slot,
/// last writer wins, and is picked up by the UI thread via
/// [`Self::take_latest`].
pub struct ThumbnailTask {
  provider: Arc<dyn ThumbnailProvider>,
  busy: Arc<AtomicBool>,
  slot: Arc<Mutex<Option<ThumbnailStrip>>>,
}

impl ThumbnailTask {
  #[must_use]
  pub fn new(provider: Arc<dyn ThumbnailProvider>) -> Self {
    Self {
      provider,
      busy: Arc::new(AtomicBool::new(false)),
      slot: Arc::new(Mutex::new(None)),
    }
  }

  /// Starts a generation pass unless one is already running. Returns whether
  /// the pass was started.
  pub fn request(&self, source: String, duration: f64, count: usize) -> bool {
    if self
      .busy
      .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
      .is_err()
    {
      debug!("thumbnail pass already running, dropping request for {source}");
      return false;
    }
    let provider = self.provider.clone();
    let busy = self.busy.clone();
    let slot = self.slot.clone();
    tokio::spawn(async move {
      match provider.thumbnails(&source, duration, count).await {
        Ok(strip) => {
          debug!("generated {} thumbnails for {source}", strip.len());
          *slot.lock().unwrap() = Some(strip);
        }
        Err(e) => error!("thumbnail generation for {source} failed: {e}"),
      }
      busy.store(false, Ordering::SeqCst);
    });
    true
  }

  #[must_use]
  pub fn is_running(&self) -> bool {
    self.busy.load(Ordering::SeqCst)
  }

  /// Takes the most recent completed strip, if any.
  pub fn take_latest(&self) -> Option<ThumbnailStrip> {
    self.slot.lock().unwrap().take()
  }
}
