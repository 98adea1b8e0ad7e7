use std::sync::Arc;

use trimline::config::Config;
use trimline::slider::{RangeConstraints, RangeSlider, SliderEvent};
use trimline::video::{PlaceholderThumbnailer, ThumbnailTask};

/// Cap offered by the demo checkbox when the config does not set one.
const DEMO_MAX_SPACE: f64 = 15.0;

/// Demo host screen: a simulated player around the trim slider.
///
/// Stands in for the embedding player UI; seeks are applied to a local
/// playhead instead of a real decoder.
pub struct TrimApp {
  slider: RangeSlider,
  thumbnails: ThumbnailTask,
  source: String,
  constraints: RangeConstraints,
  /// The max-space value the cap checkbox toggles on and off.
  cap: f64,
  playing: bool,
  playhead: f64,
  status: String,
}

impl TrimApp {
  #[must_use]
  pub fn new(config: &Config, source: String, duration: f64) -> Self {
    let mut slider = RangeSlider::from_config(config);
    slider.set_duration(duration);

    let thumbnails = ThumbnailTask::new(Arc::new(PlaceholderThumbnailer::default()));
    thumbnails.request(source.clone(), duration, config.thumbnail_count);

    let constraints = config.constraints();
    let cap = if constraints.max_space > 0.0 {
      constraints.max_space
    } else {
      DEMO_MAX_SPACE
    };

    Self {
      slider,
      thumbnails,
      source,
      constraints,
      cap,
      playing: false,
      playhead: 0.0,
      status: String::new(),
    }
  }
}

impl eframe::App for TrimApp {
  fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
    if let Some(strip) = self.thumbnails.take_latest() {
      self.slider.set_thumbnails(ctx, &strip);
    }

    let mut events = Vec::new();
    let state = self.slider.state();

    if self.playing {
      self.playhead += f64::from(ctx.input(|i| i.stable_dt));
      if self.playhead >= state.end_seconds() {
        // Pause at the end of the selection, like the real player screen.
        self.playing = false;
        self.playhead = state.end_seconds();
      }
      ctx.request_repaint();
    }
    events.extend(self.slider.update_progress(self.playhead));

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
      ui.horizontal(|ui| {
        let label = if self.playing { "Pause" } else { "Play" };
        if ui.button(label).clicked() {
          self.playing = !self.playing;
          if self.playing && self.playhead >= state.end_seconds() {
            self.playhead = state.start_seconds();
          }
        }
        let mut capped = self.constraints.max_space > 0.0;
        if ui
          .checkbox(&mut capped, format!("Cap selection at {:.0} s", self.cap))
          .changed()
        {
          self.constraints.max_space = if capped { self.cap } else { 0.0 };
          self.slider.set_constraints(self.constraints);
        }
        ui.label(format!(
          "{} | {:.1} s - {:.1} s | playhead {:.1} s",
          self.source,
          state.start_seconds(),
          state.end_seconds(),
          self.playhead
        ));
      });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
      ui.add_space(12.0);
      events.extend(self.slider.show(ui));
      if !self.slider.has_thumbnails() {
        ui.add_space(8.0);
        ui.label("Generating thumbnails...");
      }
      if !self.status.is_empty() {
        ui.add_space(8.0);
        ui.label(&self.status);
      }
    });

    for event in events {
      match event {
        SliderEvent::RangeChanged { start, end } => {
          // A real embedder would seek the player here.
          self.playhead = self.playhead.clamp(start, end);
          self.status = format!("range {start:.2} s - {end:.2} s");
        }
        SliderEvent::ProgressChanged { position } => {
          self.playhead = position;
          self.status = format!("seek to {position:.2} s");
        }
        SliderEvent::GestureBegan => self.playing = false,
        SliderEvent::GestureEnded => {}
      }
    }
  }
}
