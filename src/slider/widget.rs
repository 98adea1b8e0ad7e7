use egui::{Color32, CursorIcon, Pos2, Rect, Sense, TextureHandle, TextureOptions, Ui, Vec2};

use super::SliderEvent;
use super::gesture::{GestureCoordinator, GesturePhase};
use super::state::{Handle, RangeConstraints, RangeSliderState};
use super::track::Track;
use crate::config::Config;
use crate::video::ThumbnailStrip;

// Layout constants
const TRACK_HEIGHT: f32 = 56.0;
const HANDLE_WIDTH: f32 = 10.0;
const PROGRESS_WIDTH: f32 = 4.0;
const PROGRESS_HIT_WIDTH: f32 = 12.0;
const BORDER_HEIGHT: f32 = 3.0;

fn track_color() -> Color32 {
  Color32::from_gray(30)
}
fn dim_color() -> Color32 {
  Color32::from_rgba_unmultiplied(0, 0, 0, 150)
}
fn selection_color() -> Color32 {
  Color32::from_rgb(245, 200, 66)
}
fn handle_color() -> Color32 {
  Color32::WHITE
}
fn handle_hover_color() -> Color32 {
  Color32::from_rgb(255, 255, 150)
}
fn progress_color() -> Color32 {
  Color32::from_rgb(120, 170, 255)
}

/// The egui rendering adapter around the slider core.
///
/// Owns pixels and input plumbing only: the value decisions live in
/// [`RangeSliderState`] and [`GestureCoordinator`], so any other toolkit
/// adapter could replace this one.
pub struct RangeSlider {
  state: RangeSliderState,
  coordinator: GestureCoordinator,
  textures: Vec<TextureHandle>,
}

impl RangeSlider {
  #[must_use]
  pub fn new(constraints: RangeConstraints) -> Self {
    Self {
      state: RangeSliderState::new(Track::default(), constraints),
      coordinator: GestureCoordinator::new(),
      textures: Vec::new(),
    }
  }

  #[must_use]
  pub fn from_config(config: &Config) -> Self {
    let mut slider = Self::new(config.constraints());
    slider
      .coordinator
      .set_progress_draggable(config.progress_draggable);
    slider
  }

  #[must_use]
  pub fn state(&self) -> RangeSliderState {
    self.state
  }

  #[must_use]
  pub fn is_dragging(&self) -> bool {
    self.coordinator.is_dragging()
  }

  /// Duration update, e.g. once the metadata probe for a new source answers.
  pub fn set_duration(&mut self, seconds: f64) {
    self.state = self.state.with_duration(seconds);
  }

  pub fn set_constraints(&mut self, constraints: RangeConstraints) {
    self.state = self.state.with_constraints(constraints);
  }

  pub fn set_progress_draggable(&mut self, draggable: bool) {
    self.coordinator.set_progress_draggable(draggable);
  }

  /// Positions the selected range from time values.
  pub fn set_range_seconds(&mut self, start: f64, end: f64) {
    // Widen towards the new range first so the ordering clamps in the
    // setters cannot bite.
    self.state = if start <= self.state.start_seconds() {
      self.state.set_start_seconds(start).set_end_seconds(end)
    } else {
      self.state.set_end_seconds(end).set_start_seconds(start)
    };
  }

  /// Feeds an external playback position into the slider. Ignored while the
  /// user is dragging.
  pub fn update_progress(&mut self, seconds: f64) -> Vec<SliderEvent> {
    let (state, events) = self.coordinator.advance_progress(self.state, seconds);
    self.state = state;
    events
  }

  /// Replaces the thumbnail strip behind the track.
  pub fn set_thumbnails(&mut self, ctx: &egui::Context, strip: &ThumbnailStrip) {
    self.textures = strip
      .iter()
      .enumerate()
      .map(|(i, frame)| {
        let size = [frame.width() as usize, frame.height() as usize];
        let pixels = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
        ctx.load_texture(format!("trimline-thumb-{i}"), pixels, TextureOptions::LINEAR)
      })
      .collect();
  }

  #[must_use]
  pub fn has_thumbnails(&self) -> bool {
    !self.textures.is_empty()
  }

  /// Shows the slider across the available width and returns the events this
  /// frame produced.
  pub fn show(&mut self, ui: &mut Ui) -> Vec<SliderEvent> {
    let (rect, _) =
      ui.allocate_exact_size(Vec2::new(ui.available_width(), TRACK_HEIGHT), Sense::hover());
    self.show_in(ui, rect)
  }

  /// Shows the slider in the given rect.
  pub fn show_in(&mut self, ui: &mut Ui, rect: Rect) -> Vec<SliderEvent> {
    self.state = self.state.with_width(rect.width());
    // Interactions first, then drawing, so the handles are painted at their
    // post-drag positions.
    let events = self.handle_interactions(ui, rect);
    self.draw(ui, rect);
    events
  }

  /// Hit areas, middle region first so the handles painted on top of it also
  /// win its pointer events.
  fn hit_areas(&self, rect: Rect) -> [(Handle, Rect); 4] {
    let layout = self.state.layout();
    let start_x = rect.min.x + layout.start;
    let end_x = rect.min.x + layout.end;
    let progress_x = rect.min.x + layout.progress;
    let center_y = rect.center().y;
    let middle = Rect::from_min_max(
      Pos2::new(start_x + HANDLE_WIDTH / 2.0, rect.min.y),
      Pos2::new(end_x - HANDLE_WIDTH / 2.0, rect.max.y),
    );
    [
      (Handle::Range, middle),
      (
        Handle::Start,
        Rect::from_center_size(
          Pos2::new(start_x, center_y),
          Vec2::new(HANDLE_WIDTH, rect.height()),
        ),
      ),
      (
        Handle::End,
        Rect::from_center_size(
          Pos2::new(end_x, center_y),
          Vec2::new(HANDLE_WIDTH, rect.height()),
        ),
      ),
      (
        // Wider hit area than the visual marker.
        Handle::Progress,
        Rect::from_center_size(
          Pos2::new(progress_x, center_y),
          Vec2::new(PROGRESS_HIT_WIDTH, rect.height()),
        ),
      ),
    ]
  }

  fn handle_interactions(&mut self, ui: &Ui, rect: Rect) -> Vec<SliderEvent> {
    let mut events = Vec::new();
    for (handle, hit_rect) in self.hit_areas(rect) {
      let id = ui.id().with("trimline").with(handle);
      let response = ui.interact(hit_rect, id, Sense::drag());
      if response.drag_started() {
        self.apply(handle, GesturePhase::Began, &mut events);
      }
      if response.dragged() {
        let delta = response.drag_delta().x;
        if delta != 0.0 {
          self.apply(handle, GesturePhase::Moved(delta), &mut events);
        }
      }
      if response.drag_stopped() {
        self.apply(handle, GesturePhase::Ended, &mut events);
      }
      if response.hovered() {
        ui.ctx().set_cursor_icon(match handle {
          Handle::Range => CursorIcon::Grab,
          _ => CursorIcon::ResizeHorizontal,
        });
      }
    }
    events
  }

  fn apply(&mut self, handle: Handle, phase: GesturePhase, events: &mut Vec<SliderEvent>) {
    let (state, mut produced) = self.coordinator.apply(self.state, handle, phase);
    self.state = state;
    events.append(&mut produced);
  }

  #[allow(clippy::cast_precision_loss)]
  fn draw(&self, ui: &Ui, rect: Rect) {
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, track_color());

    if !self.textures.is_empty() {
      let slice_width = rect.width() / self.textures.len() as f32;
      for (i, texture) in self.textures.iter().enumerate() {
        let slice = Rect::from_min_size(
          Pos2::new(rect.min.x + slice_width * i as f32, rect.min.y),
          Vec2::new(slice_width, rect.height()),
        );
        painter.image(
          texture.id(),
          slice,
          Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
          Color32::WHITE,
        );
      }
    }

    let layout = self.state.layout();
    let start_x = rect.min.x + layout.start;
    let end_x = rect.min.x + layout.end;
    let progress_x = rect.min.x + layout.progress;

    // Dim the trimmed-out parts of the track.
    painter.rect_filled(
      Rect::from_min_max(rect.min, Pos2::new(start_x, rect.max.y)),
      0.0,
      dim_color(),
    );
    painter.rect_filled(
      Rect::from_min_max(Pos2::new(end_x, rect.min.y), rect.max),
      0.0,
      dim_color(),
    );

    // Top and bottom borders of the selected window.
    painter.rect_filled(
      Rect::from_min_max(
        Pos2::new(start_x, rect.min.y),
        Pos2::new(end_x, rect.min.y + BORDER_HEIGHT),
      ),
      0.0,
      selection_color(),
    );
    painter.rect_filled(
      Rect::from_min_max(
        Pos2::new(start_x, rect.max.y - BORDER_HEIGHT),
        Pos2::new(end_x, rect.max.y),
      ),
      0.0,
      selection_color(),
    );

    painter.rect_filled(
      Rect::from_center_size(
        Pos2::new(progress_x, rect.center().y),
        Vec2::new(PROGRESS_WIDTH, rect.height() - 2.0 * BORDER_HEIGHT),
      ),
      2.0,
      progress_color(),
    );

    for x in [start_x, end_x] {
      let handle_rect = Rect::from_center_size(
        Pos2::new(x, rect.center().y),
        Vec2::new(HANDLE_WIDTH, rect.height()),
      );
      let color = if ui.rect_contains_pointer(handle_rect) {
        handle_hover_color()
      } else {
        handle_color()
      };
      painter.rect_filled(handle_rect, 3.0, color);
    }
  }
}
