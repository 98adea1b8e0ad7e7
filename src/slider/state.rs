use super::track::Track;

/// One of the draggable parts of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
  /// Left edge of the selected range.
  Start,
  /// Right edge of the selected range.
  End,
  /// Playback position indicator.
  Progress,
  /// The middle region; drags shift the whole range.
  Range,
}

/// Limits on the selectable window, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeConstraints {
  /// Smallest allowed window. The selection never collapses below this.
  pub min_space: f64,
  /// Largest allowed window; 0 disables the cap.
  pub max_space: f64,
}

impl Default for RangeConstraints {
  fn default() -> Self {
    Self {
      min_space: 1.0,
      max_space: 0.0,
    }
  }
}

impl RangeConstraints {
  /// The max-space cap only binds when the video is longer than the cap.
  #[must_use]
  pub fn cap_active(&self, duration: f64) -> bool {
    self.max_space > 0.0 && duration > self.max_space
  }

  /// A video shorter than the minimum window cannot satisfy the constraint.
  #[must_use]
  pub fn infeasible(&self, duration: f64) -> bool {
    duration < self.min_space
  }
}

/// Pixel placement of the three handles, recomputed after every state change
/// for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
  pub start: f32,
  pub end: f32,
  pub progress: f32,
}

impl SliderLayout {
  /// Width of the draggable middle region between the two range handles.
  #[must_use]
  pub fn range_width(&self) -> f32 {
    self.end - self.start
  }
}

/// The slider's value model: three handle percentages over a [`Track`], plus
/// the window constraints.
///
/// Every operation returns an updated copy; nothing here performs I/O or
/// touches a toolkit. Invariants after any drag operation:
/// `0 <= start <= progress <= end <= 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSliderState {
  track: Track,
  constraints: RangeConstraints,
  start_pct: f32,
  end_pct: f32,
  progress_pct: f32,
}

impl Default for RangeSliderState {
  fn default() -> Self {
    Self::new(Track::default(), RangeConstraints::default())
  }
}

impl RangeSliderState {
  #[must_use]
  pub fn new(track: Track, constraints: RangeConstraints) -> Self {
    Self {
      track,
      constraints,
      start_pct: 0.0,
      end_pct: 100.0,
      progress_pct: 0.0,
    }
  }

  #[must_use]
  pub fn track(&self) -> Track {
    self.track
  }

  #[must_use]
  pub fn constraints(&self) -> RangeConstraints {
    self.constraints
  }

  #[must_use]
  pub fn start_percent(&self) -> f32 {
    self.start_pct
  }

  #[must_use]
  pub fn end_percent(&self) -> f32 {
    self.end_pct
  }

  #[must_use]
  pub fn progress_percent(&self) -> f32 {
    self.progress_pct
  }

  #[must_use]
  pub fn start_seconds(&self) -> f64 {
    self.track.seconds_from_percent(self.start_pct)
  }

  #[must_use]
  pub fn end_seconds(&self) -> f64 {
    self.track.seconds_from_percent(self.end_pct)
  }

  #[must_use]
  pub fn progress_seconds(&self) -> f64 {
    self.track.seconds_from_percent(self.progress_pct)
  }

  #[must_use]
  pub fn with_width(mut self, width: f32) -> Self {
    self.track = self.track.with_width(width);
    self
  }

  /// Updates the duration, e.g. after the video metadata probe finishes.
  /// Percentages keep their values; the seconds they map to change.
  #[must_use]
  pub fn with_duration(mut self, duration: f64) -> Self {
    self.track = self.track.with_duration(duration);
    self
  }

  #[must_use]
  pub fn with_constraints(mut self, constraints: RangeConstraints) -> Self {
    self.constraints = constraints;
    self
  }

  /// Positions the start handle from a time value.
  #[must_use]
  pub fn set_start_seconds(mut self, seconds: f64) -> Self {
    self.start_pct = self
      .track
      .percent_from_seconds(seconds)
      .clamp(0.0, self.end_pct);
    self.progress_pct = self.progress_pct.clamp(self.start_pct, self.end_pct);
    self
  }

  /// Positions the end handle from a time value.
  #[must_use]
  pub fn set_end_seconds(mut self, seconds: f64) -> Self {
    self.end_pct = self
      .track
      .percent_from_seconds(seconds)
      .clamp(self.start_pct, 100.0);
    self.progress_pct = self.progress_pct.clamp(self.start_pct, self.end_pct);
    self
  }

  /// Allowed position interval `(lo, hi)` for a handle, in pixels.
  ///
  /// For the range handles the interval encodes both window constraints: the
  /// start handle may not come closer to the end handle than `min_space` nor
  /// retreat further than `max_space` (when the cap is active), and
  /// symmetrically for the end handle.
  #[must_use]
  pub fn handle_limits(&self, handle: Handle) -> (f32, f32) {
    let min_span = self.track.position_span(self.constraints.min_space);
    let max_span = self.track.position_span(self.constraints.max_space);
    let cap = self.constraints.cap_active(self.track.duration());
    match handle {
      Handle::Start => {
        let end = self.track.position_from_percent(self.end_pct);
        let lo = if cap { end - max_span } else { 0.0 };
        (lo, end - min_span)
      }
      Handle::End => {
        let start = self.track.position_from_percent(self.start_pct);
        let hi = if cap {
          start + max_span
        } else {
          self.track.width()
        };
        (start + min_span, hi)
      }
      Handle::Progress => (
        self.track.position_from_percent(self.start_pct),
        self.track.position_from_percent(self.end_pct),
      ),
      Handle::Range => (0.0, self.track.width()),
    }
  }

  /// Clamps a raw drag position for a handle: track bounds first, then the
  /// window limits. The min-space bound is applied before the max-space bound
  /// so the cap wins when the constraints conflict.
  #[must_use]
  pub fn clamp_drag_position(&self, handle: Handle, raw: f32) -> f32 {
    if self.constraints.infeasible(self.track.duration())
      && matches!(handle, Handle::Start | Handle::End)
    {
      return match handle {
        Handle::Start => 0.0,
        _ => self.track.width(),
      };
    }
    let position = raw.clamp(0.0, self.track.width());
    let (lo, hi) = self.handle_limits(handle);
    match handle {
      Handle::Start => position.min(hi).max(lo),
      _ => position.max(lo).min(hi),
    }
  }

  /// Applies one incremental drag step to a range handle.
  ///
  /// The progress indicator rides the start handle during start drags and the
  /// end handle during end drags; see [`Self::finish_drag`] for the release
  /// behavior. [`Handle::Progress`] and [`Handle::Range`] are routed to their
  /// dedicated operations.
  #[must_use]
  pub fn drag_handle(mut self, handle: Handle, delta: f32) -> Self {
    match handle {
      Handle::Progress => return self.drag_progress(delta),
      Handle::Range => return self.drag_range(delta),
      Handle::Start | Handle::End => {}
    }
    if self.constraints.infeasible(self.track.duration()) {
      // The minimum window cannot fit; the whole clip is the only valid
      // selection.
      self.start_pct = 0.0;
      self.end_pct = 100.0;
      self.progress_pct = match handle {
        Handle::Start => 0.0,
        _ => 100.0,
      };
      return self;
    }
    if self.track.width() == 0.0 {
      return self;
    }
    let current = match handle {
      Handle::Start => self.start_pct,
      _ => self.end_pct,
    };
    let position = self.track.position_from_percent(current) + delta;
    let pct = self
      .track
      .percent_from_position(self.clamp_drag_position(handle, position));
    match handle {
      Handle::Start => self.start_pct = pct,
      _ => self.end_pct = pct,
    }
    self.progress_pct = pct;
    self
  }

  /// Ends a drag session on a handle. Releasing the end handle lands the
  /// progress indicator back on the range start.
  #[must_use]
  pub fn finish_drag(mut self, handle: Handle) -> Self {
    if handle == Handle::End {
      self.progress_pct = self.start_pct;
    }
    self
  }

  /// Shifts start, end and progress together. The delta is capped so that
  /// neither boundary leaves the track, which keeps the window width constant;
  /// the handles are never clamped independently here.
  #[must_use]
  pub fn drag_range(mut self, delta: f32) -> Self {
    if self.track.width() == 0.0 {
      return self;
    }
    let start = self.track.position_from_percent(self.start_pct);
    let end = self.track.position_from_percent(self.end_pct);
    let progress = self.track.position_from_percent(self.progress_pct);
    let lo = -start;
    let hi = self.track.width() - end;
    if hi < lo {
      return self;
    }
    let delta = delta.clamp(lo, hi);
    self.start_pct = self.track.percent_from_position(start + delta);
    self.end_pct = self.track.percent_from_position(end + delta);
    self.progress_pct = self.track.percent_from_position(progress + delta);
    self
  }

  /// Moves only the progress indicator, kept strictly inside the selected
  /// range. Start and end are never affected.
  #[must_use]
  pub fn drag_progress(mut self, delta: f32) -> Self {
    if self.track.width() == 0.0 {
      return self;
    }
    let position = self.track.position_from_percent(self.progress_pct) + delta;
    let (lo, hi) = self.handle_limits(Handle::Progress);
    self.progress_pct = self.track.percent_from_position(position.max(lo).min(hi));
    self
  }

  /// Applies an external playback-position update. Times at or past the end
  /// of the range loop the indicator back to the start handle; times before
  /// the range pin it there as well.
  #[must_use]
  pub fn advance_progress_to(mut self, seconds: f64) -> Self {
    if seconds >= self.end_seconds() {
      self.progress_pct = self.start_pct;
    } else {
      self.progress_pct = self
        .track
        .percent_from_seconds(seconds)
        .max(self.start_pct);
    }
    self
  }

  #[must_use]
  pub fn layout(&self) -> SliderLayout {
    SliderLayout {
      start: self.track.position_from_percent(self.start_pct),
      end: self.track.position_from_percent(self.end_pct),
      progress: self.track.position_from_percent(self.progress_pct),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use assert_approx_eq::assert_approx_eq;
  use rstest::rstest;

  fn state(width: f32, duration: f64, min_space: f64, max_space: f64) -> RangeSliderState {
    RangeSliderState::new(
      Track::new(width, duration),
      RangeConstraints {
        min_space,
        max_space,
      },
    )
  }

  fn assert_ordered(s: &RangeSliderState) {
    assert!(s.start_percent() >= 0.0);
    assert!(s.start_percent() <= s.progress_percent());
    assert!(s.progress_percent() <= s.end_percent());
    assert!(s.end_percent() <= 100.0);
  }

  #[test]
  fn start_drag_is_capped_by_min_space() {
    // 100 s track, 5 s minimum window: the start handle stops 5 s short of
    // the end handle.
    let s = state(1000.0, 100.0, 5.0, 0.0).drag_handle(Handle::Start, 980.0);
    assert_approx_eq!(s.start_percent(), 95.0);
    assert_approx_eq!(s.end_percent(), 100.0);
    assert!(s.end_seconds() - s.start_seconds() >= 5.0 - 1e-3);
    assert_ordered(&s);
  }

  #[test]
  fn end_drag_is_capped_by_min_space() {
    let s = state(1000.0, 100.0, 5.0, 0.0).drag_handle(Handle::End, -2000.0);
    assert_approx_eq!(s.end_percent(), 5.0);
    assert!(s.end_seconds() - s.start_seconds() >= 5.0 - 1e-3);
  }

  #[test]
  fn max_space_caps_the_window_when_active() {
    // Dragging the start handle far left may not widen the window past 20 s.
    let s = state(1000.0, 100.0, 1.0, 20.0)
      .set_start_seconds(50.0)
      .set_end_seconds(60.0)
      .drag_handle(Handle::Start, -500.0);
    assert_approx_eq!(s.start_percent(), 40.0);
    assert_approx_eq!(s.end_seconds() as f32 - s.start_seconds() as f32, 20.0, 1e-3);
  }

  #[test]
  fn max_space_is_ignored_when_video_is_shorter() {
    let s = state(1000.0, 15.0, 1.0, 20.0).drag_handle(Handle::Start, -500.0);
    assert_approx_eq!(s.start_percent(), 0.0);
  }

  #[rstest]
  #[case(Handle::Start, 300.0)]
  #[case(Handle::Start, -300.0)]
  #[case(Handle::End, 300.0)]
  #[case(Handle::End, -300.0)]
  fn infeasible_constraint_selects_whole_clip(#[case] handle: Handle, #[case] delta: f32) {
    // 10 s video with a 20 s minimum window: any range drag selects all of it.
    let s = state(1000.0, 10.0, 20.0, 0.0).drag_handle(handle, delta);
    assert_approx_eq!(s.start_percent(), 0.0);
    assert_approx_eq!(s.end_percent(), 100.0);
  }

  #[test]
  fn range_drag_preserves_window_width_at_right_edge() {
    let s = state(1000.0, 100.0, 1.0, 0.0)
      .set_start_seconds(10.0)
      .set_end_seconds(90.0)
      .drag_range(150.0);
    assert_approx_eq!(s.end_percent(), 100.0);
    assert_approx_eq!(s.start_percent(), 20.0);
    assert_approx_eq!(s.end_percent() - s.start_percent(), 80.0);
  }

  #[test]
  fn range_drag_preserves_window_width_at_left_edge() {
    let s = state(1000.0, 100.0, 1.0, 0.0)
      .set_start_seconds(10.0)
      .set_end_seconds(90.0)
      .drag_range(-500.0);
    assert_approx_eq!(s.start_percent(), 0.0);
    assert_approx_eq!(s.end_percent(), 80.0);
  }

  #[test]
  fn range_drag_moves_progress_with_the_window() {
    let s = state(1000.0, 100.0, 1.0, 0.0)
      .set_start_seconds(10.0)
      .set_end_seconds(50.0)
      .advance_progress_to(30.0)
      .drag_range(100.0);
    assert_approx_eq!(s.progress_percent(), 40.0);
    assert_ordered(&s);
  }

  #[test]
  fn progress_drag_stays_inside_the_range() {
    let s = state(1000.0, 100.0, 1.0, 0.0)
      .set_start_seconds(20.0)
      .set_end_seconds(80.0)
      .drag_progress(5000.0);
    assert_approx_eq!(s.progress_percent(), 80.0);
    assert_approx_eq!(s.start_percent(), 20.0);
    assert_approx_eq!(s.end_percent(), 80.0);

    let s = s.drag_progress(-5000.0);
    assert_approx_eq!(s.progress_percent(), 20.0);
  }

  #[test]
  fn progress_follows_end_handle_until_release() {
    let s = state(1000.0, 100.0, 1.0, 0.0).drag_handle(Handle::End, -300.0);
    assert_approx_eq!(s.progress_percent(), 70.0);

    let s = s.finish_drag(Handle::End);
    assert_approx_eq!(s.progress_percent(), s.start_percent());
  }

  #[test]
  fn progress_follows_start_handle() {
    let s = state(1000.0, 100.0, 1.0, 0.0).drag_handle(Handle::Start, 250.0);
    assert_approx_eq!(s.progress_percent(), 25.0);
    let s = s.finish_drag(Handle::Start);
    assert_approx_eq!(s.progress_percent(), 25.0);
  }

  #[test]
  fn advance_sets_progress_from_seconds() {
    let s = state(1000.0, 100.0, 1.0, 0.0).advance_progress_to(42.0);
    assert_approx_eq!(s.progress_percent(), 42.0);
  }

  #[test]
  fn advance_past_the_range_end_loops_to_start() {
    let s = state(1000.0, 100.0, 1.0, 0.0)
      .set_start_seconds(10.0)
      .set_end_seconds(60.0)
      .advance_progress_to(75.0);
    assert_approx_eq!(s.progress_percent(), 10.0);
  }

  #[test]
  fn advance_before_the_range_pins_to_start() {
    let s = state(1000.0, 100.0, 1.0, 0.0)
      .set_start_seconds(30.0)
      .advance_progress_to(5.0);
    assert_approx_eq!(s.progress_percent(), 30.0);
  }

  #[test]
  fn degenerate_geometry_never_panics() {
    let s = state(0.0, 0.0, 1.0, 0.0)
      .drag_handle(Handle::Start, 50.0)
      .drag_handle(Handle::End, -50.0)
      .drag_range(10.0)
      .drag_progress(10.0)
      .advance_progress_to(5.0);
    assert!(s.start_percent() >= 0.0);
    assert!(s.end_percent() <= 100.0);
  }

  #[test]
  fn ordering_invariant_holds_across_drag_sequences() {
    let mut s = state(1000.0, 100.0, 2.0, 30.0);
    let steps: [(Handle, f32); 8] = [
      (Handle::Start, 400.0),
      (Handle::End, -600.0),
      (Handle::Range, 300.0),
      (Handle::Progress, 120.0),
      (Handle::Start, -1000.0),
      (Handle::Range, -2000.0),
      (Handle::End, 2000.0),
      (Handle::Progress, -50.0),
    ];
    for (handle, delta) in steps {
      s = s.drag_handle(handle, delta).finish_drag(handle);
      assert_ordered(&s);
    }
  }

  #[test]
  fn layout_mirrors_percentages() {
    let s = state(500.0, 100.0, 1.0, 0.0)
      .set_start_seconds(20.0)
      .set_end_seconds(80.0);
    let layout = s.layout();
    assert_approx_eq!(layout.start, 100.0);
    assert_approx_eq!(layout.end, 400.0);
    assert_approx_eq!(layout.range_width(), 300.0);
  }
}
