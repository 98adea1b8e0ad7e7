use log::debug;

use super::SliderEvent;
use super::state::{Handle, RangeSliderState};

/// Lifecycle of one pointer interaction with a handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
  Began,
  /// Horizontal drag delta, in pixels, since the previous sample.
  Moved(f32),
  Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Session {
  #[default]
  Idle,
  Dragging(Handle),
}

/// Sequences gesture lifecycle events and decides which notifications fire.
///
/// Only one gesture session can be active at a time. A begin arriving while a
/// drag is in progress is ignored (multi-touch defense), as are moves and
/// ends without a matching session. Range and progress notifications are
/// suppressed when the emitted value equals the previously emitted one, so
/// sub-pixel jitter does not turn into notification storms.
#[derive(Debug)]
pub struct GestureCoordinator {
  session: Session,
  progress_draggable: bool,
  last_range: Option<(f64, f64)>,
  last_progress: Option<f64>,
}

impl Default for GestureCoordinator {
  fn default() -> Self {
    Self::new()
  }
}

impl GestureCoordinator {
  #[must_use]
  pub fn new() -> Self {
    Self {
      session: Session::Idle,
      progress_draggable: true,
      last_range: None,
      last_progress: None,
    }
  }

  /// Allows or forbids dragging the progress indicator directly.
  pub fn set_progress_draggable(&mut self, draggable: bool) {
    self.progress_draggable = draggable;
  }

  #[must_use]
  pub fn is_dragging(&self) -> bool {
    self.session != Session::Idle
  }

  #[must_use]
  pub fn active_handle(&self) -> Option<Handle> {
    match self.session {
      Session::Idle => None,
      Session::Dragging(handle) => Some(handle),
    }
  }

  /// Feeds one gesture event through the state machine and returns the
  /// updated slider state along with the notifications to deliver.
  pub fn apply(
    &mut self,
    state: RangeSliderState,
    handle: Handle,
    phase: GesturePhase,
  ) -> (RangeSliderState, Vec<SliderEvent>) {
    match phase {
      GesturePhase::Began => self.begin(state, handle),
      GesturePhase::Moved(delta) => self.moved(state, handle, delta),
      GesturePhase::Ended => self.end(state, handle),
    }
  }

  /// Applies an external playback-position update. Ignored while the user is
  /// dragging: gesture input wins over autoplay feedback.
  pub fn advance_progress(
    &mut self,
    state: RangeSliderState,
    seconds: f64,
  ) -> (RangeSliderState, Vec<SliderEvent>) {
    if self.is_dragging() {
      return (state, Vec::new());
    }
    let new_state = state.advance_progress_to(seconds);
    let mut events = Vec::new();
    self.push_progress_change(&new_state, &mut events);
    (new_state, events)
  }

  fn begin(
    &mut self,
    state: RangeSliderState,
    handle: Handle,
  ) -> (RangeSliderState, Vec<SliderEvent>) {
    if self.session != Session::Idle {
      debug!("ignoring gesture begin on {handle:?} while another drag is active");
      return (state, Vec::new());
    }
    if handle == Handle::Progress && !self.progress_draggable {
      return (state, Vec::new());
    }
    self.session = Session::Dragging(handle);
    (state, vec![SliderEvent::GestureBegan])
  }

  fn moved(
    &mut self,
    state: RangeSliderState,
    handle: Handle,
    delta: f32,
  ) -> (RangeSliderState, Vec<SliderEvent>) {
    let Session::Dragging(active) = self.session else {
      return (state, Vec::new());
    };
    if active != handle {
      debug!("ignoring move on {handle:?}; the active drag is on {active:?}");
      return (state, Vec::new());
    }
    let new_state = state.drag_handle(active, delta);
    let mut events = Vec::new();
    if matches!(active, Handle::Start | Handle::End | Handle::Range) {
      self.push_range_change(&new_state, &mut events);
    }
    self.push_progress_change(&new_state, &mut events);
    (new_state, events)
  }

  fn end(
    &mut self,
    state: RangeSliderState,
    handle: Handle,
  ) -> (RangeSliderState, Vec<SliderEvent>) {
    let Session::Dragging(active) = self.session else {
      return (state, Vec::new());
    };
    if active != handle {
      return (state, Vec::new());
    }
    self.session = Session::Idle;
    let new_state = state.finish_drag(active);
    let mut events = Vec::new();
    // Releasing the end handle snaps the indicator back to the range start.
    self.push_progress_change(&new_state, &mut events);
    events.push(SliderEvent::GestureEnded);
    (new_state, events)
  }

  fn push_range_change(&mut self, state: &RangeSliderState, events: &mut Vec<SliderEvent>) {
    let range = (state.start_seconds(), state.end_seconds());
    if self.last_range != Some(range) {
      self.last_range = Some(range);
      events.push(SliderEvent::RangeChanged {
        start: range.0,
        end: range.1,
      });
    }
  }

  fn push_progress_change(&mut self, state: &RangeSliderState, events: &mut Vec<SliderEvent>) {
    let position = state.progress_seconds();
    if self.last_progress != Some(position) {
      self.last_progress = Some(position);
      events.push(SliderEvent::ProgressChanged { position });
    }
  }
}
