mod gesture;
mod state;
mod track;
mod widget;

pub use gesture::{GestureCoordinator, GesturePhase};
pub use state::{Handle, RangeConstraints, RangeSliderState, SliderLayout};
pub use track::Track;
pub use widget::RangeSlider;

/// A change notification emitted by the slider. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
  GestureBegan,
  RangeChanged { start: f64, end: f64 },
  ProgressChanged { position: f64 },
  GestureEnded,
}

/// Receiver for slider notifications.
///
/// Range and progress changes are required; the gesture lifecycle hooks
/// default to no-ops so embedders only bind what they care about.
pub trait SliderDelegate {
  fn range_changed(&mut self, start_seconds: f64, end_seconds: f64);
  fn progress_changed(&mut self, position_seconds: f64);
  fn gestures_began(&mut self) {}
  fn gestures_ended(&mut self) {}
}

/// Forwards a batch of events to a delegate.
pub fn dispatch(events: &[SliderEvent], delegate: &mut dyn SliderDelegate) {
  for event in events {
    match *event {
      SliderEvent::GestureBegan => delegate.gestures_began(),
      SliderEvent::RangeChanged { start, end } => delegate.range_changed(start, end),
      SliderEvent::ProgressChanged { position } => delegate.progress_changed(position),
      SliderEvent::GestureEnded => delegate.gestures_ended(),
    }
  }
}
