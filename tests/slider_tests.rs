use trimline::{
  GestureCoordinator, GesturePhase, Handle, RangeConstraints, RangeSlider, RangeSliderState,
  SliderDelegate, SliderEvent, Track, dispatch,
};

fn state(width: f32, duration: f64, min_space: f64, max_space: f64) -> RangeSliderState {
  RangeSliderState::new(
    Track::new(width, duration),
    RangeConstraints {
      min_space,
      max_space,
    },
  )
}

/// Runs one full begin/move/end session and returns the state and every
/// emitted event.
fn drag_session(
  coordinator: &mut GestureCoordinator,
  state: RangeSliderState,
  handle: Handle,
  deltas: &[f32],
) -> (RangeSliderState, Vec<SliderEvent>) {
  let mut events = Vec::new();
  let (mut s, mut produced) = coordinator.apply(state, handle, GesturePhase::Began);
  events.append(&mut produced);
  for delta in deltas {
    let (next, mut produced) = coordinator.apply(s, handle, GesturePhase::Moved(*delta));
    events.append(&mut produced);
    s = next;
  }
  let (s, mut produced) = coordinator.apply(s, handle, GesturePhase::Ended);
  events.append(&mut produced);
  (s, events)
}

#[derive(Default)]
struct RecordingDelegate {
  ranges: Vec<(f64, f64)>,
  positions: Vec<f64>,
  began: usize,
  ended: usize,
}

impl SliderDelegate for RecordingDelegate {
  fn range_changed(&mut self, start_seconds: f64, end_seconds: f64) {
    self.ranges.push((start_seconds, end_seconds));
  }

  fn progress_changed(&mut self, position_seconds: f64) {
    self.positions.push(position_seconds);
  }

  fn gestures_began(&mut self) {
    self.began += 1;
  }

  fn gestures_ended(&mut self) {
    self.ended += 1;
  }
}

/// Binds only the required delegate methods; the lifecycle hooks stay at
/// their no-op defaults.
struct MinimalDelegate {
  last_range: Option<(f64, f64)>,
  last_position: Option<f64>,
}

impl SliderDelegate for MinimalDelegate {
  fn range_changed(&mut self, start_seconds: f64, end_seconds: f64) {
    self.last_range = Some((start_seconds, end_seconds));
  }

  fn progress_changed(&mut self, position_seconds: f64) {
    self.last_position = Some(position_seconds);
  }
}

#[test]
fn trimming_a_clip_end_to_end() {
  let mut coordinator = GestureCoordinator::new();
  let mut delegate = RecordingDelegate::default();

  // 100 s clip on a 1000 px track: trim to 20 s - 90 s in two drags.
  let s = state(1000.0, 100.0, 1.0, 0.0);
  let (s, events) = drag_session(&mut coordinator, s, Handle::Start, &[150.0, 50.0]);
  dispatch(&events, &mut delegate);
  let (s, events) = drag_session(&mut coordinator, s, Handle::End, &[-60.0, -40.0]);
  dispatch(&events, &mut delegate);

  assert!((s.start_seconds() - 20.0).abs() < 1e-3);
  assert!((s.end_seconds() - 90.0).abs() < 1e-3);
  assert_eq!(delegate.began, 2);
  assert_eq!(delegate.ended, 2);
  assert_eq!(
    delegate.ranges.last().copied(),
    Some((s.start_seconds(), s.end_seconds()))
  );
  // After the end-handle release the indicator sits back on the start handle.
  assert!((s.progress_seconds() - s.start_seconds()).abs() < 1e-3);
  assert_eq!(delegate.positions.last().copied(), Some(s.progress_seconds()));
}

#[test]
fn start_drag_is_capped_five_seconds_short_of_the_end() {
  let mut coordinator = GestureCoordinator::new();
  // A drag towards the end handle stops five seconds short of it.
  let (s, _) = drag_session(
    &mut coordinator,
    state(1000.0, 100.0, 5.0, 0.0),
    Handle::Start,
    &[960.0],
  );
  assert!((s.start_percent() - 95.0).abs() < 1e-3);
  assert!(s.end_seconds() - s.start_seconds() >= 5.0 - 1e-3);
}

#[test]
fn clip_shorter_than_min_space_selects_everything() {
  let mut coordinator = GestureCoordinator::new();
  let s = state(1000.0, 10.0, 20.0, 0.0);
  let (s, _) = drag_session(&mut coordinator, s, Handle::Start, &[400.0]);
  assert!((s.start_percent() - 0.0).abs() < 1e-3);
  assert!((s.end_percent() - 100.0).abs() < 1e-3);

  let (s, _) = drag_session(&mut coordinator, s, Handle::End, &[-400.0]);
  assert!((s.start_percent() - 0.0).abs() < 1e-3);
  assert!((s.end_percent() - 100.0).abs() < 1e-3);
}

#[test]
fn whole_range_drag_is_capped_without_shrinking_the_window() {
  let mut coordinator = GestureCoordinator::new();
  let s = state(1000.0, 100.0, 1.0, 0.0)
    .set_start_seconds(10.0)
    .set_end_seconds(90.0);
  let (s, _) = drag_session(&mut coordinator, s, Handle::Range, &[150.0]);
  assert!((s.end_percent() - 100.0).abs() < 1e-3);
  assert!((s.start_percent() - 20.0).abs() < 1e-3);
  assert!((s.end_percent() - s.start_percent() - 80.0).abs() < 1e-3);
}

#[test]
fn progress_drag_never_moves_the_range() {
  let mut coordinator = GestureCoordinator::new();
  let s = state(1000.0, 100.0, 1.0, 0.0)
    .set_start_seconds(20.0)
    .set_end_seconds(80.0);
  let (s, events) = drag_session(&mut coordinator, s, Handle::Progress, &[900.0, -100.0]);
  assert!((s.start_seconds() - 20.0).abs() < 1e-3);
  assert!((s.end_seconds() - 80.0).abs() < 1e-3);
  // Clamped inside the range on the way up, then dragged back 100 px.
  assert!((s.progress_seconds() - 70.0).abs() < 1e-3);
  assert!(
    events
      .iter()
      .all(|e| !matches!(e, SliderEvent::RangeChanged { .. }))
  );
}

#[test]
fn repeated_playback_updates_notify_once() {
  let mut coordinator = GestureCoordinator::new();
  let mut delegate = RecordingDelegate::default();
  let s = state(1000.0, 100.0, 1.0, 0.0);

  let (s, events) = coordinator.advance_progress(s, 42.0);
  dispatch(&events, &mut delegate);
  let (_, events) = coordinator.advance_progress(s, 42.0);
  dispatch(&events, &mut delegate);

  assert_eq!(delegate.positions, vec![42.0]);
}

#[test]
fn playback_past_the_selection_loops_to_its_start() {
  let mut coordinator = GestureCoordinator::new();
  let mut delegate = MinimalDelegate {
    last_range: None,
    last_position: None,
  };
  let s = state(1000.0, 100.0, 1.0, 0.0)
    .set_start_seconds(10.0)
    .set_end_seconds(60.0);

  let (s, events) = coordinator.advance_progress(s, 60.0);
  dispatch(&events, &mut delegate);

  assert!((s.progress_percent() - s.start_percent()).abs() < 1e-3);
  assert_eq!(delegate.last_position, Some(s.start_seconds()));
  // The lifecycle hooks defaulted to no-ops and the range never moved.
  assert_eq!(delegate.last_range, None);
}

#[test]
fn widget_surface_reports_external_seeks() {
  // The widget wrapper is usable without a UI context for everything except
  // drawing.
  let mut slider = RangeSlider::new(RangeConstraints::default());
  slider.set_duration(120.0);
  slider.set_range_seconds(30.0, 100.0);

  let events = slider.update_progress(45.0);
  assert_eq!(
    events,
    vec![SliderEvent::ProgressChanged { position: 45.0 }]
  );
  assert!(slider.update_progress(45.0).is_empty());

  let state = slider.state();
  assert!((state.start_seconds() - 30.0).abs() < 1e-3);
  assert!((state.end_seconds() - 100.0).abs() < 1e-3);
}
