pub mod config;
pub mod slider;
pub mod video;

pub use slider::{
  GestureCoordinator, GesturePhase, Handle, RangeConstraints, RangeSlider, RangeSliderState,
  SliderDelegate, SliderEvent, SliderLayout, Track, dispatch,
};
