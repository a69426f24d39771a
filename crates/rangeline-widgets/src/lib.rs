//! Widget implementations for Rangeline.

pub mod error;
pub mod range_slider;

pub use error::ConfigError;
pub use range_slider::{
    Animator, EasedAnimator, Handle, HandleAppearance, HandleFrames, RangeSlider,
    RangeSliderChanged, RangeSliderConfig, RangeSliderListener, RangeSnapshot, SliderStyle,
    TrackAppearance, TrackLayer, TrackSurface, ValueModel,
};
