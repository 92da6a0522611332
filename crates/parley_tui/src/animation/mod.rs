//! Frame animations for loading indicators.

mod spinner;

pub use spinner::{frames, Spinner, FRAME_INTERVAL};
