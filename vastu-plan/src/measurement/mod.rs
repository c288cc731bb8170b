//! Wall measurement.
//!
//! - [`WallMeasurementSession`]: two-point capture (start touch, end touch)
//! - [`RoomCapture`]: turns accepted measurements into a [`Room`](crate::room::Room)
//! - [`SteadinessDetector`]: impact and hold-still detection
//! - [`SampleSource`]: seam to the sensor layer

mod capture;
mod config;
mod error;
mod session;
mod steadiness;
mod traits;

pub use capture::{CaptureMode, RoomCapture};
pub use config::{MeasurementConfig, SteadinessConfig};
pub use error::MeasurementError;
pub use session::{CaptureState, Measurement, WallMeasurementSession};
pub use steadiness::{MotionEvent, SteadinessDetector};
pub use traits::SampleSource;
