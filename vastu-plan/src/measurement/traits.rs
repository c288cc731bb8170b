//! Sensor seam.

use crate::core::SamplePoint;

/// Something that can report where the device is right now.
///
/// Implemented by the AR/motion sensor layer. Returns `None` while the
/// sensor has no usable position (tracking lost, not yet initialised).
pub trait SampleSource {
    /// Current device sample, if available.
    fn current_sample(&self) -> Option<SamplePoint>;
}

impl<F> SampleSource for F
where
    F: Fn() -> Option<SamplePoint>,
{
    fn current_sample(&self) -> Option<SamplePoint> {
        self()
    }
}
