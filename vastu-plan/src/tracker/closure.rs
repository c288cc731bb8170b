//! Loop-closure rules for a sequence of walls.
//!
//! Two rules are available:
//!
//! 1. **Endpoint gap** (always on): the 3D distance between the
//!    first wall's start and the last wall's end is below
//!    `closure_threshold`.
//! 2. **Path length** (opt-in): the summed wall length is at least
//!    `min_path_length` and the gap is below `connection_threshold`.
//!
//! Neither rule is evaluated with fewer than [`MIN_CLOSED_WALLS`] walls.

use super::config::TrackerConfig;
use super::wall::WallSegment;
use crate::geometry::closure_distance;

/// A triangle is the smallest closed room.
pub const MIN_CLOSED_WALLS: usize = 3;

/// Which rule closed the polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosureReason {
    /// Endpoint gap under `closure_threshold`.
    EndpointGap,
    /// Long enough path with the gap under `connection_threshold`.
    PathLength,
}

/// Outcome of evaluating the closure rules on a wall list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosureCheck {
    /// Distance between first start and last end.
    /// `f64::INFINITY` when there are no walls.
    pub gap: f64,
    /// Rule that closed the loop, if any.
    pub reason: Option<ClosureReason>,
}

impl ClosureCheck {
    /// Whether any rule closed the loop.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.reason.is_some()
    }
}

/// Evaluate the closure rules against the full wall list.
pub fn evaluate(config: &TrackerConfig, walls: &[WallSegment], path_length: f64) -> ClosureCheck {
    let gap = match (walls.first(), walls.last()) {
        (Some(first), Some(last)) => closure_distance(first.start.position, last.end.position),
        _ => f64::INFINITY,
    };

    if walls.len() < MIN_CLOSED_WALLS {
        return ClosureCheck { gap, reason: None };
    }

    let reason = if gap < config.closure_threshold {
        Some(ClosureReason::EndpointGap)
    } else {
        let rule = &config.path_length_closure;
        (rule.enabled && path_length >= rule.min_path_length && gap < rule.connection_threshold)
            .then_some(ClosureReason::PathLength)
    };

    ClosureCheck { gap, reason }
}
