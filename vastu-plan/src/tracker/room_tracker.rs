//! RoomGeometryTracker implementation.

use log::{debug, info, warn};

use super::closure::{self, ClosureReason};
use super::config::TrackerConfig;
use super::error::TrackerError;
use super::wall::WallSegment;
use crate::core::{Point2D, Point3D, Rect, SamplePoint, Size2D};
use crate::geometry::{segment_length, shoelace_area};
use crate::room::Room;

/// Accumulates wall segments from a scanning session into a room polygon.
///
/// Every derived value (area, perimeter, closure, extents) is recomputed
/// from the full wall list after each change, never patched incrementally.
///
/// # Example
///
/// ```rust
/// use vastu_plan::core::{Point3D, SamplePoint};
/// use vastu_plan::tracker::{RoomGeometryTracker, TrackerConfig};
///
/// let mut tracker = RoomGeometryTracker::new(TrackerConfig::default());
/// let corners = [(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 4.0), (0.0, 0.0)];
/// for pair in corners.windows(2) {
///     let (x0, z0) = pair[0];
///     let (x1, z1) = pair[1];
///     tracker
///         .add_wall(
///             SamplePoint::at(Point3D::new(x0, 1.0, z0)),
///             SamplePoint::at(Point3D::new(x1, 1.0, z1)),
///             Point3D::ZERO,
///         )
///         .unwrap();
/// }
/// assert!(tracker.is_closed());
/// assert_eq!(tracker.perimeter(), 14.0);
/// assert_eq!(tracker.area(), 12.0);
/// ```
#[derive(Clone, Debug)]
pub struct RoomGeometryTracker {
    config: TrackerConfig,
    walls: Vec<WallSegment>,
    area: f64,
    perimeter: f64,
    ring_perimeter: f64,
    average_height: f64,
    extent: Rect,
    closing_gap: f64,
    closed: bool,
    closure_reason: Option<ClosureReason>,
}

impl RoomGeometryTracker {
    /// Create an empty tracker.
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            walls: Vec::new(),
            area: 0.0,
            perimeter: 0.0,
            ring_perimeter: 0.0,
            average_height: 0.0,
            extent: Rect::empty(),
            closing_gap: f64::INFINITY,
            closed: false,
            closure_reason: None,
        }
    }

    /// Tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Clear all walls and derived values. Idempotent.
    pub fn reset(&mut self) {
        self.walls.clear();
        self.closed = false;
        self.closure_reason = None;
        self.recompute(false);
    }

    /// Append a wall and recompute every derived value.
    ///
    /// Zero-length walls are accepted; callers that care should enforce a
    /// minimum length first (see
    /// [`WallMeasurementSession`](crate::measurement::WallMeasurementSession)).
    ///
    /// # Errors
    /// [`TrackerError::InvalidInput`] if a position or the normal has a
    /// non-finite coordinate. The wall list is left unchanged.
    pub fn add_wall(
        &mut self,
        start: SamplePoint,
        end: SamplePoint,
        normal: Point3D,
    ) -> Result<(), TrackerError> {
        if !start.position.is_finite() || !end.position.is_finite() || !normal.is_finite() {
            warn!("Rejecting wall with non-finite coordinates");
            return Err(TrackerError::InvalidInput(format!(
                "non-finite wall: start={:?} end={:?} normal={:?}",
                start.position, end.position, normal
            )));
        }

        let wall = WallSegment::new(start, end, normal);
        debug!(
            "Wall {} added: length={:.3}",
            self.walls.len() + 1,
            wall.length()
        );
        self.walls.push(wall);

        let was_closed = self.closed;
        self.recompute(self.config.sticky_closure);
        if self.closed && !was_closed {
            info!(
                "Room closed after {} walls: area={:.2}, perimeter={:.2}, gap={:.3}",
                self.walls.len(),
                self.area,
                self.perimeter,
                self.closing_gap
            );
        }
        Ok(())
    }

    /// Remove the most recent wall.
    ///
    /// Closure is re-derived from the remaining walls, ignoring the sticky
    /// latch. Returns the removed wall.
    pub fn undo_last_wall(&mut self) -> Option<WallSegment> {
        let removed = self.walls.pop()?;
        self.closed = false;
        self.closure_reason = None;
        self.recompute(false);
        debug!("Wall removed, {} remain", self.walls.len());
        Some(removed)
    }

    fn recompute(&mut self, keep_latch: bool) {
        let vertices = self.vertices();
        self.area = shoelace_area(&vertices);
        self.perimeter = self.walls.iter().map(WallSegment::length).sum();

        self.ring_perimeter = match (self.walls.first(), self.walls.last()) {
            (Some(first), Some(last)) => {
                self.perimeter + segment_length(last.end.position, first.start.position)
            }
            _ => 0.0,
        };

        let endpoint_count = self.walls.len() * 2;
        self.average_height = if endpoint_count == 0 {
            0.0
        } else {
            let sum: f64 = self
                .walls
                .iter()
                .map(|w| w.start.position.y + w.end.position.y)
                .sum();
            sum / endpoint_count as f64
        };

        let mut extent = Rect::empty();
        for wall in &self.walls {
            extent.expand_to_include(wall.start_2d());
            extent.expand_to_include(wall.end_2d());
        }
        self.extent = extent;

        let check = closure::evaluate(&self.config, &self.walls, self.perimeter);
        self.closing_gap = check.gap;
        if keep_latch && self.closed {
            return;
        }
        self.closed = check.is_closed();
        self.closure_reason = check.reason;
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Polygon area (shoelace over the projected vertices).
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Sum of recorded wall lengths. No implicit closing edge.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Perimeter including the closing edge from the last end back to the
    /// first start.
    #[inline]
    pub fn ring_perimeter(&self) -> f64 {
        self.ring_perimeter
    }

    /// Whether the walls form a closed loop.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Rule that closed the loop, if closed.
    #[inline]
    pub fn closure_reason(&self) -> Option<ClosureReason> {
        self.closure_reason
    }

    /// Distance between the first start and the last end; the closing
    /// edge counted by [`ring_perimeter`](Self::ring_perimeter).
    /// Infinite when there are no walls.
    #[inline]
    pub fn closing_gap(&self) -> f64 {
        self.closing_gap
    }

    /// Number of walls recorded.
    #[inline]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Recorded walls in capture order.
    #[inline]
    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    /// Mean height (y) of all wall endpoints.
    #[inline]
    pub fn average_height(&self) -> f64 {
        self.average_height
    }

    /// Horizontal extent of every wall endpoint.
    #[inline]
    pub fn extent(&self) -> Rect {
        self.extent
    }

    /// Bounding dimensions on the floor plane: `width` along x, `height`
    /// along z.
    #[inline]
    pub fn bounding_dimensions(&self) -> Size2D {
        self.extent.size()
    }

    /// Polygon vertices on the floor plane: the first wall's start followed
    /// by every wall's end.
    pub fn vertices(&self) -> Vec<Point2D> {
        let Some(first) = self.walls.first() else {
            return Vec::new();
        };
        std::iter::once(first.start_2d())
            .chain(self.walls.iter().map(WallSegment::end_2d))
            .collect()
    }

    /// Build a room record from the bounding dimensions, converted to
    /// centimeters.
    pub fn to_room(&self, name: impl Into<String>) -> Room {
        let dims = self.bounding_dimensions();
        let scale = self.config.cm_per_unit;
        Room::new(
            name,
            (dims.width * scale) as f32,
            (dims.height * scale) as f32,
        )
    }
}

impl Default for RoomGeometryTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
