//! Grid-search minimal-overlap placement.

use std::collections::HashMap;

use log::{debug, warn};

use super::config::{Canvas, LayoutConfig};
use crate::core::{Point2D, Rect};
use crate::geometry::overlap_with;
use crate::room::{Room, RoomId};

/// Layout input: a rectangular room footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRoom {
    /// Room identifier
    pub id: RoomId,
    /// Width as drawn (cm)
    pub width: f64,
    /// Length as drawn (cm)
    pub length: f64,
    /// Existing canvas position (room center), if any
    pub position: Option<Point2D>,
}

impl LayoutRoom {
    /// Create a layout input.
    pub fn new(id: RoomId, width: f64, length: f64, position: Option<Point2D>) -> Self {
        Self {
            id,
            width,
            length,
            position,
        }
    }

    /// Physical footprint area, used to order placement.
    #[inline]
    fn area(&self) -> f64 {
        let area = self.width * self.length;
        if area.is_finite() { area } else { 0.0 }
    }
}

impl From<&Room> for LayoutRoom {
    /// Uses the rotated footprint so a quarter-turned room occupies its
    /// drawn shape.
    fn from(room: &Room) -> Self {
        let (width, length) = room.footprint();
        Self::new(room.id, width as f64, length as f64, room.position)
    }
}

/// Candidate cell centers for one layout pass.
#[derive(Clone, Debug)]
struct CandidateGrid {
    columns: usize,
    rows: usize,
    cell_width: f64,
    cell_height: f64,
}

impl CandidateGrid {
    /// Cell centers in row-major scan order.
    fn centers(&self) -> impl Iterator<Item = Point2D> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| {
                Point2D::new(
                    (col as f64 + 0.5) * self.cell_width,
                    (row as f64 + 0.5) * self.cell_height,
                )
            })
        })
    }
}

/// Places rooms lacking a position on a shared canvas.
///
/// Greedy heuristic: larger rooms first, each at the grid cell center with
/// the least overlap against everything already placed. Rooms that already
/// have a position are never moved. Residual overlap is possible when the
/// canvas is too small.
///
/// The engine holds only its configuration, so identical inputs always
/// produce identical positions.
///
/// # Example
///
/// ```rust
/// use vastu_plan::layout::{Canvas, FloorplanLayoutEngine, LayoutConfig, LayoutRoom};
/// use uuid::Uuid;
///
/// let engine = FloorplanLayoutEngine::new(LayoutConfig::default());
/// let rooms: Vec<LayoutRoom> = (0..4)
///     .map(|_| LayoutRoom::new(Uuid::new_v4(), 300.0, 300.0, None))
///     .collect();
///
/// let positions = engine.compute_positions(&rooms, Canvas::bounded(800.0, 800.0), 60.0);
/// assert_eq!(positions.len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FloorplanLayoutEngine {
    config: LayoutConfig,
}

impl FloorplanLayoutEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute a canvas position for every room.
    ///
    /// Rooms with an existing (finite) position are returned unchanged and
    /// count as occupied space for the rooms placed after them.
    ///
    /// # Arguments
    /// * `rooms` - Rooms in a stable order (ties in area keep this order)
    /// * `canvas` - Bounded area to partition, or unbounded
    /// * `min_room_size` - Floor for each rendered side (canvas units)
    pub fn compute_positions(
        &self,
        rooms: &[LayoutRoom],
        canvas: Canvas,
        min_room_size: f64,
    ) -> HashMap<RoomId, Point2D> {
        let mut positions = HashMap::with_capacity(rooms.len());
        let mut placed: Vec<Rect> = Vec::with_capacity(rooms.len());
        let mut pending: Vec<&LayoutRoom> = Vec::new();

        for room in rooms {
            match room.position {
                Some(position) if position.is_finite() => {
                    positions.insert(room.id, position);
                    placed.push(self.footprint(room, position, min_room_size));
                }
                Some(_) => {
                    warn!("Room {} has a non-finite position; re-placing it", room.id);
                    pending.push(room);
                }
                None => pending.push(room),
            }
        }

        if pending.is_empty() {
            return positions;
        }

        // Stable sort: equal areas keep input order
        pending.sort_by(|a, b| b.area().total_cmp(&a.area()));

        let grid = self.candidate_grid(rooms, canvas, min_room_size);
        debug!(
            "Placing {} of {} rooms on a {}x{} grid",
            pending.len(),
            rooms.len(),
            grid.columns,
            grid.rows
        );

        for room in pending {
            let (width, height) = self.scaled_size(room, min_room_size);

            let mut best: Option<(Point2D, f64)> = None;
            for center in grid.centers() {
                let rect = Rect::centered(center, width, height);
                let overlap = overlap_with(&rect, &placed);
                if best.is_none_or(|(_, best_overlap)| overlap < best_overlap) {
                    best = Some((center, overlap));
                    if overlap == 0.0 {
                        // Nothing later in scan order can beat the first zero
                        break;
                    }
                }
            }

            // The grid always has at least one cell
            let (center, overlap) = best.unwrap_or((Point2D::ZERO, 0.0));
            if overlap > 0.0 {
                debug!("Room {} placed with residual overlap {:.1}", room.id, overlap);
            }
            positions.insert(room.id, center);
            placed.push(Rect::centered(center, width, height));
        }

        positions
    }

    /// Rendered (width, height) of a room: scaled, each side floored at
    /// `min_room_size`.
    pub fn scaled_size(&self, room: &LayoutRoom, min_room_size: f64) -> (f64, f64) {
        let floor = if min_room_size.is_finite() {
            min_room_size.max(0.0)
        } else {
            0.0
        };
        let side = |cm: f64| {
            let scaled = cm * self.config.scale;
            if scaled.is_finite() {
                scaled.max(floor)
            } else {
                floor
            }
        };
        (side(room.width), side(room.length))
    }

    /// Rendered rectangle of a room centered at `center`.
    pub fn footprint(&self, room: &LayoutRoom, center: Point2D, min_room_size: f64) -> Rect {
        let (width, height) = self.scaled_size(room, min_room_size);
        Rect::centered(center, width, height)
    }

    fn candidate_grid(
        &self,
        rooms: &[LayoutRoom],
        canvas: Canvas,
        min_room_size: f64,
    ) -> CandidateGrid {
        let (columns, rows) = self.config.grid_scheme().dimensions(rooms.len());

        let bounded = match canvas {
            Canvas::Bounded(size)
                if size.width.is_finite()
                    && size.height.is_finite()
                    && size.width > 0.0
                    && size.height > 0.0 =>
            {
                Some(size)
            }
            Canvas::Bounded(size) => {
                warn!("Unusable canvas size {:?}; laying out unbounded", size);
                None
            }
            Canvas::Unbounded => None,
        };

        let (cell_width, cell_height) = match bounded {
            Some(size) => (size.width / columns as f64, size.height / rows as f64),
            None => {
                let (max_w, max_h) = rooms
                    .iter()
                    .map(|room| self.scaled_size(room, min_room_size))
                    .fold((0.0_f64, 0.0_f64), |(mw, mh), (w, h)| (mw.max(w), mh.max(h)));
                let spacing = self.config.cell_spacing;
                (max_w + spacing, max_h + spacing)
            }
        };

        CandidateGrid {
            columns,
            rows,
            cell_width,
            cell_height,
        }
    }
}
