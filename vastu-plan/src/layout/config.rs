//! Configuration for the floor-plan layout engine.

use serde::{Deserialize, Serialize};

use crate::core::Size2D;

/// How the canvas is partitioned into candidate cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridScheme {
    /// `N x N` cells with `N = ceil(sqrt(room_count))`.
    Square,
    /// Fixed column count, `ceil(room_count / columns)` rows.
    /// Produces left-aligned layouts.
    Columns(usize),
}

impl GridScheme {
    /// (columns, rows) for the given total room count.
    ///
    /// Always at least 1x1.
    pub fn dimensions(self, room_count: usize) -> (usize, usize) {
        let count = room_count.max(1);
        match self {
            GridScheme::Square => {
                let n = (count as f64).sqrt().ceil() as usize;
                (n.max(1), n.max(1))
            }
            GridScheme::Columns(columns) => {
                let columns = columns.max(1);
                (columns, count.div_ceil(columns))
            }
        }
    }
}

/// Canvas the rooms are laid out on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Canvas {
    /// Fixed area starting at the origin; cells divide it evenly.
    Bounded(Size2D),
    /// Grows as needed; cells are sized to fit the largest room.
    Unbounded,
}

impl Canvas {
    /// Bounded canvas of the given size.
    pub fn bounded(width: f64, height: f64) -> Self {
        Canvas::Bounded(Size2D::new(width, height))
    }
}

/// Configuration for [`FloorplanLayoutEngine`](super::FloorplanLayoutEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Canvas units per centimeter of room dimension.
    /// Default: 0.5
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Fixed column count for left-aligned layouts; square grid when unset.
    /// Default: None
    #[serde(default)]
    pub columns: Option<usize>,

    /// Gap added around the largest room when sizing cells on an
    /// unbounded canvas (canvas units).
    /// Default: 20.0
    #[serde(default = "default_cell_spacing")]
    pub cell_spacing: f64,

    /// Smallest rendered room side (canvas units).
    /// Default: 60.0
    #[serde(default = "default_min_room_size")]
    pub min_room_size: f64,
}

fn default_scale() -> f64 {
    0.5
}

fn default_cell_spacing() -> f64 {
    20.0
}

fn default_min_room_size() -> f64 {
    60.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 0.5,
            columns: None,
            cell_spacing: 20.0,
            min_room_size: 60.0,
        }
    }
}

impl LayoutConfig {
    /// Left-aligned layout with a fixed column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Builder-style setter for the scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Grid partitioning scheme.
    pub fn grid_scheme(&self) -> GridScheme {
        match self.columns {
            Some(columns) => GridScheme::Columns(columns),
            None => GridScheme::Square,
        }
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(format!("scale must be positive, got {}", self.scale));
        }
        if !(self.cell_spacing.is_finite() && self.cell_spacing >= 0.0) {
            return Err(format!(
                "cell_spacing must be non-negative, got {}",
                self.cell_spacing
            ));
        }
        if !(self.min_room_size.is_finite() && self.min_room_size >= 0.0) {
            return Err(format!(
                "min_room_size must be non-negative, got {}",
                self.min_room_size
            ));
        }
        if self.columns == Some(0) {
            return Err("columns must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_dimensions() {
        assert_eq!(GridScheme::Square.dimensions(0), (1, 1));
        assert_eq!(GridScheme::Square.dimensions(1), (1, 1));
        assert_eq!(GridScheme::Square.dimensions(4), (2, 2));
        assert_eq!(GridScheme::Square.dimensions(5), (3, 3));
        assert_eq!(GridScheme::Square.dimensions(9), (3, 3));
        assert_eq!(GridScheme::Square.dimensions(10), (4, 4));
    }

    #[test]
    fn test_column_dimensions() {
        assert_eq!(GridScheme::Columns(2).dimensions(5), (2, 3));
        assert_eq!(GridScheme::Columns(3).dimensions(3), (3, 1));
        assert_eq!(GridScheme::Columns(0).dimensions(2), (1, 2));
    }

    #[test]
    fn test_grid_scheme_from_config() {
        assert_eq!(LayoutConfig::default().grid_scheme(), GridScheme::Square);
        assert_eq!(
            LayoutConfig::default().with_columns(2).grid_scheme(),
            GridScheme::Columns(2)
        );
    }

    #[test]
    fn test_validate() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert!(LayoutConfig::default().with_scale(0.0).validate().is_err());
        assert!(LayoutConfig::default().with_columns(0).validate().is_err());
    }
}
