//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vastu_plan::core::{Point3D, SamplePoint};
use vastu_plan::room::Room;
use vastu_plan::tracker::RoomGeometryTracker;

/// Device height while touching walls (meters).
pub const TOUCH_HEIGHT: f64 = 1.2;

/// Sample on the floor plane at (x, z), held at touch height.
pub fn sample(x: f64, z: f64) -> SamplePoint {
    SamplePoint::at(Point3D::new(x, TOUCH_HEIGHT, z))
}

/// Corners of a `width` x `depth` rectangle walked counter-clockwise,
/// ending back at the origin.
pub fn rectangle_corners(width: f64, depth: f64) -> Vec<(f64, f64)> {
    vec![
        (0.0, 0.0),
        (width, 0.0),
        (width, depth),
        (0.0, depth),
        (0.0, 0.0),
    ]
}

/// Add one wall per consecutive pair of `corners`.
pub fn walk(tracker: &mut RoomGeometryTracker, corners: &[(f64, f64)]) {
    for pair in corners.windows(2) {
        tracker
            .add_wall(
                sample(pair[0].0, pair[0].1),
                sample(pair[1].0, pair[1].1),
                Point3D::ZERO,
            )
            .expect("finite wall");
    }
}

/// Like [`walk`], but every endpoint is jittered by up to `noise` meters
/// on each horizontal axis and height. Seeded for reproducibility.
pub fn noisy_walk(tracker: &mut RoomGeometryTracker, corners: &[(f64, f64)], noise: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jitter = |x: f64, z: f64| {
        SamplePoint::at(Point3D::new(
            x + rng.gen_range(-noise..=noise),
            TOUCH_HEIGHT + rng.gen_range(-noise..=noise),
            z + rng.gen_range(-noise..=noise),
        ))
    };
    for pair in corners.windows(2) {
        let start = jitter(pair[0].0, pair[0].1);
        let end = jitter(pair[1].0, pair[1].1);
        tracker.add_wall(start, end, Point3D::ZERO).expect("finite wall");
    }
}

/// Rooms with random dimensions between 150 and 600 cm.
pub fn random_rooms(count: usize, seed: u64) -> Vec<Room> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            Room::new(
                format!("Room {}", i + 1),
                rng.gen_range(150.0..600.0),
                rng.gen_range(150.0..600.0),
            )
        })
        .collect()
}
