//! Random station-set generation.
//!
//! A thin collaborator of the optimization core: it produces a finished
//! station set that [`RoutingInstance`](crate::problem::RoutingInstance)
//! then validates and owns. Externally supplied coordinates can be passed
//! straight to `RoutingInstance::new` instead.

use std::collections::HashSet;

use rand::Rng;

use crate::problem::{Coordinate, RoutingInstance};

/// Samples `count` distinct station coordinates inside the grid, skipping
/// both anchors.
///
/// Stations are returned in draw order, so a fixed generator state yields
/// a fixed station list.
///
/// # Errors
///
/// Returns an error when the grid does not have `count` free cells left
/// after the anchors are excluded.
pub fn random_stations<R: Rng + ?Sized>(
    grid_size: usize,
    count: usize,
    start: Coordinate,
    end: Coordinate,
    rng: &mut R,
) -> Result<Vec<Coordinate>, String> {
    let anchor_cells = if start == end { 1 } else { 2 };
    let available = (grid_size * grid_size).saturating_sub(anchor_cells);
    if count > available {
        return Err(format!(
            "cannot place {count} stations on a {grid_size}x{grid_size} grid ({available} free cells)"
        ));
    }

    let mut stations = Vec::with_capacity(count);
    let mut taken = HashSet::with_capacity(count);
    while stations.len() < count {
        let candidate = Coordinate::new(
            rng.random_range(0..grid_size as i32),
            rng.random_range(0..grid_size as i32),
        );
        if candidate == start || candidate == end {
            continue;
        }
        if taken.insert(candidate) {
            stations.push(candidate);
        }
    }
    Ok(stations)
}

/// Generates a station set and builds the validated instance in one step.
pub fn random_instance<R: Rng + ?Sized>(
    grid_size: usize,
    count: usize,
    start: Coordinate,
    end: Coordinate,
    rng: &mut R,
) -> Result<RoutingInstance, String> {
    let stations = random_stations(grid_size, count, start, end, rng)?;
    RoutingInstance::new(grid_size, start, end, stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_generates_requested_count() {
        let mut rng = create_rng(42);
        let stations = random_stations(
            10,
            15,
            Coordinate::new(0, 0),
            Coordinate::new(9, 9),
            &mut rng,
        )
        .expect("enough free cells");
        assert_eq!(stations.len(), 15);
    }

    #[test]
    fn test_stations_distinct_and_off_anchors() {
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(9, 9);
        let mut rng = create_rng(7);
        let stations = random_stations(10, 30, start, end, &mut rng).expect("enough free cells");

        let unique: HashSet<_> = stations.iter().copied().collect();
        assert_eq!(unique.len(), stations.len());
        assert!(!stations.contains(&start));
        assert!(!stations.contains(&end));
        for s in &stations {
            assert!(s.x >= 0 && s.x < 10 && s.y >= 0 && s.y < 10);
        }
    }

    #[test]
    fn test_rejects_overfull_grid() {
        let mut rng = create_rng(1);
        let result = random_stations(
            3,
            8,
            Coordinate::new(0, 0),
            Coordinate::new(2, 2),
            &mut rng,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_exactly_fills_grid() {
        let mut rng = create_rng(1);
        let stations = random_stations(
            3,
            7,
            Coordinate::new(0, 0),
            Coordinate::new(2, 2),
            &mut rng,
        )
        .expect("7 free cells on a 3x3 grid with two anchors");
        assert_eq!(stations.len(), 7);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(9, 9);
        let a = random_stations(10, 20, start, end, &mut create_rng(99)).unwrap();
        let b = random_stations(10, 20, start, end, &mut create_rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_instance_validates() {
        let mut rng = create_rng(5);
        let instance = random_instance(
            20,
            10,
            Coordinate::new(0, 0),
            Coordinate::new(19, 19),
            &mut rng,
        )
        .expect("valid instance");
        assert_eq!(instance.stations().len(), 10);
    }
}
