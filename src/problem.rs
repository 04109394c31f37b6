//! Problem instance and shared cost model.
//!
//! A [`RoutingInstance`] is built once per problem and shared read-only
//! across all optimizer runs. The cost model is the Manhattan distance of
//! the full walk start → stations (in visiting order) → end.

use std::collections::HashSet;

/// Total travel distance of a route. Manhattan distances between integer
/// coordinates are integral, so distances are exact `u64` values.
pub type Distance = u64;

/// A grid cell, identified by integer column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to another coordinate.
    pub fn manhattan(&self, other: &Coordinate) -> Distance {
        Distance::from(self.x.abs_diff(other.x)) + Distance::from(self.y.abs_diff(other.y))
    }
}

/// A visiting order over the station set: every station exactly once,
/// anchors excluded.
pub type Route = Vec<Coordinate>;

/// A single-vehicle routing instance on a square grid.
///
/// Constructed once and read-only for the duration of all optimizer runs.
/// Construction validates the instance invariants: all coordinates inside
/// the grid, stations pairwise distinct and disjoint from both anchors,
/// and at least one route of nonzero cost (see [`RoutingInstance::new`]).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingInstance {
    grid_size: usize,
    start: Coordinate,
    end: Coordinate,
    stations: Vec<Coordinate>,
}

impl RoutingInstance {
    /// Creates a validated instance.
    ///
    /// # Errors
    ///
    /// Returns an error when the grid size is zero, any coordinate lies
    /// outside `[0, grid_size)²`, a station repeats or coincides with an
    /// anchor, or the station set is empty while `start == end`. The last
    /// shape is the only one whose routes can cost 0, which would make the
    /// ant colony pheromone deposit (`1 / cost`) divide by zero.
    pub fn new(
        grid_size: usize,
        start: Coordinate,
        end: Coordinate,
        stations: Vec<Coordinate>,
    ) -> Result<Self, String> {
        if grid_size == 0 {
            return Err("grid_size must be positive".into());
        }
        let in_bounds = |c: &Coordinate| {
            c.x >= 0 && c.y >= 0 && (c.x as usize) < grid_size && (c.y as usize) < grid_size
        };
        if !in_bounds(&start) || !in_bounds(&end) {
            return Err(format!(
                "anchors must lie inside the {grid_size}x{grid_size} grid"
            ));
        }

        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !in_bounds(station) {
                return Err(format!(
                    "station ({}, {}) outside the {grid_size}x{grid_size} grid",
                    station.x, station.y
                ));
            }
            if *station == start || *station == end {
                return Err(format!(
                    "station ({}, {}) coincides with an anchor",
                    station.x, station.y
                ));
            }
            if !seen.insert(*station) {
                return Err(format!("duplicate station ({}, {})", station.x, station.y));
            }
        }

        if stations.is_empty() && start == end {
            return Err("degenerate instance: empty station set with coincident anchors".into());
        }

        Ok(Self {
            grid_size,
            start,
            end,
            stations,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn stations(&self) -> &[Coordinate] {
        &self.stations
    }

    /// Total Manhattan distance of the walk
    /// start → `route[0]` → … → `route[n-1]` → end.
    ///
    /// Pure; defined for any route length. The empty route costs the
    /// anchor-to-anchor distance.
    pub fn route_cost(&self, route: &[Coordinate]) -> Distance {
        let mut distance = 0;
        let mut at = self.start;
        for station in route {
            distance += at.manhattan(station);
            at = *station;
        }
        distance + at.manhattan(&self.end)
    }

    /// Row-major index of a cell, for the ACO pheromone grid.
    pub(crate) fn cell_index(&self, c: Coordinate) -> usize {
        c.x as usize * self.grid_size + c.y as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn four_corner_instance() -> RoutingInstance {
        RoutingInstance::new(
            10,
            Coordinate::new(0, 0),
            Coordinate::new(9, 9),
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(1, 8),
                Coordinate::new(8, 1),
                Coordinate::new(8, 8),
            ],
        )
        .expect("valid instance")
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, 4);
        assert_eq!(a.manhattan(&b), 7);
        assert_eq!(b.manhattan(&a), 7);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn test_route_cost_concrete() {
        let instance = four_corner_instance();
        // (0,0) -> (1,1) -> (1,8) -> (8,8) -> (8,1) -> (9,9)
        let route = vec![
            Coordinate::new(1, 1),
            Coordinate::new(1, 8),
            Coordinate::new(8, 8),
            Coordinate::new(8, 1),
        ];
        assert_eq!(instance.route_cost(&route), 2 + 7 + 7 + 7 + 9);
    }

    #[test]
    fn test_empty_route_costs_anchor_to_anchor() {
        let instance = RoutingInstance::new(
            10,
            Coordinate::new(0, 0),
            Coordinate::new(9, 9),
            vec![],
        )
        .expect("valid instance");
        assert_eq!(instance.route_cost(&[]), 18);
    }

    #[test]
    fn test_single_station_route() {
        let instance = RoutingInstance::new(
            10,
            Coordinate::new(0, 0),
            Coordinate::new(9, 9),
            vec![Coordinate::new(5, 5)],
        )
        .expect("valid instance");
        assert_eq!(instance.route_cost(&[Coordinate::new(5, 5)]), 10 + 8);
    }

    #[test]
    fn test_new_rejects_zero_grid() {
        let result =
            RoutingInstance::new(0, Coordinate::new(0, 0), Coordinate::new(0, 0), vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_out_of_bounds_station() {
        let result = RoutingInstance::new(
            10,
            Coordinate::new(0, 0),
            Coordinate::new(9, 9),
            vec![Coordinate::new(10, 3)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_station() {
        let result = RoutingInstance::new(
            10,
            Coordinate::new(0, 0),
            Coordinate::new(9, 9),
            vec![Coordinate::new(2, 2), Coordinate::new(2, 2)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_station_on_anchor() {
        let result = RoutingInstance::new(
            10,
            Coordinate::new(0, 0),
            Coordinate::new(9, 9),
            vec![Coordinate::new(9, 9)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_zero_cost_shape() {
        // Empty station set + coincident anchors is the only shape whose
        // routes cost 0; it must be rejected up front.
        let result =
            RoutingInstance::new(10, Coordinate::new(4, 4), Coordinate::new(4, 4), vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_coincident_anchors_ok_with_stations() {
        let instance = RoutingInstance::new(
            10,
            Coordinate::new(4, 4),
            Coordinate::new(4, 4),
            vec![Coordinate::new(7, 7)],
        )
        .expect("valid instance");
        assert_eq!(instance.route_cost(&[Coordinate::new(7, 7)]), 12);
    }

    fn coord_strategy(grid: i32) -> impl Strategy<Value = Coordinate> {
        (0..grid, 0..grid).prop_map(|(x, y)| Coordinate::new(x, y))
    }

    proptest! {
        #[test]
        fn prop_cost_at_least_anchor_distance(
            start in coord_strategy(50),
            end in coord_strategy(50),
            route in proptest::collection::vec(coord_strategy(50), 0..12),
        ) {
            let instance = RoutingInstance {
                grid_size: 50,
                start,
                end,
                stations: vec![],
            };
            // Manhattan triangle inequality: any detour through the route
            // is at least as long as going straight.
            prop_assert!(instance.route_cost(&route) >= start.manhattan(&end));
        }

        #[test]
        fn prop_cost_symmetric_under_reversal(
            start in coord_strategy(50),
            end in coord_strategy(50),
            route in proptest::collection::vec(coord_strategy(50), 0..12),
        ) {
            let forward = RoutingInstance {
                grid_size: 50,
                start,
                end,
                stations: vec![],
            };
            let backward = RoutingInstance {
                grid_size: 50,
                start: end,
                end: start,
                stations: vec![],
            };
            let mut reversed = route.clone();
            reversed.reverse();
            prop_assert_eq!(forward.route_cost(&route), backward.route_cost(&reversed));
        }
    }
}
