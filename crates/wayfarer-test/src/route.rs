//! Weighted-graph route-finding test fixtures.
//!
//! A [`RouteWorld`] owns a set of locations with directed, weighted
//! connections; a [`RouteState`] is one location within a borrowed world.
//! The world is deliberately cyclic, which makes it a good fixture for
//! graph-search behaviour.

use std::hash::{Hash, Hasher};

use rand::Rng;

use wayfarer_core::{Action, Heuristic, Point, Result, State, WayfarerError};

/// A directed, weighted connection between two locations.
#[derive(Debug, Clone)]
pub struct Connection {
    pub destination: usize,
    pub cost: f64,
}

/// One location in the route world.
#[derive(Debug, Clone)]
pub struct Location {
    pub point: Point<f64>,
    pub is_goal: bool,
    pub connections: Vec<Connection>,
}

/// A world of locations for the route search problem.
#[derive(Debug, Clone)]
pub struct RouteWorld {
    locations: Vec<Location>,
}

impl RouteWorld {
    /// Creates a world from explicit locations.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidArgument`] if the world is empty, a
    /// connection points outside it, or a connection cost is negative.
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        if locations.is_empty() {
            return Err(WayfarerError::InvalidArgument(
                "a route world needs at least one location".to_string(),
            ));
        }
        for location in &locations {
            for connection in &location.connections {
                if connection.destination >= locations.len() {
                    return Err(WayfarerError::InvalidArgument(format!(
                        "connection destination {} is outside the world",
                        connection.destination
                    )));
                }
                if !(connection.cost >= 0.0) {
                    return Err(WayfarerError::InvalidArgument(format!(
                        "connection cost {} is negative",
                        connection.cost
                    )));
                }
            }
        }
        Ok(Self { locations })
    }

    /// Generates a `columns` x `rows` grid world with one random location
    /// per cell, bidirectional connections between orthogonal neighbours
    /// (cost = Euclidean distance), and the last location marked as the
    /// goal.
    pub fn random_grid<R: Rng + ?Sized>(
        rng: &mut R,
        columns: usize,
        rows: usize,
        cell_size: f64,
    ) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(WayfarerError::InvalidArgument(
                "the grid needs at least one cell".to_string(),
            ));
        }

        let mut locations = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                let local = Point::random_2d(rng, cell_size, cell_size);
                let point = Point::new(vec![
                    column as f64 * cell_size + local.coordinate(0),
                    row as f64 * cell_size + local.coordinate(1),
                ])?;
                locations.push(Location {
                    point,
                    is_goal: false,
                    connections: Vec::new(),
                });
            }
        }
        locations[columns * rows - 1].is_goal = true;

        // Connect orthogonal neighbours in both directions.
        for row in 0..rows {
            for column in 0..columns {
                let here = row * columns + column;
                if column + 1 < columns {
                    Self::connect(&mut locations, here, here + 1)?;
                }
                if row + 1 < rows {
                    Self::connect(&mut locations, here, here + columns)?;
                }
            }
        }

        Ok(Self { locations })
    }

    fn connect(locations: &mut [Location], a: usize, b: usize) -> Result<()> {
        let cost = locations[a].point.euclidean_distance(&locations[b].point)?;
        locations[a].connections.push(Connection {
            destination: b,
            cost,
        });
        locations[b].connections.push(Connection {
            destination: a,
            cost,
        });
        Ok(())
    }

    /// The number of locations in the world.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the world has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The location at the given index.
    pub fn location(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// The index of the goal location, if one is marked.
    pub fn goal_index(&self) -> Option<usize> {
        self.locations.iter().position(|location| location.is_goal)
    }

    /// A state positioned at the given location.
    pub fn state_at(&self, index: usize) -> RouteState<'_> {
        RouteState {
            world: self,
            location: index,
            quality_score: None,
        }
    }
}

/// A position within a [`RouteWorld`].
#[derive(Debug, Clone)]
pub struct RouteState<'w> {
    world: &'w RouteWorld,
    location: usize,
    quality_score: Option<f64>,
}

impl<'w> RouteState<'w> {
    /// The index of the location this state represents.
    pub fn location_index(&self) -> usize {
        self.location
    }

    /// The location this state represents.
    pub fn location(&self) -> &'w Location {
        self.world.location(self.location)
    }
}

impl State for RouteState<'_> {
    fn is_goal(&self) -> bool {
        self.location().is_goal
    }

    fn available_actions(&self) -> Vec<Action<Self>> {
        self.location()
            .connections
            .iter()
            .map(|connection| {
                Action::new(
                    RouteState {
                        world: self.world,
                        location: connection.destination,
                        quality_score: None,
                    },
                    connection.cost,
                )
                .expect("world construction validates connection costs")
            })
            .collect()
    }

    fn quality_score(&self) -> Option<f64> {
        self.quality_score
    }

    fn set_quality_score(&mut self, score: f64) {
        self.quality_score = Some(score);
    }
}

// Only the location matters for equality, not the cached score.
impl PartialEq for RouteState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for RouteState<'_> {}

impl Hash for RouteState<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
    }
}

/// Judges a state by the straight-line distance from its location to the
/// goal: quality is the negated Euclidean distance, optimum 0.
#[derive(Debug, Clone)]
pub struct GlobalDistanceHeuristic {
    goal: Point<f64>,
}

impl GlobalDistanceHeuristic {
    /// Creates a heuristic aiming for the world's marked goal location.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidArgument`] if no location is marked
    /// as the goal.
    pub fn for_world(world: &RouteWorld) -> Result<Self> {
        let goal_index = world.goal_index().ok_or_else(|| {
            WayfarerError::InvalidArgument("the world has no goal location".to_string())
        })?;
        Ok(Self {
            goal: world.location(goal_index).point.clone(),
        })
    }
}

impl Heuristic<RouteState<'_>> for GlobalDistanceHeuristic {
    fn estimate(&self, state: &RouteState<'_>) -> f64 {
        let distance = state
            .location()
            .point
            .euclidean_distance(&self.goal)
            .expect("world points share dimensions");
        -distance
    }

    fn optimal_score(&self) -> f64 {
        0.0
    }
}
