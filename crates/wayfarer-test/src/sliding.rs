//! Sliding-tile puzzle test fixtures.
//!
//! Tiles are stored in a flat row-major vector; tile 0 is the blank. The
//! solved configuration has tile `i` at index `i`, with the blank in the top
//! left corner.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

use wayfarer_core::{Action, Heuristic, Point, Result, State, WayfarerError};

/// The four directions a tile can be slid into the blank.
///
/// The direction names the relative position of the tile being slid, seen
/// from the blank: `SlideMove::Left` slides the tile left of the blank into
/// the blank (moving the blank left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideMove {
    Left,
    Right,
    Up,
    Down,
}

impl SlideMove {
    /// All four moves, in a fixed order.
    pub const ALL: [SlideMove; 4] = [
        SlideMove::Left,
        SlideMove::Right,
        SlideMove::Up,
        SlideMove::Down,
    ];

    fn offset(self) -> (isize, isize) {
        match self {
            SlideMove::Left => (-1, 0),
            SlideMove::Right => (1, 0),
            SlideMove::Up => (0, -1),
            SlideMove::Down => (0, 1),
        }
    }

    fn inverse(self) -> SlideMove {
        match self {
            SlideMove::Left => SlideMove::Right,
            SlideMove::Right => SlideMove::Left,
            SlideMove::Up => SlideMove::Down,
            SlideMove::Down => SlideMove::Up,
        }
    }
}

/// A single configuration of the sliding puzzle.
#[derive(Debug, Clone)]
pub struct SlidingState {
    tiles: Vec<usize>,
    width: usize,
    height: usize,
    blank: usize,
    quality_score: Option<f64>,
}

impl SlidingState {
    /// Creates the solved configuration with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidArgument`] if the board would hold
    /// fewer than two tiles.
    pub fn solved(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width * height < 2 {
            return Err(WayfarerError::InvalidArgument(format!(
                "a {width}x{height} puzzle has no sliding moves"
            )));
        }
        Ok(Self {
            tiles: (0..width * height).collect(),
            width,
            height,
            blank: 0,
            quality_score: None,
        })
    }

    /// The width of the puzzle, in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the puzzle, in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The tile at the given coordinates.
    pub fn tile_at(&self, x: usize, y: usize) -> usize {
        self.tiles[y * self.width + x]
    }

    /// The current coordinates of the given tile.
    pub fn position_of(&self, tile: usize) -> Point<i64> {
        let index = self
            .tiles
            .iter()
            .position(|&t| t == tile)
            .expect("tile exists on the board");
        Point::new(vec![
            (index % self.width) as i64,
            (index / self.width) as i64,
        ])
        .expect("two coordinates")
    }

    /// Returns true if the given move is legal in this configuration.
    pub fn is_move_possible(&self, slide: SlideMove) -> bool {
        let (dx, dy) = slide.offset();
        let x = (self.blank % self.width) as isize + dx;
        let y = (self.blank / self.width) as isize + dy;
        x >= 0 && x < self.width as isize && y >= 0 && y < self.height as isize
    }

    /// All moves that are legal in this configuration.
    pub fn possible_moves(&self) -> Vec<SlideMove> {
        SlideMove::ALL
            .into_iter()
            .filter(|&slide| self.is_move_possible(slide))
            .collect()
    }

    /// Performs the given move, producing the successor configuration.
    ///
    /// The move must be legal; check with
    /// [`is_move_possible`](Self::is_move_possible) first.
    pub fn apply(&self, slide: SlideMove) -> Self {
        debug_assert!(self.is_move_possible(slide));
        let (dx, dy) = slide.offset();
        let x = (self.blank % self.width) as isize + dx;
        let y = (self.blank / self.width) as isize + dy;
        let tile_index = y as usize * self.width + x as usize;

        let mut successor = Self {
            tiles: self.tiles.clone(),
            width: self.width,
            height: self.height,
            blank: tile_index,
            quality_score: None,
        };
        successor.tiles.swap(self.blank, tile_index);
        successor
    }

    /// Applies a sequence of moves in order.
    pub fn apply_all(&self, slides: &[SlideMove]) -> Self {
        slides.iter().fold(self.clone(), |state, &s| state.apply(s))
    }

    /// Scrambles the puzzle by `steps` random moves, never directly undoing
    /// the previous move when any other move is legal.
    pub fn scramble<R: Rng + ?Sized>(&self, rng: &mut R, steps: usize) -> Self {
        let mut state = self.clone();
        let mut previous: Option<SlideMove> = None;
        for _ in 0..steps {
            let mut moves: Vec<SlideMove> = state
                .possible_moves()
                .into_iter()
                .filter(|&slide| previous != Some(slide.inverse()))
                .collect();
            if moves.is_empty() {
                // On a 1-wide or 1-tall board the inverse can be the only
                // legal move.
                moves = state.possible_moves();
            }
            let slide = moves[rng.random_range(0..moves.len())];
            state = state.apply(slide);
            previous = Some(slide);
        }
        state
    }
}

impl State for SlidingState {
    fn is_goal(&self) -> bool {
        self.tiles.iter().enumerate().all(|(index, &tile)| index == tile)
    }

    fn available_actions(&self) -> Vec<Action<Self>> {
        self.possible_moves()
            .into_iter()
            .map(|slide| Action::new(self.apply(slide), 1.0).expect("unit cost is valid"))
            .collect()
    }

    fn quality_score(&self) -> Option<f64> {
        self.quality_score
    }

    fn set_quality_score(&mut self, score: f64) {
        self.quality_score = Some(score);
    }
}

// Only tile positions matter for equality, not the cached score.
impl PartialEq for SlidingState {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.tiles == other.tiles
    }
}

impl Eq for SlidingState {}

impl Hash for SlidingState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Display for SlidingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            write!(f, "[")?;
            for x in 0..self.width {
                if x > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.tile_at(x, y))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Scores a configuration by the summed Manhattan distance of every tile
/// from its solved position, negated. The blank is not counted, which keeps
/// the heuristic admissible and consistent for unit-cost moves.
#[derive(Debug, Clone, Default)]
pub struct ManhattanDistanceHeuristic;

impl Heuristic<SlidingState> for ManhattanDistanceHeuristic {
    fn estimate(&self, state: &SlidingState) -> f64 {
        let width = state.width() as i64;
        let mut total = 0;
        for y in 0..state.height() {
            for x in 0..state.width() {
                let tile = state.tile_at(x, y);
                if tile == 0 {
                    continue;
                }
                let goal_x = tile as i64 % width;
                let goal_y = tile as i64 / width;
                total += (x as i64 - goal_x).abs() + (y as i64 - goal_y).abs();
            }
        }
        -(total as f64)
    }

    fn optimal_score(&self) -> f64 {
        0.0
    }
}
