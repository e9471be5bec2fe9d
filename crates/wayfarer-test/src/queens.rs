//! N-Queens problem test fixtures.
//!
//! A board is a `Vec<usize>` where every index is a column and the value in
//! that position is the row of the queen in that column. Thanks to this
//! representation two queens can never share a column, so only row and
//! diagonal clashes need checking.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

use wayfarer_core::{Action, Heuristic, Result, State, WayfarerError};

/// A single board configuration in the N-Queens problem.
#[derive(Debug, Clone)]
pub struct QueensState {
    board: Vec<usize>,
    quality_score: Option<f64>,
}

impl QueensState {
    /// Creates a state from an explicit board configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidArgument`] for an empty board or a
    /// queen placed outside the board.
    pub fn new(board: Vec<usize>) -> Result<Self> {
        if board.is_empty() {
            return Err(WayfarerError::InvalidArgument(
                "board must have at least one column".to_string(),
            ));
        }
        let dimensions = board.len();
        if let Some(&row) = board.iter().find(|&&row| row >= dimensions) {
            return Err(WayfarerError::InvalidArgument(format!(
                "queen row {row} is outside a {dimensions}x{dimensions} board"
            )));
        }
        Ok(Self {
            board,
            quality_score: None,
        })
    }

    /// Creates a board of the given dimensions with random queen placement.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, dimensions: usize) -> Self {
        let board = (0..dimensions)
            .map(|_| rng.random_range(0..dimensions))
            .collect();
        Self {
            board,
            quality_score: None,
        }
    }

    /// The length of one side of the (square) board.
    pub fn dimensions(&self) -> usize {
        self.board.len()
    }

    /// The queen row occupied in each column.
    pub fn board(&self) -> &[usize] {
        &self.board
    }

    /// The number of pairs of queens that threaten each other.
    pub fn count_clashes(&self) -> usize {
        let mut clashes = 0;
        for column in 0..self.board.len() {
            for other in column + 1..self.board.len() {
                if self.queens_are_clashing(column, other) {
                    clashes += 1;
                }
            }
        }
        clashes
    }

    fn queens_are_clashing(&self, column1: usize, column2: usize) -> bool {
        let horizontal = column1.abs_diff(column2);
        let vertical = self.board[column1].abs_diff(self.board[column2]);
        // Same row, or diagonal. Column clashes are impossible by
        // representation.
        vertical == 0 || horizontal == vertical
    }
}

impl State for QueensState {
    fn is_goal(&self) -> bool {
        self.count_clashes() == 0
    }

    fn available_actions(&self) -> Vec<Action<Self>> {
        let dimensions = self.dimensions();
        let mut actions = Vec::with_capacity(dimensions * dimensions.saturating_sub(1));
        for column in 0..dimensions {
            for row in 0..dimensions {
                if self.board[column] != row {
                    let mut successor_board = self.board.clone();
                    successor_board[column] = row;
                    let successor = Self {
                        board: successor_board,
                        quality_score: None,
                    };
                    actions.push(Action::new(successor, 0.0).expect("zero cost is valid"));
                }
            }
        }
        actions
    }

    fn quality_score(&self) -> Option<f64> {
        self.quality_score
    }

    fn set_quality_score(&mut self, score: f64) {
        self.quality_score = Some(score);
    }
}

// Equality and hashing consider only the board configuration, not the
// cached score.
impl PartialEq for QueensState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for QueensState {}

impl Hash for QueensState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl fmt::Display for QueensState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.board.len() {
            write!(f, "[")?;
            for &queen_row in &self.board {
                write!(f, "{}", if queen_row == row { "()" } else { "  " })?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Scores a board by the number of clashing queen pairs: quality is the
/// negated clash count, so the optimum of 0 means a solved board.
#[derive(Debug, Clone, Default)]
pub struct ClashCountHeuristic;

impl Heuristic<QueensState> for ClashCountHeuristic {
    fn estimate(&self, state: &QueensState) -> f64 {
        -(state.count_clashes() as f64)
    }

    fn optimal_score(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn known_board_has_eleven_clashes() {
        let state = QueensState::new(vec![1, 2, 5, 4, 0, 6, 4, 4]).unwrap();
        assert_eq!(state.count_clashes(), 11);
        assert_eq!(ClashCountHeuristic.estimate(&state), -11.0);
        assert!(!state.is_goal());
    }

    #[test]
    fn solved_board_scores_zero_and_is_goal() {
        let state = QueensState::new(vec![4, 2, 0, 6, 1, 7, 5, 3]).unwrap();
        assert_eq!(state.count_clashes(), 0);
        assert_eq!(ClashCountHeuristic.estimate(&state), 0.0);
        assert!(state.is_goal());
    }

    #[test]
    fn malformed_boards_are_rejected() {
        assert!(QueensState::new(Vec::new()).is_err());
        assert!(QueensState::new(vec![0, 4, 1]).is_err());
    }

    #[test]
    fn actions_move_one_queen_within_its_column() {
        let state = QueensState::new(vec![0, 1]).unwrap();
        let actions = state.available_actions();
        assert_eq!(actions.len(), 2);
        for action in &actions {
            assert_eq!(action.cost(), 0.0);
            assert_ne!(action.resulting_state(), &state);
        }
    }

    #[test]
    fn random_boards_are_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let state = QueensState::random(&mut rng, 8);
        assert_eq!(state.dimensions(), 8);
        assert!(state.count_clashes() <= 28);
    }
}
