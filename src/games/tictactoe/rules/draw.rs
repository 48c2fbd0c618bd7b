//! Draw detection for multi-player tic-tac-toe.

use super::super::Grid;
use tracing::instrument;

/// Checks whether the game is drawn: no playable cell is left.
///
/// Callers check for a winner first; a full grid after a winning move is
/// a win, not a draw.
#[instrument(skip(grid), fields(filled = grid.filled_count()))]
pub fn is_draw(grid: &Grid) -> bool {
    grid.is_full()
}
