use crate::core::{CellView, Game};

/// Both boards as seen from one seat: its own board with ships revealed and
/// the opponent's board with ships hidden. Cells are row-major.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoardFrame {
    pub size: usize,
    pub own: Vec<CellView>,
    pub target: Vec<CellView>,
    pub ships_afloat: usize,
    pub enemy_ships_afloat: usize,
}

impl BoardFrame {
    /// Frame for seat `index` of `game`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    pub fn for_seat(game: &Game, index: usize) -> Self {
        assert!(index < 2, "seat {} does not exist, a game has seats 0 and 1", index);
        let me = game.player(index).board();
        let enemy = game.player(1 - index).board();
        Self {
            size: me.size(),
            own: me.view(true),
            target: enemy.view(false),
            ships_afloat: me.ships_afloat(),
            enemy_ships_afloat: enemy.ships_afloat(),
        }
    }

    /// Own-board tag at `(x, y)`, `None` off the board.
    pub fn own_at(&self, x: usize, y: usize) -> Option<CellView> {
        self.at(&self.own, x, y)
    }

    /// Opponent-board tag at `(x, y)`, `None` off the board.
    pub fn target_at(&self, x: usize, y: usize) -> Option<CellView> {
        self.at(&self.target, x, y)
    }

    fn at(&self, cells: &[CellView], x: usize, y: usize) -> Option<CellView> {
        if x >= self.size || y >= self.size {
            return None;
        }
        cells.get(y * self.size + x).copied()
    }
}
