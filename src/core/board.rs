//! Gameboard: a square grid of tagged cells plus ship and miss bookkeeping.

use alloc::vec::Vec;
use core::fmt;
use log::debug;

use crate::core::common::{AttackResult, BoardError, CoordinateError, PlacementError, ShipId};
use crate::core::config::DEFAULT_BOARD_SIZE;
use crate::core::ship::{Direction, Ship};

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    /// Intact segment of the ship at this index in the board's ship list.
    Ship(ShipId),
    Hit,
    Miss,
}

/// What a viewer is shown for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// One player's board. Cells are stored row-major, `y * size + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Gameboard {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    missed_attacks: Vec<(usize, usize)>,
}

impl Gameboard {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: alloc::vec![Cell::Empty; size * size],
            ships: Vec::new(),
            missed_attacks: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Coordinates of every attack that resolved as a miss, oldest first.
    pub fn missed_attacks(&self) -> &[(usize, usize)] {
        &self.missed_attacks
    }

    /// Cell at `(x, y)`, or `None` off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).ok().map(|i| self.cells[i])
    }

    /// Number of ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when every placed ship is sunk, including when none were placed.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Place `ship` with its first segment at `(x, y)`, extending along `direction`.
    ///
    /// The whole placement is checked before any cell is written, so a refused
    /// placement leaves the board unchanged.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        x: usize,
        y: usize,
        direction: Direction,
    ) -> Result<ShipId, BoardError> {
        self.index(x, y)?;
        if ship.length() == 0 {
            return Err(PlacementError::ZeroLength.into());
        }
        for offset in 0..ship.length() {
            let (cx, cy) = direction.step(x, y, offset);
            let i = self
                .index(cx, cy)
                .map_err(|_| BoardError::from(PlacementError::OutOfBounds))?;
            if matches!(self.cells[i], Cell::Ship(_)) {
                return Err(PlacementError::Overlaps { x: cx, y: cy }.into());
            }
        }

        let id = self.ships.len();
        for offset in 0..ship.length() {
            let (cx, cy) = direction.step(x, y, offset);
            let i = cy * self.size + cx;
            self.cells[i] = Cell::Ship(id);
        }
        self.ships.push(ship);
        debug!(
            "placed ship {} (length {}) at ({}, {}) {:?}",
            id,
            ship.length(),
            x,
            y,
            direction
        );
        Ok(id)
    }

    /// Resolve an attack at `(x, y)`.
    ///
    /// Only an intact ship segment counts as a hit. Any other cell, including one
    /// already marked hit or miss, is recorded as a new miss.
    pub fn receive_attack(&mut self, x: usize, y: usize) -> Result<AttackResult, BoardError> {
        let i = self.index(x, y)?;
        match self.cells[i] {
            Cell::Ship(id) => {
                let ship = &mut self.ships[id];
                ship.hit();
                self.cells[i] = Cell::Hit;
                if ship.is_sunk() {
                    debug!("attack at ({}, {}) sank ship {}", x, y, id);
                    Ok(AttackResult::Sunk(id))
                } else {
                    debug!("attack at ({}, {}) hit ship {}", x, y, id);
                    Ok(AttackResult::Hit)
                }
            }
            _ => {
                self.missed_attacks.push((x, y));
                self.cells[i] = Cell::Miss;
                debug!("attack at ({}, {}) missed", x, y);
                Ok(AttackResult::Miss)
            }
        }
    }

    /// Render tags for every cell, row-major. Ship segments are shown only
    /// when `reveal_ships` is set.
    pub fn view(&self, reveal_ships: bool) -> Vec<CellView> {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Hit => CellView::Hit,
                Cell::Miss => CellView::Miss,
                Cell::Ship(_) if reveal_ships => CellView::Ship,
                _ => CellView::Empty,
            })
            .collect()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, CoordinateError> {
        if x >= self.size || y >= self.size {
            return Err(CoordinateError::OutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Debug for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Gameboard {{\n  size: {},\n  ships: {:?},\n  missed_attacks: {:?}\n}}",
            self.size, self.ships, self.missed_attacks
        )
    }
}
