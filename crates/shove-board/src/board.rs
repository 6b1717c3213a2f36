//! The board: tile grid, box registry, and invariant-preserving mutators.

use crate::error::BoardError;
use indexmap::IndexMap;
use shove_core::{BoxId, LevelEvent, Pos, TileKind};

/// A `width x height` grid of [`TileKind`] plus a sparse box registry.
///
/// The grid is the source of truth for cell contents; the registry
/// mirrors it for box cells, assigning each box a stable [`BoxId`] that
/// survives pushes. Registry iteration order is insertion order
/// (placement order), which keeps replays and tests deterministic.
///
/// Mutators buffer [`LevelEvent`]s rather than calling collaborators
/// directly: logical state is already final when a mutator returns, and
/// the owner drains [`take_events`](Board::take_events) to the
/// presentation sink afterwards.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    grid: Vec<TileKind>,
    boxes: IndexMap<Pos, BoxId>,
    next_box: u64,
    events: Vec<LevelEvent>,
}

impl Board {
    /// Smallest accepted dimension.
    pub const MIN_DIM: i32 = 8;
    /// Largest accepted dimension.
    pub const MAX_DIM: i32 = 15;

    /// Create an all-[`Empty`](TileKind::Empty) board.
    ///
    /// Returns [`BoardError::DimensionOutOfRange`] if either dimension
    /// falls outside `[MIN_DIM, MAX_DIM]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shove_board::Board;
    /// use shove_core::Pos;
    ///
    /// let board = Board::new(8, 8).unwrap();
    /// assert!(board.is_empty(Pos::new(0, 0)));
    /// assert!(!board.is_empty(Pos::new(-1, 3))); // fails closed out of bounds
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        for (name, value) in [("width", width), ("height", height)] {
            if !(Self::MIN_DIM..=Self::MAX_DIM).contains(&value) {
                return Err(BoardError::DimensionOutOfRange {
                    name,
                    value,
                    min: Self::MIN_DIM,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(Self {
            width,
            height,
            grid: vec![TileKind::Empty; (width * height) as usize],
            boxes: IndexMap::new(),
            next_box: 0,
            events: Vec::new(),
        })
    }

    /// Grid width (columns).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height (rows).
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `pos` lies inside `[0, width) x [0, height)`.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Whether `pos` is an in-bounds cell on the outermost ring.
    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1)
    }

    /// Whether `pos` is inside the grid and holds nothing.
    ///
    /// Fails closed: out-of-bounds positions report `false`.
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.kind_at(pos) == Some(TileKind::Empty)
    }

    /// The kind at `pos`, or `None` out of bounds.
    pub fn kind_at(&self, pos: Pos) -> Option<TileKind> {
        if self.in_bounds(pos) {
            Some(self.grid[self.index(pos)])
        } else {
            None
        }
    }

    /// Number of boxes currently on the board.
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// All boxes in placement order as `(pos, id, kind)`.
    pub fn boxes(&self) -> impl Iterator<Item = (Pos, BoxId, TileKind)> + '_ {
        self.boxes
            .iter()
            .map(|(&pos, &id)| (pos, id, self.grid[self.index(pos)]))
    }

    /// All in-bounds positions in canonical row-major order
    /// (`y` outer, `x` inner).
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Pos::new(x, y)))
    }

    /// Place a box of `kind` on the empty in-bounds cell `pos`.
    ///
    /// Buffers a [`LevelEvent::BoxPlaced`] and returns the new box's id.
    ///
    /// # Errors
    ///
    /// [`BoardError::NotABox`] for a non-box kind,
    /// [`BoardError::OutOfBounds`] outside the grid,
    /// [`BoardError::CellOccupied`] if the cell holds anything.
    pub fn place_box(&mut self, pos: Pos, kind: TileKind) -> Result<BoxId, BoardError> {
        if !kind.is_box() {
            return Err(BoardError::NotABox { kind });
        }
        let occupant = self.kind_at(pos).ok_or(BoardError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })?;
        if occupant != TileKind::Empty {
            return Err(BoardError::CellOccupied {
                pos,
                kind: occupant,
            });
        }
        let id = BoxId(self.next_box);
        self.next_box += 1;
        let idx = self.index(pos);
        self.grid[idx] = kind;
        self.boxes.insert(pos, id);
        self.events.push(LevelEvent::BoxPlaced { pos, kind, id });
        Ok(id)
    }

    /// Place a wall on the empty in-bounds cell `pos`.
    ///
    /// Walls are not registered and emit no event; they exist for
    /// hand-authored fixture levels. The generator builds its obstacles
    /// from boxes.
    pub fn place_wall(&mut self, pos: Pos) -> Result<(), BoardError> {
        let occupant = self.kind_at(pos).ok_or(BoardError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })?;
        if occupant != TileKind::Empty {
            return Err(BoardError::CellOccupied {
                pos,
                kind: occupant,
            });
        }
        let idx = self.index(pos);
        self.grid[idx] = TileKind::Wall;
        Ok(())
    }

    /// Place an exit marker on the empty in-bounds cell `pos`.
    ///
    /// Like walls, exit markers are fixture furniture: unregistered,
    /// eventless, never produced by the generator (its goal is an
    /// outcrop outside the grid). The player may walk onto an exit
    /// marker; boxes may not be pushed onto it.
    pub fn place_exit(&mut self, pos: Pos) -> Result<(), BoardError> {
        let occupant = self.kind_at(pos).ok_or(BoardError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })?;
        if occupant != TileKind::Empty {
            return Err(BoardError::CellOccupied {
                pos,
                kind: occupant,
            });
        }
        let idx = self.index(pos);
        self.grid[idx] = TileKind::Exit;
        Ok(())
    }

    /// Remove the box at `pos`.
    ///
    /// Buffers a [`LevelEvent::BoxRemoved`] and returns the removed id.
    ///
    /// # Errors
    ///
    /// [`BoardError::NoBoxAt`] if no box is registered there.
    pub fn remove_box(&mut self, pos: Pos) -> Result<BoxId, BoardError> {
        let id = self
            .boxes
            .shift_remove(&pos)
            .ok_or(BoardError::NoBoxAt { pos })?;
        let idx = self.index(pos);
        debug_assert!(self.grid[idx].is_box(), "registry/grid desync at {pos}");
        self.grid[idx] = TileKind::Empty;
        self.events.push(LevelEvent::BoxRemoved { pos, id });
        Ok(id)
    }

    /// Atomically move the box at `from` to the empty in-bounds cell `to`.
    ///
    /// Returns `false` and makes no change if any precondition fails
    /// (no box at `from`, or `to` out of bounds or occupied). A failed
    /// precondition is a caller contract fault: debug builds assert.
    /// Buffers a [`LevelEvent::BoxMoved`] on success.
    pub fn move_box(&mut self, from: Pos, to: Pos) -> bool {
        let has_box = self.boxes.contains_key(&from);
        let target_free = self.is_empty(to);
        if !has_box || !target_free {
            debug_assert!(
                false,
                "move_box precondition failed: from {from} (box: {has_box}), \
                 to {to} (free: {target_free})"
            );
            return false;
        }
        // contains_key was just checked
        let Some(id) = self.boxes.shift_remove(&from) else {
            return false;
        };
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        let kind = self.grid[from_idx];
        self.grid[from_idx] = TileKind::Empty;
        self.grid[to_idx] = kind;
        self.boxes.insert(to, id);
        self.events.push(LevelEvent::BoxMoved { from, to, id });
        true
    }

    /// Remove every box placement without emitting events.
    ///
    /// Bulk reset for the generator's retry loop: the discarded layout
    /// was never reported outward, so there is nothing to despawn.
    /// Box ids are not reused afterwards.
    pub fn clear_boxes(&mut self) {
        let positions: Vec<Pos> = self.boxes.keys().copied().collect();
        for pos in positions {
            let idx = self.index(pos);
            self.grid[idx] = TileKind::Empty;
        }
        self.boxes.clear();
    }

    /// Drain the buffered events in emission order.
    pub fn take_events(&mut self) -> Vec<LevelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether grid and registry agree everywhere.
    ///
    /// Cheap probe used by debug assertions and property tests; always
    /// `true` unless a mutator contract was violated.
    pub fn is_consistent(&self) -> bool {
        let grid_boxes = self
            .cells()
            .filter(|&pos| self.grid[self.index(pos)].is_box());
        let mut count = 0usize;
        for pos in grid_boxes {
            if !self.boxes.contains_key(&pos) {
                return false;
            }
            count += 1;
        }
        count == self.boxes.len()
    }

    /// ASCII dump of the grid, top row first. Test and debug aid.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                out.push(self.grid[self.index(Pos::new(x, y))].glyph());
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos), "index on out-of-bounds {pos}");
        (pos.y * self.width + pos.x) as usize
    }
}
