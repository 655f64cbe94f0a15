//! Procedural track generation
//!
//! The track is an ordered run of cells on an unbounded lane/row grid. It is
//! seeded with a straight takeoff strip and extended lazily as rows scroll
//! past. Each generated segment is one row straight ahead or a two-row
//! dogleg into a neighbouring lane; near the edges the bend direction is
//! forced back toward the center so the track never leaves the lane bounds.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One tile of the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackCell {
    pub lane: i32,
    pub row: i64,
}

impl TrackCell {
    pub const fn new(lane: i32, row: i64) -> Self {
        Self { lane, row }
    }

    /// True when `other` is one step away in lane or row, not both
    pub fn is_adjacent(&self, other: &TrackCell) -> bool {
        let dl = (self.lane - other.lane).abs();
        let dr = (self.row - other.row).abs();
        (dl == 1 && dr == 0) || (dl == 0 && dr == 1)
    }
}

/// Vertical guide line indices bounding the track
///
/// Tiles sit between two lines, so valid lanes are `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneBounds {
    pub start: i32,
    pub end: i32,
}

impl LaneBounds {
    /// Bounds for `count` vertical lines centered on lane 0 (at least 3 lines,
    /// at most `i32::MAX`)
    pub fn from_line_count(count: u32) -> Self {
        let count = i32::try_from(count.max(3)).unwrap_or(i32::MAX);
        let start = -(count / 2) + 1;
        Self {
            start,
            end: start + count - 1,
        }
    }

    /// Whether a tile may occupy `lane`
    #[inline]
    pub fn contains(&self, lane: i32) -> bool {
        self.start <= lane && lane < self.end
    }

    /// Line indices from left to right
    pub fn line_indices(&self) -> std::ops::RangeInclusive<i32> {
        self.start..=self.end
    }
}

/// Direction of the next segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bend {
    Straight,
    /// Toward higher lane indices
    Right,
    /// Toward lower lane indices
    Left,
}

impl Bend {
    /// Lane delta of this bend
    pub fn step(self) -> i32 {
        match self {
            Bend::Straight => 0,
            Bend::Right => 1,
            Bend::Left => -1,
        }
    }

    /// Draw a bend for a segment starting at `lane`.
    ///
    /// One value is always drawn from the RNG, even when an edge forces the
    /// direction, so the draw sequence does not depend on the path shape.
    pub fn choose<R: Rng>(lane: i32, bounds: LaneBounds, rng: &mut R) -> Self {
        let mut bend = match rng.random_range(0..3u8) {
            0 => Bend::Straight,
            1 => Bend::Right,
            _ => Bend::Left,
        };
        if lane <= bounds.start {
            bend = Bend::Right;
        }
        if lane >= bounds.end - 1 {
            bend = Bend::Left;
        }
        bend
    }
}

/// The committed path, front = nearest row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    cells: VecDeque<TrackCell>,
}

impl FromIterator<TrackCell> for Track {
    fn from_iter<I: IntoIterator<Item = TrackCell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight run of `length` cells on lane 0 starting at row 0
    pub fn straight(length: usize) -> Self {
        let mut track = Self::new();
        track.seed_straight(length);
        track
    }

    /// Replace the track with a straight takeoff strip
    pub fn seed_straight(&mut self, length: usize) {
        self.cells.clear();
        self.cells
            .extend((0..length as i64).map(|row| TrackCell::new(0, row)));
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &TrackCell> {
        self.cells.iter()
    }

    /// The front `count` cells (what gets drawn)
    pub fn window(&self, count: usize) -> impl Iterator<Item = &TrackCell> {
        self.cells.iter().take(count)
    }

    pub fn back(&self) -> Option<&TrackCell> {
        self.cells.back()
    }

    /// Drop cells whose row has scrolled behind `loop_row`
    pub fn prune(&mut self, loop_row: i64) -> usize {
        let before = self.cells.len();
        while self.cells.front().is_some_and(|c| c.row < loop_row) {
            self.cells.pop_front();
        }
        before - self.cells.len()
    }

    /// Prune, then append segments until at least `target` cells remain.
    ///
    /// Returns the appended cells in order.
    ///
    /// # Panics
    /// If a generated lane leaves `bounds`. The edge rule makes that
    /// impossible for a track that started inside the bounds.
    pub fn extend<R: Rng>(
        &mut self,
        loop_row: i64,
        bounds: LaneBounds,
        target: usize,
        rng: &mut R,
    ) -> Vec<TrackCell> {
        self.prune(loop_row);

        let (mut last_lane, mut last_row) = match self.cells.back() {
            Some(tail) => (tail.lane, tail.row + 1),
            None => (0, loop_row),
        };

        let mut appended = Vec::new();
        while self.cells.len() < target {
            self.push(TrackCell::new(last_lane, last_row), bounds, &mut appended);

            let bend = Bend::choose(last_lane, bounds, rng);
            if bend != Bend::Straight {
                last_lane += bend.step();
                self.push(TrackCell::new(last_lane, last_row), bounds, &mut appended);
                last_row += 1;
                self.push(TrackCell::new(last_lane, last_row), bounds, &mut appended);
            }

            last_row += 1;
        }

        log::trace!(
            "track extended by {} cells (len {}, loop row {})",
            appended.len(),
            self.cells.len(),
            loop_row
        );
        appended
    }

    fn push(&mut self, cell: TrackCell, bounds: LaneBounds, appended: &mut Vec<TrackCell>) {
        assert!(
            bounds.contains(cell.lane),
            "track generator left lane bounds: {:?} outside {:?}",
            cell,
            bounds
        );
        self.cells.push_back(cell);
        appended.push(cell);
    }
}
