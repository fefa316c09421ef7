//! 2048 rule engine - slide, merge-once, spawn
//!
//! A move slides every line toward one edge: gaps close, equal neighbors
//! merge pairwise scanning from the destination side, and a tile that was
//! already produced by a merge never merges again in the same move
//! (`[2,2,2,2]` slides left to `[4,4,0,0]`, never `[8,0,0,0]`).
//!
//! Only a move that changes the grid spawns a new tile: a 2 with 90%
//! probability, a 4 otherwise, on a uniformly random empty cell.

use arrayvec::ArrayVec;

use tui_arcade_types::{
    Direction, GameEvent, SlideIntent, SLIDE_FOUR_ODDS, SLIDE_SIZE, SLIDE_WIN_TILE,
};

use crate::rng::SimpleRng;
use crate::EventBuf;

const N: usize = SLIDE_SIZE;

/// 2048 world state. `grid[y][x]` is a tile value, 0 for empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideState {
    grid: [[u16; N]; N],
    score: u32,
    won: bool,
    game_over: bool,
    rng: SimpleRng,
    events: EventBuf,
}

impl SlideState {
    /// Fresh game with two starting tiles.
    pub fn new(seed: u32) -> Self {
        let mut state = Self::from_grid([[0; N]; N], seed);
        state.spawn_tile();
        state.spawn_tile();
        state
    }

    /// Start from a known grid; used for puzzle setups and tests.
    pub fn from_grid(grid: [[u16; N]; N], seed: u32) -> Self {
        Self {
            grid,
            score: 0,
            won: false,
            game_over: false,
            rng: SimpleRng::new(seed),
            events: EventBuf::new(),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn grid(&self) -> &[[u16; N]; N] {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Time plays no role in 2048; the engine is purely intent-driven.
    pub fn tick(&mut self, _elapsed_ms: u32) {}

    pub fn take_events(&mut self) -> EventBuf {
        std::mem::take(&mut self.events)
    }

    pub fn apply(&mut self, intent: SlideIntent) {
        if self.game_over {
            return;
        }
        let SlideIntent::Slide(dir) = intent;

        let mut changed = false;
        let mut gained = 0u32;
        for lane in 0..N {
            let line = self.read_line(dir, lane);
            let (slid, line_gain) = slide_line(line);
            if slid != line {
                changed = true;
                self.write_line(dir, lane, slid);
            }
            gained += line_gain;
        }

        if !changed {
            return;
        }

        self.score += gained;
        if gained > 0 {
            let _ = self.events.try_push(GameEvent::ScoreDelta(gained));
        }

        if !self.won && self.grid.iter().flatten().any(|&v| v >= SLIDE_WIN_TILE) {
            self.won = true;
            let _ = self.events.try_push(GameEvent::Win);
        }

        self.spawn_tile();

        if !self.any_move_possible() {
            self.game_over = true;
            let _ = self.events.try_push(GameEvent::GameOver);
        }
    }

    /// A line in slide order: index 0 is the edge tiles move toward.
    fn read_line(&self, dir: Direction, lane: usize) -> [u16; N] {
        let mut line = [0u16; N];
        for (i, v) in line.iter_mut().enumerate() {
            let (x, y) = Self::lane_cell(dir, lane, i);
            *v = self.grid[y][x];
        }
        line
    }

    fn write_line(&mut self, dir: Direction, lane: usize, line: [u16; N]) {
        for (i, v) in line.iter().enumerate() {
            let (x, y) = Self::lane_cell(dir, lane, i);
            self.grid[y][x] = *v;
        }
    }

    fn lane_cell(dir: Direction, lane: usize, i: usize) -> (usize, usize) {
        match dir {
            Direction::Left => (i, lane),
            Direction::Right => (N - 1 - i, lane),
            Direction::Up => (lane, i),
            Direction::Down => (lane, N - 1 - i),
        }
    }

    /// Place one new tile on a uniformly random empty cell.
    fn spawn_tile(&mut self) {
        let empties: ArrayVec<(usize, usize), { N * N }> = (0..N)
            .flat_map(|y| (0..N).map(move |x| (x, y)))
            .filter(|&(x, y)| self.grid[y][x] == 0)
            .collect();
        if empties.is_empty() {
            return;
        }
        let (x, y) = empties[self.rng.next_range(empties.len() as u32) as usize];
        let value = if self.rng.next_range(SLIDE_FOUR_ODDS) == 0 {
            4
        } else {
            2
        };
        self.grid[y][x] = value;
    }

    /// Any empty cell, or any adjacent equal pair in a row or column.
    fn any_move_possible(&self) -> bool {
        for y in 0..N {
            for x in 0..N {
                let v = self.grid[y][x];
                if v == 0 {
                    return true;
                }
                if x + 1 < N && self.grid[y][x + 1] == v {
                    return true;
                }
                if y + 1 < N && self.grid[y + 1][x] == v {
                    return true;
                }
            }
        }
        false
    }
}

/// Slide one line toward index 0, merging each pair at most once.
///
/// Returns the new line and points gained (sum of merged tile values).
fn slide_line(line: [u16; N]) -> ([u16; N], u32) {
    let compact: ArrayVec<u16, N> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0u16; N];
    let mut gained = 0u32;
    let mut write = 0usize;
    let mut i = 0usize;
    while i < compact.len() {
        if i + 1 < compact.len() && compact[i] == compact[i + 1] {
            let merged = compact[i] * 2;
            out[write] = merged;
            gained += merged as u32;
            i += 2;
        } else {
            out[write] = compact[i];
            i += 1;
        }
        write += 1;
    }
    (out, gained)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_line_compacts_gaps() {
        assert_eq!(slide_line([0, 2, 0, 2]), ([4, 0, 0, 0], 4));
        assert_eq!(slide_line([0, 0, 0, 2]), ([2, 0, 0, 0], 0));
        assert_eq!(slide_line([2, 0, 4, 0]), ([2, 4, 0, 0], 0));
    }

    #[test]
    fn merge_happens_at_most_once_per_tile() {
        // The canonical case: no chain merging within one move.
        assert_eq!(slide_line([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
        assert_eq!(slide_line([4, 2, 2, 0]), ([4, 4, 0, 0], 4));
        assert_eq!(slide_line([2, 2, 4, 0]), ([4, 4, 0, 0], 4));
    }

    #[test]
    fn merges_prefer_the_destination_side() {
        assert_eq!(slide_line([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
    }

    #[test]
    fn new_game_has_two_tiles() {
        let state = SlideState::new(42);
        let tiles = state.grid().iter().flatten().filter(|&&v| v != 0).count();
        assert_eq!(tiles, 2);
    }

    #[test]
    fn unchanged_move_spawns_nothing() {
        let mut state = SlideState::from_grid([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 7);
        let before = state.clone();
        state.apply(SlideIntent::Slide(Direction::Left));
        assert_eq!(state, before, "a no-op slide must not spawn or score");
    }

    #[test]
    fn changed_move_spawns_exactly_one_tile() {
        let mut state = SlideState::from_grid([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], 7);
        state.apply(SlideIntent::Slide(Direction::Left));
        assert_eq!(state.grid()[0][0], 2, "tile compacts to column 0");
        let tiles = state.grid().iter().flatten().filter(|&&v| v != 0).count();
        assert_eq!(tiles, 2, "one spawned tile beyond the original");
    }

    #[test]
    fn vertical_slides_use_columns() {
        let mut state = SlideState::from_grid(
            [[2, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]],
            7,
        );
        state.apply(SlideIntent::Slide(Direction::Down));
        assert_eq!(state.grid()[3][0], 4);
        assert_eq!(state.score(), 4);
    }

    #[test]
    fn win_fires_once_and_play_continues() {
        let mut state = SlideState::from_grid(
            [[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]],
            7,
        );
        state.apply(SlideIntent::Slide(Direction::Left));
        assert!(state.won());
        assert!(state.take_events().contains(&GameEvent::Win));
        assert!(!state.game_over());

        // A later move must not emit Win again.
        state.apply(SlideIntent::Slide(Direction::Down));
        assert!(!state.take_events().contains(&GameEvent::Win));
    }

    #[test]
    fn filling_last_cell_with_no_pairs_ends_the_game() {
        // After sliding row 0 left, the spawn lands on the only empty cell
        // (3, 0). Its neighbors are 16 and 64, so whether it spawns a 2 or a
        // 4 the grid is dead: full, no adjacent equal pair anywhere.
        let mut state = SlideState::from_grid(
            [
                [0, 4, 8, 16],
                [8, 16, 32, 64],
                [16, 32, 64, 128],
                [32, 64, 128, 256],
            ],
            7,
        );
        state.apply(SlideIntent::Slide(Direction::Left));
        assert!(state.game_over());
        assert!(state.take_events().contains(&GameEvent::GameOver));
    }

    #[test]
    fn game_over_state_rejects_moves() {
        let mut state = SlideState::from_grid(
            [
                [2, 4, 2, 4],
                [4, 2, 4, 2],
                [2, 4, 2, 4],
                [4, 2, 4, 2],
            ],
            7,
        );
        state.game_over = true;
        let before = state.clone();
        state.apply(SlideIntent::Slide(Direction::Left));
        assert_eq!(state, before);
    }

    #[test]
    fn score_accumulates_merged_values() {
        let mut state = SlideState::from_grid(
            [[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]],
            7,
        );
        state.apply(SlideIntent::Slide(Direction::Left));
        assert_eq!(state.score(), 12);
        assert!(state.take_events().contains(&GameEvent::ScoreDelta(12)));
    }
}
