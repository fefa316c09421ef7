//! Snake rule engine - wrapping grid, decoupled pending direction
//!
//! The walls are not deadly: leaving the grid on one edge re-enters on the
//! opposite edge. The only losing move is running into the snake's own body.
//!
//! Direction handling is two-stage. An intent only records a *pending*
//! direction; the next step applies it. The pending value is rejected when it
//! is the exact opposite of the direction the snake is currently travelling,
//! which makes an instant 180° self-collision impossible no matter how fast
//! intents arrive.

use std::collections::VecDeque;

use tui_arcade_types::{
    Direction, GameEvent, SnakeIntent, SNAKE_BASE_STEP_MS, SNAKE_GRID, SNAKE_SPEEDUP_MS,
    SNAKE_STEP_FLOOR_MS,
};

use crate::rng::SimpleRng;
use crate::EventBuf;

/// Snake world state. Head is the front of `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    body: VecDeque<(i8, i8)>,
    direction: Direction,
    pending: Option<Direction>,
    food: (i8, i8),
    score: u32,
    step_timer_ms: u32,
    game_over: bool,
    rng: SimpleRng,
    events: EventBuf,
}

impl SnakeState {
    /// Start a fresh game: length-3 snake heading right from the center.
    pub fn new(seed: u32) -> Self {
        let cx = (SNAKE_GRID / 2) as i8;
        let cy = (SNAKE_GRID / 2) as i8;
        let body: VecDeque<(i8, i8)> = [(cx, cy), (cx - 1, cy), (cx - 2, cy)].into();

        let mut state = Self {
            body,
            direction: Direction::Right,
            pending: None,
            food: (0, 0),
            score: 0,
            step_timer_ms: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
            events: EventBuf::new(),
        };
        state.food = state.random_free_cell().unwrap_or((0, 0));
        state
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn body(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.body.iter().copied()
    }

    pub fn head(&self) -> (i8, i8) {
        // Body is never empty by construction.
        *self.body.front().unwrap()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> (i8, i8) {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current step pacing: faster for every food eaten, with a floor.
    pub fn step_interval_ms(&self) -> u32 {
        SNAKE_BASE_STEP_MS
            .saturating_sub(self.score * SNAKE_SPEEDUP_MS)
            .max(SNAKE_STEP_FLOOR_MS)
    }

    /// Queue a direction change for the next step.
    ///
    /// A reversal against the currently applied direction is rejected with no
    /// state change at all.
    pub fn apply(&mut self, intent: SnakeIntent) {
        if self.game_over {
            return;
        }
        let SnakeIntent::Turn(dir) = intent;
        if dir == self.direction.opposite() {
            return;
        }
        self.pending = Some(dir);
    }

    /// Advance by elapsed wall time; performs zero or more discrete steps.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }
        self.step_timer_ms += elapsed_ms;
        while self.step_timer_ms >= self.step_interval_ms() && !self.game_over {
            self.step_timer_ms -= self.step_interval_ms();
            self.step();
        }
    }

    /// Drain events emitted since the last call.
    pub fn take_events(&mut self) -> EventBuf {
        std::mem::take(&mut self.events)
    }

    /// One discrete movement step.
    fn step(&mut self) {
        if let Some(dir) = self.pending.take() {
            // Checked at apply time too; re-check in case the applied
            // direction changed since the intent was queued.
            if dir != self.direction.opposite() {
                self.direction = dir;
            }
        }

        let (dx, dy) = self.direction.delta();
        let (hx, hy) = self.head();
        let grid = SNAKE_GRID as i8;
        let new_head = ((hx + dx).rem_euclid(grid), (hy + dy).rem_euclid(grid));

        if self.body.contains(&new_head) {
            self.game_over = true;
            let _ = self.events.try_push(GameEvent::GameOver);
            return;
        }

        self.body.push_front(new_head);
        if new_head == self.food {
            self.score += 1;
            let _ = self.events.try_push(GameEvent::ScoreDelta(1));
            match self.random_free_cell() {
                Some(cell) => self.food = cell,
                None => {
                    // Snake fills the grid; nothing left to eat.
                    self.game_over = true;
                    let _ = self.events.try_push(GameEvent::Win);
                }
            }
        } else {
            self.body.pop_back();
        }
    }

    /// Uniformly random cell not covered by the body.
    fn random_free_cell(&mut self) -> Option<(i8, i8)> {
        let total = (SNAKE_GRID as u32) * (SNAKE_GRID as u32);
        let free = total - self.body.len() as u32;
        if free == 0 {
            return None;
        }
        let mut skip = self.rng.next_range(free);
        for y in 0..SNAKE_GRID as i8 {
            for x in 0..SNAKE_GRID as i8 {
                if self.body.contains(&(x, y)) {
                    continue;
                }
                if skip == 0 {
                    return Some((x, y));
                }
                skip -= 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped(state: &mut SnakeState) {
        let interval = state.step_interval_ms();
        state.tick(interval);
    }

    #[test]
    fn new_snake_has_three_segments_heading_right() {
        let state = SnakeState::new(1);
        assert_eq!(state.len(), 3);
        assert_eq!(state.direction(), Direction::Right);
        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn food_never_spawns_on_body() {
        for seed in 1..50 {
            let state = SnakeState::new(seed);
            assert!(!state.body.contains(&state.food()));
        }
    }

    #[test]
    fn step_moves_head_one_cell() {
        let mut state = SnakeState::new(1);
        let (hx, hy) = state.head();
        stepped(&mut state);
        // Food could be right in front; either way the head advanced.
        assert_eq!(state.head(), ((hx + 1).rem_euclid(16), hy));
    }

    #[test]
    fn reversal_is_rejected_without_state_change() {
        let mut state = SnakeState::new(1);
        let before = state.clone();
        state.apply(SnakeIntent::Turn(Direction::Left));
        assert_eq!(state, before);
    }

    #[test]
    fn pending_direction_applies_on_next_step() {
        let mut state = SnakeState::new(1);
        state.apply(SnakeIntent::Turn(Direction::Up));
        assert_eq!(state.direction(), Direction::Right);
        stepped(&mut state);
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn wraps_around_every_edge() {
        let grid = SNAKE_GRID as i8;
        let mut state = SnakeState::new(1);
        // Walk right until the head returns to its starting column.
        let start = state.head();
        for _ in 0..grid {
            stepped(&mut state);
            assert!(!state.game_over());
        }
        assert_eq!(state.head().0, start.0);
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut state = SnakeState::new(1);
        // Plant food straight ahead.
        let (hx, hy) = state.head();
        state.food = ((hx + 1).rem_euclid(16), hy);
        let len_before = state.len();

        stepped(&mut state);

        assert_eq!(state.len(), len_before + 1);
        assert_eq!(state.score(), 1);
        assert!(state
            .take_events()
            .iter()
            .any(|e| *e == GameEvent::ScoreDelta(1)));
    }

    #[test]
    fn speed_increases_with_score_and_floors() {
        let mut state = SnakeState::new(1);
        let base = state.step_interval_ms();
        state.score = 5;
        assert!(state.step_interval_ms() < base);
        state.score = 10_000;
        assert_eq!(state.step_interval_ms(), SNAKE_STEP_FLOOR_MS);
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut state = SnakeState::new(1);
        // Build a snake about to bite itself: head at (5,5), body hooking
        // around so moving right hits a body cell.
        state.body = [(5, 5), (4, 5), (4, 6), (5, 6), (6, 6), (6, 5)].into();
        state.direction = Direction::Right;
        state.pending = None;
        state.food = (0, 0);

        stepped(&mut state);

        assert!(state.game_over());
        assert!(state.take_events().contains(&GameEvent::GameOver));
    }

    #[test]
    fn intents_and_ticks_ignored_after_game_over() {
        let mut state = SnakeState::new(1);
        state.game_over = true;
        let before = state.clone();
        state.apply(SnakeIntent::Turn(Direction::Up));
        state.tick(1000);
        assert_eq!(state, before);
    }

    #[test]
    fn reset_starts_fresh() {
        let mut state = SnakeState::new(1);
        state.game_over = true;
        state.score = 9;
        state.reset(2);
        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.len(), 3);
    }
}
