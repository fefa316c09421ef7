//! Game-agnostic runtime pieces: the fixed-step clock, the bounded intent
//! queue, and the [`Simulation`] trait the per-game loops are written
//! against.

pub mod clock;
pub mod intents;

pub use clock::FixedStep;
pub use intents::IntentQueue;

use tui_arcade_core::{
    BellsState, EventBuf, MinesState, SlideState, SnakeState, TetrisState,
};
use tui_arcade_types::{BellsIntent, MinesIntent, SlideIntent, SnakeIntent, TetrisIntent};

/// The contract every rule engine satisfies: intents in, fixed-step ticks
/// forward, events out. `finished` covers both win and lose terminal states.
pub trait Simulation {
    type Intent;

    fn apply(&mut self, intent: Self::Intent);
    fn tick(&mut self, elapsed_ms: u32);
    fn take_events(&mut self) -> EventBuf;
    fn finished(&self) -> bool;
}

impl Simulation for SnakeState {
    type Intent = SnakeIntent;

    fn apply(&mut self, intent: SnakeIntent) {
        SnakeState::apply(self, intent);
    }

    fn tick(&mut self, elapsed_ms: u32) {
        SnakeState::tick(self, elapsed_ms);
    }

    fn take_events(&mut self) -> EventBuf {
        SnakeState::take_events(self)
    }

    fn finished(&self) -> bool {
        self.game_over()
    }
}

impl Simulation for TetrisState {
    type Intent = TetrisIntent;

    fn apply(&mut self, intent: TetrisIntent) {
        TetrisState::apply(self, intent);
    }

    fn tick(&mut self, elapsed_ms: u32) {
        TetrisState::tick(self, elapsed_ms);
    }

    fn take_events(&mut self) -> EventBuf {
        TetrisState::take_events(self)
    }

    fn finished(&self) -> bool {
        self.game_over()
    }
}

impl Simulation for SlideState {
    type Intent = SlideIntent;

    fn apply(&mut self, intent: SlideIntent) {
        SlideState::apply(self, intent);
    }

    fn tick(&mut self, elapsed_ms: u32) {
        SlideState::tick(self, elapsed_ms);
    }

    fn take_events(&mut self) -> EventBuf {
        SlideState::take_events(self)
    }

    fn finished(&self) -> bool {
        self.game_over()
    }
}

impl Simulation for MinesState {
    type Intent = MinesIntent;

    fn apply(&mut self, intent: MinesIntent) {
        MinesState::apply(self, intent);
    }

    fn tick(&mut self, elapsed_ms: u32) {
        MinesState::tick(self, elapsed_ms);
    }

    fn take_events(&mut self) -> EventBuf {
        MinesState::take_events(self)
    }

    fn finished(&self) -> bool {
        self.finished()
    }
}

impl Simulation for BellsState {
    type Intent = BellsIntent;

    fn apply(&mut self, intent: BellsIntent) {
        BellsState::apply(self, intent);
    }

    fn tick(&mut self, elapsed_ms: u32) {
        BellsState::tick(self, elapsed_ms);
    }

    fn take_events(&mut self) -> EventBuf {
        BellsState::take_events(self)
    }

    fn finished(&self) -> bool {
        self.game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_arcade_types::{Direction, GameEvent};

    fn drive<S: Simulation>(sim: &mut S, ticks: u32) -> EventBuf {
        let mut all = EventBuf::new();
        for _ in 0..ticks {
            sim.tick(tui_arcade_types::TICK_MS);
            for event in sim.take_events() {
                if !all.is_full() {
                    all.push(event);
                }
            }
        }
        all
    }

    #[test]
    fn snake_runs_through_the_trait() {
        let mut state = SnakeState::new(7);
        Simulation::apply(&mut state, SnakeIntent::Turn(Direction::Up));
        let events = drive(&mut state, 20);
        assert!(!events.contains(&GameEvent::GameOver));
        assert!(!Simulation::finished(&state));
    }

    #[test]
    fn bells_finishes_through_the_trait() {
        let mut state = BellsState::with_layout(1, &[]);
        Simulation::apply(&mut state, BellsIntent::Jump);
        let events = drive(&mut state, 2000);
        assert!(events.contains(&GameEvent::GameOver));
        assert!(Simulation::finished(&state));
    }
}
