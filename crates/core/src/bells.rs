//! Bells rule engine - continuous bounce physics with a rising camera
//!
//! The actor rests safely on the ground until the first jump; after that the
//! only way back up is ringing a bell, and touching the ground again ends the
//! game. Integration is explicit Euler at the fixed timestep, with gravity
//! eased inside a small band around the apex so arcs hang at the top.
//!
//! Coordinates: x in world columns, y in rows growing *upward*, ground at 0.
//! Horizontal control is continuous: the pointer sets a target column the
//! actor eases toward every tick.

use tui_arcade_types::{
    BellsIntent, GameEvent, BELLS_ACTOR_RADIUS, BELLS_APEX_BAND, BELLS_APEX_GRAVITY_SCALE,
    BELLS_BELL_RADIUS, BELLS_BOUNCE_VY, BELLS_CAMERA_LEAD, BELLS_GAP_MAX, BELLS_GAP_MIN,
    BELLS_GRAVITY, BELLS_MAX_RISE, BELLS_SCORE_PER_BELL, BELLS_SPAWN_HORIZON, BELLS_WIDTH,
};

use crate::rng::SimpleRng;
use crate::EventBuf;

/// A bell obstacle. `hit` bells are spent and never trigger again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bell {
    pub x: f32,
    pub y: f32,
    pub hit: bool,
}

/// Bells world state.
#[derive(Debug, Clone, PartialEq)]
pub struct BellsState {
    x: f32,
    y: f32,
    vy: f32,
    target_x: f32,
    bells: Vec<Bell>,
    /// World row of the next procedurally placed bell.
    next_spawn_y: f32,
    camera_y: f32,
    left_ground: bool,
    score: u32,
    game_over: bool,
    rng: SimpleRng,
    events: EventBuf,
}

impl BellsState {
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            x: BELLS_WIDTH / 2.0,
            y: 0.0,
            vy: 0.0,
            target_x: BELLS_WIDTH / 2.0,
            bells: Vec::new(),
            next_spawn_y: BELLS_GAP_MIN,
            camera_y: 0.0,
            left_ground: false,
            score: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
            events: EventBuf::new(),
        };
        state.spawn_ahead();
        state
    }

    /// Fixed bell layout with procedural spawning disabled; for puzzle
    /// setups and deterministic physics tests.
    pub fn with_layout(seed: u32, bells: &[(f32, f32)]) -> Self {
        let mut state = Self::new(seed);
        state.bells = bells.iter().map(|&(x, y)| Bell { x, y, hit: false }).collect();
        state.next_spawn_y = f32::INFINITY;
        state
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity_y(&self) -> f32 {
        self.vy
    }

    pub fn camera_y(&self) -> f32 {
        self.camera_y
    }

    pub fn bells(&self) -> &[Bell] {
        &self.bells
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn left_ground(&self) -> bool {
        self.left_ground
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn apply(&mut self, intent: BellsIntent) {
        if self.game_over {
            return;
        }
        match intent {
            BellsIntent::Jump => {
                // Only valid from the ground; mid-air jumps are not a thing.
                if !self.left_ground {
                    self.left_ground = true;
                    self.vy = BELLS_BOUNCE_VY;
                }
            }
            BellsIntent::Target(x) => {
                self.target_x = x.clamp(BELLS_ACTOR_RADIUS, BELLS_WIDTH - BELLS_ACTOR_RADIUS);
            }
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }
        let dt = elapsed_ms as f32 / 1000.0;

        // Horizontal easing toward the pointer target, grounded or not.
        let blend = (tui_arcade_types::BELLS_FOLLOW_RATE * dt).min(1.0);
        self.x += (self.target_x - self.x) * blend;

        if !self.left_ground {
            return;
        }

        // Gravity, eased near the apex for hang time.
        let scale = if self.vy.abs() < BELLS_APEX_BAND {
            BELLS_APEX_GRAVITY_SCALE
        } else {
            1.0
        };
        self.vy = (self.vy - BELLS_GRAVITY * scale * dt).min(BELLS_MAX_RISE);

        self.y += self.vy * dt;

        self.check_bells();

        self.camera_y = (self.y - BELLS_CAMERA_LEAD).max(0.0);
        self.spawn_ahead();
        // A fall that long always ends on the ground, so bells more than a
        // spawn horizon below the camera are out of play for good.
        self.bells
            .retain(|b| b.y >= self.camera_y - BELLS_SPAWN_HORIZON);

        if self.y <= 0.0 {
            self.y = 0.0;
            self.game_over = true;
            let _ = self.events.try_push(GameEvent::GameOver);
        }
    }

    pub fn take_events(&mut self) -> EventBuf {
        std::mem::take(&mut self.events)
    }

    /// One-shot circle collision: an overlap flips the bell to hit and
    /// resets vertical velocity to the bounce constant.
    fn check_bells(&mut self) {
        let reach = BELLS_ACTOR_RADIUS + BELLS_BELL_RADIUS;
        let mut rang = 0u32;
        for bell in &mut self.bells {
            if bell.hit {
                continue;
            }
            let dx = bell.x - self.x;
            let dy = bell.y - self.y;
            if dx * dx + dy * dy < reach * reach {
                bell.hit = true;
                rang += 1;
            }
        }
        if rang > 0 {
            self.vy = BELLS_BOUNCE_VY;
            let points = rang * BELLS_SCORE_PER_BELL;
            self.score += points;
            let _ = self.events.try_push(GameEvent::ScoreDelta(points));
        }
    }

    /// Keep a horizon of bells laid out above the camera.
    fn spawn_ahead(&mut self) {
        while self.next_spawn_y < self.camera_y + BELLS_SPAWN_HORIZON {
            let margin = BELLS_BELL_RADIUS + 1.0;
            let x = self.rng.next_f32_range(margin, BELLS_WIDTH - margin);
            let y = self.next_spawn_y;
            self.bells.push(Bell { x, y, hit: false });
            self.next_spawn_y += self.rng.next_f32_range(BELLS_GAP_MIN, BELLS_GAP_MAX);
        }
    }
}
