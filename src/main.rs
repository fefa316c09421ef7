//! Terminal arcade runner (default binary).
//!
//! Picks a game from the first argument, runs the shared fixed-timestep
//! loop against it, and restores the terminal on the way out. Input uses
//! crossterm; rendering goes through the diffing framebuffer renderer.
//!
//! Usage: `tui-arcade <snake|tetris|2048|mines|bells> [seed]`

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseEvent};

use tui_arcade::core::{BellsState, MinesState, SlideState, SnakeState, TetrisState};
use tui_arcade::engine::{FixedStep, IntentQueue, Simulation};
use tui_arcade::input::{
    bells_key_intent, bells_mouse_target, mines_intent, should_quit, should_restart, slide_intent,
    snake_intent, tetris_intent,
};
use tui_arcade::term::{
    BellsView, FrameBuffer, MinesView, SlideView, SnakeView, TerminalRenderer, TetrisView,
    Viewport,
};
use tui_arcade::types::{
    GameEvent, MINES_COUNT, MINES_HEIGHT, MINES_WIDTH, TICK_MS,
};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let game = match args.next() {
        Some(g) => g,
        None => {
            eprintln!("usage: tui-arcade <snake|tetris|2048|mines|bells> [seed]");
            return Ok(());
        }
    };
    let seed = match args.next() {
        Some(s) => s.parse::<u32>()?,
        None => entropy_seed(),
    };

    let wants_mouse = game == "bells";
    let mut term = TerminalRenderer::new();
    if wants_mouse {
        term = term.with_mouse_capture();
    }
    term.enter()?;
    let result = run(&mut term, &game, seed);
    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(summary) = &result {
        println!("{} over, best score this session: {}", game, summary.best);
    }
    result.map(|_| ())
}

struct Summary {
    best: u32,
}

fn run(term: &mut TerminalRenderer, game: &str, seed: u32) -> Result<Summary> {
    match game {
        "snake" => {
            let view = SnakeView::default();
            run_loop(
                term,
                seed,
                SnakeState::new,
                snake_intent,
                |_, _| None,
                |s, vp, fb| view.render_into(s, vp, fb),
            )
        }
        "tetris" => {
            let view = TetrisView::default();
            run_loop(
                term,
                seed,
                TetrisState::new,
                tetris_intent,
                |_, _| None,
                |s, vp, fb| view.render_into(s, vp, fb),
            )
        }
        "2048" | "slide" => {
            let view = SlideView;
            run_loop(
                term,
                seed,
                SlideState::new,
                slide_intent,
                |_, _| None,
                |s, vp, fb| view.render_into(s, vp, fb),
            )
        }
        "mines" => {
            let view = MinesView::default();
            run_loop(
                term,
                seed,
                |seed| MinesState::with_config(MINES_WIDTH, MINES_HEIGHT, MINES_COUNT, seed),
                mines_intent,
                |_, _| None,
                |s, vp, fb| view.render_into(s, vp, fb),
            )
        }
        "bells" => {
            let view = BellsView::default();
            run_loop(
                term,
                seed,
                BellsState::new,
                bells_key_intent,
                |mouse, vp| {
                    let rect = view.field_rect(vp);
                    let (ix, _, iw, _) = rect.interior();
                    bells_mouse_target(mouse, ix, iw)
                },
                |s, vp, fb| view.render_into(s, vp, fb),
            )
        }
        other => bail!("unknown game {other:?}, expected snake|tetris|2048|mines|bells"),
    }
}

/// The shared session loop: render, poll until the next step is due, drain
/// intents, tick. `r` reseeds and restarts; `q`/Esc/Ctrl-C leaves.
fn run_loop<S: Simulation>(
    term: &mut TerminalRenderer,
    seed: u32,
    new_state: impl Fn(u32) -> S,
    map_key: impl Fn(event::KeyEvent) -> Option<S::Intent>,
    map_mouse: impl Fn(MouseEvent, Viewport) -> Option<S::Intent>,
    render_into: impl Fn(&S, Viewport, &mut FrameBuffer),
) -> Result<Summary>
where
    S::Intent: PartialEq,
{
    let mut state = new_state(seed);
    let mut round = 0u32;
    let mut score = 0u32;
    let mut best = 0u32;

    let mut clock = FixedStep::new(TICK_MS);
    let mut intents: IntentQueue<S::Intent> = IntentQueue::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        render_into(&state, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = Duration::from_millis(clock.until_next_ms() as u64)
            .checked_sub(last.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        best = best.max(score);
                        return Ok(Summary { best });
                    }
                    if should_restart(key) {
                        best = best.max(score);
                        score = 0;
                        round += 1;
                        state = new_state(seed.wrapping_add(round));
                        intents.clear();
                        clock.reset();
                    } else if let Some(intent) = map_key(key) {
                        intents.push(intent);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(intent) = map_mouse(mouse, viewport) {
                        intents.push(intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last.elapsed().as_millis() as u32;
        let steps = clock.advance(elapsed);
        if elapsed > 0 {
            last = Instant::now();
        }
        for _ in 0..steps {
            for intent in intents.drain() {
                state.apply(intent);
            }
            state.tick(TICK_MS);
            for ev in state.take_events() {
                if let GameEvent::ScoreDelta(points) = ev {
                    score += points;
                }
            }
        }
        best = best.max(score);
    }
}

fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
