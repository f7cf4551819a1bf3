//! Terminal falling-block game runner.
//!
//! Single-threaded event loop: render, poll input until the next gravity
//! step is due, apply at most one gravity step per iteration, advance the
//! music playlist. Crossterm input, framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::LevelFilter;

use blockfall::audio::MusicPlaylist;
use blockfall::core::{clock_seed, GameState, LockEvent};
use blockfall::input::{action_for_key, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::DROP_INTERVAL_MS;

fn main() -> Result<()> {
    // A game without a log file still runs.
    let _ = blockfall::log::init_log(LevelFilter::Info, "blockfall.log");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let mut playlist = MusicPlaylist::new("assets");
    let view = GameView::default();

    let drop_interval = Duration::from_millis(DROP_INTERVAL_MS);
    let mut last_drop = Instant::now();
    let mut game_over_logged = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input, with a timeout bounded by the next gravity step.
        let timeout = drop_interval
            .checked_sub(last_drop.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if !game.started() {
                        // Any mapped key leaves the start screen.
                        if action_for_key(key).is_some() {
                            game.start();
                            playlist.start();
                            last_drop = Instant::now();
                            if let Some(active) = game.active() {
                                log::info!("game started, first piece {}", active.kind.as_str());
                            }
                        }
                    } else if let Some(action) = action_for_key(key) {
                        log::debug!("key action {}", action.as_str());
                        let locked = game.apply_action(action);
                        log_lock_event(locked);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // At most one gravity step per iteration.
        if game.started() && last_drop.elapsed() >= drop_interval {
            last_drop = Instant::now();
            let locked = game.step_gravity();
            log_lock_event(locked);
        }

        if game.game_over() && !game_over_logged {
            game_over_logged = true;
            log::info!("game over, final score {}", game.score());
        }

        playlist.poll();
    }

    playlist.stop();
    Ok(())
}

fn log_lock_event(event: Option<LockEvent>) {
    if let Some(event) = event {
        if event.lines_cleared > 0 {
            log::info!(
                "cleared {} line(s), +{} points",
                event.lines_cleared,
                event.score_awarded
            );
        }
    }
}
