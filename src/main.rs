//! Terminal Block Blast runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `blockblast::term`. Configuration comes from `BLOCKBLAST_*`
//! environment variables (see `blockblast::session::Config`).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockblast::core::GameSnapshot;
use blockblast::input::{handle_key_event, mouse_click_position, should_quit, BoardCursor};
use blockblast::session::{Config, Session};
use blockblast::term::{Animations, FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use blockblast::types::GameAction;

fn main() -> Result<()> {
    let config = Config::from_env();
    let mut session = Session::new(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    session.flush();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, config: &Config) -> Result<()> {
    let view = GameView::default();
    let mut cursor = BoardCursor::new();
    let mut anims = Animations::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        let hud = HudView {
            high_score: session.high_score(),
            cursor: Some(cursor.coord()),
        };
        view.render_into(&snap, &hud, &anims, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key).and_then(|cmd| cursor.apply(cmd)) {
                        apply_action(session, &mut anims, action);
                    }
                }
                Event::Mouse(mouse) => {
                    let hit = mouse_click_position(mouse).and_then(|(x, y)| view.hit_test(viewport, x, y));
                    if let Some(coord) = hit {
                        cursor.set(coord);
                        apply_action(session, &mut anims, GameAction::click(coord));
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            session.tick(elapsed_ms);
            anims.advance(elapsed_ms);
        }

        anims.push_events(&session.take_events());
    }
}

fn apply_action(session: &mut Session, anims: &mut Animations, action: GameAction) {
    if action == GameAction::Restart {
        anims.clear();
    }
    session.apply(action);
}
