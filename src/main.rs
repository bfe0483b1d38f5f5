mod audio;
mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::compute::{
    fire_bullet, init_state, press_prompt, set_moving_left, set_moving_right, start_game, tick,
};
use alien_invasion::entities::GameState;
use alien_invasion::fleet::fleet_bounds;
use alien_invasion::settings::{Settings, TICKS_PER_SECOND};

const FRAME: Duration = Duration::from_micros(1_000_000 / TICKS_PER_SECOND as u64);

// ── Held-key detection ────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: Left/Right are tracked in a `key_frame` map holding the
/// frame of the last press/repeat event for each key, and the ship's intent
/// flags are rebuilt from it every frame.  Terminals with keyboard
/// enhancement send `Release` and the key drops out at once; classic
/// terminals only repeat `Press`, so keys expire after `HOLD_WINDOW`
/// silent frames.  Space, Enter and the quit keys act once per press.
fn game_loop<W: Write>(out: &mut W, state: &mut GameState) -> Result<()> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO).context("polling terminal events")? {
            match event::read().context("reading terminal event")? {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code.clone(), frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char(' ') => *state = fire_bullet(state),
                            KeyCode::Enter if !state.status.is_active() => {
                                *state = start_game(state);
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code.clone(), frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    *state = press_prompt(state, column as f32, row as f32);
                }
                Event::Resize(width, height) => {
                    log::warn!(
                        "terminal resized to {width}x{height}; playfield stays {}x{}",
                        state.settings.screen_width,
                        state.settings.screen_height
                    );
                }
                _ => {}
            }
        }

        // ── Apply held-key intents ────────────────────────────────────────────
        let left = is_held(&key_frame, &KeyCode::Left, frame);
        let right = is_held(&key_frame, &KeyCode::Right, frame);
        *state = set_moving_left(state, left);
        *state = set_moving_right(state, right);

        if state.status.is_active() {
            *state = tick(state);
        }

        for cue in std::mem::take(&mut state.cues) {
            audio::play(out, cue).context("playing sound cue")?;
        }
        display::render(out, state).context("rendering frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Refuse terminals that cannot hold a full fleet above the ship.
fn check_fits(settings: &Settings) -> Result<()> {
    let fleet = fleet_bounds(settings);
    let need_width = fleet.right() + settings.alien_width;
    let need_height = fleet.bottom() + settings.ship_height + settings.alien_height;
    ensure!(
        settings.screen_width >= need_width && settings.screen_height >= need_height,
        "terminal is {}x{} cells, the game needs at least {}x{}",
        settings.screen_width,
        settings.screen_height,
        need_width.ceil(),
        need_height.ceil()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let (width, height) = terminal::size().context("querying terminal size")?;
    let settings = Settings::for_screen(width, height);
    check_fits(&settings)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("entering raw mode")?;
    let result = run(&mut out, settings);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, settings: Settings) -> Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    log::info!(
        "playfield {}x{}, keyboard enhancement {}",
        settings.screen_width,
        settings.screen_height,
        if keyboard_enhanced { "on" } else { "off" }
    );

    let mut state = init_state(settings);
    let result = game_loop(out, &mut state);

    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    result
}
