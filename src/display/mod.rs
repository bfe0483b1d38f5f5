/// Rendering layer: all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::compute::{prompt_label, prompt_rect};
use alien_invasion::entities::GameState;
use alien_invasion::rect::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Black;
const C_SHIP: Color = Color::DarkBlue;
const C_ALIEN: Color = Color::DarkGreen;
const C_BUTTON: Color = Color::Rgb { r: 0, g: 135, b: 0 };
const C_BUTTON_TEXT: Color = Color::White;

// ── Sprites (must match the sizes in `Settings`) ──────────────────────────────

const SHIP_SPRITE: [&str; 2] = [" ▲ ", "/█\\"];
const ALIEN_SPRITE: [&str; 2] = ["«▼»", "╚═╝"];
const BULLET_SPRITE: [&str; 1] = ["║"];

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let bg = rgb(state.settings.bg_color);
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let bullet_color = rgb(state.settings.bullet_color);
    for bullet in &state.bullets {
        draw_sprite(out, state, &bullet.rect(), &BULLET_SPRITE, bullet_color)?;
    }
    draw_sprite(out, state, &state.ship.rect(), &SHIP_SPRITE, C_SHIP)?;
    for alien in &state.aliens {
        draw_sprite(out, state, &alien.rect(), &ALIEN_SPRITE, C_ALIEN)?;
    }

    draw_hud(out, state)?;
    draw_prompt(out, state)?;

    out.queue(style::ResetColor)?;
    park_cursor(out, state)?;
    out.flush()?;
    Ok(())
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// World coordinate → terminal cell, or `None` when off screen.
fn cell(v: f32, limit: f32) -> Option<u16> {
    let v = v.round();
    if v < 0.0 || v >= limit {
        None
    } else {
        Some(v as u16)
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Print `rows` with the top-left glyph at `rect`'s corner, clipping any
/// cell that falls outside the screen.
fn draw_sprite<W: Write>(
    out: &mut W,
    state: &GameState,
    rect: &Rect,
    rows: &[&str],
    color: Color,
) -> std::io::Result<()> {
    let width = state.settings.screen_width;
    let height = state.settings.screen_height;
    out.queue(style::SetForegroundColor(color))?;

    for (dy, row) in rows.iter().enumerate() {
        let Some(y) = cell(rect.y + dy as f32, height) else {
            continue;
        };
        for (dx, glyph) in row.chars().enumerate() {
            if glyph == ' ' {
                continue;
            }
            if let Some(x) = cell(rect.x + dx as f32, width) {
                out.queue(cursor::MoveTo(x, y))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

// ── HUD (rows 0–1) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Score: {}", state.stats.score)))?;
    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(Print(format!("Lives: {}", state.stats.ships_left)))?;
    Ok(())
}

// ── Prompt button ─────────────────────────────────────────────────────────────

fn draw_prompt<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (Some(label), Some(rect)) = (prompt_label(state.status), prompt_rect(state)) else {
        return Ok(());
    };

    let x = rect.x as u16;
    let y = rect.y as u16;
    let width = rect.width as usize;
    let blank = " ".repeat(width);
    let text = format!("{:^width$}", label, width = width);

    out.queue(style::SetBackgroundColor(C_BUTTON))?;
    out.queue(style::SetForegroundColor(C_BUTTON_TEXT))?;
    for (row, line) in [blank.as_str(), text.as_str(), blank.as_str()].iter().enumerate() {
        out.queue(cursor::MoveTo(x, y + row as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

/// The text cursor stands in for the pointer: shown over the prompt while a
/// click is expected, hidden during play.
fn park_cursor<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    match prompt_rect(state).filter(|_| state.pointer_visible) {
        Some(rect) => {
            out.queue(cursor::MoveTo(rect.x as u16 + 1, rect.y as u16 + 1))?;
            out.queue(cursor::Show)?;
        }
        None => {
            out.queue(cursor::Hide)?;
        }
    }
    Ok(())
}
