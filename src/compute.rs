/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`.  The only thing a
/// transition "emits" is the `SoundCue`s it appends to `state.cues`; the
/// caller drains those and plays them.

use crate::entities::{Bullet, GameState, GameStats, GameStatus, Ship, SoundCue};
use crate::fleet::create_fleet;
use crate::rect::{matched_pairs, Rect};
use crate::settings::{Settings, ALIEN_POINTS};

/// Label of the play prompt before the first game.
pub const PLAY_LABEL: &str = "Play";
/// Label of the prompt once the last ship is lost.
pub const GAME_OVER_LABEL: &str = "Game Over - Click to Restart";

// ── Constructors ─────────────────────────────────────────────────────────────

/// Ship parked at the bottom centre of the screen.
pub fn spawn_ship(settings: &Settings) -> Ship {
    Ship {
        x: (settings.screen_width - settings.ship_width) / 2.0,
        y: settings.screen_height - settings.ship_height,
        width: settings.ship_width,
        height: settings.ship_height,
        moving_left: false,
        moving_right: false,
    }
}

/// Build the session as it looks at launch: full fleet, centred ship and
/// the "Play" prompt waiting to be clicked.
pub fn init_state(settings: Settings) -> GameState {
    GameState {
        ship: spawn_ship(&settings),
        bullets: Vec::new(),
        aliens: create_fleet(&settings),
        stats: GameStats::new(&settings),
        status: GameStatus::Ready,
        fleet_direction: settings.fleet_direction,
        respite_ticks: 0,
        pointer_visible: true,
        cues: Vec::new(),
        frame: 0,
        settings,
    }
}

// ── Session state machine ────────────────────────────────────────────────────

/// Reset stats and the playfield and switch to `Playing`.
pub fn start_game(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.stats = GameStats::new(&next.settings);
    reset_wave(&mut next);
    next.ship = recentred(&next.ship, &next.settings);
    next.respite_ticks = 0;
    next.pointer_visible = false;
    next.status = GameStatus::Playing;
    log::info!("game started with {} ships", next.stats.ships_left);
    next
}

/// The prompt shown for `status`, if any.
pub fn prompt_label(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Ready => Some(PLAY_LABEL),
        GameStatus::Playing => None,
        GameStatus::GameOver => Some(GAME_OVER_LABEL),
    }
}

/// Screen-centred button around the current prompt: three rows tall, the
/// label plus three cells of padding either side.
pub fn prompt_rect(state: &GameState) -> Option<Rect> {
    let label = prompt_label(state.status)?;
    let width = label.chars().count() as f32 + 6.0;
    let height = 3.0;
    let x = ((state.settings.screen_width - width) / 2.0).floor().max(0.0);
    let y = ((state.settings.screen_height - height) / 2.0).floor().max(0.0);
    Some(Rect::new(x, y, width, height))
}

/// A pointer click at `(x, y)`.  Starts a game only when the session is
/// inactive and the click lands on the prompt currently on screen.
pub fn press_prompt(state: &GameState, x: f32, y: f32) -> GameState {
    if state.status.is_active() {
        return state.clone();
    }
    match prompt_rect(state) {
        Some(rect) if rect.contains_point(x, y) => start_game(state),
        _ => state.clone(),
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn set_moving_left(state: &GameState, moving: bool) -> GameState {
    if state.ship.moving_left != moving {
        log_intent("left", moving, state.ship.x);
    }
    GameState {
        ship: Ship {
            moving_left: moving,
            ..state.ship.clone()
        },
        ..state.clone()
    }
}

pub fn set_moving_right(state: &GameState, moving: bool) -> GameState {
    if state.ship.moving_right != moving {
        log_intent("right", moving, state.ship.x);
    }
    GameState {
        ship: Ship {
            moving_right: moving,
            ..state.ship.clone()
        },
        ..state.clone()
    }
}

fn log_intent(side: &str, moving: bool, x: f32) {
    if moving {
        log::debug!("moving {side} from x={x}");
    } else {
        log::debug!("stopped moving {side} at x={x}");
    }
}

/// Fire a bullet from the ship's nose, capped at `bullets_allowed` in
/// flight.  Ignored while inactive or during the post-hit respite.
pub fn fire_bullet(state: &GameState) -> GameState {
    if !state.status.is_active()
        || state.respite_ticks > 0
        || state.bullets.len() >= state.settings.bullets_allowed
    {
        return state.clone();
    }

    let settings = &state.settings;
    let new_bullet = Bullet {
        x: state.ship.x + (state.ship.width - settings.bullet_width) / 2.0,
        y: state.ship.y,
        width: settings.bullet_width,
        height: settings.bullet_height,
    };
    let mut next = state.clone();
    next.bullets.push(new_bullet);
    next.cues.push(SoundCue::BulletFired);
    next
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  Does nothing unless `Playing`;
/// during a respite it only counts the freeze down.
pub fn tick(state: &GameState) -> GameState {
    let mut next = state.clone();
    if !next.status.is_active() {
        return next;
    }
    next.frame += 1;

    if next.respite_ticks > 0 {
        next.respite_ticks -= 1;
        return next;
    }

    update_ship(&mut next);
    update_bullets(&mut next);
    update_aliens(&mut next);
    next
}

/// Resolve a lost ship.  With ships in reserve the wave restarts behind a
/// respite; losing the last one ends the game.
pub fn ship_hit(state: &GameState) -> GameState {
    let mut next = state.clone();
    apply_ship_hit(&mut next);
    next
}

// ── 1. Ship ──────────────────────────────────────────────────────────────────

fn update_ship(state: &mut GameState) {
    let speed = state.settings.ship_speed;
    let right_edge = state.settings.screen_width;
    let ship = &mut state.ship;

    if ship.moving_right && ship.rect().right() < right_edge {
        ship.x += speed;
    }
    if ship.moving_left && ship.rect().left() > 0.0 {
        ship.x -= speed;
    }
}

// ── 2–4. Bullets, hits, wave clear ───────────────────────────────────────────

fn update_bullets(state: &mut GameState) {
    let speed = state.settings.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.y -= speed;
    }
    // Off the top: gone before anything can collide with it
    state.bullets.retain(|b| b.rect().bottom() > 0.0);

    resolve_bullet_hits(state);

    if state.aliens.is_empty() {
        log::info!("wave cleared at score {}", state.stats.score);
        reset_wave(state);
    }
}

fn resolve_bullet_hits(state: &mut GameState) {
    let bullet_rects: Vec<Rect> = state.bullets.iter().map(Bullet::rect).collect();
    let alien_rects: Vec<Rect> = state.aliens.iter().map(|a| a.rect()).collect();
    let pairs = matched_pairs(&bullet_rects, &alien_rects);
    if pairs.is_empty() {
        return;
    }

    let (used_bullets, killed_aliens): (Vec<usize>, Vec<usize>) = pairs.iter().copied().unzip();

    state.bullets = state
        .bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| !used_bullets.contains(i))
        .map(|(_, b)| b.clone())
        .collect();

    state.aliens = state
        .aliens
        .iter()
        .enumerate()
        .filter(|(i, _)| !killed_aliens.contains(i))
        .map(|(_, a)| a.clone())
        .collect();

    let gain = ALIEN_POINTS * pairs.len() as u32;
    state.stats.score = state.stats.score.saturating_add(gain);
    state.cues.push(SoundCue::AlienDestroyed);
}

// ── 5–8. Fleet movement and ship contact ─────────────────────────────────────

fn update_aliens(state: &mut GameState) {
    let settings = &state.settings;

    let at_edge = state
        .aliens
        .iter()
        .any(|a| a.rect().right() >= settings.screen_width || a.rect().left() <= 0.0);
    if at_edge {
        for alien in &mut state.aliens {
            alien.y += settings.fleet_drop_speed;
        }
        state.fleet_direction = state.fleet_direction.reversed();
    }

    let dx = settings.alien_speed * state.fleet_direction.sign();
    for alien in &mut state.aliens {
        alien.x += dx;
    }

    let ship_rect = state.ship.rect();
    let rammed = state.aliens.iter().any(|a| a.rect().overlaps(&ship_rect));
    let landed = state
        .aliens
        .iter()
        .any(|a| a.rect().bottom() >= settings.screen_height);

    // One hit per tick even when both happen together
    if rammed || landed {
        apply_ship_hit(state);
    }
}

fn apply_ship_hit(state: &mut GameState) {
    if state.stats.ships_left == 0 {
        enter_game_over(state);
        return;
    }

    state.stats.ships_left -= 1;
    reset_wave(state);
    state.ship = recentred(&state.ship, &state.settings);
    state.cues.push(SoundCue::ShipDestroyed);
    log::info!("ship hit, {} left", state.stats.ships_left);

    if state.stats.ships_left == 0 {
        enter_game_over(state);
    } else {
        state.respite_ticks = state.settings.respite_ticks;
    }
}

fn enter_game_over(state: &mut GameState) {
    state.status = GameStatus::GameOver;
    state.respite_ticks = 0;
    state.pointer_visible = true;
    log::info!("game over, final score {}", state.stats.score);
}

// ── Shared helpers ───────────────────────────────────────────────────────────

/// Empty the playfield and spawn a full fleet heading the configured way.
fn reset_wave(state: &mut GameState) {
    state.bullets.clear();
    state.aliens = create_fleet(&state.settings);
    state.fleet_direction = state.settings.fleet_direction;
}

/// Same ship moved back to the spawn point; movement intents are kept.
fn recentred(ship: &Ship, settings: &Settings) -> Ship {
    let spawn = spawn_ship(settings);
    Ship {
        x: spawn.x,
        y: spawn.y,
        ..ship.clone()
    }
}
