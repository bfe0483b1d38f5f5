/// All game entity types: pure data, no logic beyond bounding boxes.

use crate::rect::Rect;
use crate::settings::{FleetDirection, Settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting on the "Play" prompt.
    Ready,
    Playing,
    /// Out of ships; the restart prompt is showing.
    GameOver,
}

impl GameStatus {
    pub fn is_active(self) -> bool {
        self == GameStatus::Playing
    }
}

/// Fire-and-forget audio events raised by state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    BulletFired,
    AlienDestroyed,
    ShipDestroyed,
}

// ── Player & projectiles ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub score: u32,
    pub ships_left: u32,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        GameStats {
            score: 0,
            ships_left: settings.ship_limit,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole session.  Cloneable so the update functions in `compute` can
/// hand back a new copy instead of mutating the caller's.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub stats: GameStats,
    pub status: GameStatus,
    /// Live heading of the current fleet.
    pub fleet_direction: FleetDirection,
    /// Ticks left in the post-hit freeze; 0 when the simulation runs.
    pub respite_ticks: u32,
    pub pointer_visible: bool,
    /// Cues raised since the adapter last drained them.
    pub cues: Vec<SoundCue>,
    /// Ticks processed while playing.
    pub frame: u64,
}
