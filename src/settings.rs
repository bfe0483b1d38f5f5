//! Per-run tuning.  Nothing in here changes once a game is running; the
//! live fleet direction is kept on `GameState` instead.

/// Simulation rate the frame loop is throttled to.
pub const TICKS_PER_SECOND: u32 = 60;

/// Points for each alien destroyed.
pub const ALIEN_POINTS: u32 = 10;

/// Horizontal heading shared by the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Right,
    Left,
}

impl FleetDirection {
    /// +1.0 for right, -1.0 for left.
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: (u8, u8, u8),

    // ── Ship ─────────────────────────────────────────────────────────────────
    /// Cells per tick.
    pub ship_speed: f32,
    pub ship_width: f32,
    pub ship_height: f32,
    /// Ships at the start of a game.
    pub ship_limit: u32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: (u8, u8, u8),
    pub bullets_allowed: usize,

    // ── Aliens ───────────────────────────────────────────────────────────────
    pub alien_speed: f32,
    pub alien_width: f32,
    pub alien_height: f32,
    /// Rows the whole fleet drops when any alien touches a side.
    pub fleet_drop_speed: f32,
    /// Heading of every freshly generated fleet.
    pub fleet_direction: FleetDirection,

    /// Ticks the simulation stays frozen after the ship is hit (0.5 s).
    pub respite_ticks: u32,
}

impl Settings {
    /// Standard tuning for a screen of `width` × `height` cells.
    pub fn for_screen(width: u16, height: u16) -> Self {
        Settings {
            screen_width: width as f32,
            screen_height: height as f32,
            bg_color: (230, 230, 230),

            ship_speed: 0.375,
            ship_width: 3.0,
            ship_height: 2.0,
            ship_limit: 3,

            bullet_speed: 0.5,
            bullet_width: 1.0,
            bullet_height: 1.0,
            bullet_color: (60, 60, 60),
            bullets_allowed: 3,

            alien_speed: 0.0625,
            alien_width: 3.0,
            alien_height: 2.0,
            fleet_drop_speed: 1.0,
            fleet_direction: FleetDirection::Right,

            respite_ticks: TICKS_PER_SECOND / 2,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::for_screen(80, 24)
    }
}
