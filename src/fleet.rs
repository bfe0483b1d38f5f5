/// Staggered fleet layout.

use crate::entities::Alien;
use crate::rect::Rect;
use crate::settings::Settings;

pub const FLEET_ROWS: usize = 4;
pub const FLEET_COLUMNS: usize = 8;

/// Horizontal nudge applied to even rows.
const EVEN_ROW_OFFSET: f32 = 1.0;

/// Top-left corners of a fresh fleet, row by row, for aliens of the given
/// size.  Odd rows shift right by three quarters of an alien width so
/// neighbouring rows interleave.
pub fn fleet_positions(alien_width: f32, alien_height: f32) -> Vec<(f32, f32)> {
    let x_spacing = alien_width * 2.5;
    let y_spacing = alien_height * 2.0;

    let mut positions = Vec::with_capacity(FLEET_ROWS * FLEET_COLUMNS);
    for row in 0..FLEET_ROWS {
        let offset = if row % 2 == 0 {
            EVEN_ROW_OFFSET
        } else {
            alien_width * 0.75
        };
        let y = alien_height + row as f32 * y_spacing;
        for col in 0..FLEET_COLUMNS {
            positions.push((alien_width + offset + col as f32 * x_spacing, y));
        }
    }
    positions
}

pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    fleet_positions(settings.alien_width, settings.alien_height)
        .into_iter()
        .map(|(x, y)| Alien {
            x,
            y,
            width: settings.alien_width,
            height: settings.alien_height,
        })
        .collect()
}

/// Smallest rect covering a freshly spawned fleet.
pub fn fleet_bounds(settings: &Settings) -> Rect {
    let positions = fleet_positions(settings.alien_width, settings.alien_height);
    let (min_x, min_y, max_x, max_y) = positions.iter().fold(
        (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
        |(lx, ly, hx, hy), &(x, y)| {
            (
                lx.min(x),
                ly.min(y),
                hx.max(x + settings.alien_width),
                hy.max(y + settings.alien_height),
            )
        },
    );
    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}
