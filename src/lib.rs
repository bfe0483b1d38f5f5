//! Alien Invasion game rules.
//!
//! The library is the whole simulation: entity data, the fleet layout and the
//! per-tick update.  It knows nothing about terminals or clocks; the binary
//! feeds it input intents and renders whatever state comes back.

pub mod compute;
pub mod entities;
pub mod fleet;
pub mod rect;
pub mod settings;
