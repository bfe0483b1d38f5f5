/// Sound output.  The terminal has exactly one voice, the bell, so the
/// destructive cues ring it and firing stays silent.

use std::io::Write;

use crossterm::{style::Print, QueueableCommand};
use alien_invasion::entities::SoundCue;

const BELL: char = '\u{7}';

/// Play one cue.  Fire-and-forget: the bell is queued with the next frame.
pub fn play<W: Write>(out: &mut W, cue: SoundCue) -> std::io::Result<()> {
    log::trace!("sound cue {:?}", cue);
    match cue {
        SoundCue::BulletFired => {}
        SoundCue::AlienDestroyed | SoundCue::ShipDestroyed => {
            out.queue(Print(BELL))?;
        }
    }
    Ok(())
}
