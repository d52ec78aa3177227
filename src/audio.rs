//! Audio system using rodio
//!
//! Sound effects are small files decoded on each play; music loops forever
//! on its own sink. Without an output device every call is a no-op.

use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::assets::{Assets, SoundBytes};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Laser leaves the ship
    LaserFire,
    /// Laser destroys an asteroid
    Explosion,
    /// Asteroid hits the ship
    GameOver,
}

impl SoundEffect {
    /// Which sound, if any, a game event triggers
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::LaserFired { .. } => Some(SoundEffect::LaserFire),
            GameEvent::AsteroidDestroyed { .. } => Some(SoundEffect::Explosion),
            GameEvent::ShipDestroyed { .. } => Some(SoundEffect::GameOver),
            GameEvent::AsteroidSpawned { .. } | GameEvent::TimeBonus { .. } => None,
        }
    }
}

/// Output stream plus the handle used to create sinks.
/// The stream must stay alive for anything to be heard.
struct Output {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Audio manager for the game
pub struct AudioManager {
    output: Option<Output>,
    music_sink: Option<Sink>,
    laser: Option<SoundBytes>,
    explosion: Option<SoundBytes>,
    music: Option<SoundBytes>,
    sfx_volume: f32,
    music_volume: f32,
}

impl AudioManager {
    pub fn new(assets: &Assets, settings: &Settings) -> Self {
        let output = match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Output {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                log::warn!("No audio output device ({}) - audio disabled", e);
                None
            }
        };
        Self {
            output,
            music_sink: None,
            laser: assets.laser_sound.clone(),
            explosion: assets.explosion_sound.clone(),
            music: assets.music.clone(),
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        let Some(output) = &self.output else { return };

        let bytes = match effect {
            SoundEffect::LaserFire => &self.laser,
            // Game over reuses the explosion, a little louder
            SoundEffect::Explosion | SoundEffect::GameOver => &self.explosion,
        };
        let Some(bytes) = bytes else { return };

        let volume = match effect {
            SoundEffect::GameOver => (self.sfx_volume * 1.25).min(1.0),
            _ => self.sfx_volume,
        };

        match play_detached(&output.handle, bytes, volume) {
            Ok(()) => {}
            Err(e) => log::warn!("Could not play {:?}: {}", effect, e),
        }
    }

    /// Play whatever sounds this tick's events call for
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    /// Start the background track, looping
    pub fn start_music(&mut self) {
        if self.music_volume <= 0.0 || self.music_sink.is_some() {
            return;
        }
        let (Some(output), Some(music)) = (&self.output, &self.music) else {
            return;
        };

        let result = Sink::try_new(&output.handle)
            .map_err(|e| e.to_string())
            .and_then(|sink| {
                let source = Decoder::new(Cursor::new(music.clone())).map_err(|e| e.to_string())?;
                sink.set_volume(self.music_volume);
                sink.append(source.repeat_infinite());
                Ok(sink)
            });

        match result {
            Ok(sink) => {
                log::info!("Music started");
                self.music_sink = Some(sink);
            }
            Err(e) => log::warn!("Could not start music: {}", e),
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
        }
    }
}

fn play_detached(handle: &OutputStreamHandle, bytes: &SoundBytes, volume: f32) -> Result<(), String> {
    let sink = Sink::try_new(handle).map_err(|e| e.to_string())?;
    let source = Decoder::new(Cursor::new(bytes.clone())).map_err(|e| e.to_string())?;
    sink.set_volume(volume);
    sink.append(source);
    sink.detach();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_sounds() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::LaserFired { slot: 0 }),
            Some(SoundEffect::LaserFire)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::AsteroidDestroyed { laser: 0, asteroid: 1 }),
            Some(SoundEffect::Explosion)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::ShipDestroyed { asteroid: 1 }),
            Some(SoundEffect::GameOver)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::TimeBonus { intervals: 1 }), None);
        assert_eq!(SoundEffect::for_event(&GameEvent::AsteroidSpawned { slot: 0 }), None);
    }
}
