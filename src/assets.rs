//! Start-up asset loading
//!
//! All assets come from fixed paths relative to the working directory and
//! are loaded once. A missing or broken asset is logged and left as `None`;
//! the game runs without it.

use std::path::Path;
use std::sync::Arc;

use crate::error::AssetError;

pub const FONT_PATH: &str = "./fonts/subatomic.ttf";
pub const LASER_SOUND_PATH: &str = "./sounds/laser.wav";
pub const EXPLOSION_SOUND_PATH: &str = "./sounds/explosion.wav";
pub const MUSIC_PATH: &str = "./sounds/music.ogg";

/// Sprite images, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Ship,
    Laser,
    Asteroid,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::Background,
        Sprite::Ship,
        Sprite::Laser,
        Sprite::Asteroid,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Background => "./graphics/background.png",
            Sprite::Ship => "./graphics/ship.png",
            Sprite::Laser => "./graphics/laser.png",
            Sprite::Asteroid => "./graphics/asteroid.png",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Decoded RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Encoded audio file contents, decoded at play time
pub type SoundBytes = Arc<[u8]>;

/// Everything loaded at start-up
#[derive(Default)]
pub struct Assets {
    pub font: Option<fontdue::Font>,
    sprites: [Option<SpriteImage>; 4],
    pub laser_sound: Option<SoundBytes>,
    pub explosion_sound: Option<SoundBytes>,
    pub music: Option<SoundBytes>,
}

impl Assets {
    /// Load every asset from its fixed path
    pub fn load() -> Self {
        let mut assets = Self {
            font: or_warn(load_font(Path::new(FONT_PATH))),
            laser_sound: or_warn(load_sound(Path::new(LASER_SOUND_PATH))),
            explosion_sound: or_warn(load_sound(Path::new(EXPLOSION_SOUND_PATH))),
            music: or_warn(load_sound(Path::new(MUSIC_PATH))),
            ..Default::default()
        };
        for sprite in Sprite::ALL {
            assets.sprites[sprite.index()] = or_warn(load_image(Path::new(sprite.path())));
        }

        let loaded = assets.sprites.iter().filter(|s| s.is_some()).count();
        log::info!(
            "Loaded {}/{} sprites, font: {}, sounds: {}",
            loaded,
            Sprite::ALL.len(),
            assets.font.is_some(),
            [&assets.laser_sound, &assets.explosion_sound, &assets.music]
                .iter()
                .filter(|s| s.is_some())
                .count()
        );
        assets
    }

    pub fn sprite(&self, sprite: Sprite) -> Option<&SpriteImage> {
        self.sprites[sprite.index()].as_ref()
    }
}

fn or_warn<T>(result: Result<T, AssetError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

fn read(path: &Path) -> Result<Vec<u8>, AssetError> {
    std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_image(path: &Path) -> Result<SpriteImage, AssetError> {
    let bytes = read(path)?;
    decode_image(&bytes, path)
}

pub fn decode_image(bytes: &[u8], path: &Path) -> Result<SpriteImage, AssetError> {
    let image = image::load_from_memory(bytes)
        .map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    Ok(SpriteImage {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

pub fn load_font(path: &Path) -> Result<fontdue::Font, AssetError> {
    let bytes = read(path)?;
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(|reason| {
        AssetError::Font {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    })
}

pub fn load_sound(path: &Path) -> Result<SoundBytes, AssetError> {
    Ok(read(path)?.into())
}
