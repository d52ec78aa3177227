//! Frame composition
//!
//! Turns a `GameState` into an ordered list of textured rectangles. Order is
//! z-order: background, ship, lasers, asteroids, score border, score text.
//! Nothing here touches the GPU.

use std::ops::Range;

use super::vertex::{SpriteVertex, quad};
use crate::assets::Sprite;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, Rect};

/// Which texture a draw samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Sprite(Sprite),
    /// Rasterized score text
    Label,
    /// 1x1 white pixel for untextured fills
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCmd {
    pub texture: TextureKey,
    pub rect: Rect,
    pub rgba: [u8; 4],
}

impl DrawCmd {
    fn sprite(sprite: Sprite, rect: Rect) -> Self {
        Self {
            texture: TextureKey::Sprite(sprite),
            rect,
            rgba: [255; 4],
        }
    }
}

/// A run of consecutive vertices sharing one texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub texture: TextureKey,
    pub vertices: Range<u32>,
}

/// Where the score label goes for a given text size: centered horizontally,
/// a fixed distance above the bottom edge
pub fn score_label_rect(text_width: u32, text_height: u32) -> Rect {
    let (w, h) = (text_width as i32, text_height as i32);
    Rect::new(
        WINDOW_WIDTH / 2 - w / 2,
        WINDOW_HEIGHT - SCORE_BOTTOM_OFFSET,
        w,
        h,
    )
}

/// One-pixel outline of `rect` as four thin fills
fn outline(rect: &Rect, rgba: [u8; 4], out: &mut Vec<DrawCmd>) {
    let edges = [
        Rect::new(rect.x, rect.y, rect.w, 1),
        Rect::new(rect.x, rect.bottom() - 1, rect.w, 1),
        Rect::new(rect.x, rect.y, 1, rect.h),
        Rect::new(rect.right() - 1, rect.y, 1, rect.h),
    ];
    out.extend(edges.into_iter().map(|rect| DrawCmd {
        texture: TextureKey::White,
        rect,
        rgba,
    }));
}

/// Compose the frame.
///
/// `label_size` is the pixel size of the rasterized score text, or `None`
/// when there is no font (the label and its border are skipped).
pub fn build_scene(
    state: &GameState,
    settings: &Settings,
    label_size: Option<(u32, u32)>,
) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(64);

    cmds.push(DrawCmd {
        texture: TextureKey::Sprite(Sprite::Background),
        rect: Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT),
        rgba: [255, 255, 255, state.tuning.background_alpha],
    });

    cmds.push(DrawCmd::sprite(Sprite::Ship, state.ship.rect));

    cmds.extend(
        state
            .lasers
            .active()
            .map(|(_, rect)| DrawCmd::sprite(Sprite::Laser, *rect)),
    );

    cmds.extend(
        state
            .asteroids
            .active()
            .map(|(_, rect)| DrawCmd::sprite(Sprite::Asteroid, *rect)),
    );

    if let Some((w, h)) = label_size {
        let label = score_label_rect(w, h);
        if settings.show_score_border {
            for offset in SCORE_BORDER_START..SCORE_BORDER_END {
                outline(&label.expand(offset), [255; 4], &mut cmds);
            }
        }
        cmds.push(DrawCmd {
            texture: TextureKey::Label,
            rect: label,
            rgba: [255; 4],
        });
    }

    cmds
}

/// Flatten draws into one vertex list, merging neighbours that share a
/// texture. Draws for which `has_texture` is false are dropped.
pub fn batch(
    cmds: &[DrawCmd],
    has_texture: impl Fn(TextureKey) -> bool,
) -> (Vec<SpriteVertex>, Vec<Batch>) {
    let mut vertices = Vec::with_capacity(cmds.len() * 6);
    let mut batches: Vec<Batch> = Vec::new();

    for cmd in cmds.iter().filter(|c| has_texture(c.texture)) {
        let start = vertices.len() as u32;
        vertices.extend_from_slice(&quad(&cmd.rect, cmd.rgba));
        let end = vertices.len() as u32;

        match batches.last_mut() {
            Some(last) if last.texture == cmd.texture => last.vertices.end = end,
            _ => batches.push(Batch {
                texture: cmd.texture,
                vertices: start..end,
            }),
        }
    }

    (vertices, batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn state_with_entities() -> GameState {
        let mut state = GameState::new(3, Tuning::default());
        state.lasers.set(0, Rect::new(100, 100, LASER_WIDTH, LASER_HEIGHT));
        state.lasers.set(4, Rect::new(200, 100, LASER_WIDTH, LASER_HEIGHT));
        state
            .asteroids
            .set(1, Rect::new(300, 50, ASTEROID_SIZE, ASTEROID_SIZE));
        state
    }

    #[test]
    fn test_z_order() {
        let state = state_with_entities();
        let cmds = build_scene(&state, &Settings::default(), Some((200, 50)));

        let order: Vec<TextureKey> = cmds.iter().map(|c| c.texture).collect();
        assert_eq!(order[0], TextureKey::Sprite(Sprite::Background));
        assert_eq!(order[1], TextureKey::Sprite(Sprite::Ship));
        assert_eq!(order[2], TextureKey::Sprite(Sprite::Laser));
        assert_eq!(order[3], TextureKey::Sprite(Sprite::Laser));
        assert_eq!(order[4], TextureKey::Sprite(Sprite::Asteroid));
        // Ten outlines of four edges each, then the text on top
        let border = (SCORE_BORDER_END - SCORE_BORDER_START) as usize * 4;
        assert!(order[5..5 + border].iter().all(|k| *k == TextureKey::White));
        assert_eq!(order[5 + border], TextureKey::Label);
        assert_eq!(order.len(), 6 + border);
    }

    #[test]
    fn test_background_alpha_from_tuning() {
        let state = GameState::new(3, Tuning::default());
        let cmds = build_scene(&state, &Settings::default(), None);
        assert_eq!(cmds[0].rgba[3], 200);
        assert_eq!(cmds[0].rect, Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT));
    }

    #[test]
    fn test_no_font_no_label() {
        let state = state_with_entities();
        let cmds = build_scene(&state, &Settings::default(), None);
        assert!(!cmds.iter().any(|c| c.texture == TextureKey::Label));
        assert!(!cmds.iter().any(|c| c.texture == TextureKey::White));
    }

    #[test]
    fn test_border_can_be_disabled() {
        let state = state_with_entities();
        let settings = Settings {
            show_score_border: false,
            ..Default::default()
        };
        let cmds = build_scene(&state, &settings, Some((200, 50)));
        assert!(!cmds.iter().any(|c| c.texture == TextureKey::White));
        assert_eq!(cmds.last().map(|c| c.texture), Some(TextureKey::Label));
    }

    #[test]
    fn test_score_label_placement() {
        let rect = score_label_rect(300, 52);
        assert_eq!(rect, Rect::new(490, WINDOW_HEIGHT - 80, 300, 52));
    }

    #[test]
    fn test_outline_edges() {
        let mut cmds = Vec::new();
        outline(&Rect::new(10, 20, 30, 40), [255; 4], &mut cmds);
        let rects: Vec<Rect> = cmds.iter().map(|c| c.rect).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(10, 20, 30, 1),
                Rect::new(10, 59, 30, 1),
                Rect::new(10, 20, 1, 40),
                Rect::new(39, 20, 1, 40),
            ]
        );
    }

    #[test]
    fn test_batching_merges_neighbours_and_skips_missing() {
        let state = state_with_entities();
        let cmds = build_scene(&state, &Settings::default(), None);

        let (vertices, batches) = batch(&cmds, |_| true);
        assert_eq!(vertices.len(), cmds.len() * 6);
        let keys: Vec<TextureKey> = batches.iter().map(|b| b.texture).collect();
        assert_eq!(
            keys,
            vec![
                TextureKey::Sprite(Sprite::Background),
                TextureKey::Sprite(Sprite::Ship),
                TextureKey::Sprite(Sprite::Laser),
                TextureKey::Sprite(Sprite::Asteroid),
            ]
        );
        assert_eq!(batches[2].vertices, 12..24);

        // Without a ship texture the ship is simply not drawn
        let (vertices, batches) = batch(&cmds, |k| k != TextureKey::Sprite(Sprite::Ship));
        assert_eq!(vertices.len(), (cmds.len() - 1) * 6);
        assert_eq!(batches.len(), 3);
    }
}
