//! Score text rasterization with fontdue
//!
//! The label is one line of white text. Glyph coverage becomes the alpha
//! channel so the texture can be drawn straight over the scene.

use fontdue::Font;

/// Text shown for a score value
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// White RGBA8 text bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl LabelBitmap {
    /// Blank bitmap of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; (width * height * 4) as usize],
        }
    }

    /// Write one glyph's coverage at (x, y), clipping at the edges.
    /// Overlapping glyphs keep the stronger coverage.
    fn blit_coverage(&mut self, x: i32, y: i32, width: usize, coverage: &[u8]) {
        if width == 0 {
            return;
        }
        for (row, line) in coverage.chunks(width).enumerate() {
            let py = y + row as i32;
            if py < 0 || py >= self.height as i32 {
                continue;
            }
            for (col, &alpha) in line.iter().enumerate() {
                let px = x + col as i32;
                if px < 0 || px >= self.width as i32 {
                    continue;
                }
                let i = ((py as u32 * self.width + px as u32) * 4) as usize;
                let texel = &mut self.rgba[i..i + 4];
                texel[..3].copy_from_slice(&[255, 255, 255]);
                texel[3] = texel[3].max(alpha);
            }
        }
    }
}

/// Rasterize a single line of text at `px` pixels.
///
/// The bitmap is as wide as the summed glyph advances and as tall as the
/// font's line height, with the baseline at the ascent.
pub fn rasterize_label(font: &Font, text: &str, px: f32) -> LabelBitmap {
    let (ascent, line_height) = match font.horizontal_line_metrics(px) {
        Some(m) => (m.ascent, m.new_line_size),
        None => (px, px),
    };

    let width: f32 = text
        .chars()
        .map(|ch| font.metrics(ch, px).advance_width)
        .sum();
    let mut bitmap = LabelBitmap::new(width.ceil().max(1.0) as u32, line_height.ceil().max(1.0) as u32);

    let baseline = ascent.round() as i32;
    let mut pen = 0.0f32;
    for ch in text.chars() {
        let (metrics, coverage) = font.rasterize(ch, px);
        let x = pen.round() as i32 + metrics.xmin;
        let y = baseline - metrics.ymin - metrics.height as i32;
        bitmap.blit_coverage(x, y, metrics.width, &coverage);
        pen += metrics.advance_width;
    }

    bitmap
}

/// Score label that re-rasterizes only when the score changes
#[derive(Debug, Default)]
pub struct ScoreLabel {
    score: Option<u32>,
    bitmap: Option<LabelBitmap>,
}

impl ScoreLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the label up to date. Returns the new bitmap when it changed,
    /// `None` when the cached one is still current.
    pub fn update(&mut self, font: &Font, score: u32, px: f32) -> Option<&LabelBitmap> {
        if self.score == Some(score) {
            return None;
        }
        self.score = Some(score);
        self.bitmap = Some(rasterize_label(font, &score_text(score), px));
        self.bitmap.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(1234), "Score: 1234");
    }

    #[test]
    fn test_blank_bitmap_is_transparent() {
        let bitmap = LabelBitmap::new(4, 3);
        assert_eq!(bitmap.rgba.len(), 4 * 3 * 4);
        assert!(bitmap.rgba.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_blit_writes_white_with_coverage() {
        let mut bitmap = LabelBitmap::new(4, 4);
        bitmap.blit_coverage(1, 1, 2, &[10, 20, 30, 40]);
        let texel = |x: u32, y: u32| {
            let i = ((y * 4 + x) * 4) as usize;
            bitmap.rgba[i..i + 4].to_vec()
        };
        assert_eq!(texel(1, 1), vec![255, 255, 255, 10]);
        assert_eq!(texel(2, 2), vec![255, 255, 255, 40]);
        assert_eq!(texel(0, 0), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_blit_clips_and_keeps_stronger_coverage() {
        let mut bitmap = LabelBitmap::new(2, 2);
        bitmap.blit_coverage(-1, -1, 2, &[99, 99, 99, 50]);
        bitmap.blit_coverage(0, 0, 1, &[20]);
        assert_eq!(&bitmap.rgba[..4], &[255, 255, 255, 50]);
        // Nothing else was touched
        assert!(bitmap.rgba[4..].iter().all(|&b| b == 0));
    }
}
