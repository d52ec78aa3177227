//! Vertex types for textured 2D quads

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::Rect;

/// 2D vertex with position (NDC), texture coordinate and tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl SpriteVertex {
    pub const fn new(position: [f32; 2], uv: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position,
            uv,
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: (2 * std::mem::size_of::<[f32; 2]>()) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert window pixels (origin top-left, y down) to normalized device
/// coordinates (origin center, y up)
pub fn pixel_to_ndc(x: i32, y: i32) -> Vec2 {
    Vec2::new(
        x as f32 / WINDOW_WIDTH as f32 * 2.0 - 1.0,
        1.0 - y as f32 / WINDOW_HEIGHT as f32 * 2.0,
    )
}

/// RGBA8 tint to the float color the shader multiplies with
pub fn tint(rgba: [u8; 4]) -> [f32; 4] {
    rgba.map(|c| c as f32 / 255.0)
}

/// Two triangles covering `rect`, texture mapped edge to edge
pub fn quad(rect: &Rect, rgba: [u8; 4]) -> [SpriteVertex; 6] {
    let tl = pixel_to_ndc(rect.x, rect.y);
    let br = pixel_to_ndc(rect.right(), rect.bottom());
    let color = tint(rgba);

    let top_left = SpriteVertex::new([tl.x, tl.y], [0.0, 0.0], color);
    let top_right = SpriteVertex::new([br.x, tl.y], [1.0, 0.0], color);
    let bottom_left = SpriteVertex::new([tl.x, br.y], [0.0, 1.0], color);
    let bottom_right = SpriteVertex::new([br.x, br.y], [1.0, 1.0], color);

    [
        top_left,
        bottom_left,
        top_right,
        top_right,
        bottom_left,
        bottom_right,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(0, 0), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(WINDOW_WIDTH, WINDOW_HEIGHT), Vec2::new(1.0, -1.0));
        assert_eq!(
            pixel_to_ndc(WINDOW_WIDTH / 2, WINDOW_HEIGHT / 2),
            Vec2::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_attribute_offsets_match_struct_layout() {
        use std::mem::{offset_of, size_of};

        let layout = SpriteVertex::desc();
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(
            offsets,
            vec![
                offset_of!(SpriteVertex, position) as u64,
                offset_of!(SpriteVertex, uv) as u64,
                offset_of!(SpriteVertex, color) as u64,
            ]
        );
        assert_eq!(layout.array_stride, size_of::<SpriteVertex>() as u64);
    }

    #[test]
    fn test_quad_covers_rect() {
        let full = Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT);
        let verts = quad(&full, [255, 255, 255, 200]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == -1.0 || x == 1.0));
        assert!(ys.iter().all(|&y| y == -1.0 || y == 1.0));
        assert!((verts[0].color[3] - 200.0 / 255.0).abs() < 1e-6);
    }
}
