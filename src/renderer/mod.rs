//! wgpu rendering module
//!
//! Every frame is a list of textured rectangles drawn back to front.

pub mod pipeline;
pub mod scene;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawCmd, TextureKey, build_scene};
pub use text::{LabelBitmap, ScoreLabel};
