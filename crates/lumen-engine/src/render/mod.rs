//! GPU rendering helpers shared by the demos.
//!
//! Each demo renderer owns its own pipelines and buffers and creates them
//! lazily from the [`RenderCtx`] of the first frame. This module only holds
//! what more than one renderer would otherwise duplicate.

mod ctx;
mod depth;
mod texture;

pub use ctx::{aspect_ratio, load_color_attachment, RenderCtx, RenderTarget};
pub use depth::DepthTarget;
pub use texture::{mip_chain, mip_level_count, MipmappedTexture};
