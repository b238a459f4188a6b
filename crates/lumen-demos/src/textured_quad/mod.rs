//! Textured quad: a four-vertex triangle strip sampling a mipmapped texture.
//!
//! The surface and the texture are both linear (`*Unorm`), so texel values
//! reach the display unconverted.

mod renderer;

use anyhow::Result;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GpuInit;
use lumen_engine::window::{Runtime, RuntimeConfig};
use winit::event::WindowEvent;

use crate::cli::TexturedQuadOptions;

pub use renderer::TexturedQuadRenderer;

const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.12,
    a: 1.0,
};

struct TexturedQuadApp {
    renderer: TexturedQuadRenderer,
}

impl App for TexturedQuadApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        crate::exit_on_escape(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let renderer = &mut self.renderer;
        ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target))
    }
}

pub fn run(runtime: RuntimeConfig, gpu_init: GpuInit, options: &TexturedQuadOptions) -> Result<()> {
    let max_dimension = gpu_init.required_limits.max_texture_dimension_2d;
    let image = crate::assets::load_image(options.image.as_deref(), max_dimension)?;

    let app = TexturedQuadApp {
        renderer: TexturedQuadRenderer::new(image),
    };
    Runtime::run(runtime, gpu_init.with_srgb(false), app)
}
