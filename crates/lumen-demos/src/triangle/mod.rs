//! Static triangle: one vertex buffer, one pipeline, `draw(0..3)`.

mod renderer;

use anyhow::Result;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GpuInit;
use lumen_engine::window::{Runtime, RuntimeConfig};
use winit::event::WindowEvent;

pub use renderer::TriangleRenderer;

const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

struct TriangleApp {
    renderer: TriangleRenderer,
}

impl App for TriangleApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        crate::exit_on_escape(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let renderer = &mut self.renderer;
        ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target))
    }
}

pub fn run(runtime: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
    let app = TriangleApp {
        renderer: TriangleRenderer::new(),
    };
    Runtime::run(runtime, gpu_init.with_srgb(true), app)
}
