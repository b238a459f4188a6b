//! Spinning mesh: indexed draw with a depth buffer, a perspective projection
//! and a per-frame uniform block.

mod renderer;

use anyhow::Result;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GpuInit;
use lumen_engine::window::{Runtime, RuntimeConfig};
use lumen_mesh::Spin;
use winit::event::WindowEvent;

use crate::cli::ModelOptions;

pub use renderer::ModelRenderer;

const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.05,
    g: 0.05,
    b: 0.08,
    a: 1.0,
};

struct ModelApp {
    spin: Spin,
    renderer: ModelRenderer,
}

impl App for ModelApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        crate::exit_on_escape(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.spin.advance(ctx.time.dt);
        let model = self.spin.model_matrix();

        let renderer = &mut self.renderer;
        ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target, model))
    }
}

pub fn run(runtime: RuntimeConfig, gpu_init: GpuInit, options: &ModelOptions) -> Result<()> {
    let mesh = crate::assets::load_mesh(options.model.as_deref())?;

    let app = ModelApp {
        spin: Spin::new(options.speed),
        renderer: ModelRenderer::new(mesh),
    };
    Runtime::run(runtime, gpu_init.with_srgb(true), app)
}
