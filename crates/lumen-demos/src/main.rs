use anyhow::Context;
use clap::Parser;
use lumen_engine::core::AppControl;
use lumen_engine::logging::init_logging;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{Key, NamedKey};

mod assets;
mod cli;
mod model;
mod textured_quad;
mod triangle;

use cli::{Demo, ProgramArgs};

fn main() -> anyhow::Result<()> {
    let args = ProgramArgs::parse();
    init_logging(args.logging());

    let runtime = args.runtime();
    let gpu_init = args.gpu_init();
    log::info!("starting {}", runtime.title);

    match args.demo {
        Demo::Triangle => triangle::run(runtime, gpu_init),
        Demo::Model(options) => model::run(runtime, gpu_init, &options),
        Demo::TexturedQuad(options) => textured_quad::run(runtime, gpu_init, &options),
    }
    .context("demo terminated with an error")
}

/// Escape closes the window in every demo.
pub(crate) fn exit_on_escape(event: &WindowEvent) -> AppControl {
    match event {
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    logical_key: Key::Named(NamedKey::Escape),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => AppControl::Exit,
        _ => AppControl::Continue,
    }
}
