use std::path::PathBuf;

use lumen_engine::device::GpuInit;
use lumen_engine::logging::LoggingConfig;
use lumen_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Spin speed of the model demo in radians per second.
pub const DEFAULT_SPEED: f32 = 0.5;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Demo {
    /// Static untextured triangle.
    Triangle,
    /// Spinning mesh with a depth buffer and perspective projection.
    Model(ModelOptions),
    /// Quad sampled from a mipmapped texture.
    TexturedQuad(TexturedQuadOptions),
}

impl Demo {
    pub fn title(&self) -> &'static str {
        match self {
            Demo::Triangle => "lumen: triangle",
            Demo::Model(_) => "lumen: model",
            Demo::TexturedQuad(_) => "lumen: textured quad",
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ModelOptions {
    /// OBJ file to load instead of the bundled torus.
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Rotation speed in radians per second.
    #[arg(
        long,
        default_value_t = DEFAULT_SPEED,
        allow_negative_numbers = true,
        value_parser = parse_speed
    )]
    pub speed: f32,
}

/// Accepts any finite float; NaN or infinity would poison the spin angle.
fn parse_speed(s: &str) -> Result<f32, String> {
    let speed: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if speed.is_finite() {
        Ok(speed)
    } else {
        Err(format!("speed must be a finite number, got {s}"))
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct TexturedQuadOptions {
    /// PNG or JPEG file to load instead of the bundled checkerboard.
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, clap::Parser)]
#[command(name = "lumen-demos", version, about = "Minimal wgpu demo renderers")]
pub struct ProgramArgs {
    /// Initial window width in logical pixels.
    #[arg(long, global = true, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, global = true, default_value_t = 600)]
    pub height: u32,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Present without waiting for vertical sync.
    #[arg(long, global = true)]
    pub no_vsync: bool,

    #[command(subcommand)]
    pub demo: Demo,
}

impl ProgramArgs {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log.clone(),
            ..LoggingConfig::default()
        }
    }

    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.demo.title().to_string(),
            initial_size: LogicalSize::new(self.width.max(1) as f64, self.height.max(1) as f64),
        }
    }

    /// GPU settings shared by every demo; each demo picks its own color space.
    pub fn gpu_init(&self) -> GpuInit {
        GpuInit::default().with_vsync(!self.no_vsync)
    }
}
