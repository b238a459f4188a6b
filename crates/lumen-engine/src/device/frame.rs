use winit::dpi::PhysicalSize;

/// One acquired swapchain image plus the encoder recording into it.
///
/// Drop or submit it promptly: while the surface texture is alive no further
/// frame can be acquired.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,

    /// Drawable size the surface was configured with when this frame was acquired.
    pub size: PhysicalSize<u32>,
}

impl GpuFrame {
    /// The surface still presents but no longer matches the window exactly
    /// and should be reconfigured after this frame.
    pub fn is_suboptimal(&self) -> bool {
        self.surface_texture.suboptimal
    }
}
