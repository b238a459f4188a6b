use winit::dpi::PhysicalSize;

/// Depth buffer that follows the drawable size.
///
/// The texture is created lazily and rebuilt whenever [`ensure`](Self::ensure)
/// sees a new size. Contents are cleared at the start of every pass and never
/// stored.
#[derive(Default)]
pub struct DepthTarget {
    view: Option<wgpu::TextureView>,
    size: PhysicalSize<u32>,
}

impl DepthTarget {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline depth state: write depth, keep fragments strictly closer.
    pub fn depth_stencil_state() -> wgpu::DepthStencilState {
        wgpu::DepthStencilState {
            format: Self::FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }

    /// (Re)creates the depth texture if `size` differs from the current one.
    ///
    /// Returns `true` when a new texture was created.
    pub fn ensure(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) -> bool {
        let size = PhysicalSize::new(size.width.max(1), size.height.max(1));
        if self.view.is_some() && self.size == size {
            return false;
        }

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("lumen depth buffer"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        log::debug!("depth buffer created: {}x{}", size.width, size.height);

        self.view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.size = size;
        true
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Attachment that clears depth to 1.0 and discards it after the pass.
    ///
    /// `None` until [`ensure`](Self::ensure) has run.
    pub fn attachment(&self) -> Option<wgpu::RenderPassDepthStencilAttachment<'_>> {
        let view = self.view.as_ref()?;
        Some(wgpu::RenderPassDepthStencilAttachment {
            view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Discard,
            }),
            stencil_ops: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_state_writes_and_tests_less() {
        let state = DepthTarget::depth_stencil_state();
        assert_eq!(state.format, DepthTarget::FORMAT);
        assert!(state.depth_write_enabled);
        assert_eq!(state.depth_compare, wgpu::CompareFunction::Less);
        assert!(!state.stencil.is_enabled());
    }

    #[test]
    fn new_target_has_no_attachment() {
        let depth = DepthTarget::new();
        assert!(depth.attachment().is_none());
        assert_eq!(depth.size(), PhysicalSize::new(0, 0));
    }
}
