use image::imageops::FilterType;
use image::RgbaImage;

/// Number of mip levels in a full chain down to 1x1:
/// `floor(log2(max(width, height))) + 1`.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Builds a full mip chain on the CPU. Level 0 is `base` itself; each
/// following level halves both dimensions (never below 1) and is filtered
/// from the previous one.
pub fn mip_chain(base: &RgbaImage) -> Vec<RgbaImage> {
    let levels = mip_level_count(base.width(), base.height()) as usize;
    let mut chain = Vec::with_capacity(levels);
    chain.push(base.clone());

    while chain.len() < levels {
        let Some(prev) = chain.last() else { break };
        let width = (prev.width() / 2).max(1);
        let height = (prev.height() / 2).max(1);
        let next = image::imageops::resize(prev, width, height, FilterType::Triangle);
        chain.push(next);
    }

    chain
}

/// 2D RGBA8 texture with a complete mip chain and a trilinear sampler.
pub struct MipmappedTexture {
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    mip_levels: u32,
}

impl MipmappedTexture {
    /// Uploads `image` and its generated mip levels.
    ///
    /// `srgb` selects `Rgba8UnormSrgb` over `Rgba8Unorm`.
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        srgb: bool,
        label: &str,
    ) -> Self {
        let chain = mip_chain(image);
        let mip_levels = chain.len() as u32;
        let format = if srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: image.width(),
                height: image.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: mip_levels,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (level, mip) in chain.iter().enumerate() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                mip.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * mip.width()),
                    rows_per_image: Some(mip.height()),
                },
                wgpu::Extent3d {
                    width: mip.width(),
                    height: mip.height(),
                    depth_or_array_layers: 1,
                },
            );
        }

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        log::debug!(
            "texture \"{label}\" uploaded: {}x{}, {mip_levels} mip levels",
            image.width(),
            image.height()
        );

        Self {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
            sampler,
            mip_levels,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    pub fn mip_levels(&self) -> u32 {
        self.mip_levels
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn level_count_covers_down_to_one_pixel() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(2, 2), 2);
        assert_eq!(mip_level_count(256, 256), 9);
        assert_eq!(mip_level_count(300, 200), 9);
        assert_eq!(mip_level_count(1, 1024), 11);
    }

    #[test]
    fn zero_size_counts_as_one_level() {
        assert_eq!(mip_level_count(0, 0), 1);
    }

    #[test]
    fn chain_halves_each_dimension_independently() {
        let chain = mip_chain(&RgbaImage::new(8, 4));
        let sizes: Vec<_> = chain.iter().map(|m| m.dimensions()).collect();
        assert_eq!(sizes, vec![(8, 4), (4, 2), (2, 1), (1, 1)]);
    }

    #[test]
    fn chain_keeps_uniform_color() {
        let base = RgbaImage::from_pixel(16, 16, Rgba([200, 40, 10, 255]));
        for mip in mip_chain(&base) {
            assert_eq!(*mip.get_pixel(0, 0), Rgba([200, 40, 10, 255]));
        }
    }

    #[test]
    fn chain_averages_fine_detail() {
        let base = RgbaImage::from_fn(2, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let chain = mip_chain(&base);
        assert_eq!(chain.len(), 2);

        let gray = chain[1].get_pixel(0, 0)[0];
        assert!((100..=155).contains(&gray), "expected mid gray, got {gray}");
    }
}
