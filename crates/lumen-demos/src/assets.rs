//! Bundled demo assets and their on-disk overrides.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use lumen_mesh::{Mesh, load_obj, parse_obj};

const TORUS_OBJ: &str = include_str!("../assets/torus.obj");
const CHECKER_PNG: &[u8] = include_bytes!("../assets/checker.png");

/// Loads the model demo mesh from `path`, or the bundled torus.
///
/// A mesh without faces is rejected since there would be nothing to draw.
pub fn load_mesh(path: Option<&Path>) -> Result<Mesh> {
    let mesh = match path {
        Some(path) => load_obj(path)
            .with_context(|| format!("failed to load model {}", path.display()))?,
        None => parse_obj(TORUS_OBJ).context("bundled torus model is malformed")?,
    };

    anyhow::ensure!(!mesh.is_empty(), "model contains no faces");

    log::info!(
        "mesh loaded: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Decodes the textured quad image from `path`, or the bundled checkerboard.
///
/// `max_dimension` is the device's `max_texture_dimension_2d`; larger images
/// are rejected here rather than failing texture creation mid-frame.
pub fn load_image(path: Option<&Path>, max_dimension: u32) -> Result<RgbaImage> {
    let image = match path {
        Some(path) => image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?,
        None => image::load_from_memory_with_format(CHECKER_PNG, image::ImageFormat::Png)
            .context("bundled checker texture is malformed")?,
    };

    let image = image.to_rgba8();
    let (width, height) = image.dimensions();
    anyhow::ensure!(
        width.max(height) <= max_dimension,
        "image is {width}x{height}, larger than the {max_dimension}px texture limit"
    );

    log::info!("image loaded: {}x{}", image.width(), image.height());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_limit() -> u32 {
        wgpu::Limits::default().max_texture_dimension_2d
    }

    #[test]
    fn bundled_mesh_is_a_closed_torus() {
        let mesh = load_mesh(None).unwrap();
        assert_eq!(mesh.vertices.len(), 36 * 18);
        assert_eq!(mesh.triangle_count(), 2 * 36 * 18);
        // Every vertex is shared by six faces, so every normal is unit length.
        for v in &mesh.vertices {
            assert!((v.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn bundled_mesh_normals_point_away_from_the_tube() {
        let mesh = load_mesh(None).unwrap();
        let center = glam::Vec3::new(0.0, 1.6, 0.0);
        for v in &mesh.vertices {
            let radial = (v.position - center) * glam::Vec3::new(1.0, 1.0, 0.0);
            let tube = center + radial.normalize() * 1.2;
            assert!(v.normal.dot(v.position - tube) > 0.0);
        }
    }

    #[test]
    fn bundled_image_is_square_power_of_two() {
        let image = load_image(None, default_limit()).unwrap();
        assert_eq!(image.dimensions(), (256, 256));
    }

    #[test]
    fn missing_files_are_reported_with_their_path() {
        let err = load_mesh(Some(Path::new("/nonexistent/model.obj"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/model.obj"));

        let path = Path::new("/nonexistent/texture.png");
        let err = load_image(Some(path), default_limit()).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/texture.png"));
    }

    #[test]
    fn image_wider_than_the_default_texture_limit_is_rejected() {
        let width = default_limit() + 1;
        let path = std::env::temp_dir().join(format!("lumen-wide-{}.png", std::process::id()));
        RgbaImage::new(width, 1).save(&path).unwrap();

        let result = load_image(Some(&path), default_limit());
        let _ = std::fs::remove_file(&path);

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("texture limit"), "{err:#}");
    }

    #[test]
    fn texture_limit_applies_to_either_edge() {
        assert!(load_image(None, 255).is_err());
        assert_eq!(load_image(None, 256).unwrap().dimensions(), (256, 256));
    }
}
