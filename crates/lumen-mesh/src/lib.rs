//! Model loading and camera math for the lumen demos.
//!
//! This crate has no GPU dependencies so the geometry code can be tested
//! without a device.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`obj`] | `parse_obj`, `load_obj`, `Mesh`, `MeshVertex` |
//! | [`normals`] | face normals and per-vertex accumulation |
//! | [`camera`] | `look_at`, `perspective`, `Spin`, `Matrices` |
//! | [`error`] | `ObjError` |
//!
//! # Quick start
//!
//! ```rust
//! use lumen_mesh::parse_obj;
//!
//! let src = "
//!     v 0 0 0
//!     v 1 0 0
//!     v 0 1 0
//!     f 1 2 3
//! ";
//!
//! let mesh = parse_obj(src).unwrap();
//! assert_eq!(mesh.indices, vec![0, 1, 2]);
//! ```

pub mod camera;
pub mod error;
pub mod normals;
pub mod obj;

pub use camera::{look_at, perspective, Matrices, Spin};
pub use error::ObjError;
pub use obj::{load_obj, parse_obj, Mesh, MeshVertex};
