//! # GFX Utility Library
//!
//! This library provides the CPU-side building blocks a `wgpu` renderer needs between its
//! scene code and its shaders: a generic small-vector algebra, and a writer that fills a
//! shader's uniform block by member name and uploads it in one call.
//!
//! ## Modules
//!
//! - [`scalar`]: the [`Scalar`], [`Integral`] and [`Floating`] capability traits that
//!   vector components are constrained by.
//! - [`vector`]: [`Vec2`], [`Vec3`] and [`Vec4`] over any scalar, with arithmetic,
//!   geometry, matrix transforms and conversions to the `[f32; N]` GPU form.
//! - [`math`]: scalar helpers (clamp, lerp, wrap, remap, angle conversion) and
//!   [`reduce_to_rotation`].
//! - [`uniform_layout`]: block and member layout queries ([`UniformReflection`]), answered
//!   from WGSL by [`ShaderProgram`] or from a table by [`StaticLayout`].
//! - [`ubo_writer`]: [`UboWriter`], the named-member staging buffer, and the
//!   [`UniformUpload`] destination trait.
//! - [`uniform_binding`]: the buffer, bind group layout and bind group for one block.
//! - [`gpu`]: headless device and queue acquisition.
//! - [`logging`]: `env_logger` initialization for binaries (native targets only).
//!
//! ## Usage
//!
//! 1. **Compile the shader**: [`ShaderProgram::from_wgsl`] parses and validates WGSL and
//!    computes the layout of every uniform block.
//! 2. **Create the GPU side**: [`UniformBinding::for_block`] sizes a buffer to the block.
//! 3. **Stage values**: [`UboWriter::write`] copies any `bytemuck` plain-old-data value
//!    (vectors from this crate, `nalgebra_glm` matrices, scalars) into a member by name.
//! 4. **Upload**: [`UboWriter::upload`] sends the whole block to the buffer.
//!
//! ## Example
//!
//! ```rust
//! use gfx_util::{ShaderProgram, UboWriter, UniformUpload, Vec3};
//!
//! struct Discard;
//! impl UniformUpload for Discard {
//!     type Buffer = ();
//!     fn write_buffer(&self, _: &(), _: u64, _: &[u8]) {}
//! }
//!
//! let program = ShaderProgram::from_wgsl(
//!     "light",
//!     "struct Light { direction: vec3<f32>, intensity: f32 }
//!      @group(0) @binding(0) var<uniform> light: Light;",
//! )
//! .unwrap();
//!
//! let direction = Vec3::new(1.0f32, -2.0, 0.5).normalize::<f32>();
//! let mut writer = UboWriter::new(&program, (), "Light").unwrap();
//! writer.write("direction", &direction).unwrap();
//! writer.write("intensity", &0.8f32).unwrap();
//! writer.upload(&Discard).unwrap();
//! ```
//!
//! ## Dependencies
//!
//! - `wgpu`: buffers, bind groups and queue uploads.
//! - `naga`: WGSL parsing, validation and uniform layout.
//! - `nalgebra-glm`: matrices, quaternions and vector interop.
//! - `bytemuck`: plain-old-data views of vectors and matrices.
//! - `num-traits`: the numeric bounds behind [`Scalar`].
//! - `serde`: serialization of vectors.
//! - `thiserror`: error types.
//! - `log` and `env_logger`: for logging.

pub mod gpu;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod math;
pub mod scalar;
pub mod ubo_writer;
pub mod uniform_binding;
pub mod uniform_layout;
pub mod vector;

mod error;

pub use crate::error::UboError;
pub use crate::gpu::{Gpu, GpuConfig, GpuError};
#[cfg(not(target_arch = "wasm32"))]
pub use crate::logging::{init_logging, LoggingConfig};
pub use crate::math::reduce_to_rotation;
pub use crate::scalar::{Floating, Integral, Scalar};
pub use crate::ubo_writer::{UboWriter, UniformUpload};
pub use crate::uniform_binding::UniformBinding;
pub use crate::uniform_layout::{
    BlockLayout, MemberLayout, ShaderProgram, StaticLayout, UniformReflection,
};
pub use crate::vector::{
    FVec2, FVec3, FVec4, IVec2, IVec3, IVec4, ParseVectorError, UVec2, UVec3, UVec4, Vec2,
    Vec3, Vec4,
};
