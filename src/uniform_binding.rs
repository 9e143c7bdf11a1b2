//! # Uniform Binding Module
//!
//! This module defines the `UniformBinding` struct, which owns the `wgpu` resources a
//! single uniform block needs on the GPU: the buffer, the bind group layout and the bind
//! group.
//!
//! ## Overview
//!
//! - **Uniform buffer**: sized to the block, created with `UNIFORM | COPY_DST` usage so it
//!   can be filled from the CPU with `Queue::write_buffer`. `wgpu` zero-initializes it.
//! - **Bind group layout**: a single uniform-buffer entry at the block's binding index,
//!   with `min_binding_size` set to the block size so mismatched pipelines are rejected
//!   at creation time.
//! - **Bind group**: binds the whole buffer at that index.
//!
//! The buffer contents are normally produced by a [`UboWriter`](crate::UboWriter) borrowing
//! [`UniformBinding::buffer`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use gfx_util::{Gpu, GpuConfig, ShaderProgram, UboWriter, UniformBinding};
//!
//! let gpu = Gpu::new(&GpuConfig::default()).unwrap();
//! let program = ShaderProgram::from_wgsl("light", include_str!("../demos/light.wgsl")).unwrap();
//! let binding = UniformBinding::for_block(
//!     &gpu.device,
//!     &program,
//!     "Light",
//!     wgpu::ShaderStages::VERTEX_FRAGMENT,
//! )
//! .unwrap();
//!
//! let mut writer = UboWriter::new(&program, &binding.buffer, "Light").unwrap();
//! writer.write("intensity", &2.0f32).unwrap();
//! writer.upload(&gpu.queue).unwrap();
//! ```

use std::num::NonZeroU64;

use crate::{ShaderProgram, UboError, UniformReflection};

/// GPU-side resources for one uniform block.
pub struct UniformBinding {
    /// The buffer backing the block. Written whole by [`UboWriter::upload`](crate::UboWriter::upload).
    pub buffer: wgpu::Buffer,

    /// Binds [`buffer`](Self::buffer) at the block's binding index.
    pub bind_group: wgpu::BindGroup,

    /// Layout of [`bind_group`](Self::bind_group); pass it to the pipeline layout.
    pub bind_group_layout: wgpu::BindGroupLayout,

    /// Block size in bytes.
    pub size: u64,

    /// The `@binding` index used in both the layout and the bind group.
    pub binding: u32,
}

impl UniformBinding {
    /// Creates a zeroed uniform buffer of `size` bytes and binds it at `binding`.
    ///
    /// # Parameters
    ///
    /// - `device`: creates the buffer, the bind group layout and the bind group.
    /// - `label`: prefix for the debug labels of all three resources.
    /// - `size`: block size in bytes. Zero-sized blocks are not valid uniform bindings.
    /// - `binding`: the `@binding` index the shader declares the block at.
    /// - `visibility`: shader stages that read the block.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        size: u64,
        binding: u32,
        visibility: wgpu::ShaderStages,
    ) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} uniform buffer")),
            size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding,
                visibility,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(size),
                },
                count: None,
            }],
            label: Some(&format!("{label} bind group layout")),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(&format!("{label} bind group")),
        });

        log::debug!("created uniform binding `{label}`: {size} bytes at binding {binding}");

        Self {
            buffer,
            bind_group,
            bind_group_layout,
            size,
            binding,
        }
    }

    /// Creates the binding for a uniform block declared in `program`, using the block's
    /// reflected size and its declared `@binding` index (0 if it declares none).
    pub fn for_block(
        device: &wgpu::Device,
        program: &ShaderProgram,
        block: &str,
        visibility: wgpu::ShaderStages,
    ) -> Result<Self, UboError> {
        let size = program
            .block_size(block)
            .ok_or_else(|| UboError::BlockNotFound {
                block: block.to_string(),
            })?;
        let binding = program.block_binding(block).map_or(0, |b| b.binding);

        Ok(Self::new(device, block, size as u64, binding, visibility))
    }
}
