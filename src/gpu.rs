//! # GPU Management Module
//!
//! The `gpu` module acquires the `wgpu` device and queue that uniform bindings are created
//! on and uploaded through.
//!
//! ## Overview
//!
//! [`Gpu`] is headless: it requests an adapter without a compatible surface, so it works
//! in tools, tests and compute-only programs as well as inside a renderer that already
//! owns its window. How the adapter is chosen is controlled by [`GpuConfig`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gfx_util::{Gpu, GpuConfig};
//!
//! async fn create_gpu() -> Result<Gpu, gfx_util::GpuError> {
//!     Gpu::new_async(&GpuConfig::default()).await
//! }
//! ```
//!
//! On native targets [`Gpu::new`] blocks on the same future with `pollster`.

use wgpu::InstanceDescriptor;

/// Adapter selection for [`Gpu`].
#[derive(Clone, Debug)]
pub struct GpuConfig {
    /// Backends the instance may use.
    pub backends: wgpu::Backends,
    pub power_preference: wgpu::PowerPreference,
    /// Only accept a software adapter. Useful on CI machines without a GPU.
    pub force_fallback_adapter: bool,
    /// Label of the created device.
    pub label: String,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            label: "gfx-util device".to_string(),
        }
    }
}

/// Failure to acquire a device.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request a device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// The device and queue uniform buffers are created on and written through.
pub struct Gpu {
    pub adapter: wgpu::Adapter,

    /// Creates buffers, bind groups and shader modules.
    pub device: wgpu::Device,

    /// Receives buffer uploads. Implements [`UniformUpload`](crate::UniformUpload).
    pub queue: wgpu::Queue,
}

impl Gpu {
    /// Blocks the current thread until the device is ready.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: &GpuConfig) -> Result<Self, GpuError> {
        pollster::block_on(Self::new_async(config))
    }

    pub async fn new_async(config: &GpuConfig) -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(&InstanceDescriptor {
            backends: config.backends,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: config.power_preference,
                compatible_surface: None,
                force_fallback_adapter: config.force_fallback_adapter,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        log::info!("WGPU Adapter: {:?}", adapter.get_info());
        log::debug!("WGPU Adapter Features: {:#?}", adapter.features());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some(&config.label),
                    memory_hints: wgpu::MemoryHints::default(),
                    required_features: wgpu::Features::default(),
                    #[cfg(not(target_arch = "wasm32"))]
                    required_limits: wgpu::Limits::default().using_resolution(adapter.limits()),
                    #[cfg(all(target_arch = "wasm32", feature = "webgpu"))]
                    required_limits: wgpu::Limits::default().using_resolution(adapter.limits()),
                    #[cfg(all(target_arch = "wasm32", feature = "webgl"))]
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }
}
