//! Fills the `Light` uniform block of `light.wgsl` by member name and uploads it.
//!
//! Run with `RUST_LOG=gfx_util=trace` to see every member lookup.

use gfx_util::{
    init_logging, FVec3, FVec4, Gpu, GpuConfig, IVec2, LoggingConfig, ShaderProgram, UboWriter,
    UniformBinding,
};

const SHADER_SOURCE: &str = include_str!("light.wgsl");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default());

    let gpu = Gpu::new(&GpuConfig::default())?;
    let program = ShaderProgram::from_wgsl("light", SHADER_SOURCE)?;
    let _module = program.create_shader_module(&gpu.device);

    let binding = UniformBinding::for_block(
        &gpu.device,
        &program,
        "Light",
        wgpu::ShaderStages::VERTEX_FRAGMENT,
    )?;
    log::info!(
        "Light block: {} bytes at binding {}",
        binding.size,
        binding.binding
    );

    let projection = nalgebra_glm::perspective_rh_zo(16.0 / 9.0, 45f32.to_radians(), 0.1, 100.0);
    let view = nalgebra_glm::look_at_rh(
        &nalgebra_glm::vec3(0.0, 2.0, 5.0),
        &nalgebra_glm::vec3(0.0, 0.0, 0.0),
        &nalgebra_glm::Vec3::y(),
    );
    let mvp = projection * view;

    let direction: FVec3 = FVec3::new(-1.0, -2.0, -0.5).normalize();

    let mut writer = UboWriter::new(&program, &binding.buffer, "Light")?;
    writer.write("mvp", &mvp)?;
    writer.write("direction", &direction)?;
    writer.write("intensity", &1.25f32)?;
    writer.write("color", &FVec4::new(1.0, 0.9, 0.7, 1.0))?;
    writer.write("grid", &IVec2::new(8, 8))?;
    writer.upload(&gpu.queue)?;

    // Members resolve once; this write hits the cache.
    writer.write("intensity", &0.5f32)?;
    writer.upload(&gpu.queue)?;

    if let Err(err) = writer.write("shadow_bias", &0.01f32) {
        log::warn!("expected failure: {err}");
    }

    gpu.queue.submit(std::iter::empty());
    log::info!("uploaded {} bytes: {:02x?}", writer.size(), writer.staging()?);

    writer.release();
    Ok(())
}
