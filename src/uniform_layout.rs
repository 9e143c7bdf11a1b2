//! # Uniform Layout Module
//!
//! This module answers the two questions a uniform block writer needs to ask a shader
//! program: how many bytes does a named uniform block occupy, and where inside that block
//! does a named member live.
//!
//! ## Overview
//!
//! - [`UniformReflection`] is the query seam. Anything that can resolve a block size and
//!   a member's `(offset, size)` can back a [`UboWriter`](crate::UboWriter).
//! - [`ShaderProgram`] implements it for WGSL source. The source is parsed and validated
//!   with `naga`, and every offset and size comes from naga's layouter, so the numbers are
//!   the ones the GPU will use. No layout rule is re-derived here.
//! - [`StaticLayout`] implements it from a hand-written table, for layouts that come from
//!   somewhere other than WGSL.
//!
//! ## Member paths
//!
//! A member is named by its path inside the block, without the block name:
//!
//! - `light_dir` names a top-level member.
//! - `material.albedo` walks into a nested struct.
//! - `lights[2]` and `lights[2].color` index into a fixed-size array using its stride.
//!
//! Runtime-sized arrays, out-of-range indices and unknown names all resolve to `None`.
//!
//! ## Example
//!
//! ```rust
//! use gfx_util::{ShaderProgram, UniformReflection};
//!
//! let program = ShaderProgram::from_wgsl(
//!     "example",
//!     "struct MyBlock { X: i32, @align(16) Y: f32 }
//!      @group(0) @binding(0) var<uniform> block: MyBlock;",
//! )
//! .unwrap();
//!
//! assert_eq!(program.block_size("MyBlock"), Some(32));
//! assert_eq!(program.member("MyBlock", "Y").map(|m| m.offset), Some(16));
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::UboError;

/// Byte placement of one member inside a uniform block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberLayout {
    /// Offset from the start of the block.
    pub offset: u32,
    /// Bytes occupied by the member itself, excluding trailing padding.
    pub size: u32,
}

/// Layout queries a uniform block writer issues against a shader program.
pub trait UniformReflection {
    /// Total byte size of the named uniform block, or `None` if the program has no such block.
    fn block_size(&self, block: &str) -> Option<u32>;

    /// Placement of the member at `path` inside `block`, or `None` if either is unknown.
    fn member(&self, block: &str, path: &str) -> Option<MemberLayout>;
}

impl<R: UniformReflection + ?Sized> UniformReflection for &R {
    fn block_size(&self, block: &str) -> Option<u32> {
        (**self).block_size(block)
    }

    fn member(&self, block: &str, path: &str) -> Option<MemberLayout> {
        (**self).member(block, path)
    }
}

impl<R: UniformReflection + ?Sized> UniformReflection for Arc<R> {
    fn block_size(&self, block: &str) -> Option<u32> {
        (**self).block_size(block)
    }

    fn member(&self, block: &str, path: &str) -> Option<MemberLayout> {
        (**self).member(block, path)
    }
}

/// A validated WGSL module together with its computed type layouts.
///
/// Uniform blocks are the `var<uniform>` globals of the module. A block can be named
/// either by its struct type (`MyBlock`) or by its variable (`block`); the type name is
/// tried first. When several uniforms share a struct type, only their variable names
/// resolve.
pub struct ShaderProgram {
    label: String,
    source: String,
    module: naga::Module,
    layouter: naga::proc::Layouter,
}

impl ShaderProgram {
    /// Parses, validates and lays out `source`.
    ///
    /// `label` is only used in error messages and as the `wgpu` shader module label.
    pub fn from_wgsl(label: &str, source: &str) -> Result<Self, UboError> {
        let shader_error = |message: String| UboError::Shader {
            label: label.to_string(),
            message,
        };

        let module = naga::front::wgsl::parse_str(source)
            .map_err(|e| shader_error(e.emit_to_string(source)))?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .map_err(|e| shader_error(e.emit_to_string(source)))?;

        let mut layouter = naga::proc::Layouter::default();
        layouter
            .update(module.to_ctx())
            .map_err(|e| shader_error(e.to_string()))?;

        log::debug!(
            "shader `{label}`: {} uniform block(s)",
            module
                .global_variables
                .iter()
                .filter(|(_, var)| var.space == naga::AddressSpace::Uniform)
                .count()
        );

        Ok(Self {
            label: label.to_string(),
            source: source.to_string(),
            module,
            layouter,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn module(&self) -> &naga::Module {
        &self.module
    }

    /// `@group`/`@binding` of the named block, if it declares one.
    pub fn block_binding(&self, block: &str) -> Option<naga::ResourceBinding> {
        self.find_block(block)
            .and_then(|var| var.binding.clone())
    }

    /// Names of every uniform block type in declaration order.
    pub fn block_names(&self) -> Vec<&str> {
        self.uniform_globals()
            .filter_map(|var| {
                self.module.types[var.ty]
                    .name
                    .as_deref()
                    .or(var.name.as_deref())
            })
            .collect()
    }

    /// Creates the `wgpu` shader module for this program.
    pub fn create_shader_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&self.label),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(&self.source)),
        })
    }

    fn uniform_globals(&self) -> impl Iterator<Item = &naga::GlobalVariable> {
        self.module
            .global_variables
            .iter()
            .map(|(_, var)| var)
            .filter(|var| var.space == naga::AddressSpace::Uniform)
    }

    /// A type name shared by several uniforms is ambiguous and resolves to nothing;
    /// those blocks are addressed by variable name.
    fn find_block(&self, block: &str) -> Option<&naga::GlobalVariable> {
        let mut by_type = self
            .uniform_globals()
            .filter(|var| self.module.types[var.ty].name.as_deref() == Some(block));
        match (by_type.next(), by_type.next()) {
            (Some(var), None) => Some(var),
            (Some(_), Some(_)) => {
                log::warn!(
                    "shader `{}`: several uniforms have type `{block}`; use a variable name",
                    self.label
                );
                None
            }
            (None, _) => self
                .uniform_globals()
                .find(|var| var.name.as_deref() == Some(block)),
        }
    }

    fn struct_members(&self, ty: naga::Handle<naga::Type>) -> Option<&[naga::StructMember]> {
        match &self.module.types[ty].inner {
            naga::TypeInner::Struct { members, .. } => Some(members),
            _ => None,
        }
    }
}

impl UniformReflection for ShaderProgram {
    fn block_size(&self, block: &str) -> Option<u32> {
        let var = self.find_block(block)?;
        match &self.module.types[var.ty].inner {
            naga::TypeInner::Struct { span, .. } => Some(*span),
            _ => None,
        }
    }

    fn member(&self, block: &str, path: &str) -> Option<MemberLayout> {
        let mut ty = self.find_block(block)?.ty;
        let mut offset = 0u32;

        for segment in path.split('.') {
            let (name, indices) = parse_segment(segment)?;

            let member = self
                .struct_members(ty)?
                .iter()
                .find(|m| m.name.as_deref() == Some(name))?;
            offset += member.offset;
            ty = member.ty;

            for index in indices {
                match self.module.types[ty].inner {
                    naga::TypeInner::Array {
                        base,
                        size: naga::ArraySize::Constant(len),
                        stride,
                    } if index < len.get() => {
                        offset += index * stride;
                        ty = base;
                    }
                    _ => return None,
                }
            }
        }

        let layout = MemberLayout {
            offset,
            size: self.layouter[ty].size,
        };
        log::trace!("`{block}.{path}` -> {layout:?}");
        Some(layout)
    }
}

impl std::fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("label", &self.label)
            .field("blocks", &self.block_names())
            .finish_non_exhaustive()
    }
}

/// Splits `name[1][2]` into `("name", [1, 2])`.
fn parse_segment(segment: &str) -> Option<(&str, Vec<u32>)> {
    let (name, mut rest) = match segment.find('[') {
        Some(open) => segment.split_at(open),
        None => (segment, ""),
    };
    if name.is_empty() {
        return None;
    }

    let mut indices = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        indices.push(inner[..close].trim().parse().ok()?);
        rest = &inner[close + 1..];
    }
    Some((name, indices))
}

/// One block of a [`StaticLayout`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockLayout {
    size: u32,
    members: HashMap<String, MemberLayout>,
}

impl BlockLayout {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            members: HashMap::new(),
        }
    }

    /// Adds a member at `path`. Paths are matched verbatim, so array elements need one
    /// entry each (`lights[0]`, `lights[1]`, ...).
    pub fn with_member(mut self, path: &str, offset: u32, size: u32) -> Self {
        self.members
            .insert(path.to_string(), MemberLayout { offset, size });
        self
    }
}

/// Reflection backed by a fixed table instead of shader source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticLayout {
    blocks: HashMap<String, BlockLayout>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, name: &str, block: BlockLayout) -> Self {
        self.blocks.insert(name.to_string(), block);
        self
    }
}

impl UniformReflection for StaticLayout {
    fn block_size(&self, block: &str) -> Option<u32> {
        self.blocks.get(block).map(|b| b.size)
    }

    fn member(&self, block: &str, path: &str) -> Option<MemberLayout> {
        self.blocks.get(block)?.members.get(path).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHADER: &str = r#"
        struct Material {
            albedo: vec3<f32>,
            roughness: f32,
        }

        struct Light {
            position: vec3<f32>,
            color: vec4<f32>,
        }

        struct Scene {
            mvp: mat4x4<f32>,
            light_count: u32,
            material: Material,
            lights: array<Light, 4>,
            offsets: array<vec4<f32>, 2>,
        }

        struct MyBlock {
            X: i32,
            @align(16) Y: f32,
        }

        @group(0) @binding(0) var<uniform> scene: Scene;
        @group(1) @binding(3) var<uniform> block: MyBlock;

        @vertex
        fn vs_main(@builtin(vertex_index) i: u32) -> @builtin(position) vec4<f32> {
            let base = scene.mvp * vec4<f32>(f32(i), f32(block.X), block.Y, 1.0);
            return base + scene.offsets[0] + scene.lights[0].color
                + vec4<f32>(scene.material.albedo, scene.material.roughness)
                + vec4<f32>(f32(scene.light_count));
        }
    "#;

    fn program() -> ShaderProgram {
        ShaderProgram::from_wgsl("layout-test", SHADER).unwrap()
    }

    #[test]
    fn aligned_member_pads_block() {
        let p = program();
        assert_eq!(p.block_size("MyBlock"), Some(32));
        assert_eq!(p.member("MyBlock", "X"), Some(MemberLayout { offset: 0, size: 4 }));
        assert_eq!(p.member("MyBlock", "Y"), Some(MemberLayout { offset: 16, size: 4 }));
    }

    #[test]
    fn block_found_by_variable_name() {
        let p = program();
        assert_eq!(p.block_size("block"), Some(32));
        assert_eq!(p.member("scene", "light_count").map(|m| m.offset), Some(64));
    }

    #[test]
    fn nested_struct_and_array_paths() {
        let p = program();
        // mvp 0..64, light_count 64, material 80 (align 16), lights 96, offsets 224
        assert_eq!(
            p.member("Scene", "material.roughness"),
            Some(MemberLayout { offset: 92, size: 4 })
        );
        assert_eq!(
            p.member("Scene", "lights[2].color"),
            Some(MemberLayout { offset: 96 + 2 * 32 + 16, size: 16 })
        );
        assert_eq!(
            p.member("Scene", "offsets[1]"),
            Some(MemberLayout { offset: 240, size: 16 })
        );
        assert_eq!(p.member("Scene", "lights").map(|m| m.size), Some(128));
        assert_eq!(p.block_size("Scene"), Some(256));
    }

    #[test]
    fn unknown_paths_resolve_to_none() {
        let p = program();
        assert_eq!(p.block_size("Missing"), None);
        assert_eq!(p.member("Scene", "nope"), None);
        assert_eq!(p.member("Scene", "lights[4]"), None);
        assert_eq!(p.member("Scene", "light_count[0]"), None);
        assert_eq!(p.member("Scene", "material."), None);
        assert_eq!(p.member("Scene", "lights[x]"), None);
    }

    #[test]
    fn bindings_and_names() {
        let p = program();
        let binding = p.block_binding("MyBlock").unwrap();
        assert_eq!((binding.group, binding.binding), (1, 3));
        assert_eq!(p.block_names(), vec!["Scene", "MyBlock"]);
    }

    #[test]
    fn invalid_source_is_a_shader_error() {
        let err = ShaderProgram::from_wgsl("broken", "struct {").unwrap_err();
        assert!(matches!(err, UboError::Shader { ref label, .. } if label == "broken"));
    }

    #[test]
    fn segment_parsing() {
        assert_eq!(parse_segment("a"), Some(("a", vec![])));
        assert_eq!(parse_segment("a[1][20]"), Some(("a", vec![1, 20])));
        assert_eq!(parse_segment("[1]"), None);
        assert_eq!(parse_segment("a[1"), None);
        assert_eq!(parse_segment("a[1]b"), None);
    }

    #[test]
    fn shared_struct_type_requires_variable_name() {
        let p = ShaderProgram::from_wgsl(
            "two-lights",
            "struct Light { color: vec4<f32> }
             @group(0) @binding(0) var<uniform> sun: Light;
             @group(0) @binding(1) var<uniform> moon: Light;",
        )
        .unwrap();
        assert_eq!(p.block_size("Light"), None);
        assert_eq!(p.block_binding("Light"), None);
        assert_eq!(p.member("Light", "color"), None);
        assert_eq!(p.block_binding("sun").map(|b| b.binding), Some(0));
        assert_eq!(p.block_binding("moon").map(|b| b.binding), Some(1));
        assert_eq!(p.block_size("moon"), Some(16));
    }

    #[test]
    fn static_layout_lookup() {
        let layout = StaticLayout::new().with_block(
            "MyBlock",
            BlockLayout::new(32).with_member("X", 0, 4).with_member("Y", 16, 4),
        );
        assert_eq!(layout.block_size("MyBlock"), Some(32));
        assert_eq!(layout.member("MyBlock", "Y"), Some(MemberLayout { offset: 16, size: 4 }));
        assert_eq!(layout.member("MyBlock", "Z"), None);
        assert_eq!((&layout).block_size("Other"), None);
    }
}
