//! # UBO Writer Module
//!
//! This module defines [`UboWriter`], a CPU-side staging buffer for one uniform block
//! that is filled member by member using names instead of hand-computed offsets.
//!
//! ## Overview
//!
//! A writer is bound to three things at construction:
//!
//! - **A program**: anything implementing [`UniformReflection`]. It is asked for the block
//!   size once, and for each member's `(offset, size)` the first time that member is
//!   written. Answers are cached per writer, so repeated writes never query again.
//! - **A GPU buffer**: an opaque handle that is only ever passed back to an
//!   [`UniformUpload`] implementation. For `wgpu` that is a `wgpu::Buffer` (owned,
//!   borrowed or shared through `Arc`).
//! - **A block name**: the uniform block inside the program.
//!
//! The staging bytes start zeroed. Writes copy raw bytes into place; nothing reaches the
//! GPU until [`UboWriter::upload`] sends the whole block in a single write at offset 0.
//!
//! ## Ownership
//!
//! A writer cannot be cloned. [`UboWriter::take`] moves the staging state into a new
//! writer and leaves the source empty; [`UboWriter::release`] drops it in place. Every
//! operation on an empty writer fails with [`UboError::UseAfterMove`].
//!
//! ## Example
//!
//! ```rust
//! use gfx_util::{BlockLayout, StaticLayout, UboWriter, UniformUpload, Vec4};
//!
//! struct Recorder;
//! impl UniformUpload for Recorder {
//!     type Buffer = ();
//!     fn write_buffer(&self, _: &(), offset: u64, data: &[u8]) {
//!         assert_eq!((offset, data.len()), (0, 32));
//!     }
//! }
//!
//! let layout = StaticLayout::new().with_block(
//!     "Light",
//!     BlockLayout::new(32).with_member("color", 16, 16),
//! );
//! let mut writer = UboWriter::new(&layout, (), "Light").unwrap();
//! writer.write("color", &Vec4::new(1.0f32, 0.5, 0.25, 1.0)).unwrap();
//! writer.upload(&Recorder).unwrap();
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use crate::{MemberLayout, UboError, UniformReflection};

/// Destination of a block upload.
///
/// Implemented for `wgpu::Queue`. The writer never inspects the buffer handle; it only
/// hands it back here together with the bytes.
pub trait UniformUpload {
    type Buffer;

    /// Copies `data` into `buffer` starting at byte `offset`.
    fn write_buffer(&self, buffer: &Self::Buffer, offset: u64, data: &[u8]);
}

impl UniformUpload for wgpu::Queue {
    type Buffer = wgpu::Buffer;

    fn write_buffer(&self, buffer: &wgpu::Buffer, offset: u64, data: &[u8]) {
        wgpu::Queue::write_buffer(self, buffer, offset, data);
    }
}

struct WriterState<P, B> {
    program: P,
    buffer: B,
    block: String,
    staging: Vec<u8>,
    members: HashMap<String, MemberLayout>,
}

impl<P: UniformReflection, B> WriterState<P, B> {
    fn resolve(&mut self, member: &str) -> Result<MemberLayout, UboError> {
        if let Some(layout) = self.members.get(member) {
            return Ok(*layout);
        }

        let not_found = || UboError::MemberNotFound {
            block: self.block.clone(),
            member: member.to_string(),
        };

        let Some(layout) = self.program.member(&self.block, member) else {
            log::warn!("uniform block `{}` has no member `{member}`", self.block);
            return Err(not_found());
        };
        if layout.offset as usize + layout.size as usize > self.staging.len() {
            log::warn!(
                "member `{member}` ({layout:?}) lies outside uniform block `{}` ({} bytes)",
                self.block,
                self.staging.len()
            );
            return Err(not_found());
        }

        self.members.insert(member.to_string(), layout);
        Ok(layout)
    }
}

fn byte_range(layout: MemberLayout) -> Range<usize> {
    let start = layout.offset as usize;
    start..start + layout.size as usize
}

/// Named-member writer for one uniform block.
///
/// `P` answers layout queries and `B` is the GPU buffer handle the block is uploaded
/// into.
pub struct UboWriter<P, B> {
    state: Option<WriterState<P, B>>,
}

impl<P: UniformReflection, B> UboWriter<P, B> {
    /// Creates a writer for `block` with a zeroed staging buffer of the block's size.
    ///
    /// Fails with [`UboError::BlockNotFound`] if the program has no such block.
    pub fn new(program: P, buffer: B, block: &str) -> Result<Self, UboError> {
        let Some(size) = program.block_size(block) else {
            log::warn!("uniform block `{block}` not found");
            return Err(UboError::BlockNotFound {
                block: block.to_string(),
            });
        };
        log::debug!("uniform block `{block}`: {size} bytes");

        Ok(Self {
            state: Some(WriterState {
                program,
                buffer,
                block: block.to_string(),
                staging: vec![0; size as usize],
                members: HashMap::new(),
            }),
        })
    }

    /// Copies the bytes of `value` into `member`.
    ///
    /// `T` must have exactly the member's byte size. Vectors, arrays of scalars and
    /// `nalgebra_glm` matrices all qualify.
    pub fn write<T: bytemuck::NoUninit>(&mut self, member: &str, value: &T) -> Result<(), UboError> {
        self.write_bytes(member, bytemuck::bytes_of(value))
    }

    /// Copies `bytes` into `member`. On any error the staging buffer is unchanged.
    pub fn write_bytes(&mut self, member: &str, bytes: &[u8]) -> Result<(), UboError> {
        let state = self.state.as_mut().ok_or(UboError::UseAfterMove)?;
        let layout = state.resolve(member)?;

        if bytes.len() != layout.size as usize {
            return Err(UboError::PayloadSizeMismatch {
                member: member.to_string(),
                expected: layout.size as usize,
                actual: bytes.len(),
            });
        }

        state.staging[byte_range(layout)].copy_from_slice(bytes);
        Ok(())
    }

    /// Current staged bytes of `member`.
    pub fn read_bytes(&mut self, member: &str) -> Result<&[u8], UboError> {
        let state = self.state.as_mut().ok_or(UboError::UseAfterMove)?;
        let layout = state.resolve(member)?;
        Ok(&state.staging[byte_range(layout)])
    }

    /// Sends the whole staging buffer to the GPU buffer at offset 0.
    pub fn upload<Q>(&self, queue: &Q) -> Result<(), UboError>
    where
        Q: UniformUpload,
        B: Borrow<Q::Buffer>,
    {
        let state = self.state.as_ref().ok_or(UboError::UseAfterMove)?;
        log::debug!(
            "uploading uniform block `{}` ({} bytes)",
            state.block,
            state.staging.len()
        );
        queue.write_buffer(state.buffer.borrow(), 0, &state.staging);
        Ok(())
    }
}

impl<P, B> UboWriter<P, B> {
    /// The full staging buffer.
    pub fn staging(&self) -> Result<&[u8], UboError> {
        self.state
            .as_ref()
            .map(|s| s.staging.as_slice())
            .ok_or(UboError::UseAfterMove)
    }

    /// Block size in bytes, or 0 once the state has been moved out or released.
    pub fn size(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.staging.len())
    }

    pub fn block_name(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.block.as_str())
    }

    pub fn buffer(&self) -> Option<&B> {
        self.state.as_ref().map(|s| &s.buffer)
    }

    /// `false` after [`take`](Self::take) or [`release`](Self::release).
    pub fn is_live(&self) -> bool {
        self.state.is_some()
    }

    /// Moves the staging state into a new writer, leaving this one empty.
    pub fn take(&mut self) -> Self {
        Self {
            state: self.state.take(),
        }
    }

    /// Drops the staging buffer, member cache, program and buffer handle.
    pub fn release(&mut self) {
        if let Some(state) = self.state.take() {
            log::debug!("released uniform block writer for `{}`", state.block);
        }
    }
}

impl<P, B> fmt::Debug for UboWriter<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => f
                .debug_struct("UboWriter")
                .field("block", &state.block)
                .field("size", &state.staging.len())
                .field("cached_members", &state.members.len())
                .finish(),
            None => f.write_str("UboWriter(<moved>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{BlockLayout, StaticLayout, Vec2, Vec4};

    /// Counts member queries so cache hits are observable.
    struct Counting {
        inner: StaticLayout,
        member_queries: Cell<usize>,
    }

    impl UniformReflection for Counting {
        fn block_size(&self, block: &str) -> Option<u32> {
            self.inner.block_size(block)
        }

        fn member(&self, block: &str, path: &str) -> Option<MemberLayout> {
            self.member_queries.set(self.member_queries.get() + 1);
            self.inner.member(block, path)
        }
    }

    fn layout() -> StaticLayout {
        StaticLayout::new().with_block(
            "MyBlock",
            BlockLayout::new(32)
                .with_member("X", 0, 4)
                .with_member("Y", 16, 4)
                .with_member("uv", 8, 8)
                .with_member("broken", 30, 4),
        )
    }

    #[test]
    fn new_writer_is_zeroed() {
        let layout = layout();
        let writer = UboWriter::new(&layout, (), "MyBlock").unwrap();
        assert_eq!(writer.size(), 32);
        assert_eq!(writer.staging().unwrap(), &[0u8; 32][..]);
        assert_eq!(writer.block_name(), Some("MyBlock"));
    }

    #[test]
    fn unknown_block_fails_construction() {
        let err = UboWriter::new(layout(), (), "Other").unwrap_err();
        assert_eq!(err, UboError::BlockNotFound { block: "Other".into() });
    }

    #[test]
    fn writes_land_at_member_offsets() {
        let mut writer = UboWriter::new(layout(), (), "MyBlock").unwrap();
        writer.write("X", &7i32).unwrap();
        writer.write("Y", &1.5f32).unwrap();
        writer.write("uv", &Vec2::new(0.25f32, 0.75)).unwrap();

        let staging = writer.staging().unwrap();
        assert_eq!(&staging[0..4], &7i32.to_ne_bytes());
        assert_eq!(&staging[16..20], &1.5f32.to_ne_bytes());
        assert_eq!(&staging[8..12], &0.25f32.to_ne_bytes());
        assert_eq!(&staging[4..8], &[0; 4]);
        assert_eq!(writer.read_bytes("Y").unwrap(), &1.5f32.to_ne_bytes());
    }

    #[test]
    fn member_queries_are_cached() {
        let program = Counting {
            inner: layout(),
            member_queries: Cell::new(0),
        };
        let mut writer = UboWriter::new(&program, (), "MyBlock").unwrap();
        for i in 0..5 {
            writer.write("X", &(i as i32)).unwrap();
        }
        writer.read_bytes("X").unwrap();
        assert_eq!(program.member_queries.get(), 1);

        // Misses are not cached.
        assert!(writer.write("Z", &0i32).is_err());
        assert!(writer.write("Z", &0i32).is_err());
        assert_eq!(program.member_queries.get(), 3);
    }

    #[test]
    fn failed_writes_leave_staging_unchanged() {
        let mut writer = UboWriter::new(layout(), (), "MyBlock").unwrap();
        writer.write("X", &3i32).unwrap();
        let before = writer.staging().unwrap().to_vec();

        assert_eq!(
            writer.write("Z", &1i32),
            Err(UboError::MemberNotFound {
                block: "MyBlock".into(),
                member: "Z".into()
            })
        );
        assert_eq!(
            writer.write("X", &Vec4::new(1.0f32, 2.0, 3.0, 4.0)),
            Err(UboError::PayloadSizeMismatch {
                member: "X".into(),
                expected: 4,
                actual: 16
            })
        );
        assert!(matches!(
            writer.write("broken", &1u32),
            Err(UboError::MemberNotFound { .. })
        ));
        assert_eq!(writer.staging().unwrap(), before.as_slice());
    }

    #[test]
    fn take_and_release_empty_the_writer() {
        let mut first = UboWriter::new(layout(), (), "MyBlock").unwrap();
        first.write("X", &9i32).unwrap();

        let mut second = first.take();
        assert!(!first.is_live());
        assert_eq!(first.size(), 0);
        assert_eq!(first.write("X", &1i32), Err(UboError::UseAfterMove));
        assert_eq!(first.staging(), Err(UboError::UseAfterMove));
        assert_eq!(second.read_bytes("X").unwrap(), &9i32.to_ne_bytes());

        second.release();
        assert_eq!(second.size(), 0);
        assert_eq!(second.read_bytes("X"), Err(UboError::UseAfterMove));
        assert_eq!(format!("{second:?}"), "UboWriter(<moved>)");
    }
}
