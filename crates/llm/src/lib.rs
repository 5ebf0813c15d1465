//! AI scene-generation client abstraction for Voxelsmith
//!
//! The editor asks a language model for a voxel sculpture from a text
//! prompt. This crate provides:
//!
//! - **Client abstraction**: a provider-agnostic [`SceneGenerator`] trait
//! - **Wire types**: [`GenerationRequest`] and [`GeneratedVoxel`], the
//!   `{x, y, z, color}` point list providers must produce
//! - **Output parsing**: tolerant extraction of the voxel array from raw
//!   model output, which tends to wrap JSON in prose or code fences
//!
//! Generation is the editor's one asynchronous boundary and is
//! fire-and-forget: a failed or empty generation yields no staged preview
//! and leaves the session untouched. The caller stages successful results
//! through `EditorSession::stage_preview`.

pub mod client;
pub mod error;
pub mod parse;
pub mod types;

pub use client::{ClientConfig, SceneGenerator};
pub use error::{Error, Result};
pub use parse::parse_generated;
pub use types::{GeneratedVoxel, GenerationRequest};
