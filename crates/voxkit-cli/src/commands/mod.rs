//! Command implementations for the voxkit CLI.

pub mod apply;
pub mod info;
pub mod presets;
pub mod show;
