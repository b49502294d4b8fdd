//! Command implementations for OxiBits CLI.

pub mod collect;
pub mod hex;
pub mod pack;
pub mod render;

pub use collect::cmd_collect;
pub use hex::{cmd_hex_decode, cmd_hex_encode};
pub use pack::{PackOptions, cmd_pack};
pub use render::cmd_render;
