//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. Frames are composed into a
//! simple framebuffer that is then flushed to a terminal backend.
//!
//! Both [`FrameBuffer`] (headless) and [`TerminalSurface`] (real terminal)
//! implement the core [`DrawSurface`](crate::core::DrawSurface) port.

pub mod fb;
pub mod renderer;
pub mod surface;

pub use typing_geek_core as core;
pub use typing_geek_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;
