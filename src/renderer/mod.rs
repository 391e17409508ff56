//! Terminal rendering module
//!
//! Presents the simulation with half-block cells so each terminal cell
//! carries two square-ish pixels. The renderer is a sink: it reads the
//! game state and queues terminal commands, nothing flows back.

pub mod framebuffer;
pub mod scene;

pub use framebuffer::{PixelBuf, Rgb};
pub use scene::TermRenderer;
