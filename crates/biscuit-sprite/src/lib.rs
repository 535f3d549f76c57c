//! Procedural pixel renderer for the Biscuit room.
//!
//! The pipeline has three stages, each independently testable: scene
//! composition builds a display list from `(mood, phase)`, the rasterizer
//! resolves it into a 320x240 RGBA buffer, and the frame clock decides when
//! the phase advances. Identical inputs always produce identical bytes.
//!
//! # Quick start
//!
//! ```
//! use std::time::Instant;
//! use biscuit_sim::Mood;
//! use biscuit_sprite::{scene, Canvas, FrameClock};
//!
//! let clock = FrameClock::new(Instant::now());
//! let mut canvas = Canvas::room();
//! scene::render(&mut canvas, Mood::Idle, clock.phase());
//! assert_eq!(canvas.data().len(), 320 * 240 * 4);
//! ```

mod anim;
mod color;
pub mod draw;
mod raster;
pub mod scene;

pub use anim::{FrameClock, FRAME_INTERVAL, PHASES};
pub use color::{palette, Rgba};
pub use draw::{ArcHalf, DrawCmd, Shape};
pub use raster::{Canvas, CANVAS_H, CANVAS_W};
