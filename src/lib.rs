//! # wirebot
//!
//! An engine-agnostic description of an animated wireframe robot graphic:
//! a small HUD overlay built from vector primitives on a 200×300 design
//! grid, with a fixed set of infinitely looping ease-in-out animations.
//!
//! The crate deliberately stops at the description boundary. It produces a
//! serializable [`RobotGraphic`] (shapes, groups, placement, looping
//! tracks) plus deterministic time samplers; the host render loop (a game
//! engine, an immediate-mode UI, an SVG emitter) owns time, calls
//! [`RobotGraphic::pose_at`] and friends each frame, and draws the result.
//!
//! ```
//! use wirebot::{GraphicConfig, GroupKind, RobotGraphic};
//!
//! let robot = RobotGraphic::from_config(GraphicConfig::default());
//! let pose = robot.pose_at(GroupKind::LeftLeg, 0.5).unwrap();
//! assert!(pose.rotation_deg.abs() <= 6.0);
//! ```

pub mod animation;
pub mod assembler;
pub mod color;
pub mod scene;

pub use animation::*;
pub use assembler::*;
pub use color::*;
pub use scene::*;
