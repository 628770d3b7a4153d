// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indoor-Map Model - Typed building maps and listener traits
//!
//! This crate provides the in-memory representation of an indoor map
//! (floors, outlines, walls with doors and windows, radio transmitters,
//! reference points and earth registration) together with the abstractions a
//! parser backend implements.
//!
//! # Architecture
//!
//! - [`Map`] and its entities - plain data, serializable with serde
//! - [`generate_wall_segments`] - splits a wall into wall/door/window pieces
//! - [`IndoorListener`] - enter/leave callbacks with subtree pruning
//! - [`IndoorParser`] - entry point implemented by parser backends
//!
//! # Example
//!
//! ```ignore
//! use indoor_map_model::{IndoorParser, Map};
//!
//! let parser: Box<dyn IndoorParser> = get_parser();
//! let map: Map = parser.parse(xml)?;
//!
//! for floor in &map.floors {
//!     for wall in &floor.walls {
//!         println!("{}: {} segments", floor.name, wall.segments.len());
//!     }
//! }
//! ```

pub mod error;
pub mod listener;
pub mod map;
pub mod outline;
pub mod point;
pub mod points;
pub mod segments;
pub mod traits;
pub mod types;
pub mod wall;

// Re-export all public types
pub use error::*;
pub use listener::*;
pub use map::*;
pub use outline::*;
pub use point::*;
pub use points::*;
pub use segments::*;
pub use traits::*;
pub use types::*;
pub use wall::*;
