// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walls with relatively positioned doors and windows

use crate::segments::generate_wall_segments;
use crate::{DoorType, ObstacleType, Point2D, WallMaterial, WallSegmentType};
use serde::{Deserialize, Serialize};

/// Door placed on a wall
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WallDoor {
    pub door_type: DoorType,
    pub material: WallMaterial,
    /// Opening width along the wall
    pub width: f32,
    pub height: f32,
    /// Position relative to the wall's start point, from 0 to 1
    pub at_line_pos: f32,
    /// True if the hinge is on the right
    pub left_right: bool,
    /// Opening direction
    pub in_out: bool,
}

/// Window placed on a wall
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WallWindow {
    pub material: WallMaterial,
    /// Opening width along the wall
    pub width: f32,
    pub height: f32,
    /// Position of the window center relative to the wall's start point, from 0 to 1
    pub at_line_pos: f32,
    /// Sill height relative to the wall
    pub at_height: f32,
    /// Opening direction
    pub in_out: bool,
}

/// Continuous piece of a wall, door or window with absolute endpoints
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WallSegment {
    pub segment_type: WallSegmentType,
    /// Index into `Wall::doors` or `Wall::windows`, -1 for plain wall pieces
    pub list_index: i32,
    pub start: Point2D,
    pub end: Point2D,
}

impl WallSegment {
    /// Create a plain wall segment
    pub fn wall(start: Point2D, end: Point2D) -> Self {
        Self {
            segment_type: WallSegmentType::Wall,
            list_index: -1,
            start,
            end,
        }
    }

    /// Create a door segment referencing `Wall::doors[index]`
    pub fn door(index: usize, start: Point2D, end: Point2D) -> Self {
        Self {
            segment_type: WallSegmentType::Door,
            list_index: index as i32,
            start,
            end,
        }
    }

    /// Create a window segment referencing `Wall::windows[index]`
    pub fn window(index: usize, start: Point2D, end: Point2D) -> Self {
        Self {
            segment_type: WallSegmentType::Window,
            list_index: index as i32,
            start,
            end,
        }
    }

    /// Segment length
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Back-reference index, `None` for plain wall pieces
    pub fn element_index(&self) -> Option<usize> {
        usize::try_from(self.list_index).ok()
    }
}

/// Wall line with thickness and optional doors and windows
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Wall {
    pub material: WallMaterial,
    pub obstacle_type: ObstacleType,

    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,

    pub thickness: f32,
    /// Individual wall height; the floor height when the map leaves it unset
    pub height: f32,

    pub doors: Vec<WallDoor>,
    pub windows: Vec<WallWindow>,

    /// Derived from the endpoints, doors and windows
    pub segments: Vec<WallSegment>,
}

impl Wall {
    /// Thickness used when the map does not specify one
    pub const DEFAULT_THICKNESS: f32 = 0.15;

    pub fn start(&self) -> Point2D {
        Point2D::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point2D {
        Point2D::new(self.x2, self.y2)
    }

    /// Vector from start to end (not normalized)
    pub fn direction(&self) -> Point2D {
        self.end() - self.start()
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Recompute `segments` from the current endpoints, doors and windows
    pub fn generate_segments(&mut self) {
        self.segments = generate_wall_segments(self);
    }

    /// Door referenced by a door segment
    pub fn door_for(&self, segment: &WallSegment) -> Option<&WallDoor> {
        match segment.segment_type {
            WallSegmentType::Door => self.doors.get(segment.element_index()?),
            _ => None,
        }
    }

    /// Window referenced by a window segment
    pub fn window_for(&self, segment: &WallSegment) -> Option<&WallWindow> {
        match segment.segment_type {
            WallSegmentType::Window => self.windows.get(segment.element_index()?),
            _ => None,
        }
    }
}
