// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Code enumerations stored as integers in map files
//!
//! Every enum decodes from the integer attribute value with `from_code`.
//! Codes outside the known range map to the `Unknown` variant, or to the
//! first variant for enums that have no `Unknown` member.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall, door and window material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WallMaterial {
    #[default]
    Unknown,
    Concrete,
    Wood,
    Drywall,
    Glass,
    Metal,
    MetalizedGlass,
}

impl WallMaterial {
    /// Decode from the integer stored in the map file
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => WallMaterial::Concrete,
            2 => WallMaterial::Wood,
            3 => WallMaterial::Drywall,
            4 => WallMaterial::Glass,
            5 => WallMaterial::Metal,
            6 => WallMaterial::MetalizedGlass,
            _ => WallMaterial::Unknown,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            WallMaterial::Unknown => "Unknown",
            WallMaterial::Concrete => "Concrete",
            WallMaterial::Wood => "Wood",
            WallMaterial::Drywall => "Drywall",
            WallMaterial::Glass => "Glass",
            WallMaterial::Metal => "Metal",
            WallMaterial::MetalizedGlass => "Metalized Glass",
        }
    }
}

/// Door construction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DoorType {
    #[default]
    Unknown,
    /// Regular hinged door
    Swing,
    DoubleSwing,
    Slide,
    DoubleSlide,
    Revolving,
}

impl DoorType {
    /// Decode from the integer stored in the map file
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => DoorType::Swing,
            2 => DoorType::DoubleSwing,
            3 => DoorType::Slide,
            4 => DoorType::DoubleSlide,
            5 => DoorType::Revolving,
            _ => DoorType::Unknown,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DoorType::Unknown => "Unknown",
            DoorType::Swing => "Swing",
            DoorType::DoubleSwing => "Double Swing",
            DoorType::Slide => "Slide",
            DoorType::DoubleSlide => "Double Slide",
            DoorType::Revolving => "Revolving",
        }
    }
}

/// Kind of obstacle a wall line represents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObstacleType {
    #[default]
    Unknown,
    Wall,
    Window,
    Handrail,
    Pillar,
}

impl ObstacleType {
    /// Decode from the integer stored in the map file
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ObstacleType::Wall,
            2 => ObstacleType::Window,
            3 => ObstacleType::Handrail,
            4 => ObstacleType::Pillar,
            _ => ObstacleType::Unknown,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ObstacleType::Unknown => "Unknown",
            ObstacleType::Wall => "Wall",
            ObstacleType::Window => "Window",
            ObstacleType::Handrail => "Handrail",
            ObstacleType::Pillar => "Pillar",
        }
    }
}

/// How a polygon contributes to a floor outline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PolygonMethod {
    /// Adds walkable area
    #[default]
    Add,
    /// Cuts the polygon out of the area accumulated so far
    Remove,
}

impl PolygonMethod {
    /// Decode from the integer stored in the map file
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => PolygonMethod::Remove,
            _ => PolygonMethod::Add,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PolygonMethod::Add => "Add",
            PolygonMethod::Remove => "Remove",
        }
    }
}

/// Category of a point of interest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PoiType {
    #[default]
    Room,
}

impl PoiType {
    /// Decode from the integer stored in the map file
    pub fn from_code(_code: i32) -> Self {
        PoiType::Room
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PoiType::Room => "Room",
        }
    }
}

/// Kind of a wall segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WallSegmentType {
    #[default]
    Wall,
    Door,
    Window,
}

impl WallSegmentType {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            WallSegmentType::Wall => "Wall",
            WallSegmentType::Door => "Door",
            WallSegmentType::Window => "Window",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.display_name())
                }
            }
        )*
    };
}

impl_display!(
    WallMaterial,
    DoorType,
    ObstacleType,
    PolygonMethod,
    PoiType,
    WallSegmentType
);
