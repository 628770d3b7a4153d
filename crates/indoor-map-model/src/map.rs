// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Map, floors and earth registration

use crate::{
    AccessPoint, Beacon, FingerprintLocation, GroundtruthPoint, Outline, PointOfInterest, Wall,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Single floor of the building
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Floor {
    /// Z position of the ground
    pub at_height: f32,
    /// Height of this floor, also the default height of every wall
    pub height: f32,
    pub name: String,

    /// Walkable area
    pub outline: Outline,
    pub walls: Vec<Wall>,

    pub access_points: Vec<AccessPoint>,
    pub beacons: Vec<Beacon>,
    pub groundtruth_points: Vec<GroundtruthPoint>,
    pub fingerprint_locations: Vec<FingerprintLocation>,
    pub pois: Vec<PointOfInterest>,
}

impl Floor {
    /// Absolute z of an entity placed `height_above_floor` over this floor's ground
    pub fn absolute_z(&self, height_above_floor: f32) -> f32 {
        self.at_height + height_above_floor
    }

    /// First ground-truth point with the given id
    pub fn groundtruth_point_by_id(&self, id: i32) -> Option<&GroundtruthPoint> {
        self.groundtruth_points.iter().find(|gt| gt.id == id)
    }

    /// Resolve a walk given as a list of ground-truth ids
    ///
    /// Returns `None` if any id is missing on this floor. Duplicate ids
    /// resolve to their first occurrence.
    pub fn groundtruth_path(&self, ids: &[i32]) -> Option<Vec<&GroundtruthPoint>> {
        let mut index: FxHashMap<i32, &GroundtruthPoint> = FxHashMap::default();
        for gt in &self.groundtruth_points {
            index.entry(gt.id).or_insert(gt);
        }

        ids.iter().map(|id| index.get(id).copied()).collect()
    }
}

/// Correspondence between a geographic and a map position
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EarthPosMapPos {
    pub lat: f32,
    pub lon: f32,
    pub alt: f32,

    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Associates global coordinates with map coordinates
///
/// Used to transform map coordinates into GPS compatible coordinates.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EarthRegistration {
    pub correspondences: Vec<EarthPosMapPos>,
}

impl EarthRegistration {
    pub fn is_empty(&self) -> bool {
        self.correspondences.is_empty()
    }
}

/// Root object of every map file
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Map {
    pub width: f32,
    pub depth: f32,

    pub earth_registration: EarthRegistration,
    pub floors: Vec<Floor>,
}

impl Map {
    /// First floor with the given name
    pub fn floor_by_name(&self, name: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.name == name)
    }

    /// Total number of walls over all floors
    pub fn wall_count(&self) -> usize {
        self.floors.iter().map(|f| f.walls.len()).sum()
    }
}
