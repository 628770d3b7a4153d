// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Listener protocol for observing and pruning a map traversal

use crate::{
    AccessPoint, Beacon, EarthPosMapPos, EarthRegistration, FingerprintLocation, Floor,
    GroundtruthPoint, Map, Outline, PointOfInterest, Wall, WallDoor, WallWindow,
};

/// Callbacks invoked while a map document is walked
///
/// Each `enter_*` method is called after the element's attributes are decoded
/// but before any child element is processed. Each `leave_*` method is called
/// once the element and all of its children are fully processed; for walls
/// this includes the generated segments.
///
/// All methods default to no-ops, so implementations only override what they
/// need.
///
/// # Example
///
/// ```ignore
/// use indoor_map_model::{IndoorListener, Floor, Wall};
///
/// struct GroundFloorWalls {
///     count: usize,
/// }
///
/// impl IndoorListener for GroundFloorWalls {
///     fn enter_floor(&mut self, floor: &mut Floor) -> bool {
///         floor.at_height == 0.0
///     }
///
///     fn leave_wall(&mut self, _wall: &mut Wall) {
///         self.count += 1;
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait IndoorListener {
    // ========================================================================
    // Pruning hooks
    //
    // Returning `false` skips the element: its children are not processed,
    // it is not added to its parent and its `leave_*` method is not called.
    // ========================================================================

    fn enter_floor(&mut self, floor: &mut Floor) -> bool {
        true
    }

    fn enter_outline(&mut self, outline: &mut Outline) -> bool {
        true
    }

    fn enter_wall(&mut self, wall: &mut Wall) -> bool {
        true
    }

    fn enter_wall_door(&mut self, door: &mut WallDoor) -> bool {
        true
    }

    fn enter_wall_window(&mut self, window: &mut WallWindow) -> bool {
        true
    }

    // ========================================================================
    // Observation hooks
    // ========================================================================

    fn enter_map(&mut self, map: &mut Map) {}
    fn leave_map(&mut self, map: &mut Map) {}

    fn enter_earth_registration(&mut self, earth_reg: &mut EarthRegistration) {}
    fn leave_earth_registration(&mut self, earth_reg: &mut EarthRegistration) {}

    fn enter_earth_pos_map_pos(&mut self, pos: &mut EarthPosMapPos) {}
    fn leave_earth_pos_map_pos(&mut self, pos: &mut EarthPosMapPos) {}

    fn leave_floor(&mut self, floor: &mut Floor) {}

    fn leave_outline(&mut self, outline: &mut Outline) {}

    fn enter_points_of_interest(&mut self, pois: &mut Vec<PointOfInterest>) {}
    fn leave_points_of_interest(&mut self, pois: &mut Vec<PointOfInterest>) {}

    fn enter_groundtruth_points(&mut self, gt_points: &mut Vec<GroundtruthPoint>) {}
    fn leave_groundtruth_points(&mut self, gt_points: &mut Vec<GroundtruthPoint>) {}

    fn enter_access_points(&mut self, access_points: &mut Vec<AccessPoint>) {}
    fn leave_access_points(&mut self, access_points: &mut Vec<AccessPoint>) {}

    fn enter_beacons(&mut self, beacons: &mut Vec<Beacon>) {}
    fn leave_beacons(&mut self, beacons: &mut Vec<Beacon>) {}

    fn enter_fingerprint_locations(&mut self, locations: &mut Vec<FingerprintLocation>) {}
    fn leave_fingerprint_locations(&mut self, locations: &mut Vec<FingerprintLocation>) {}

    fn enter_walls(&mut self, walls: &mut Vec<Wall>) {}
    fn leave_walls(&mut self, walls: &mut Vec<Wall>) {}

    fn leave_wall(&mut self, wall: &mut Wall) {}

    fn leave_wall_door(&mut self, door: &mut WallDoor) {}

    fn leave_wall_window(&mut self, window: &mut WallWindow) {}
}

/// Listener that ignores every callback
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl IndoorListener for NoopListener {}

/// Listener that captures the fully built map
///
/// The map is moved out of the traversal when `leave_map` fires.
#[derive(Clone, Debug, Default)]
pub struct MapCollector {
    map: Option<Map>,
}

impl MapCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured map, if the traversal completed
    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    /// Take the captured map, leaving the collector empty
    pub fn take_map(&mut self) -> Option<Map> {
        self.map.take()
    }

    pub fn into_map(self) -> Option<Map> {
        self.map
    }
}

impl IndoorListener for MapCollector {
    fn leave_map(&mut self, map: &mut Map) {
        self.map = Some(std::mem::take(map));
    }
}
