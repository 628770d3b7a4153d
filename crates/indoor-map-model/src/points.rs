// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-like floor entities: radio transmitters, landmarks and reference positions
//!
//! Entities with a `height_above_floor` also carry an absolute `z`, which is
//! the floor's `at_height` plus the height above floor.

use crate::{Point2D, PoiType};
use serde::{Deserialize, Serialize};

/// Marks a room or another named place
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub poi_type: PoiType,
    pub x: f32,
    pub y: f32,
}

/// Waypoint placed at every turn of a reference walk
///
/// Ground-truth paths are defined as lists of ids.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundtruthPoint {
    pub id: i32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub height_above_floor: f32,
}

/// Location where fingerprints are recorded, not the fingerprints themselves
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct FingerprintLocation {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub height_above_floor: f32,
}

/// Bluetooth beacon
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Beacon {
    pub name: String,
    pub mac_address: String,
    pub uuid: String,
    pub major: String,
    pub minor: String,

    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub height_above_floor: f32,

    /// Transmit power
    pub mdl_txp: f32,
    /// Path-loss exponent
    pub mdl_exp: f32,
    /// Attenuation per floor/ceiling
    pub mdl_waf: f32,
}

/// WiFi access point
///
/// The model parameters follow the log-distance model with wall attenuation
/// factor (Ebner et al., "On Wi-Fi Model Optimizations for Smartphone-Based
/// Indoor Localization", ISPRS Int. J. Geo-Inf. 2017, 6, 233).
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessPoint {
    pub name: String,
    pub mac_address: String,

    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub height_above_floor: f32,

    /// Transmit power
    pub mdl_txp: f32,
    /// Path-loss exponent
    pub mdl_exp: f32,
    /// Attenuation per floor/ceiling
    pub mdl_waf: f32,
}

macro_rules! impl_position {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                /// Position projected onto the floor plane
                pub fn position(&self) -> Point2D {
                    Point2D::new(self.x, self.y)
                }
            }
        )*
    };
}

impl_position!(
    PointOfInterest,
    GroundtruthPoint,
    FingerprintLocation,
    Beacon,
    AccessPoint
);
