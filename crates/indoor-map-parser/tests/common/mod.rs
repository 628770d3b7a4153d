// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared fixtures for integration tests

#![allow(dead_code)]

use indoor_map_model::{
    AccessPoint, Beacon, EarthPosMapPos, EarthRegistration, FingerprintLocation, Floor,
    GroundtruthPoint, IndoorListener, Map, Outline, PointOfInterest, Wall, WallDoor, WallWindow,
};

/// Two floors exercising every element kind
pub const BUILDING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<map width="70" depth="50">
  <earthReg>
    <correspondences>
      <point lat="49.45" lon="11.07" alt="300" mx="0" my="0" mz="0"/>
      <point lat="49.46" lon="11.08" alt="301" mx="70" my="50" mz="1"/>
    </correspondences>
  </earthReg>
  <floors>
    <floor atHeight="0" height="3" name="ground">
      <outline>
        <polygon name="hall" method="0" outdoor="false">
          <point x="0" y="0"/>
          <point x="20" y="0"/>
          <point x="20" y="10"/>
          <point x="0" y="10"/>
        </polygon>
        <polygon name="stairwell" method="1" outdoor="false">
          <point x="1" y="1"/>
          <point x="3" y="1"/>
          <point x="3" y="3"/>
          <point x="1" y="3"/>
        </polygon>
        <polygon name="yard" method="0" outdoor="true">
          <point x="20" y="0"/>
          <point x="25" y="0"/>
          <point x="25" y="5"/>
        </polygon>
      </outline>
      <obstacles>
        <wall material="1" type="1" x1="0" y1="0" x2="10" y2="0" thickness="0.3" height="2.5">
          <door type="1" material="2" x01="0.5" width="1" heigth="2.1" lr="true" io="false"/>
        </wall>
        <wall material="4" type="2" x1="10" y1="0" x2="20" y2="0">
          <window material="4" x01="0.25" y="1" width="2" height="1.2" io="true"/>
          <door type="3" x01="0.75" width="1" heigth="2" lr="false" io="true"/>
        </wall>
        <wall x1="0" y1="10" x2="20" y2="10" height="0" thickness="nan"/>
        <wall x1="0" y1="0" x2="0" y2="10" height="nan"/>
      </obstacles>
      <pois>
        <poi name="Lobby" type="0" x="5" y="5"/>
        <poi name="Kitchen" type="0" x="15" y="5"/>
      </pois>
      <gtpoints>
        <gtpoint id="1" x="1" y="1" z="1.5"/>
        <gtpoint id="2" x="9" y="1" z="1.5"/>
      </gtpoints>
      <accesspoints>
        <accesspoint name="AP-1" mac="00:11:22:33:44:55" x="4" y="4" z="2.5" mdl_txp="-40" mdl_exp="2.5" mdl_waf="-8"/>
      </accesspoints>
      <beacons>
        <beacon name="B-1" mac="aa:bb:cc:dd:ee:ff" uuid="f7826da6" major="1" minor="7" x="6" y="2" z="1" mdl_txp="-60" mdl_exp="2" mdl_waf="-5"/>
      </beacons>
      <fingerprints>
        <location name="fp-1" x="2" y="8" dz="1.25"/>
      </fingerprints>
    </floor>
    <floor atHeight="4" height="3.5" name="first">
      <obstacles>
        <wall x1="5" y1="5" x2="0" y2="5"/>
      </obstacles>
      <gtpoints>
        <gtpoint id="10" x="2" y="2" z="1.5"/>
      </gtpoints>
      <accesspoints>
        <accesspoint name="AP-2" mac="00:11:22:33:44:66" x="1" y="1" z="2"/>
      </accesspoints>
      <beacons>
        <beacon name="B-2" x="3" y="3" z="0.5"/>
      </beacons>
      <fingerprints>
        <location name="fp-2" x="4" y="4" dz="1"/>
      </fingerprints>
    </floor>
  </floors>
</map>
"#;

/// Records every callback as a short event string
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
}

impl Recorder {
    pub fn position(&self, event: &str) -> Option<usize> {
        self.events.iter().position(|e| e == event)
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events.iter().filter(|e| e.starts_with(prefix)).count()
    }
}

impl IndoorListener for Recorder {
    fn enter_floor(&mut self, floor: &mut Floor) -> bool {
        self.events.push(format!("enter_floor:{}", floor.name));
        true
    }

    fn enter_outline(&mut self, outline: &mut Outline) -> bool {
        self.events
            .push(format!("enter_outline:{}", outline.polygons.len()));
        true
    }

    fn enter_wall(&mut self, wall: &mut Wall) -> bool {
        self.events.push(format!(
            "enter_wall:{}:{}",
            wall.doors.len() + wall.windows.len(),
            wall.segments.len()
        ));
        true
    }

    fn enter_wall_door(&mut self, door: &mut WallDoor) -> bool {
        self.events.push(format!("enter_door:{}", door.at_line_pos));
        true
    }

    fn enter_wall_window(&mut self, window: &mut WallWindow) -> bool {
        self.events
            .push(format!("enter_window:{}", window.at_line_pos));
        true
    }

    fn enter_map(&mut self, map: &mut Map) {
        self.events
            .push(format!("enter_map:{}", map.floors.len()));
    }

    fn leave_map(&mut self, map: &mut Map) {
        self.events
            .push(format!("leave_map:{}", map.floors.len()));
    }

    fn enter_earth_registration(&mut self, earth_reg: &mut EarthRegistration) {
        self.events.push(format!(
            "enter_earth_reg:{}",
            earth_reg.correspondences.len()
        ));
    }

    fn leave_earth_registration(&mut self, earth_reg: &mut EarthRegistration) {
        self.events.push(format!(
            "leave_earth_reg:{}",
            earth_reg.correspondences.len()
        ));
    }

    fn enter_earth_pos_map_pos(&mut self, pos: &mut EarthPosMapPos) {
        self.events.push(format!("enter_earth_pos:{}", pos.x));
    }

    fn leave_earth_pos_map_pos(&mut self, pos: &mut EarthPosMapPos) {
        self.events.push(format!("leave_earth_pos:{}", pos.x));
    }

    fn leave_floor(&mut self, floor: &mut Floor) {
        self.events.push(format!("leave_floor:{}", floor.name));
    }

    fn leave_outline(&mut self, outline: &mut Outline) {
        self.events
            .push(format!("leave_outline:{}", outline.polygons.len()));
    }

    fn enter_points_of_interest(&mut self, pois: &mut Vec<PointOfInterest>) {
        self.events.push(format!("enter_pois:{}", pois.len()));
    }

    fn leave_points_of_interest(&mut self, pois: &mut Vec<PointOfInterest>) {
        self.events.push(format!("leave_pois:{}", pois.len()));
    }

    fn enter_groundtruth_points(&mut self, gt_points: &mut Vec<GroundtruthPoint>) {
        self.events.push(format!("enter_gtpoints:{}", gt_points.len()));
    }

    fn leave_groundtruth_points(&mut self, gt_points: &mut Vec<GroundtruthPoint>) {
        self.events.push(format!("leave_gtpoints:{}", gt_points.len()));
    }

    fn enter_access_points(&mut self, access_points: &mut Vec<AccessPoint>) {
        self.events
            .push(format!("enter_accesspoints:{}", access_points.len()));
    }

    fn leave_access_points(&mut self, access_points: &mut Vec<AccessPoint>) {
        self.events
            .push(format!("leave_accesspoints:{}", access_points.len()));
    }

    fn enter_beacons(&mut self, beacons: &mut Vec<Beacon>) {
        self.events.push(format!("enter_beacons:{}", beacons.len()));
    }

    fn leave_beacons(&mut self, beacons: &mut Vec<Beacon>) {
        self.events.push(format!("leave_beacons:{}", beacons.len()));
    }

    fn enter_fingerprint_locations(&mut self, locations: &mut Vec<FingerprintLocation>) {
        self.events
            .push(format!("enter_fingerprints:{}", locations.len()));
    }

    fn leave_fingerprint_locations(&mut self, locations: &mut Vec<FingerprintLocation>) {
        self.events
            .push(format!("leave_fingerprints:{}", locations.len()));
    }

    fn enter_walls(&mut self, walls: &mut Vec<Wall>) {
        self.events.push(format!("enter_walls:{}", walls.len()));
    }

    fn leave_walls(&mut self, walls: &mut Vec<Wall>) {
        self.events.push(format!("leave_walls:{}", walls.len()));
    }

    fn leave_wall(&mut self, wall: &mut Wall) {
        self.events.push(format!(
            "leave_wall:{}:{}",
            wall.doors.len() + wall.windows.len(),
            wall.segments.len()
        ));
    }

    fn leave_wall_door(&mut self, door: &mut WallDoor) {
        self.events.push(format!("leave_door:{}", door.at_line_pos));
    }

    fn leave_wall_window(&mut self, window: &mut WallWindow) {
        self.events
            .push(format!("leave_window:{}", window.at_line_pos));
    }
}
