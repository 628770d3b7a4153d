// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Depth-first traversal of a map document
//!
//! The walker decodes each known element into its entity, notifies the
//! listener, and appends accepted children to their parent's container.
//! Unknown elements are skipped.

use crate::decoder::AttributeDecoder;
use indoor_map_model::{
    AccessPoint, Beacon, DoorType, EarthPosMapPos, EarthRegistration, FingerprintLocation, Floor,
    GroundtruthPoint, IndoorListener, Map, ObstacleType, Outline, ParseError, Point2D,
    PoiType, Polygon2D, PolygonMethod, PointOfInterest, Result, Wall, WallDoor, WallMaterial,
    WallWindow,
};
use log::{debug, trace};
use roxmltree::{Document, Node};

/// Name of the document root element
pub const ROOT_ELEMENT: &str = "map";

const MAP_CHILDREN: &[&str] = &["earthReg", "floors"];
const FLOOR_CHILDREN: &[&str] = &[
    "outline",
    "obstacles",
    "pois",
    "gtpoints",
    "accesspoints",
    "beacons",
    "fingerprints",
];
const WALL_CHILDREN: &[&str] = &["door", "window"];

/// First child element with the given tag name
fn first_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// All child elements with the given tag name, in document order
fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn trace_unknown_children(node: Node, known: &[&str]) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }

    for child in node.children().filter(Node::is_element) {
        let name = child.tag_name().name();
        if !known.iter().any(|k| *k == name) {
            trace!(
                "Ignoring unknown element <{}> in <{}>",
                name,
                node.tag_name().name()
            );
        }
    }
}

/// One traversal over one document
///
/// Holds the listener for the duration of a single call; a walker is never
/// reused.
pub(crate) struct Walker<'l> {
    listener: &'l mut dyn IndoorListener,
    default_wall_thickness: f32,
}

impl<'l> Walker<'l> {
    pub fn new(listener: &'l mut dyn IndoorListener, default_wall_thickness: f32) -> Self {
        Self {
            listener,
            default_wall_thickness,
        }
    }

    /// Walk the whole document
    ///
    /// The root element is checked before any hook fires.
    pub fn walk(mut self, doc: &Document) -> Result<()> {
        let root = doc.root_element();
        let root_name = root.tag_name().name();
        if root_name != ROOT_ELEMENT {
            return Err(ParseError::UnexpectedRoot {
                expected: ROOT_ELEMENT,
                found: root_name.to_string(),
            });
        }

        self.process_map(root);
        Ok(())
    }

    fn process_map(&mut self, x_map: Node) {
        let attrs = AttributeDecoder::new(x_map);
        let mut map = Map {
            width: attrs.float("width"),
            depth: attrs.float("depth"),
            ..Default::default()
        };

        self.listener.enter_map(&mut map);
        trace_unknown_children(x_map, MAP_CHILDREN);

        if let Some(x_earth_reg) = first_child(x_map, "earthReg") {
            map.earth_registration = self.process_earth_registration(x_earth_reg);
        }

        if let Some(x_floors) = first_child(x_map, "floors") {
            for x_floor in children_named(x_floors, "floor") {
                if let Some(floor) = self.process_floor(x_floor) {
                    map.floors.push(floor);
                }
            }
        }

        debug!(
            "Map {}x{} complete: {} floor(s), {} wall(s)",
            map.width,
            map.depth,
            map.floors.len(),
            map.wall_count()
        );
        self.listener.leave_map(&mut map);
    }

    fn process_earth_registration(&mut self, x_earth_reg: Node) -> EarthRegistration {
        let mut earth_reg = EarthRegistration::default();
        self.listener.enter_earth_registration(&mut earth_reg);

        if let Some(x_corr) = first_child(x_earth_reg, "correspondences") {
            for x_point in children_named(x_corr, "point") {
                let attrs = AttributeDecoder::new(x_point);
                let mut pos = EarthPosMapPos {
                    lat: attrs.float("lat"),
                    lon: attrs.float("lon"),
                    alt: attrs.float("alt"),
                    x: attrs.float("mx"),
                    y: attrs.float("my"),
                    z: attrs.float("mz"),
                };

                self.listener.enter_earth_pos_map_pos(&mut pos);
                self.listener.leave_earth_pos_map_pos(&mut pos);
                earth_reg.correspondences.push(pos);
            }
        }

        self.listener.leave_earth_registration(&mut earth_reg);
        earth_reg
    }

    fn process_floor(&mut self, x_floor: Node) -> Option<Floor> {
        let attrs = AttributeDecoder::new(x_floor);
        let mut floor = Floor {
            at_height: attrs.float("atHeight"),
            height: attrs.float("height"),
            name: attrs.string("name"),
            ..Default::default()
        };

        if !self.listener.enter_floor(&mut floor) {
            debug!("Skipping floor '{}'", floor.name);
            return None;
        }
        trace_unknown_children(x_floor, FLOOR_CHILDREN);

        if let Some(x_outline) = first_child(x_floor, "outline") {
            if let Some(outline) = self.process_outline(x_outline) {
                floor.outline = outline;
            }
        }

        if let Some(x_obstacles) = first_child(x_floor, "obstacles") {
            self.process_obstacles(x_obstacles, &mut floor);
        }

        if let Some(x_pois) = first_child(x_floor, "pois") {
            self.process_points_of_interest(x_pois, &mut floor.pois);
        }

        if let Some(x_gt) = first_child(x_floor, "gtpoints") {
            self.process_groundtruth_points(x_gt, &mut floor);
        }

        if let Some(x_ap) = first_child(x_floor, "accesspoints") {
            self.process_access_points(x_ap, &mut floor);
        }

        if let Some(x_beacons) = first_child(x_floor, "beacons") {
            self.process_beacons(x_beacons, &mut floor);
        }

        if let Some(x_fingerprints) = first_child(x_floor, "fingerprints") {
            self.process_fingerprints(x_fingerprints, &mut floor);
        }

        self.listener.leave_floor(&mut floor);
        Some(floor)
    }

    fn process_outline(&mut self, x_outline: Node) -> Option<Outline> {
        let mut outline = Outline::default();
        if !self.listener.enter_outline(&mut outline) {
            debug!("Skipping outline");
            return None;
        }

        for x_polygon in children_named(x_outline, "polygon") {
            let attrs = AttributeDecoder::new(x_polygon);
            let points = children_named(x_polygon, "point")
                .map(|x_point| {
                    let p = AttributeDecoder::new(x_point);
                    Point2D::new(p.float("x"), p.float("y"))
                })
                .collect();

            outline.polygons.push(Polygon2D {
                name: attrs.string("name"),
                method: PolygonMethod::from_code(attrs.int("method")),
                is_outdoor: attrs.bool("outdoor"),
                points,
            });
        }

        self.listener.leave_outline(&mut outline);
        Some(outline)
    }

    fn process_points_of_interest(&mut self, x_pois: Node, pois: &mut Vec<PointOfInterest>) {
        self.listener.enter_points_of_interest(pois);

        for x_poi in children_named(x_pois, "poi") {
            let attrs = AttributeDecoder::new(x_poi);
            pois.push(PointOfInterest {
                name: attrs.string("name"),
                poi_type: PoiType::from_code(attrs.int("type")),
                x: attrs.float("x"),
                y: attrs.float("y"),
            });
        }

        self.listener.leave_points_of_interest(pois);
    }

    fn process_groundtruth_points(&mut self, x_gt: Node, floor: &mut Floor) {
        self.listener
            .enter_groundtruth_points(&mut floor.groundtruth_points);

        for x_point in children_named(x_gt, "gtpoint") {
            let attrs = AttributeDecoder::new(x_point);
            let height_above_floor = attrs.float("z");
            let z = floor.absolute_z(height_above_floor);
            floor.groundtruth_points.push(GroundtruthPoint {
                id: attrs.int("id"),
                x: attrs.float("x"),
                y: attrs.float("y"),
                z,
                height_above_floor,
            });
        }

        self.listener
            .leave_groundtruth_points(&mut floor.groundtruth_points);
    }

    fn process_access_points(&mut self, x_ap: Node, floor: &mut Floor) {
        self.listener.enter_access_points(&mut floor.access_points);

        for x_access_point in children_named(x_ap, "accesspoint") {
            let attrs = AttributeDecoder::new(x_access_point);
            let height_above_floor = attrs.float("z");
            let z = floor.absolute_z(height_above_floor);
            floor.access_points.push(AccessPoint {
                name: attrs.string("name"),
                mac_address: attrs.string("mac"),
                x: attrs.float("x"),
                y: attrs.float("y"),
                z,
                height_above_floor,
                mdl_txp: attrs.float("mdl_txp"),
                mdl_exp: attrs.float("mdl_exp"),
                mdl_waf: attrs.float("mdl_waf"),
            });
        }

        self.listener.leave_access_points(&mut floor.access_points);
    }

    fn process_beacons(&mut self, x_beacons: Node, floor: &mut Floor) {
        self.listener.enter_beacons(&mut floor.beacons);

        for x_beacon in children_named(x_beacons, "beacon") {
            let attrs = AttributeDecoder::new(x_beacon);
            let height_above_floor = attrs.float("z");
            let z = floor.absolute_z(height_above_floor);
            floor.beacons.push(Beacon {
                name: attrs.string("name"),
                mac_address: attrs.string("mac"),
                uuid: attrs.string("uuid"),
                major: attrs.string("major"),
                minor: attrs.string("minor"),
                x: attrs.float("x"),
                y: attrs.float("y"),
                z,
                height_above_floor,
                mdl_txp: attrs.float("mdl_txp"),
                mdl_exp: attrs.float("mdl_exp"),
                mdl_waf: attrs.float("mdl_waf"),
            });
        }

        self.listener.leave_beacons(&mut floor.beacons);
    }

    fn process_fingerprints(&mut self, x_fingerprints: Node, floor: &mut Floor) {
        self.listener
            .enter_fingerprint_locations(&mut floor.fingerprint_locations);

        for x_location in children_named(x_fingerprints, "location") {
            let attrs = AttributeDecoder::new(x_location);
            let height_above_floor = attrs.float("dz");
            let z = floor.absolute_z(height_above_floor);
            floor.fingerprint_locations.push(FingerprintLocation {
                name: attrs.string("name"),
                x: attrs.float("x"),
                y: attrs.float("y"),
                z,
                height_above_floor,
            });
        }

        self.listener
            .leave_fingerprint_locations(&mut floor.fingerprint_locations);
    }

    // Only walls are read from <obstacles>; lines, circles, doors and objects are skipped.
    fn process_obstacles(&mut self, x_obstacles: Node, floor: &mut Floor) {
        let floor_height = floor.height;
        self.listener.enter_walls(&mut floor.walls);

        for x_wall in children_named(x_obstacles, "wall") {
            if let Some(wall) = self.process_wall(x_wall, floor_height) {
                floor.walls.push(wall);
            }
        }

        self.listener.leave_walls(&mut floor.walls);
    }

    fn process_wall(&mut self, x_wall: Node, floor_height: f32) -> Option<Wall> {
        let attrs = AttributeDecoder::new(x_wall);

        let height = attrs.float_or("height", f32::NAN);
        let thickness = attrs.float_or("thickness", f32::NAN);

        let mut wall = Wall {
            material: WallMaterial::from_code(attrs.int("material")),
            obstacle_type: ObstacleType::from_code(attrs.int("type")),
            x1: attrs.float("x1"),
            y1: attrs.float("y1"),
            x2: attrs.float("x2"),
            y2: attrs.float("y2"),
            height: if height.is_nan() || height == 0.0 {
                floor_height
            } else {
                height
            },
            thickness: if thickness.is_nan() {
                self.default_wall_thickness
            } else {
                thickness
            },
            ..Default::default()
        };

        if !self.listener.enter_wall(&mut wall) {
            debug!(
                "Skipping wall ({}, {})-({}, {})",
                wall.x1, wall.y1, wall.x2, wall.y2
            );
            return None;
        }
        trace_unknown_children(x_wall, WALL_CHILDREN);

        for x_door in children_named(x_wall, "door") {
            if let Some(door) = self.process_door(x_door) {
                wall.doors.push(door);
            }
        }

        for x_window in children_named(x_wall, "window") {
            if let Some(window) = self.process_window(x_window) {
                wall.windows.push(window);
            }
        }

        wall.generate_segments();
        self.listener.leave_wall(&mut wall);
        Some(wall)
    }

    fn process_door(&mut self, x_door: Node) -> Option<WallDoor> {
        let attrs = AttributeDecoder::new(x_door);
        let mut door = WallDoor {
            door_type: DoorType::from_code(attrs.int("type")),
            material: WallMaterial::from_code(attrs.int("material")),
            at_line_pos: attrs.float("x01"),
            width: attrs.float("width"),
            // spelled this way in the file format
            height: attrs.float("heigth"),
            left_right: attrs.bool("lr"),
            in_out: attrs.bool("io"),
        };

        if !self.listener.enter_wall_door(&mut door) {
            debug!("Skipping door at {}", door.at_line_pos);
            return None;
        }

        self.listener.leave_wall_door(&mut door);
        Some(door)
    }

    fn process_window(&mut self, x_window: Node) -> Option<WallWindow> {
        let attrs = AttributeDecoder::new(x_window);
        let mut window = WallWindow {
            material: WallMaterial::from_code(attrs.int("material")),
            at_line_pos: attrs.float("x01"),
            at_height: attrs.float("y"),
            width: attrs.float("width"),
            height: attrs.float("height"),
            in_out: attrs.bool("io"),
        };

        if !self.listener.enter_wall_window(&mut window) {
            debug!("Skipping window at {}", window.at_line_pos);
            return None;
        }

        self.listener.leave_wall_window(&mut window);
        Some(window)
    }
}
