// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor outlines built from additive and subtractive polygons

use crate::{Point2D, PolygonMethod};
use serde::{Deserialize, Serialize};

/// Part of a floor outline
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon2D {
    pub name: String,
    /// `Remove` cuts the polygon out of the polygons before it
    pub method: PolygonMethod,
    /// Area outside of the building, like a yard
    pub is_outdoor: bool,
    pub points: Vec<Point2D>,
}

impl Polygon2D {
    /// Shoelace area, positive for counter-clockwise point order
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let twice: f32 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();

        twice / 2.0
    }

    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }
}

/// Walkable area of a floor
///
/// Each floor has one outline made of multiple polygons. Non-walkable areas
/// inside the floor are modeled with `PolygonMethod::Remove`.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Outline {
    pub polygons: Vec<Polygon2D>,
}

impl Outline {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Accumulated walkable area in polygon order
    ///
    /// Removed polygons are assumed to lie inside the area added before them.
    /// The result never drops below zero.
    pub fn walkable_area(&self) -> f32 {
        self.polygons
            .iter()
            .fold(0.0_f32, |acc, polygon| match polygon.method {
                PolygonMethod::Add => acc + polygon.area(),
                PolygonMethod::Remove => (acc - polygon.area()).max(0.0),
            })
    }

    /// Polygons marking areas outside the building
    pub fn outdoor_polygons(&self) -> impl Iterator<Item = &Polygon2D> {
        self.polygons.iter().filter(|p| p.is_outdoor)
    }
}
