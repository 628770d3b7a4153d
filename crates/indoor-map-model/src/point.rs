// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar point type used throughout the map model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 2D point or vector in floor coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector rotated by +90 degrees
    pub fn orthogonal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Euclidean length
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction
    ///
    /// A zero-length vector yields NaN components.
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Distance to another point
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Point at `radius` from `center` in direction `angle` (radians)
    pub fn from_polar(center: Self, radius: f32, angle: f32) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Self) -> Self::Output {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Self) -> Self::Output {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f32) -> Self::Output {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Point2D {
    type Output = Point2D;

    fn div(self, rhs: f32) -> Self::Output {
        Point2D::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Self::Output {
        Point2D::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Point2D::new(x, y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}
