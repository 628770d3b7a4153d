// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall segmentation
//!
//! Splits a wall line into an ordered sequence of wall, door and window
//! pieces. Segments run from the endpoint with the smaller x coordinate to the
//! one with the larger x coordinate, and consecutive segments share an
//! endpoint.
//!
//! Doors and windows are assumed not to overlap. Overlapping cuts are not
//! detected and produce fillers of negative length. Cuts with NaN positions
//! are kept and sort after every finite cut.

use crate::{Point2D, Wall, WallSegment};
use std::cmp::Ordering;

/// Split a wall into wall, door and window segments
///
/// With no doors and no windows the result is a single wall segment between
/// the wall's own endpoints. Otherwise it holds `1 + 2 * cuts` segments: a
/// filler, then each cut followed by the filler up to the next cut or the
/// wall's end.
///
/// On a zero-length wall every cut collapses onto the wall's single point.
pub fn generate_wall_segments(wall: &Wall) -> Vec<WallSegment> {
    if wall.doors.is_empty() && wall.windows.is_empty() {
        return vec![WallSegment::wall(wall.start(), wall.end())];
    }

    let (wall_start, wall_end) = order_by_x(wall.start(), wall.end(), wall.direction());
    let along = wall_end - wall_start;

    let dir = wall.direction();
    let unit = if dir.length() > 0.0 {
        dir.normalized()
    } else {
        Point2D::default()
    };

    let mut cuts = Vec::with_capacity(wall.doors.len() + wall.windows.len());

    for (i, door) in wall.doors.iter().enumerate() {
        let start = wall.start() + dir * door.at_line_pos;
        let offset = if door.left_right { -door.width } else { door.width };
        let end = start + unit * offset;

        let (start, end) = order_by_x(start, end, along);
        cuts.push(WallSegment::door(i, start, end));
    }

    for (i, window) in wall.windows.iter().enumerate() {
        let center = wall.start() + dir * window.at_line_pos;
        let half = unit * (window.width / 2.0);

        let (start, end) = order_by_x(center - half, center + half, along);
        cuts.push(WallSegment::window(i, start, end));
    }

    // Stable: equal keys keep declaration order, doors before windows
    cuts.sort_by(|a, b| compare_along(a.start, b.start, wall_start, along));

    let mut segments = Vec::with_capacity(1 + 2 * cuts.len());
    segments.push(WallSegment::wall(wall_start, cuts[0].start));

    for (i, cut) in cuts.iter().enumerate() {
        segments.push(*cut);

        let next_start = cuts.get(i + 1).map_or(wall_end, |next| next.start);
        segments.push(WallSegment::wall(cut.end, next_start));
    }

    segments
}

/// Order two points by x, falling back to the position along `along` when the
/// x coordinates are equal (vertical walls)
fn order_by_x(a: Point2D, b: Point2D, along: Point2D) -> (Point2D, Point2D) {
    if b.x < a.x || (b.x == a.x && (b - a).dot(along) < 0.0) {
        (b, a)
    } else {
        (a, b)
    }
}

fn compare_along(a: Point2D, b: Point2D, origin: Point2D, along: Point2D) -> Ordering {
    compare_f32(a.x, b.x)
        .then_with(|| compare_f32((a - origin).dot(along), (b - origin).dot(along)))
}

/// Total order over floats that still treats `-0.0` and `0.0` as equal
fn compare_f32(a: f32, b: f32) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}
