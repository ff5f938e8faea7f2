/*
 * The $1 Unistroke Recognizer (rust version)
 *
 * Original authors:
 *
 * 	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *	    Microsoft Research
 *	    One Microsoft Way
 *	    Redmond, WA 98052
 *	    awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 *	    (when this work was performed)
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    yangli@cs.washington.edu
 *
 * The academic publication for the $1 recognizer, and what should be
 * used to cite it, is:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user interface
 *	  prototypes. Proceedings of the ACM Symposium on User Interface
 *	  Software and Technology (UIST '07). Newport, Rhode Island (October
 *	  7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (C) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson and Yang Li.
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D.
 * Wilson OR Yang Li BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::point::Point;

/// An axis-aligned bounding rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Computes the Euclidean distance between two points
pub fn euclidean_distance(a: &Point, b: &Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Computes the centroid for an array of points.
/// The caller guarantees the array is not empty.
pub fn centroid(points: &[Point]) -> Point {
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in points {
        cx += p.x;
        cy += p.y;
    }
    let n = points.len() as f32;
    Point::new(cx / n, cy / n)
}

/// Computes the axis-aligned bounding box for an array of points.
/// The caller guarantees the array is not empty.
pub fn bounding_box(points: &[Point]) -> Rect {
    let (mut minx, mut miny) = (f32::MAX, f32::MAX);
    let (mut maxx, mut maxy) = (f32::MIN, f32::MIN);
    for p in points {
        if p.x < minx { minx = p.x; }
        if p.y < miny { miny = p.y; }
        if p.x > maxx { maxx = p.x; }
        if p.y > maxy { maxy = p.y; }
    }
    Rect {
        x: minx,
        y: miny,
        width: maxx - minx,
        height: maxy - miny,
    }
}

/// Computes the path length for an array of points
pub fn path_length(points: &[Point]) -> f32 {
    let mut length = 0.0;
    for i in 1..points.len() {
        length += euclidean_distance(&points[i - 1], &points[i]);
    }
    length
}

/// Computes the sum of per-index distances between two equal-length paths.
/// The caller guarantees both paths have the same number of points.
pub fn path_distance(a: &[Point], b: &[Point]) -> f32 {
    let mut d = 0.0;
    for i in 0..a.len() {
        d += euclidean_distance(&a[i], &b[i]);
    }
    d
}

/// Rotates the array of points by the given angle around its centroid
pub fn rotate_by(points: &[Point], radians: f32) -> Vec<Point> {
    let c = centroid(points);
    let (sin, cos) = radians.sin_cos();
    points.iter().map(|p| {
        let qx = (p.x - c.x) * cos - (p.y - c.y) * sin + c.x;
        let qy = (p.x - c.x) * sin + (p.y - c.y) * cos + c.y;
        Point::new(qx, qy)
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_is_arithmetic_mean() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let c = centroid(&points);
        assert_eq!(c, Point::new(1.0, 1.0));
    }

    #[test]
    fn bounding_box_spans_extremes() {
        let points = vec![
            Point::new(-1.0, 3.0),
            Point::new(4.0, -2.0),
            Point::new(0.0, 0.0),
        ];
        let b = bounding_box(&points);
        assert_eq!(b.x, -1.0);
        assert_eq!(b.y, -2.0);
        assert_eq!(b.width, 5.0);
        assert_eq!(b.height, 5.0);
    }

    #[test]
    fn path_length_sums_segments() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 10.0),
        ];
        assert!((path_length(&points) - 11.0).abs() < 1e-6);
    }

    #[test]
    fn path_length_of_single_point_is_zero() {
        assert_eq!(path_length(&[Point::new(5.0, 5.0)]), 0.0);
    }

    #[test]
    fn path_distance_is_per_index() {
        let a = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let b = vec![Point::new(0.0, 1.0), Point::new(1.0, 0.0)];
        assert!((path_distance(&a, &b) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_by_preserves_centroid() {
        let points = vec![
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 2.0),
        ];
        let c = centroid(&points);
        let rotated = rotate_by(&points, 1.2);
        let rc = centroid(&rotated);
        assert!((c.x - rc.x).abs() < 1e-5);
        assert!((c.y - rc.y).abs() < 1e-5);
    }
}
