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

use std::f32::consts::SQRT_2;

use crate::{geometry, point::Point};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use tracing::warn;

/// Number of points on the gesture path after resampling
pub const SAMPLING_RESOLUTION: usize = 64;
/// Side of the canonical square the gesture is scaled to
pub const SQUARE_SIZE: f32 = 250.0;
/// Half the diagonal of the canonical square; normalizes golden-section scores
pub const HALF_DIAGONAL: f32 = 0.5 * SQRT_2 * SQUARE_SIZE;

/// Implements a gesture as a single continuous stroke (an ordered path of points).
/// Unistrokes are resampled into a fixed number of 64 points, rotated to a
/// canonical indicative angle, scaled to a 250x250 square, and translated so
/// their centroid sits at the origin. A flattened unit-length vector of the
/// normalized points is kept for the Protractor metric.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unistroke {
    /// Gesture class
    pub name: String,
    /// Gesture points (normalized)
    pub points: Vec<Point>,
    /// Unit-length vectorized form of the normalized points (Protractor)
    pub vector: Vec<f32>,
}

impl Unistroke {
    /// Constructs a new unistroke from a list of points and a name.
    /// The caller guarantees at least two points with nonzero path length;
    /// raw input is validated at the recognizer boundary.
    pub fn new(pts: Vec<Point>, name: &str) -> Self {
        let mut u = Self {
            points: pts,
            name: name.into(),
            vector: Vec::new(),
        };
        u.normalize();
        u
    }

    /// Normalizes the gesture path.
    /// Standard $1 processing: resample, rotate to the indicative angle,
    /// scale to the canonical square, translate to origin, then vectorize.
    fn normalize(&mut self) {
        self.points = Self::resample(&self.points, SAMPLING_RESOLUTION);
        let radians = Self::indicative_angle(&self.points);
        self.points = geometry::rotate_by(&self.points, -radians);
        self.points = Self::scale_to(&self.points, SQUARE_SIZE);
        self.points = Self::translate_to(&self.points, &Point::new(0.0, 0.0));
        self.vector = Self::vectorize(&self.points);
    }

    /// Resamples the array of points into n points evenly spaced by arc length.
    /// Every synthesized point is inserted back into the working sequence so
    /// that subsequent distance accounting measures from it, not from the raw
    /// point it split; dropping the insertion makes the spacing drift.
    fn resample(points: &[Point], n: usize) -> Vec<Point> {
        let interval = geometry::path_length(points) / (n as f32 - 1.0);
        let mut d = 0.0;

        let mut working = points.to_vec();
        let mut new_points = Vec::with_capacity(n);
        new_points.push(working[0]);

        let mut i = 1;
        while i < working.len() {
            let dist = geometry::euclidean_distance(&working[i - 1], &working[i]);
            if d + dist >= interval {
                let t = (interval - d) / dist;
                let q = Point::new(
                    working[i - 1].x + t * (working[i].x - working[i - 1].x),
                    working[i - 1].y + t * (working[i].y - working[i - 1].y),
                );
                new_points.push(q);
                working.insert(i, q);
                d = 0.0;
            } else {
                d += dist;
            }
            i += 1;
        }
        // sometimes we fall a rounding-error short of adding the last point, so add it if so
        if new_points.len() == n - 1 {
            new_points.push(working[working.len() - 1]);
        }
        new_points
    }

    /// Angle from the first point to the centroid, the canonical orientation reference
    fn indicative_angle(points: &[Point]) -> f32 {
        let c = geometry::centroid(points);
        (c.y - points[0].y).atan2(c.x - points[0].x)
    }

    /// Performs non-uniform scale normalization into a size x size box.
    /// A zero-size axis (perfectly straight horizontal or vertical stroke) is
    /// left unscaled instead of dividing by zero.
    fn scale_to(points: &[Point], size: f32) -> Vec<Point> {
        let b = geometry::bounding_box(points);
        if b.width == 0.0 || b.height == 0.0 {
            warn!(
                width = b.width,
                height = b.height,
                "degenerate bounding box, leaving zero-size axis unscaled"
            );
        }
        points.iter().map(|p| {
            let qx = if b.width == 0.0 { p.x } else { p.x * size / b.width };
            let qy = if b.height == 0.0 { p.y } else { p.y * size / b.height };
            Point::new(qx, qy)
        }).collect()
    }

    /// Translates the array of points so its centroid lands on pt
    fn translate_to(points: &[Point], pt: &Point) -> Vec<Point> {
        let c = geometry::centroid(points);
        points.iter().map(|p| {
            Point::new(p.x + pt.x - c.x, p.y + pt.y - c.y)
        }).collect()
    }

    /// Flattens the points into a 2n-length vector and scales it to unit length.
    /// A zero-magnitude vector (all points coincide after normalization) is
    /// left as-is; under the cosine metric it reads as a maximal distance.
    fn vectorize(points: &[Point]) -> Vec<f32> {
        let mut sum = 0.0;
        let mut vector = Vec::with_capacity(2 * points.len());
        for p in points {
            vector.push(p.x);
            vector.push(p.y);
            sum += p.x * p.x + p.y * p.y;
        }
        let magnitude = sum.sqrt();
        if magnitude == 0.0 {
            warn!("zero-magnitude gesture vector, skipping unit normalization");
            return vector;
        }
        for v in &mut vector {
            *v /= magnitude;
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;

    fn vee_stroke() -> Vec<Point> {
        let mut pts: Vec<Point> = (0..50).map(|i| Point::new(i as f32, i as f32)).collect();
        pts.extend((0..50).map(|i| Point::new(50.0 + i as f32, 50.0 - i as f32)));
        pts
    }

    // smooth three-quarter circle; no corners, so consecutive resampled
    // points are chord-distance comparable to the arc-length interval
    fn arc_stroke() -> Vec<Point> {
        (0..100)
            .map(|i| {
                let t = i as f32 / 99.0 * 1.5 * std::f32::consts::PI;
                Point::new(120.0 + 50.0 * t.cos(), 120.0 + 50.0 * t.sin())
            })
            .collect()
    }

    #[test]
    fn resample_returns_exactly_n_points() {
        let u = Unistroke::new(vee_stroke(), "vee");
        assert_eq!(u.points.len(), SAMPLING_RESOLUTION);

        // a short raw stroke also resamples up to the full resolution
        let short = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let u = Unistroke::new(short, "corner");
        assert_eq!(u.points.len(), SAMPLING_RESOLUTION);
    }

    #[test]
    fn resample_spacing_is_even() {
        // spacing is even along the arc length; chord distances only match
        // the interval on a smooth stroke, so measure on one (a point placed
        // across a corner sits legitimately closer than the interval)
        let resampled = Unistroke::resample(&arc_stroke(), SAMPLING_RESOLUTION);
        assert_eq!(resampled.len(), SAMPLING_RESOLUTION);
        let interval =
            geometry::path_length(&arc_stroke()) / (SAMPLING_RESOLUTION as f32 - 1.0);
        // the last spacing may fall short when the rounding-error fixup
        // re-appends the final raw point
        for w in resampled.windows(2).take(SAMPLING_RESOLUTION - 2) {
            let d = geometry::euclidean_distance(&w[0], &w[1]);
            assert!(
                (d - interval).abs() < 0.05 * interval,
                "uneven spacing: {} vs interval {}",
                d,
                interval
            );
        }
    }

    #[test]
    fn resample_preserves_arc_length_across_corners() {
        // the walk accounts distance along the raw polyline, so the
        // resampled path keeps the stroke's total length even at the vee's
        // 90-degree corner (where individual chords undercut the interval)
        let resampled = Unistroke::resample(&vee_stroke(), SAMPLING_RESOLUTION);
        assert_eq!(resampled.len(), SAMPLING_RESOLUTION);
        let raw_length = geometry::path_length(&vee_stroke());
        let resampled_length = geometry::path_length(&resampled);
        assert!(
            (resampled_length - raw_length).abs() < 0.01 * raw_length,
            "resampled length {} vs raw length {}",
            resampled_length,
            raw_length
        );
    }

    #[test]
    fn normalization_centers_and_scales() {
        let u = Unistroke::new(vee_stroke(), "vee");
        let c = geometry::centroid(&u.points);
        assert!(c.x.abs() < 1e-3);
        assert!(c.y.abs() < 1e-3);
        let b = geometry::bounding_box(&u.points);
        assert!((b.width - SQUARE_SIZE).abs() < 1e-2);
        assert!((b.height - SQUARE_SIZE).abs() < 1e-2);
    }

    #[test]
    fn vector_has_unit_length() {
        let u = Unistroke::new(vee_stroke(), "vee");
        assert_eq!(u.vector.len(), 2 * SAMPLING_RESOLUTION);
        let sum_sq: f32 = u.vector.iter().map(|v| v * v).sum();
        assert!((sum_sq - 1.0).abs() < 1e-5, "sum of squares was {}", sum_sq);
    }

    #[test]
    fn normalization_is_idempotent() {
        // re-resampling shifts points near a sharp corner and the
        // anisotropic rescale amplifies the shift, so idempotence is a
        // smooth-stroke property
        let u = Unistroke::new(arc_stroke(), "arc");
        let again = Unistroke::new(u.points.clone(), "arc");
        for (p, q) in u.points.iter().zip(again.points.iter()) {
            assert!((p.x - q.x).abs() < 0.5, "{} vs {}", p.x, q.x);
            assert!((p.y - q.y).abs() < 0.5, "{} vs {}", p.y, q.y);
        }
        let sum_sq: f32 = again.vector.iter().map(|v| v * v).sum();
        assert!((sum_sq - 1.0).abs() < 1e-5);
    }

    #[test]
    fn half_diagonal_spans_the_canonical_square() {
        let expected = 0.5 * (2.0 * SQUARE_SIZE * SQUARE_SIZE).sqrt();
        assert!((HALF_DIAGONAL - expected).abs() < 1e-3);
    }

    #[test]
    fn degenerate_flat_stroke_stays_finite() {
        // zero-height bounding box: the y axis is left unscaled
        let flat: Vec<Point> = (0..80).map(|i| Point::new(i as f32, 42.0)).collect();
        let u = Unistroke::new(flat, "flat");
        assert_eq!(u.points.len(), SAMPLING_RESOLUTION);
        for p in &u.points {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
        for v in &u.vector {
            assert!(v.is_finite());
        }
    }
}
