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

use std::f32::consts::PI;

use crate::{geometry, point::Point, unistroke::Unistroke};

/// Rotation range searched on each side of the candidate's indicative angle
pub const ANGLE_RANGE: f32 = 45.0 * (PI / 180.0);
/// Golden-section search terminates when the bracket shrinks to this width
pub const ANGLE_PRECISION: f32 = 2.0 * (PI / 180.0);

/// Searches for the minimum path distance between the candidate points and a
/// template over rotations of the candidate in [a, b], using golden-section
/// search. Each bracket update depends on the previous evaluation, so the
/// search is inherently sequential.
pub fn distance_at_best_angle(
    points: &[Point],
    template: &Unistroke,
    mut a: f32,
    mut b: f32,
    threshold: f32,
) -> f32 {
    let phi = 0.5 * (-1.0 + 5.0_f32.sqrt());
    let mut x1 = phi * a + (1.0 - phi) * b;
    let mut f1 = distance_at_angle(points, template, x1);
    let mut x2 = (1.0 - phi) * a + phi * b;
    let mut f2 = distance_at_angle(points, template, x2);

    while (b - a).abs() > threshold {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = phi * a + (1.0 - phi) * b;
            f1 = distance_at_angle(points, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - phi) * a + phi * b;
            f2 = distance_at_angle(points, template, x2);
        }
    }
    f1.min(f2)
}

/// Rotates the candidate points by the trial angle around their centroid and
/// computes the raw path distance against the template's fixed points
pub fn distance_at_angle(points: &[Point], template: &Unistroke, radians: f32) -> f32 {
    let rotated = geometry::rotate_by(points, radians);
    geometry::path_distance(&rotated, &template.points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hook_stroke() -> Vec<Point> {
        let mut pts: Vec<Point> = (0..60).map(|i| Point::new(i as f32, (i as f32) * 0.3)).collect();
        pts.extend((0..40).map(|i| {
            let t = i as f32 / 40.0 * PI;
            Point::new(60.0 + 20.0 * t.sin(), 18.0 + 20.0 * (1.0 - t.cos()))
        }));
        pts
    }

    fn best_angle_distance(candidate: &Unistroke, template: &Unistroke) -> f32 {
        distance_at_best_angle(
            &candidate.points,
            template,
            -ANGLE_RANGE,
            ANGLE_RANGE,
            ANGLE_PRECISION,
        )
    }

    #[test]
    fn self_distance_is_small() {
        let template = Unistroke::new(hook_stroke(), "hook");
        let candidate = Unistroke::new(hook_stroke(), "");
        let d = best_angle_distance(&candidate, &template);
        // the 2-degree bracket leaves a residual rotation, so the distance is
        // small relative to the canonical square, not zero
        assert!(d >= 0.0);
        assert!(d < 120.0, "self distance was {}", d);
    }

    #[test]
    fn rotation_is_cancelled_within_search_range() {
        let template = Unistroke::new(hook_stroke(), "hook");
        let d_self = best_angle_distance(&Unistroke::new(hook_stroke(), ""), &template);
        for degrees in [-40.0_f32, -15.0, 10.0, 40.0] {
            let rotated = geometry::rotate_by(&hook_stroke(), degrees * PI / 180.0);
            let candidate = Unistroke::new(rotated, "");
            let d = best_angle_distance(&candidate, &template);
            // the indicative angle cancels the rotation before the search runs
            assert!(
                (d - d_self).abs() < 5.0,
                "distance at {} degrees was {}, self distance {}",
                degrees,
                d,
                d_self
            );
        }
    }

    #[test]
    fn search_beats_the_bracket_edges() {
        let template = Unistroke::new(hook_stroke(), "hook");
        let candidate = Unistroke::new(hook_stroke(), "");
        let best = best_angle_distance(&candidate, &template);
        let at_edge = distance_at_angle(&candidate.points, &template, ANGLE_RANGE);
        assert!(best <= at_edge + 1e-3);
    }
}
