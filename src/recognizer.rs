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

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::{
    default_unistrokes::default_unistrokes,
    geometry,
    point::Point,
    protractor_recognizer,
    unistroke::{Unistroke, HALF_DIAGONAL},
    unistroke_recognizer::{self, ANGLE_PRECISION, ANGLE_RANGE},
};

/// Name reported when the template store is empty
pub const NO_MATCH_NAME: &str = "No match.";

/// Degenerate-geometry conditions rejected at the API boundary, before the
/// normalization pipeline runs. None of these are recoverable by retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecognizerError {
    /// Empty or single-point strokes have no centroid or no path length
    #[error("a stroke needs at least two points, got {got}")]
    TooFewPoints { got: usize },
    /// All points coincide; the resample interval would be zero
    #[error("all stroke points coincide, the path length is zero")]
    ZeroLengthPath,
}

/// Outcome of a recognition call. The score is a similarity derived from the
/// winning distance, not a probability; it is deliberately not clamped to
/// [0, 1] and can go negative for very poor matches.
#[derive(Clone, Debug)]
pub struct RecognitionResult {
    /// Class of the closest template, or [`NO_MATCH_NAME`] for an empty store
    pub name: String,
    /// 1 - distance/half_diagonal (golden-section) or 1 - distance (Protractor)
    pub score: f32,
    /// Wall-clock time spent normalizing and scanning
    pub time: Duration,
}

/// The $1 recognizer: an ordered template store plus nearest-neighbor search.
/// Each instance is independent, so one store per user session is cheap; in a
/// concurrent host, wrap the store in a read-write lock since `add_gesture`
/// and `delete_user_gestures` mutate the list `recognize` scans.
pub struct DollarRecognizer {
    unistrokes: Vec<Unistroke>,
    num_defaults: usize,
}

impl DollarRecognizer {
    /// Creates a recognizer seeded with the 16 built-in gesture templates
    pub fn new() -> Self {
        Self::with_unistrokes(default_unistrokes())
    }

    /// Creates a recognizer over an arbitrary template set. The given
    /// templates count as built-ins: `delete_user_gestures` truncates back
    /// to them.
    pub fn with_unistrokes(unistrokes: Vec<Unistroke>) -> Self {
        let num_defaults = unistrokes.len();
        DollarRecognizer {
            unistrokes,
            num_defaults,
        }
    }

    /// The stored templates, built-ins first, then user additions in
    /// insertion order
    pub fn unistrokes(&self) -> &[Unistroke] {
        &self.unistrokes
    }

    /// Classifies a candidate stroke against the template store and returns
    /// the closest match, its score, and the elapsed time. `use_protractor`
    /// selects the closed-form cosine metric instead of the golden-section
    /// rotation search.
    pub fn recognize(
        &self,
        points: &[Point],
        use_protractor: bool,
    ) -> Result<RecognitionResult, RecognizerError> {
        validate_stroke(points)?;
        let t0 = Instant::now();
        let candidate = Unistroke::new(points.to_vec(), "");

        let mut best: Option<usize> = None;
        let mut min_distance = f32::MAX;
        for (i, template) in self.unistrokes.iter().enumerate() {
            let d = if use_protractor {
                protractor_recognizer::optimal_cosine_distance(&template.vector, &candidate.vector)
            } else {
                unistroke_recognizer::distance_at_best_angle(
                    &candidate.points,
                    template,
                    -ANGLE_RANGE,
                    ANGLE_RANGE,
                    ANGLE_PRECISION,
                )
            };
            // ties keep the first-seen template
            if d < min_distance {
                min_distance = d;
                best = Some(i);
            }
        }
        let time = t0.elapsed();

        let result = match best {
            None => RecognitionResult {
                name: NO_MATCH_NAME.into(),
                score: 0.0,
                time,
            },
            Some(i) => {
                let score = if use_protractor {
                    1.0 - min_distance
                } else {
                    1.0 - min_distance / HALF_DIAGONAL
                };
                RecognitionResult {
                    name: self.unistrokes[i].name.clone(),
                    score,
                    time,
                }
            }
        };
        debug!(name = %result.name, score = result.score, "recognized stroke");
        Ok(result)
    }

    /// Normalizes and appends a new template. Returns how many stored
    /// templates now carry this name (a registration counter, not an id).
    pub fn add_gesture(&mut self, name: &str, points: &[Point]) -> Result<usize, RecognizerError> {
        validate_stroke(points)?;
        self.unistrokes.push(Unistroke::new(points.to_vec(), name));
        Ok(self.unistrokes.iter().filter(|u| u.name == name).count())
    }

    /// Discards every user-added template in one operation, truncating the
    /// store back to the built-in set. Returns the resulting template count.
    pub fn delete_user_gestures(&mut self) -> usize {
        self.unistrokes.truncate(self.num_defaults);
        self.unistrokes.len()
    }
}

impl Default for DollarRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_stroke(points: &[Point]) -> Result<(), RecognizerError> {
    if points.len() < 2 {
        return Err(RecognizerError::TooFewPoints { got: points.len() });
    }
    if geometry::path_length(points) == 0.0 {
        return Err(RecognizerError::ZeroLengthPath);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn spiral_stroke() -> Vec<Point> {
        (0..120)
            .map(|i| {
                let t = i as f32 / 119.0 * 3.0 * PI;
                Point::new(200.0 + t * 12.0 * t.cos(), 200.0 + t * 12.0 * t.sin())
            })
            .collect()
    }

    #[test]
    fn seeded_store_has_sixteen_templates() {
        let recognizer = DollarRecognizer::new();
        assert_eq!(recognizer.unistrokes().len(), 16);
        assert_eq!(recognizer.unistrokes()[0].name, "triangle");
        assert_eq!(recognizer.unistrokes()[15].name, "pigtail");
    }

    #[test]
    fn self_match_wins_under_both_metrics() {
        let mut recognizer = DollarRecognizer::new();
        recognizer.add_gesture("spiral", &spiral_stroke()).unwrap();

        let golden = recognizer.recognize(&spiral_stroke(), false).unwrap();
        assert_eq!(golden.name, "spiral");
        assert!(golden.score > 0.5, "golden-section score was {}", golden.score);

        let protractor = recognizer.recognize(&spiral_stroke(), true).unwrap();
        assert_eq!(protractor.name, "spiral");
        assert!(
            protractor.score > 0.98,
            "protractor score was {}",
            protractor.score
        );
    }

    #[test]
    fn default_template_points_self_match() {
        // a template's own normalized points re-normalize to themselves, so
        // feeding them back as a stroke must return that template's name
        let recognizer = DollarRecognizer::new();
        let circle_points = recognizer.unistrokes()[3].points.clone();
        assert_eq!(recognizer.unistrokes()[3].name, "circle");

        let result = recognizer.recognize(&circle_points, true).unwrap();
        assert_eq!(result.name, "circle");
        assert!(result.score > 0.9, "score was {}", result.score);
    }

    #[test]
    fn add_gesture_counts_occurrences_of_the_name() {
        let mut recognizer = DollarRecognizer::new();
        assert_eq!(recognizer.add_gesture("foo", &spiral_stroke()).unwrap(), 1);
        assert_eq!(recognizer.add_gesture("foo", &spiral_stroke()).unwrap(), 2);
        assert_eq!(recognizer.add_gesture("bar", &spiral_stroke()).unwrap(), 1);
        assert_eq!(recognizer.unistrokes().len(), 19);
    }

    #[test]
    fn delete_user_gestures_restores_the_builtin_set() {
        let mut recognizer = DollarRecognizer::new();
        recognizer.add_gesture("foo", &spiral_stroke()).unwrap();
        recognizer.add_gesture("foo", &spiral_stroke()).unwrap();
        assert_eq!(recognizer.delete_user_gestures(), 16);
        assert_eq!(recognizer.unistrokes().len(), 16);

        // "foo" is no longer matchable
        let result = recognizer.recognize(&spiral_stroke(), true).unwrap();
        assert_ne!(result.name, "foo");
    }

    #[test]
    fn empty_store_returns_the_no_match_sentinel() {
        let recognizer = DollarRecognizer::with_unistrokes(vec![]);
        for use_protractor in [false, true] {
            let result = recognizer
                .recognize(&spiral_stroke(), use_protractor)
                .unwrap();
            assert_eq!(result.name, NO_MATCH_NAME);
            assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn ties_keep_the_first_seen_template() {
        let mut recognizer = DollarRecognizer::with_unistrokes(vec![]);
        recognizer.add_gesture("first", &spiral_stroke()).unwrap();
        recognizer.add_gesture("second", &spiral_stroke()).unwrap();
        for use_protractor in [false, true] {
            let result = recognizer
                .recognize(&spiral_stroke(), use_protractor)
                .unwrap();
            assert_eq!(result.name, "first");
        }
    }

    #[test]
    fn degenerate_strokes_are_rejected_at_the_boundary() {
        let mut recognizer = DollarRecognizer::new();
        assert_eq!(
            recognizer.recognize(&[], false).unwrap_err(),
            RecognizerError::TooFewPoints { got: 0 }
        );
        assert_eq!(
            recognizer.recognize(&[Point::new(1.0, 1.0)], true).unwrap_err(),
            RecognizerError::TooFewPoints { got: 1 }
        );
        let coincident = vec![Point::new(3.0, 3.0); 5];
        assert_eq!(
            recognizer.recognize(&coincident, false).unwrap_err(),
            RecognizerError::ZeroLengthPath
        );
        assert_eq!(
            recognizer.add_gesture("dot", &coincident).unwrap_err(),
            RecognizerError::ZeroLengthPath
        );
        // the failed add left the store untouched
        assert_eq!(recognizer.unistrokes().len(), 16);
    }
}
