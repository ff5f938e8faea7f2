//! Rust implementation of the $1 unistroke gesture recognizer.
//!
//! The recognizer classifies a freehand stroke (an ordered sequence of 2D
//! points) against a library of named templates by geometric normalization
//! and nearest-neighbor search. Two distance metrics are available per call:
//! the original golden-section rotation search over Euclidean path distance,
//! and the closed-form Protractor cosine distance.
//!
//! ```
//! use dollar_recognizer::{point::Point, recognizer::DollarRecognizer};
//!
//! let recognizer = DollarRecognizer::new();
//! let stroke: Vec<Point> = (0..50)
//!     .map(|i| {
//!         let t = i as f32 / 49.0 * std::f32::consts::TAU;
//!         Point::new(100.0 + 40.0 * t.cos(), 100.0 + 40.0 * t.sin())
//!     })
//!     .collect();
//! let result = recognizer.recognize(&stroke, false).unwrap();
//! println!("{} ({:.2})", result.name, result.score);
//! ```

pub mod default_unistrokes;
pub mod geometry;
pub mod point;
pub mod protractor_recognizer;
pub mod recognizer;
pub mod unistroke;
pub mod unistroke_recognizer;
