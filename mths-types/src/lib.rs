//! # mths-types
//!
//! Core record types for micro-time hot spot detection.
//!
//! - **Circle**: a center point and radius, as returned by minimum enclosing
//!   circle computations.
//! - **HotSpot**: a candidate (and, once selected, final) hot spot circle with
//!   the indices of the input points it contains.
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use mths_types::circle::Circle;
//! use geo::Point;
//!
//! let circle = Circle::new(Point::new(0.0, 0.0), 10.0);
//! assert!(circle.covers(&Point::new(3.0, 4.0)));
//! assert!(!circle.covers(&Point::new(30.0, 40.0)));
//! ```

pub mod circle;
pub mod hotspot;
