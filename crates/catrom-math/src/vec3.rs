//! Component-wise helpers over 3D points.
//!
//! All functions are pure and allocate nothing; points are `Copy`.

use crate::{Point3, Vector3};

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point3, b: Point3) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Squared Euclidean distance between `a` and `b`.
#[inline]
pub fn distance_squared(a: Point3, b: Point3) -> f64 {
    let d = b - a;
    d.x * d.x + d.y * d.y + d.z * d.z
}

#[inline]
pub fn add(a: Point3, b: Vector3) -> Point3 {
    a + b
}

#[inline]
pub fn sub(a: Point3, b: Point3) -> Vector3 {
    a - b
}

/// Mirror `neighbor` through `anchor`: `anchor + (anchor - neighbor)`.
///
/// Used to extrapolate a phantom control point past the ends of an open curve.
#[inline]
pub fn reflect(anchor: Point3, neighbor: Point3) -> Point3 {
    add(anchor, sub(anchor, neighbor))
}
