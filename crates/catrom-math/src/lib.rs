pub mod vec3;

pub use glam::{dvec3, DVec3};
pub use vec3::{add, distance, distance_squared, reflect, sub};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
