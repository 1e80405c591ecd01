//! Room scattering
//!
//! Drops rooms at random points inside a disk. Positions use the polar method
//! with a folded triangular radius; side lengths come from a normal
//! distribution.

use std::f64::consts::TAU;

use log::debug;

use crate::rng::{GenRng, NormalSampler};

use super::room::{IdSequence, Room};

/// Parameters for [`scatter_rooms`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterParams {
    pub count: usize,
    pub radius: f64,
    pub size_mean: f64,
    pub size_stddev: f64,
}

/// Pick a point inside a disk of the given radius
pub fn point_in_disk(radius: f64, rng: &mut GenRng) -> (f64, f64) {
    let t = TAU * rng.unit();
    let u = rng.unit() + rng.unit();
    let r = if u > 1.0 { 2.0 - u } else { u };
    (radius * r * t.cos(), radius * r * t.sin())
}

/// Draw one side length. Truncates toward zero and never goes below 1.
fn side_length(sampler: &mut NormalSampler, params: &ScatterParams, rng: &mut GenRng) -> u32 {
    let raw = sampler.sample(rng, params.size_mean, params.size_stddev);
    if raw >= 1.0 { raw as u32 } else { 1 }
}

/// Create `params.count` unsettled rooms with empty neighbor slots
pub fn scatter_rooms(params: &ScatterParams, ids: &mut IdSequence, rng: &mut GenRng) -> Vec<Room> {
    let mut sampler = NormalSampler::new();
    let mut rooms = Vec::with_capacity(params.count);

    for _ in 0..params.count {
        let (x, y) = point_in_disk(params.radius, rng);
        let width = side_length(&mut sampler, params, rng);
        let height = side_length(&mut sampler, params, rng);
        rooms.push(Room::new(ids.next_room(), x, y, width, height));
    }

    debug!(
        "scattered {} rooms in radius {} (size {} ± {})",
        rooms.len(),
        params.radius,
        params.size_mean,
        params.size_stddev
    );
    rooms
}
