//! Built-in detector studies.

use hs_core::{Axis, Dimensionality, Point};
use hs_grid::{GridSpec, SensorShape};
use hs_sim::{SimulationConfig, Sweep, SweepParameter};
use hs_trajectory::{ParamBounds, PointBounds, SamplerSpec};

pub const NAMES: [&str; 4] = ["rectangle_2d", "circle_2d", "cuboid_3d", "cylinder_3d"];

pub fn by_name(name: &str, seed: u64, workers: u32) -> Option<SimulationConfig> {
    let config = match name {
        "rectangle_2d" => rectangle_2d(seed),
        "circle_2d"    => circle_2d(seed),
        "cuboid_3d"    => cuboid_3d(seed),
        "cylinder_3d"  => cylinder_3d(seed),
        _ => return None,
    };
    Some(config.with_workers(workers))
}

/// 20×20 thin strips, pixel width swept 13..100 in steps of 5.  Lines have
/// slope in ±5 and cross y = 0 anywhere along the lattice.
fn rectangle_2d(seed: u64) -> SimulationConfig {
    let grid = GridSpec::new(
        Dimensionality::Two,
        20,
        Point::planar(13.0, 9.0),
        SensorShape::rectangle(3.3, 3e-3),
    );
    let sampler = SamplerSpec::SlopeIntercept {
        slope:     ParamBounds::fixed(-5.0, 5.0),
        intercept: ParamBounds::span(Axis::X, 0.0, 1.0),
    };
    let widths = (0..18).map(|i| 13.0 + 5.0 * i as f64).collect();
    SimulationConfig::new(grid, sampler, 100_000, seed)
        .with_sweep(Sweep::new(SweepParameter::PitchX, widths))
}

/// 10×10 diodes of diameter 0.236 on a 30.236 × 60.236 pitch, random implicit
/// lines.
fn circle_2d(seed: u64) -> SimulationConfig {
    let grid = GridSpec::new(
        Dimensionality::Two,
        10,
        Point::planar(30.236, 60.236),
        SensorShape::cylinder(0.118, 0.118),
    );
    let sampler = SamplerSpec::Implicit {
        a: ParamBounds::fixed(-10.0, 10.0),
        b: ParamBounds::fixed(-10.0, 10.0),
        c: ParamBounds::span(Axis::X, 0.0, 1.0),
    };
    SimulationConfig::new(grid, sampler, 100_000, seed)
}

/// 14×14×14 merged pads, origins in the central 80% of the volume.
fn cuboid_3d(seed: u64) -> SimulationConfig {
    let pad = 0.236 * 40.0;
    let grid = GridSpec::new(
        Dimensionality::Three,
        14,
        Point::new(80.0, 29.0, 19.0),
        SensorShape::cuboid(pad, 6e-3, pad),
    );
    SimulationConfig::new(grid, random_3d_lines(), 100_000, seed)
}

/// 10×10×10 discs, radius swept over the merged-diode sizes.
fn cylinder_3d(seed: u64) -> SimulationConfig {
    let grid = GridSpec::new(
        Dimensionality::Three,
        10,
        Point::new(30.236, 30.236, 20.0),
        SensorShape::cylinder(0.118, 0.5),
    );
    let radii = (1..=8).map(|n| 0.118 * n as f64).collect();
    SimulationConfig::new(grid, random_3d_lines(), 50_000, seed)
        .with_sweep(Sweep::new(SweepParameter::Radius, radii))
}

fn random_3d_lines() -> SamplerSpec {
    SamplerSpec::PointDirection {
        origin:    PointBounds::lattice_fraction(0.1, 0.9),
        direction: PointBounds::uniform(ParamBounds::fixed(-100.0, 100.0)),
    }
}
