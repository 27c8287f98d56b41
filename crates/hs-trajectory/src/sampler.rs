//! `TrajectorySampler`: resolved distributions plus the resample policy.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use hs_core::{Bounds, Dimensionality, HsResult, Point, WorkerRng};

use crate::{DivisorGuard, SampleError, SampleResult, SamplerSpec, Trajectory};

/// Default threshold below which a divisor counts as zero.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default cap on consecutive degenerate draws for one trial.
pub const DEFAULT_MAX_RESAMPLES: u32 = 1_000;

// ── ParamDist ─────────────────────────────────────────────────────────────────

/// One parameter's distribution, built once per configuration.
#[derive(Clone, Debug)]
enum ParamDist {
    Constant(f64),
    Uniform(Uniform<f64>),
}

impl ParamDist {
    fn new(bounds: Bounds) -> Self {
        if bounds.is_constant() {
            ParamDist::Constant(bounds.low)
        } else {
            ParamDist::Uniform(Uniform::new_inclusive(bounds.low, bounds.high))
        }
    }

    #[inline]
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            ParamDist::Constant(v) => *v,
            ParamDist::Uniform(u)  => u.sample(rng),
        }
    }
}

#[derive(Clone, Debug)]
enum Scheme {
    SlopeIntercept { slope: ParamDist, intercept: ParamDist },
    Implicit { a: ParamDist, b: ParamDist, c: ParamDist },
    PointDirection { origin: [ParamDist; 3], direction: [ParamDist; 3] },
}

// ── TrajectorySampler ─────────────────────────────────────────────────────────

/// A trajectory plus the number of degenerate draws discarded before it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sampled {
    pub trajectory: Trajectory,
    pub resamples:  u32,
}

/// Draws independent trajectories from fixed uniform bounds.
///
/// Holds no RNG: every worker passes its own [`WorkerRng`], so one sampler is
/// shared read-only across threads.
#[derive(Clone, Debug)]
pub struct TrajectorySampler {
    scheme:        Scheme,
    guard:         DivisorGuard,
    epsilon:       f64,
    max_resamples: u32,
}

impl TrajectorySampler {
    /// Resolve every bound in `spec` against the lattice `spans`
    /// (`length · pitch` per axis) and build the distributions.
    pub fn new(spec: &SamplerSpec, spans: Point) -> HsResult<Self> {
        let scheme = match spec {
            SamplerSpec::SlopeIntercept { slope, intercept } => Scheme::SlopeIntercept {
                slope:     ParamDist::new(slope.resolve(spans)?),
                intercept: ParamDist::new(intercept.resolve(spans)?),
            },
            SamplerSpec::Implicit { a, b, c } => Scheme::Implicit {
                a: ParamDist::new(a.resolve(spans)?),
                b: ParamDist::new(b.resolve(spans)?),
                c: ParamDist::new(c.resolve(spans)?),
            },
            SamplerSpec::PointDirection { origin, direction } => Scheme::PointDirection {
                origin:    origin.resolve(spans)?.map(ParamDist::new),
                direction: direction.resolve(spans)?.map(ParamDist::new),
            },
        };
        Ok(Self {
            scheme,
            guard:         DivisorGuard::None,
            epsilon:       DEFAULT_EPSILON,
            max_resamples: DEFAULT_MAX_RESAMPLES,
        })
    }

    /// Reject draws whose `guard` divisor is below `epsilon`.
    pub fn with_guard(mut self, guard: DivisorGuard, epsilon: f64) -> Self {
        self.guard = guard;
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_resamples(mut self, max_resamples: u32) -> Self {
        self.max_resamples = max_resamples;
        self
    }

    pub fn guard(&self) -> DivisorGuard {
        self.guard
    }

    pub fn dimensionality(&self) -> Dimensionality {
        match self.scheme {
            Scheme::SlopeIntercept { .. } | Scheme::Implicit { .. } => Dimensionality::Two,
            Scheme::PointDirection { .. } => Dimensionality::Three,
        }
    }

    /// One raw draw, no guard applied.  Parameters are drawn in declaration
    /// order (origin x, y, z before direction x, y, z).
    pub fn draw(&self, rng: &mut WorkerRng) -> Trajectory {
        let rng = rng.inner();
        match &self.scheme {
            Scheme::SlopeIntercept { slope, intercept } => Trajectory::SlopeIntercept {
                slope:     slope.draw(rng),
                intercept: intercept.draw(rng),
            },
            Scheme::Implicit { a, b, c } => Trajectory::Implicit {
                a: a.draw(rng),
                b: b.draw(rng),
                c: c.draw(rng),
            },
            Scheme::PointDirection { origin, direction } => {
                let origin = Point::new(origin[0].draw(rng), origin[1].draw(rng), origin[2].draw(rng));
                let direction = Point::new(
                    direction[0].draw(rng),
                    direction[1].draw(rng),
                    direction[2].draw(rng),
                );
                Trajectory::PointDirection { origin, direction }
            }
        }
    }

    /// One guarded draw: degenerate draws are discarded and redrawn.
    ///
    /// Fails with [`SampleError::ResampleLimit`] after `max_resamples`
    /// consecutive degenerate draws (e.g. a direction bound pinned at 0).
    pub fn sample(&self, rng: &mut WorkerRng) -> SampleResult<Sampled> {
        let mut resamples = 0u32;
        loop {
            let trajectory = self.draw(rng);
            match self.guard.check(&trajectory, self.epsilon) {
                Ok(()) => return Ok(Sampled { trajectory, resamples }),
                Err(SampleError::Degenerate(_)) if resamples < self.max_resamples => {
                    resamples += 1;
                }
                Err(SampleError::Degenerate(_)) => {
                    return Err(SampleError::ResampleLimit { attempts: resamples });
                }
                Err(e) => return Err(e),
            }
        }
    }
}
