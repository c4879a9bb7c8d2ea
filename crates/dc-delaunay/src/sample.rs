//! Reproducible point clouds for tests, benchmarks and the CLI.
//!
//! Purpose
//! - Draw point sets of a few shapes that stress different parts of the
//!   triangulator: generic position (uniform, disk), cocircular quads (grid),
//!   everything on the hull (circle), and fully collinear input with distinct
//!   x (line) or a single shared x (column).
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `index` of a run can be regenerated without drawing the others.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Shape of a sampled cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudKind {
    /// Uniform in the square `[-h, h]^2`.
    Uniform,
    /// Uniform in the disk of radius `h`.
    Disk,
    /// Square lattice spanning `[-h, h]^2`, filled row by row up to `n` points.
    Grid,
    /// Equally spaced on the circle of radius `h`.
    Circle,
    /// Random abscissae in `[-h, h]` on the x-axis.
    Line,
    /// Random ordinates in `[-h, h]` on the y-axis, half of them at `x = -0.0`.
    Column,
}

impl CloudKind {
    pub const ALL: [CloudKind; 6] = [
        CloudKind::Uniform,
        CloudKind::Disk,
        CloudKind::Grid,
        CloudKind::Circle,
        CloudKind::Line,
        CloudKind::Column,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CloudKind::Uniform => "uniform",
            CloudKind::Disk => "disk",
            CloudKind::Grid => "grid",
            CloudKind::Circle => "circle",
            CloudKind::Line => "line",
            CloudKind::Column => "column",
        }
    }
}

impl fmt::Display for CloudKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for CloudKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CloudKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown cloud kind `{s}` (expected uniform|disk|grid|circle|line|column)"))
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub kind: CloudKind,
    pub n: usize,
    /// Half-width of the bounding square (radius for disk and circle).
    pub half_extent: f64,
    /// Perturbation amplitude relative to the lattice spacing (grid) or the
    /// angular spacing (circle). Ignored by the other kinds.
    pub jitter: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            kind: CloudKind::Uniform,
            n: 1000,
            half_extent: 1.0,
            jitter: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the next draw of the same run.
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.n` points of shape `cfg.kind`.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.abs().max(f64::MIN_POSITIVE);
    let n = cfg.n;
    match cfg.kind {
        CloudKind::Uniform => (0..n)
            .map(|_| Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
            .collect(),
        CloudKind::Disk => (0..n)
            .map(|_| {
                let r = h * rng.gen::<f64>().sqrt();
                let th = rng.gen::<f64>() * 2.0 * PI;
                Point::new(r * th.cos(), r * th.sin())
            })
            .collect(),
        CloudKind::Grid => {
            let side = (n as f64).sqrt().ceil().max(2.0) as usize;
            let step = 2.0 * h / (side - 1) as f64;
            let amp = cfg.jitter.max(0.0) * step;
            (0..n)
                .map(|k| {
                    let (i, j) = (k / side, k % side);
                    let mut p = Point::new(-h + j as f64 * step, -h + i as f64 * step);
                    if amp > 0.0 {
                        p.x += rng.gen_range(-amp..=amp);
                        p.y += rng.gen_range(-amp..=amp);
                    }
                    p
                })
                .collect()
        }
        CloudKind::Circle => {
            let delta = 2.0 * PI / n.max(1) as f64;
            let amp = cfg.jitter.clamp(0.0, 0.49) * delta;
            let phase = rng.gen::<f64>() * 2.0 * PI;
            (0..n)
                .map(|k| {
                    let mut th = phase + k as f64 * delta;
                    if amp > 0.0 {
                        th += rng.gen_range(-amp..=amp);
                    }
                    Point::new(h * th.cos(), h * th.sin())
                })
                .collect()
        }
        CloudKind::Line => (0..n).map(|_| Point::new(rng.gen_range(-h..=h), 0.0)).collect(),
        CloudKind::Column => (0..n)
            .map(|k| {
                let x = if k % 2 == 0 { 0.0 } else { -0.0 };
                Point::new(x, rng.gen_range(-h..=h))
            })
            .collect(),
    }
}
