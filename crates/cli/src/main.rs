mod points_io;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dc_delaunay::sample::{draw_cloud, CloudCfg, CloudKind, ReplayToken};
use dc_delaunay::triangulate::DEFAULT_PARALLEL_THRESHOLD;
use dc_delaunay::validate::{validate, Summary, DEFAULT_DELAUNAY_TOL};
use dc_delaunay::{geom::DEFAULT_EPS, triangulate_with, GeomCfg, TriangulateCfg};
use provenance::Payload;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Delaunay triangulation runner")]
struct Cmd {
    /// Optional run label; propagated to provenance and logs
    #[arg(long)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Triangulation knobs shared by `run` and `check`.
#[derive(Args, Clone, Copy, Debug)]
struct TriArgs {
    /// Points closer than this in both coordinates are duplicates
    #[arg(long, default_value_t = DEFAULT_EPS)]
    eps: f64,
    /// Minimum sub-range size that forks into parallel tasks
    #[arg(long, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,
}

impl TriArgs {
    fn cfg(self) -> TriangulateCfg {
        TriangulateCfg {
            geom: GeomCfg { eps: self.eps },
            parallel_threshold: self.parallel_threshold,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate an x,y CSV and write the edges as JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tri: TriArgs,
    },
    /// Write a reproducible point cloud as an x,y CSV
    Sample {
        #[arg(long, default_value = "uniform")]
        kind: CloudKind,
        #[arg(long, default_value_t = 1000)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        #[arg(long, default_value_t = 0.0)]
        jitter: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Triangulate an x,y CSV and run every validator; fails on a violation
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_DELAUNAY_TOL)]
        tol: f64,
        #[command(flatten)]
        tri: TriArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, out, tri } => run(&input, &out, tri, cmd.label).map(|_| ()),
        Action::Sample {
            kind,
            n,
            seed,
            half_extent,
            jitter,
            out,
        } => {
            let cfg = CloudCfg {
                kind,
                n,
                half_extent,
                jitter,
            };
            sample(cfg, seed, &out, cmd.label)
        }
        Action::Check { input, tol, tri } => check(&input, tri, tol).map(|_| ()),
        Action::Report => report(cmd.label),
    }
}

fn run(input: &Path, out: &Path, tri: TriArgs, label: Option<String>) -> Result<usize> {
    tracing::info!(input = %input.display(), out = %out.display(), label = ?label, "run");
    let points = points_io::read_points(input)?;
    let t = triangulate_with(points.iter().copied(), &tri.cfg())
        .with_context(|| format!("triangulating {}", input.display()))?;
    tracing::info!(
        points = points.len(),
        vertices = t.vertex_count(),
        edges = t.edge_count(),
        "triangulated"
    );
    points_io::write_edges(out, &t)?;

    let payload = Payload::new(
        "run",
        json!({
            "input": input.to_string_lossy(),
            "eps": tri.eps,
            "parallel_threshold": tri.parallel_threshold,
            "points": points.len(),
            "vertices": t.vertex_count(),
            "edges": t.edge_count(),
        }),
        label,
    );
    provenance::write_sidecar(out, &payload)?;
    Ok(t.edge_count())
}

fn sample(cfg: CloudCfg, seed: u64, out: &Path, label: Option<String>) -> Result<()> {
    tracing::info!(kind = %cfg.kind, n = cfg.n, seed, out = %out.display(), "sample");
    let points = draw_cloud(cfg, ReplayToken::new(seed));
    points_io::write_points(out, &points)?;
    let payload = Payload::new(
        "sample",
        json!({
            "kind": cfg.kind.name(),
            "n": cfg.n,
            "seed": seed,
            "half_extent": cfg.half_extent,
            "jitter": cfg.jitter,
        }),
        label,
    );
    provenance::write_sidecar(out, &payload)?;
    Ok(())
}

fn check(input: &Path, tri: TriArgs, tol: f64) -> Result<Summary> {
    let points = points_io::read_points(input)?;
    let t = triangulate_with(points, &tri.cfg())
        .with_context(|| format!("triangulating {}", input.display()))?;
    let summary = validate(&t, tol).with_context(|| format!("checking {}", input.display()))?;
    tracing::info!(
        vertices = summary.vertices,
        edges = summary.edges,
        triangles = summary.triangles,
        hull_boundary = summary.hull_boundary,
        "check ok"
    );
    Ok(summary)
}

fn report(label: Option<String>) -> Result<()> {
    let payload = Payload::new("report", json!({}), label);
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn defaults() -> TriArgs {
        TriArgs {
            eps: DEFAULT_EPS,
            parallel_threshold: 64,
        }
    }

    #[test]
    fn sample_run_check_pipeline() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.csv");
        let cfg = CloudCfg {
            kind: CloudKind::Disk,
            n: 400,
            ..CloudCfg::default()
        };
        sample(cfg, 9, &pts, Some("t".into())).unwrap();
        assert!(dir.path().join("pts.provenance.json").exists());

        let out = dir.path().join("out/edges.json");
        let edges = run(&pts, &out, defaults(), None).unwrap();
        assert!(out.exists());
        assert!(dir.path().join("out/edges.provenance.json").exists());

        let summary = check(&pts, defaults(), DEFAULT_DELAUNAY_TOL).unwrap();
        assert_eq!(summary.edges, edges);
    }

    #[test]
    fn run_rejects_degenerate_input() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("one.csv");
        fs::write(&pts, "x,y\n1.0,1.0\n1.0,1.0\n").unwrap();
        let err = run(&pts, &dir.path().join("e.json"), defaults(), None).unwrap_err();
        assert!(format!("{err:#}").contains("at least 2 distinct points"));
    }

    #[test]
    fn cli_parses_shared_flags() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "check",
            "--input",
            "p.csv",
            "--eps",
            "0.5",
            "--parallel-threshold",
            "128",
        ])
        .unwrap();
        match cmd.action {
            Action::Check { tri, tol, .. } => {
                assert_eq!(tri.eps, 0.5);
                assert_eq!(tri.parallel_threshold, 128);
                assert_eq!(tol, DEFAULT_DELAUNAY_TOL);
            }
            _ => panic!("expected check"),
        }
        assert!(Cmd::try_parse_from(["cli", "sample", "--kind", "spiral", "--out", "a.csv"]).is_err());
    }
}
