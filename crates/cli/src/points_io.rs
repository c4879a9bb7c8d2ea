//! Point CSV and edge JSON files.

use anyhow::{bail, Context, Result};
use dc_delaunay::{Point, Triangulation};
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// Read `x`,`y` columns from a CSV. Rows with a null in either column are dropped.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = float_column(&df, "x")?;
    let ys = float_column(&df, "y")?;
    let pts: Vec<Point> = xs
        .into_iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(Point::new(x?, y?)))
        .collect();
    tracing::debug!(rows = df.height(), points = pts.len(), "read_points");
    Ok(pts)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let Ok(col) = df.column(name) else {
        bail!("missing column `{name}` (have {:?})", df.get_column_names());
    };
    let col = col.cast(&DataType::Float64)?;
    Ok(col.f64()?.into_iter().collect())
}

/// Write points as an `x,y` CSV.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

/// On-disk form of a run: the triangulation's vertices and index edges, plus
/// each edge as a coordinate pair.
#[derive(Serialize)]
struct EdgesDoc<'a> {
    #[serde(flatten)]
    triangulation: &'a Triangulation,
    segments: Vec<[[f64; 2]; 2]>,
}

pub fn write_edges(path: &Path, tri: &Triangulation) -> Result<()> {
    ensure_parent(path)?;
    let doc = EdgesDoc {
        triangulation: tri,
        segments: tri.segments().map(|(a, b)| [[a.x, a.y], [b.x, b.y]]).collect(),
    };
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
