//! CLI command implementations

pub mod classes;
pub mod color;
pub mod patch;
pub mod reduce;

use crate::OutputFormat;
use anyhow::{Context, Result, bail};
use ipf_color::{Rgb, to_hex, to_u8};
use ipf_math::Vec3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Build a unit direction from user components
pub fn direction(components: &[f64]) -> Result<Vec3> {
    let [x, y, z] = components else {
        bail!("expected 3 direction components, got {}", components.len());
    };
    let v = Vec3::new(*x, *y, *z);
    if !v.is_finite() {
        bail!("direction ({x}, {y}, {z}) is not finite");
    }
    if v.length_squared() == 0.0 {
        bail!("direction must be non-zero");
    }
    Ok(v.normalize())
}

/// Parse one input line into a direction.
///
/// Components are separated by whitespace and/or commas. Blank lines and
/// lines starting with `#` yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Vec3>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let components = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().with_context(|| format!("invalid number '{s}'")))
        .collect::<Result<Vec<_>>>()?;
    direction(&components).map(Some)
}

/// Read directions from a file, or stdin for "-"
pub fn read_directions(path: &Path) -> Result<Vec<Vec3>> {
    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut dirs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read: {}", path.display()))?;
        if let Some(d) = parse_line(&line).with_context(|| format!("line {}", i + 1))? {
            dirs.push(d);
        }
    }
    Ok(dirs)
}

/// Format a color for output
pub fn format_rgb(rgb: Rgb, format: OutputFormat) -> String {
    match format {
        OutputFormat::Float => format!("{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2]),
        OutputFormat::U8 => {
            let [r, g, b] = to_u8(rgb);
            format!("{r} {g} {b}")
        }
        OutputFormat::Hex => to_hex(rgb),
    }
}
