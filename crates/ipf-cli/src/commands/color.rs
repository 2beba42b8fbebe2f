//! Color command

use crate::ColorArgs;
use anyhow::{Result, bail};
use ipf_color::HslSphere;
use ipf_core::Colorizer;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, trace};

pub fn run(args: ColorArgs, verbose: u8) -> Result<()> {
    trace!(class = %args.class, mode = %args.mode, "color::run");

    let dirs = match &args.input {
        Some(path) => super::read_directions(path)?,
        None if args.direction.is_empty() => {
            bail!("Expected a direction (X Y Z) or --input")
        }
        None => vec![super::direction(&args.direction)?],
    };
    debug!(count = dirs.len(), "Read directions");

    let colorizer = Colorizer::new(HslSphere).with_trigonal_mode(args.mode);
    let colors = colorizer.color_all(args.class, &dirs);

    let mut out = BufWriter::new(io::stdout().lock());
    for rgb in colors {
        writeln!(out, "{}", super::format_rgb(rgb, args.format))?;
    }
    out.flush()?;

    if verbose > 0 {
        info!(count = dirs.len(), class = %args.class, "Colored directions");
    }

    Ok(())
}
