//! Reduce command

use crate::ReduceArgs;
use anyhow::Result;
use tracing::{debug, trace};

pub fn run(args: ReduceArgs, _verbose: u8) -> Result<()> {
    trace!(class = %args.class, "reduce::run");

    let n = super::direction(&args.direction)?;
    let r = args.class.reduce(n);
    debug!(input = ?n.to_array(), mirrored = r.mirrored, "Reduced direction");

    println!(
        "{:.6} {:.6} {:.6} mirrored={}",
        r.dir.x, r.dir.y, r.dir.z, r.mirrored
    );
    Ok(())
}
