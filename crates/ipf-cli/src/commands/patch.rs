//! Patch command

use crate::PatchArgs;
use anyhow::{Result, bail};
use ipf_core::PatchRegistry;
use tracing::trace;

pub fn run(args: PatchArgs, verbose: u8) -> Result<()> {
    trace!(class = %args.class, "patch::run");

    let Some(kind) = args.class.patch_kind() else {
        bail!("{} is colored without a patch", args.class);
    };
    let tri = PatchRegistry::global().get(kind);

    println!("class:   {} ({})", args.class, args.class.symbol());
    println!("patch:   {kind}");
    for (label, v) in ["red", "green", "blue"].iter().zip(tri.vertices()) {
        println!("{label:<8} {:>10.6} {:>10.6} {:>10.6}", v.x, v.y, v.z);
    }
    let c = tri.center();
    println!("center   {:>10.6} {:>10.6} {:>10.6}", c.x, c.y, c.z);

    let az = tri.vertex_azimuths();
    println!("azimuths {:>10.6} {:>10.6} {:>10.6}", az[0], az[1], az[2]);
    println!("fillet   {}", tri.fillet_fraction());

    let cut: Vec<String> = tri
        .cutoffs()
        .iter()
        .map(|a| format!("{:.3}", a.to_degrees()))
        .collect();
    println!("cutoffs  {} (deg)", cut.join(" "));

    if verbose > 0 {
        for (i, e) in tri.edge_normals().iter().enumerate() {
            println!("normal{i}  {:>10.6} {:>10.6} {:>10.6}", e.x, e.y, e.z);
        }
    }
    Ok(())
}
