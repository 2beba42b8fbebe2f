//! Classes command

use anyhow::Result;
use ipf_core::LaueClass;

pub fn run(verbose: u8) -> Result<()> {
    println!("{:<16} {:<7} {:>5}  {}", "NAME", "SYMBOL", "ORDER", "PATCH");
    for class in LaueClass::ALL {
        let patch = class.patch_kind().map_or("-", |k| k.name());
        println!(
            "{:<16} {:<7} {:>5}  {}",
            class.name(),
            class.symbol(),
            class.order(),
            patch
        );
        if verbose > 0 {
            println!("  has mirror: {}", class.has_mirror());
        }
    }
    Ok(())
}
