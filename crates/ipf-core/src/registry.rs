//! Shared patch instances.
//!
//! Each [`PatchKind`] has one slot that is filled on first use and read
//! without locking afterwards. The process-wide instance is
//! [`PatchRegistry::global`]; the per-class entry points in [`crate::ipf`]
//! all go through it.
//!
//! ```rust
//! use ipf_core::{PatchKind, PatchRegistry};
//!
//! let registry = PatchRegistry::global();
//! registry.warm();
//! assert!(registry.is_ready(PatchKind::Cubic));
//! ```

use std::sync::OnceLock;

use tracing::trace;

use crate::laue::PatchKind;
use crate::triangle::SphericalTriangle;

/// One lazily built [`SphericalTriangle`] per [`PatchKind`].
#[derive(Debug)]
pub struct PatchRegistry {
    slots: [OnceLock<SphericalTriangle>; 5],
}

impl PatchRegistry {
    /// Creates a registry with every slot empty.
    pub const fn new() -> Self {
        Self {
            slots: [const { OnceLock::new() }; 5],
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static PatchRegistry {
        static GLOBAL: PatchRegistry = PatchRegistry::new();
        &GLOBAL
    }

    /// Returns the patch for `kind`, building it on first access.
    ///
    /// Concurrent first accesses block until one of them has built the
    /// patch; every caller then sees the same instance.
    ///
    /// # Panics
    ///
    /// If the built-in geometry for `kind` fails to construct. The built-in
    /// vertices are constants, so this indicates a broken build rather than
    /// bad input.
    pub fn get(&self, kind: PatchKind) -> &SphericalTriangle {
        self.slots[kind.index()].get_or_init(|| {
            trace!(kind = %kind, "Initializing patch slot");
            match kind.build() {
                Ok(tri) => tri,
                Err(e) => panic!("built-in {kind} patch is malformed: {e}"),
            }
        })
    }

    /// Returns `true` if the slot for `kind` has been built.
    pub fn is_ready(&self, kind: PatchKind) -> bool {
        self.slots[kind.index()].get().is_some()
    }

    /// Builds every slot now.
    pub fn warm(&self) {
        for kind in PatchKind::ALL {
            self.get(kind);
        }
    }
}

impl Default for PatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
