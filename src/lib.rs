//! skifinder-rs — workspace host crate.
//!
//! Re-exports the `skifinder-core` API so the demo programs under `demos/`
//! can use a single `skifinder_rs::prelude::*` import. For programmatic
//! access, depend on `skifinder-core` directly.

pub use skifinder_core::*;

/// Convenience imports for the demo programs.
pub mod prelude {
    pub use skifinder_core::prelude::*;
}
