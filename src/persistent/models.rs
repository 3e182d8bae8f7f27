//! This module simply re-exports its submodules.

mod problems;
mod submissions;

pub use problems::*;
pub use submissions::*;
