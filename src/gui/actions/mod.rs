// src/gui/actions/mod.rs
//
// Button handlers. Submodules stay private; consumers only see
// actions::{load, collect, copy, export}.

mod copy;   // src/gui/actions/copy.rs
mod export; // src/gui/actions/export.rs
mod load;   // src/gui/actions/load.rs

pub use copy::copy;
pub use export::export;
pub use load::{collect, load};
