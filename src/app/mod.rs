// app/mod.rs - Application State
//
// This module contains the core application state that is UI-independent.
// Both sample binaries drive their views from it.

mod state;

pub use state::*;
