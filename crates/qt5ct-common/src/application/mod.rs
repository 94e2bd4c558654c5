//! Application layer: use cases built from the infrastructure adapters.

/// Selecting the palette and stylesheets that the current settings ask for.
pub mod appearance;
