// Adapters layer: concrete implementations for external systems.
// Currently the single PDF rendering backend.

pub mod pdf;
