//! Static reference data, loaded once into the binary and shared read-only.

pub mod species;
