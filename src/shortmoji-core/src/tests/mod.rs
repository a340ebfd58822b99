//! Catalog-level tests over in-memory resources.
