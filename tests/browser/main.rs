//! Browser integration tests: navigation, request sequencing, and variant
//! selection against in-memory and gated providers.

mod support;
mod variants;
