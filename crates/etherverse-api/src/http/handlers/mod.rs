//! Route handlers, one module per resource.

pub mod ask;
pub mod awesome;
