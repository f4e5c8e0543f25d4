/// Pointer interaction: click picking against the body model
pub mod picking;
