// Adapters layer: concrete implementations for external systems (the page
// shell on one side, the local filesystem on the other).

pub mod storage;
pub mod surface;
