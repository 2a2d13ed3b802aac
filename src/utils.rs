// Helper functions.

pub mod format;
pub mod math;
