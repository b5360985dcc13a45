pub mod puzzle;
pub mod record;
pub mod solution;
