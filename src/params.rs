// @file params.rs

// read unit for the drain loop; the scratch buffer is this large
pub const BLOCK_SIZE: usize = 64 * 1024;

// milestone divisor
pub const MB: u64 = 1024 * 1024;

// end of params.rs
