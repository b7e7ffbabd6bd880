// Shared test fixtures, compiled only under cfg(test).

pub mod board;
pub mod deals;
