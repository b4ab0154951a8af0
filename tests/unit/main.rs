//! Unit test harness mirroring the `src/` module tree

mod geometry;
mod grammar;
