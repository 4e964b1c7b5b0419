//! Terminal Conway's Game of Life simulator
//!
//! A fixed-size boolean world advanced by the classic B3/S23 rule, with
//! content hashing for cycle detection, a plaintext pattern loader, and a
//! crossterm/ratatui renderer driven at a fixed framerate.

pub mod core;
pub mod driver;
pub mod engine;
pub mod pattern;
pub mod render;
