//! A paintable wall grid and the backtracking walk that threads it.

pub mod algorithms;
pub mod config;
pub mod grid;
pub mod playback;
pub mod standard_mazes;
pub mod statistics;
