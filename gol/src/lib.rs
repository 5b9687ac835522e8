//! Conway's Game of Life on a fixed-size toroidal grid.

mod life;
mod pattern;


pub use crate::{
    life::{Board, HEIGHT, Life, WIDTH},
    pattern::Pattern,
};
