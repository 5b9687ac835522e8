//! Terminal front end for the `gol` engine.

mod app;
pub mod render;

pub use crate::{
    app::{App, Settings},
    render::{Frame, Glyphs},
};
