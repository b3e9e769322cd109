//! Rendering of maze knowledge: plain text for terminals, SVG for files.

mod ascii;
mod svg;

pub use ascii::render_ascii;
pub use svg::{MazeSvg, SvgColorScheme, SvgConfig};
