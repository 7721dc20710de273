//! Parser for serialized signature paths
//!
//! Reads the SVG path mini-language subset emitted by [`crate::Path::to_svg_d`]
//! (absolute `M`, `L`, `Q` and `C` commands) back into drawing commands.

mod grammar;
pub mod lexer;

pub use grammar::parse_path_data;
pub use lexer::Span;
