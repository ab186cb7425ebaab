//! Face geometry and scene composition for the hari analog clock.
//!
//! A [`Scene`] is rebuilt every tick from the configuration and the
//! current time, then handed to a render target. SVG and JSON writers
//! are provided; the terminal preview in the `hari` binary draws the
//! same scene onto a canvas.

mod cache;
pub mod geometry;
mod json;
mod scene;
mod svg;

pub use cache::FaceCache;
pub use json::to_json;
pub use scene::{
    Face, HandKind, HandPrimitive, Layer, LineCap, MarkPrimitive, NumeralPrimitive, Scene, Stroke,
    compose, compose_with_geometry,
};
pub use svg::{to_svg, to_svg_document};
