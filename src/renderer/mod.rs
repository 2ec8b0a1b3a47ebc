//! Render-layer contract
//!
//! No graphics API lives here: the simulation hands over a [`RenderSnapshot`],
//! and these helpers turn it into shading descriptions, screen-space
//! triangles and HUD text for whatever backend draws the frame.

pub mod hud;
pub mod shading;
pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use hud::{Banner, Hud};
pub use shading::{BlobShading, ShadingCache};
pub use shapes::build_frame;
pub use snapshot::{Drawable, DrawableKind, RenderSnapshot};
pub use vertex::Vertex;
