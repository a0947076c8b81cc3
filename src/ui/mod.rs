//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types for one frame
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Cell fitting, keyword highlighting, image URL cleanup
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ColumnHeader, FooterInfo, HeaderInfo, PagerInfo, ProductRow, SearchBarInfo, StatusKind,
    StatusScreen, UIViewModel,
};
