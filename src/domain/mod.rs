//! Domain layer for the zshelf plugin.
//!
//! Core domain types, independent of Zellij APIs or rendering concerns.
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product model and listing decoding
//!
//! # Examples
//!
//! ```
//! use zshelf::domain::{Product, Result};
//!
//! fn first_product() -> Result<Product> {
//!     Ok(Product::new(1, "Classic Mug", 12.0))
//! }
//! # first_product().unwrap();
//! ```

pub mod error;
pub mod product;

pub use error::{Result, ShelfError};
pub use product::{decode_listing, Category, Product};
