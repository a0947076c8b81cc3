//! Product domain model.
//!
//! A [`Product`] is one record of the upstream listing. Products are immutable
//! once fetched; the dataset and every derived view share them through `Rc`
//! so filtering and sorting never copy payloads.

use serde::{Deserialize, Serialize};

/// Number of description characters shown before truncation.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Product category as returned by the listing endpoint.
///
/// Only `name` is used; other fields the upstream sends (slug, image, ...) are
/// ignored during decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A single product record.
///
/// `images` holds raw strings exactly as received. Some upstreams send
/// stringified JSON arrays or relative paths here; turning them into something
/// displayable is the renderer's job (see [`crate::ui::helpers::sanitize_image_url`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Creates a product with an empty description, no category and no images.
    ///
    /// # Examples
    ///
    /// ```
    /// use zshelf::Product;
    ///
    /// let product = Product::new(1, "Apple", 10.0);
    /// assert_eq!(product.title, "Apple");
    /// assert!(product.category.is_none());
    /// ```
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price,
            category: None,
            images: Vec::new(),
        }
    }

    /// Returns the category name, or `"N/A"` when the product has none.
    #[must_use]
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("N/A", |c| c.name.as_str())
    }

    /// Returns the description cut to [`DESCRIPTION_PREVIEW_CHARS`] characters,
    /// with `...` appended when anything was cut.
    ///
    /// # Examples
    ///
    /// ```
    /// use zshelf::Product;
    ///
    /// let mut product = Product::new(1, "Lamp", 5.0);
    /// product.description = "x".repeat(120);
    /// assert_eq!(product.description_preview().chars().count(), 103);
    /// ```
    #[must_use]
    pub fn description_preview(&self) -> String {
        let mut chars = self.description.chars();
        let preview: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{preview}...")
        } else {
            preview
        }
    }

    /// Formats the price the way the listing shows it (`$12`, `$9.5`).
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Decodes a listing response body into products.
///
/// # Errors
///
/// Returns [`crate::ShelfError::Decode`] if the body is not a JSON array of
/// product records.
pub fn decode_listing(body: &str) -> crate::Result<Vec<Product>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_shape_and_ignores_extra_fields() {
        let body = r#"[{
            "id": 4,
            "title": "Handmade Fresh Table",
            "slug": "handmade-fresh-table",
            "price": 687,
            "description": "Andy shoes are designed",
            "category": {"id": 5, "name": "Others", "image": "https://placehold.co/600x400"},
            "images": ["[\"https://placehold.co/600x400\"]"],
            "creationAt": "2024-01-01T00:00:00.000Z"
        }]"#;

        let products = decode_listing(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 4);
        assert!((products[0].price - 687.0).abs() < f64::EPSILON);
        assert_eq!(products[0].category_name(), "Others");
        assert_eq!(products[0].images.len(), 1);
    }

    #[test]
    fn missing_optional_fields_default() {
        let products = decode_listing(r#"[{"id": 1, "title": "Bare", "price": 2.5}]"#).unwrap();
        assert_eq!(products[0].description, "");
        assert_eq!(products[0].category_name(), "N/A");
        assert!(products[0].images.is_empty());
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        let err = decode_listing(r#"{"message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, crate::ShelfError::Decode(_)));
    }

    #[test]
    fn short_description_is_not_truncated() {
        let mut product = Product::new(1, "Lamp", 5.0);
        product.description = "a bright lamp".to_string();
        assert_eq!(product.description_preview(), "a bright lamp");
    }

    #[test]
    fn description_of_exactly_preview_length_has_no_ellipsis() {
        let mut product = Product::new(1, "Lamp", 5.0);
        product.description = "é".repeat(DESCRIPTION_PREVIEW_CHARS);
        assert!(!product.description_preview().ends_with("..."));
    }

    #[test]
    fn price_formatting() {
        assert_eq!(Product::new(1, "a", 12.0).display_price(), "$12");
        assert_eq!(Product::new(1, "a", 9.5).display_price(), "$9.5");
    }
}
