//! Hash-fragment routing contract.
//!
//! A thin mapping from a location fragment to a page identifier; anything
//! unrecognized falls back to [`Route::Home`]. The store participates in
//! routing only by serving product lookups for [`Route::ProductDetail`].

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Shop,
    ProductDetail(String),
    Admin,
    Quiz,
}

impl Route {
    /// Parse a location hash fragment (with or without the leading `#`).
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let path = if path.is_empty() { "/" } else { path };

        if path == "/" {
            return Self::Home;
        }
        if let Some(id) = path.strip_prefix("/product/") {
            if !id.is_empty() {
                return Self::ProductDetail(id.to_string());
            }
        }
        match path {
            "/shop" => Self::Shop,
            "/admin" => Self::Admin,
            "/quiz" => Self::Quiz,
            _ => Self::Home,
        }
    }
}
