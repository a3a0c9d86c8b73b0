/// A streaming device sold on the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub compatibility: &'static [&'static str],
    pub specs: &'static [&'static str],
    pub image: &'static str,
    pub tmdb_collection_id: Option<u32>,
}

impl Product {
    /// Numeric value of the display price, e.g. `"$249"` -> `249.0`.
    ///
    /// Returns `None` when the price carries no digits.
    pub fn price_value(&self) -> Option<f64> {
        let digits: String = self
            .price
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }

    pub fn path(&self) -> String {
        format!("/products/{}", self.slug)
    }
}
