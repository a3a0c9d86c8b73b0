//! Server-rendered storefront pages.
//!
//! Every page is plain HTML wrapped in the shared [`layout`]; dynamic text
//! goes through [`escape_html`].

pub mod about;
pub mod home;
pub mod layout;
pub mod not_found;
pub mod podcast;
pub mod product;
pub mod structured_data;

pub use about::render_about;
pub use home::render_home;
pub use not_found::render_not_found;
pub use podcast::render_podcast;
pub use product::render_product;

pub const BRAND: &str = "Pigeonhole Streaming";

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
