pub mod episode;
pub mod product;

pub use episode::Episode;
pub use product::Product;
