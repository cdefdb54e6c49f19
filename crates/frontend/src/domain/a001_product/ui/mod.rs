pub mod grid;
pub mod lazy_image;
pub mod product_card;
