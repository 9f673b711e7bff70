pub mod caption;
pub mod orientation;
pub mod template;
