pub mod auth;
pub mod catalog;
pub mod product;
pub mod sale;
pub mod showroom;
pub mod staff;
