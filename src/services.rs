pub mod auth;
pub use auth::AuthService;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod product_service;
pub use product_service::ProductService;
pub mod sale_service;
pub use sale_service::SaleService;
pub mod showroom_service;
pub use showroom_service::ShowroomService;
pub mod staff_service;
pub use staff_service::StaffService;
