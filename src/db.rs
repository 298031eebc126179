pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod sale_repo;
pub use sale_repo::SaleRepository;
pub mod showroom_repo;
pub use showroom_repo::ShowroomRepository;
pub mod staff_repo;
pub use staff_repo::StaffRepository;
