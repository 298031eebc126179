// src/config.rs

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CatalogRepository, ProductRepository, SaleRepository, ShowroomRepository, StaffRepository,
    },
    services::{
        AuthService, CatalogService, ProductService, SaleService, ShowroomService, StaffService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub product_service: ProductService,
    pub sale_service: SaleService,
    pub showroom_service: ShowroomService,
    pub staff_service: StaffService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;
        let admin_email = env::var("ADMIN_EMAIL").context("ADMIN_EMAIL deve ser definido")?;
        let admin_password_hash = env::var("ADMIN_PASSWORD_HASH")
            .context("ADMIN_PASSWORD_HASH (hash bcrypt) deve ser definido")?;

        // Pool único e limitado, construído uma vez na inicialização e
        // injetado nos repositórios; o encerramento explícito fica no main.
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let sale_repo = SaleRepository::new(db_pool.clone());
        let showroom_repo = ShowroomRepository::new(db_pool.clone());
        let staff_repo = StaffRepository::new(db_pool.clone());

        let auth_service = AuthService::new(admin_email, admin_password_hash, jwt_secret);
        let catalog_service = CatalogService::new(catalog_repo.clone());
        let product_service = ProductService::new(product_repo.clone(), catalog_repo);
        let sale_service = SaleService::new(sale_repo, product_repo);
        let showroom_service = ShowroomService::new(showroom_repo.clone());
        let staff_service = StaffService::new(staff_repo, showroom_repo);

        Ok(Self {
            db_pool,
            auth_service,
            catalog_service,
            product_service,
            sale_service,
            showroom_service,
            staff_service,
        })
    }
}
