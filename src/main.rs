// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::write_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new().route("/login", post(handlers::auth::login));

    // Relatórios de produto
    let product_stat_routes = Router::new()
        .route("/top", get(handlers::product::top_products_default))
        .route("/top/{n}", get(handlers::product::top_products))
        .route("/revenue", get(handlers::product::revenue_by_brand))
        .route(
            "/categoryrevenue",
            get(handlers::product::revenue_by_category),
        )
        .route("/inventory", get(handlers::product::inventory_snapshot))
        .route("/saleperyear", get(handlers::product::units_by_model_year));

    // CRUD de produtos
    let product_action_routes = Router::new()
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        );

    let sale_routes = Router::new()
        .route(
            "/stats/revenuepermonth",
            get(handlers::sale::revenue_per_month),
        )
        .route("/stats/turnover", get(handlers::sale::turnover))
        .route("/metrics", get(handlers::sale::sales_metrics));

    let brand_routes = Router::new()
        .route(
            "/",
            get(handlers::catalog::list_brands).post(handlers::catalog::create_brand),
        )
        .route(
            "/{id}",
            get(handlers::catalog::get_brand).delete(handlers::catalog::delete_brand),
        );

    let category_routes = Router::new()
        .route(
            "/",
            get(handlers::catalog::list_categories).post(handlers::catalog::create_category),
        )
        .route(
            "/{id}",
            get(handlers::catalog::get_category).delete(handlers::catalog::delete_category),
        );

    let showroom_routes = Router::new()
        .route(
            "/",
            get(handlers::showroom::list_showrooms).post(handlers::showroom::create_showroom),
        )
        .route(
            "/metrics/summary",
            get(handlers::showroom::showroom_metrics),
        )
        .route(
            "/{id}",
            get(handlers::showroom::get_showroom)
                .put(handlers::showroom::update_showroom)
                .delete(handlers::showroom::delete_showroom),
        );

    let staff_routes = Router::new()
        .route(
            "/",
            get(handlers::staff::list_staff).post(handlers::staff::create_staff),
        )
        .route("/metrics/summary", get(handlers::staff::staff_metrics))
        .route(
            "/{id}",
            get(handlers::staff::get_staff)
                .put(handlers::staff::update_staff)
                .delete(handlers::staff::delete_staff),
        );

    // Tudo abaixo do guard: leituras passam, escritas exigem Bearer JWT.
    let api_routes = Router::new()
        .nest("/api/product/stats", product_stat_routes)
        .nest("/api/product/action", product_action_routes)
        .nest("/api/sale", sale_routes)
        .nest("/api/brands", brand_routes)
        .nest("/api/categories", category_routes)
        .nest("/api/showroom", showroom_routes)
        .nest("/api/staff", staff_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            write_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .merge(api_routes)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state.clone());

    // Inicia o servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Erro no servidor Axum");

    // Encerramento explícito do recurso de processo.
    app_state.db_pool.close().await;
    tracing::info!("Pool de conexões encerrado. Até logo!");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Falha ao instalar o handler de Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Falha ao instalar o handler de SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Sinal de encerramento recebido, finalizando...");
}
