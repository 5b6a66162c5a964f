use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use carbon_dashboard::{
    app,
    config::{environment::EnvironmentConfig, load_factors},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let (config, config_warnings) = EnvironmentConfig::from_env();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    for warning in &config_warnings {
        warn!("⚠️ {}", warning);
    }

    info!("🌱 Carbon Emissions Dashboard - API");
    info!("===================================");

    // Tabla de factores de emisión
    let factors = match load_factors(&config) {
        Ok(factors) => factors,
        Err(e) => {
            error!("❌ Error cargando los factores de emisión: {}", e);
            return Err(anyhow::anyhow!("Error de configuración: {}", e));
        }
    };
    match &config.factors_file {
        Some(path) => info!("📊 Factores de emisión cargados desde {}", path.display()),
        None => info!("📊 Usando factores de emisión por defecto"),
    }

    let addr = config.socket_addr()?;
    let app = app(AppState::new(config, factors));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   POST /api/calculate - Calcular emisiones Scope 1, 2 y 3");
    info!("   POST /api/report - Exportar reporte PDF");
    info!("   GET  /api/dashboard - Comparación entre campus");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
