use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use taller_gestion::config::EnvironmentConfig;
use taller_gestion::models::{OrderStatus, PaymentStatus};
use taller_gestion::services::{
    dashboard_summary, low_stock, order_total, recent_finished, recent_orders, AutoConfirm,
    DiagnosisClient, MessagingService, SessionService, SuggestionProvider, WorkshopService,
};
use taller_gestion::store::{DiskStorage, PersistentStore, StorageMedium};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = EnvironmentConfig::default();

    info!("🔧 {} - Reporte del taller", config.shop_name);
    info!("=========================================");
    info!("📁 Directorio de datos: {}", config.data_dir);

    let medium: Arc<dyn StorageMedium> = Arc::new(DiskStorage::new(&config.data_dir));

    let session = SessionService::new(medium.clone());
    if session.is_authenticated() {
        info!("🔓 Sesión previa activa");
    } else {
        info!("🔒 Sin sesión activa");
    }

    let store = PersistentStore::new(medium);
    let workshop = WorkshopService::open(store, Arc::new(AutoConfirm));

    // Tablero del día
    let summary = dashboard_summary(workshop.orders(), workshop.inventory());
    info!("📊 Resumen del día:");
    info!("   💰 Facturado hoy: $ {:.2}", summary.daily_revenue);
    info!("   🚗 Vehículos atendidos hoy: {}", summary.finished_today);
    info!("   🧾 Órdenes abiertas: {}", summary.open_orders);
    info!("   📦 Alertas de stock: {}", summary.low_stock_alerts);
    info!("   📈 Facturado en el mes: $ {:.2}", summary.monthly_revenue);

    for item in low_stock(workshop.inventory()) {
        warn!(
            "⚠️ Stock bajo: {} ({} en stock, mínimo {})",
            item.name, item.quantity, item.min_quantity
        );
    }

    info!("🕐 Últimas órdenes:");
    for order in recent_orders(workshop.orders(), 5) {
        info!(
            "   {} · {} · {} · $ {:.2}",
            order.id,
            workshop.customer_label(&order.customer_id),
            workshop.vehicle_label(&order.vehicle_id),
            order_total(order)
        );
    }

    info!("✅ Últimos trabajos terminados:");
    for order in recent_finished(workshop.orders(), 8) {
        info!(
            "   {} · {} · {}",
            order.id,
            order.date,
            workshop.vehicle_plate(&order.vehicle_id)
        );
    }

    // Primer cobro pendiente con su enlace listo para enviar
    let messaging = MessagingService::from_config(&config);
    let unpaid = workshop.orders().iter().find(|order| {
        order.status == OrderStatus::Finished && order.payment_status == PaymentStatus::Pending
    });
    if let Some(order) = unpaid {
        if let Some(customer) = workshop.find_customer(&order.customer_id) {
            let link = messaging.billing_link(
                customer,
                workshop.find_vehicle(&order.vehicle_id),
                order_total(order),
            );
            info!("💬 Cobro pendiente {}: {}", order.id, link);
        }
    }

    // Sondeo opcional del servicio de diagnóstico
    if !config.diagnosis_enabled() {
        info!("🤖 Servicio de diagnóstico no configurado");
    } else if let Some(client) = DiagnosisClient::from_config(&config) {
        if let Ok(problem) = std::env::var("TALLER_DIAGNOSIS_PROBE") {
            info!("🤖 Sondeando el servicio de diagnóstico");
            let suggestion = client.suggest(&problem).await;
            if suggestion.success {
                info!(
                    "✅ Sugerencia: {} servicios, {} repuestos, mano de obra $ {:.2}",
                    suggestion.services.len(),
                    suggestion.parts.len(),
                    suggestion.labor_addition
                );
            } else if let Some(message) = &suggestion.message {
                warn!("⚠️ {}", message);
            }
        }
    }

    info!("👋 Reporte terminado");
    Ok(())
}
