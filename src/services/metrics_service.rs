//! Métricas derivadas del estado del taller
//!
//! Funciones puras recalculadas en cada llamada. Los llamadores pueden
//! memoizar, pero la semántica de cada filtro es fija.

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{InventoryItem, OrderStatus, ServiceOrder};

/// Fecha de hoy como string de calendario (YYYY-MM-DD)
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Año y mes corrientes del calendario local
pub fn current_month() -> (i32, u32) {
    let now = Local::now();
    (now.year(), now.month())
}

/// Total de la orden: renglones + mano de obra - descuento
///
/// Sin piso en cero: un descuento mayor al subtotal da un total
/// negativo y se acepta tal cual.
pub fn order_total(order: &ServiceOrder) -> Decimal {
    let items: Decimal = order.items.iter().map(|item| item.price).sum();
    items + order.labor_value.unwrap_or_default() - order.discount.unwrap_or_default()
}

/// Facturación de órdenes terminadas en la fecha dada
///
/// La fecha se compara por igualdad de strings, no por rango.
pub fn daily_revenue(orders: &[ServiceOrder], date: &str) -> Decimal {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Finished && order.date == date)
        .map(order_total)
        .sum()
}

/// Cantidad de órdenes terminadas en la fecha dada
pub fn finished_count_on(orders: &[ServiceOrder], date: &str) -> usize {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Finished && order.date == date)
        .count()
}

/// Cantidad de órdenes abiertas
pub fn pending_count(orders: &[ServiceOrder]) -> usize {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Pending)
        .count()
}

/// Facturación de órdenes terminadas dentro del mes y año dados
///
/// El filtro exige mes Y año: el mismo mes de años anteriores queda
/// afuera. Una fecha que no parsea no suma.
pub fn monthly_revenue(orders: &[ServiceOrder], year: i32, month: u32) -> Decimal {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Finished)
        .filter(|order| {
            NaiveDate::parse_from_str(&order.date, "%Y-%m-%d")
                .map(|date| date.year() == year && date.month() == month)
                .unwrap_or(false)
        })
        .map(order_total)
        .sum()
}

/// Artículos en o por debajo de su umbral de reposición
pub fn low_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|item| item.quantity <= item.min_quantity)
        .collect()
}

/// Primeras `n` órdenes en orden de lista
///
/// La recencia sale del orden de inserción (las órdenes se anteponen al
/// crearse); no se reordena por fecha.
pub fn recent_orders(orders: &[ServiceOrder], n: usize) -> &[ServiceOrder] {
    &orders[..n.min(orders.len())]
}

/// Primeras `n` órdenes terminadas, en orden de lista
pub fn recent_finished(orders: &[ServiceOrder], n: usize) -> Vec<&ServiceOrder> {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Finished)
        .take(n)
        .collect()
}

/// Resumen del tablero para la fecha y el mes corrientes
#[derive(Debug)]
pub struct DashboardSummary {
    pub daily_revenue: Decimal,
    pub finished_today: usize,
    pub low_stock_alerts: usize,
    pub open_orders: usize,
    pub monthly_revenue: Decimal,
}

pub fn dashboard_summary(orders: &[ServiceOrder], inventory: &[InventoryItem]) -> DashboardSummary {
    let today = today_string();
    let (year, month) = current_month();

    DashboardSummary {
        daily_revenue: daily_revenue(orders, &today),
        finished_today: finished_count_on(orders, &today),
        low_stock_alerts: low_stock(inventory).len(),
        open_orders: pending_count(orders),
        monthly_revenue: monthly_revenue(orders, year, month),
    }
}
