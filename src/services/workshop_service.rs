//! Servicio principal del taller
//!
//! Mantiene las seis colecciones en memoria y las vuelca completas al
//! store después de cada mutación. Un solo escritor lógico: cada
//! operación termina antes de que empiece la siguiente.

use std::sync::Arc;

use validator::Validate;

use crate::models::{
    default_checklist_items, Checklist, CreateChecklistRequest, CreateCustomerRequest,
    CreateInventoryItemRequest, CreateOrderRequest, CreateStaffRequest, CreateVehicleRequest,
    Customer, InventoryItem, OrderStatus, PaymentStatus, ServiceItem, ServiceOrder, Staff,
    UpdateOrderRequest, Vehicle, DEFAULT_MIN_QUANTITY, MANUAL_VEHICLE_ID,
};
use crate::services::metrics_service::today_string;
use crate::store::{
    PersistentStore, CHECKLISTS_KEY, CUSTOMERS_KEY, INVENTORY_KEY, ORDERS_KEY, STAFF_KEY,
    VEHICLES_KEY,
};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::ids::IdGenerator;

/// Colaborador interactivo para acciones destructivas
///
/// Rechazar es una cancelación normal, nunca un error.
pub trait ConfirmationGate: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Puerta que acepta todo, para sesiones no interactivas
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Contenedor de estado del taller
pub struct WorkshopService {
    customers: Vec<Customer>,
    vehicles: Vec<Vehicle>,
    orders: Vec<ServiceOrder>,
    inventory: Vec<InventoryItem>,
    staff: Vec<Staff>,
    checklists: Vec<Checklist>,
    store: PersistentStore,
    gate: Arc<dyn ConfirmationGate>,
    ids: IdGenerator,
}

impl WorkshopService {
    /// Abre el taller cargando todas las colecciones del store
    pub fn open(store: PersistentStore, gate: Arc<dyn ConfirmationGate>) -> Self {
        let customers: Vec<Customer> = store.load(CUSTOMERS_KEY, Vec::new());
        let vehicles: Vec<Vehicle> = store.load(VEHICLES_KEY, Vec::new());
        let orders: Vec<ServiceOrder> = store.load(ORDERS_KEY, Vec::new());
        let inventory: Vec<InventoryItem> = store.load(INVENTORY_KEY, Vec::new());
        let staff: Vec<Staff> = store.load(STAFF_KEY, Vec::new());
        let checklists: Vec<Checklist> = store.load(CHECKLISTS_KEY, Vec::new());

        log::info!(
            "📂 Estado del taller cargado: {} clientes, {} vehículos, {} órdenes, {} artículos",
            customers.len(),
            vehicles.len(),
            orders.len(),
            inventory.len()
        );

        Self {
            customers,
            vehicles,
            orders,
            inventory,
            staff,
            checklists,
            store,
            gate,
            ids: IdGenerator,
        }
    }

    /// Vuelca las seis colecciones al store, sin diffing
    fn persist_all(&self) {
        self.store.save(CUSTOMERS_KEY, &self.customers);
        self.store.save(VEHICLES_KEY, &self.vehicles);
        self.store.save(ORDERS_KEY, &self.orders);
        self.store.save(INVENTORY_KEY, &self.inventory);
        self.store.save(STAFF_KEY, &self.staff);
        self.store.save(CHECKLISTS_KEY, &self.checklists);
        log::debug!("💾 Estado del taller persistido");
    }

    // ==================== Clientes ====================

    pub fn add_customer(&mut self, request: CreateCustomerRequest) -> AppResult<Customer> {
        request.validate()?;

        let customer = Customer {
            id: self.ids.entity_id(),
            name: request.name,
            phone: request.phone,
            document: request.document,
        };

        log::info!("👤 Cliente {} registrado: {}", customer.id, customer.name);
        self.customers.push(customer.clone());
        self.persist_all();
        Ok(customer)
    }

    /// Elimina el cliente en cascada: también sus vehículos y órdenes
    pub fn delete_customer(&mut self, id: &str) -> AppResult<bool> {
        if !self.gate.confirm("¿Eliminar el cliente, sus vehículos y sus órdenes?") {
            log::info!("↩️ Eliminación de cliente cancelada por el operador");
            return Ok(false);
        }

        self.customers.retain(|customer| customer.id != id);
        self.vehicles.retain(|vehicle| vehicle.customer_id != id);
        self.orders.retain(|order| order.customer_id != id);

        log::info!("🗑️ Cliente {} eliminado con sus dependencias", id);
        self.persist_all();
        Ok(true)
    }

    // ==================== Vehículos ====================

    pub fn add_vehicle(&mut self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;

        let vehicle = Vehicle {
            id: self.ids.entity_id(),
            customer_id: request.customer_id,
            model: request.model,
            plate: request.plate,
            km: request.km,
        };

        log::info!("🚗 Vehículo {} registrado: {}", vehicle.id, vehicle.plate);
        self.vehicles.push(vehicle.clone());
        self.persist_all();
        Ok(vehicle)
    }

    /// Elimina el vehículo y sus órdenes; las planillas de inspección quedan
    pub fn delete_vehicle(&mut self, id: &str) -> AppResult<bool> {
        if !self.gate.confirm("¿Eliminar el vehículo y sus órdenes?") {
            log::info!("↩️ Eliminación de vehículo cancelada por el operador");
            return Ok(false);
        }

        self.vehicles.retain(|vehicle| vehicle.id != id);
        self.orders.retain(|order| order.vehicle_id != id);

        log::info!("🗑️ Vehículo {} eliminado con sus órdenes", id);
        self.persist_all();
        Ok(true)
    }

    // ==================== Órdenes de servicio ====================

    /// Crea una orden y la antepone a la lista
    ///
    /// La lista queda ordenada por creación, no por fecha: el orden de
    /// inserción es lo que las vistas de actividad reciente consumen.
    pub fn add_order(&mut self, request: CreateOrderRequest) -> AppResult<ServiceOrder> {
        request.validate()?;

        let order = ServiceOrder {
            id: self.ids.order_number(),
            vehicle_id: request.vehicle_id,
            customer_id: request.customer_id,
            date: request.date,
            km: request.km,
            problem_description: request.problem_description,
            items: request.items,
            notes: request.notes,
            status: request.status,
            payment_status: request.payment_status,
            labor_value: request.labor_value,
            discount: request.discount,
        };

        log::info!(
            "🧾 Orden {} creada para el cliente {}",
            order.id,
            order.customer_id
        );
        self.orders.insert(0, order.clone());
        self.persist_all();
        Ok(order)
    }

    /// Camino del terminal: orden de hoy a partir de un vehículo registrado
    ///
    /// El dueño actual del vehículo queda copiado en la orden; un cambio
    /// de dueño posterior no reescribe el histórico.
    pub fn add_terminal_order(
        &mut self,
        vehicle_id: &str,
        km: &str,
        items: Vec<ServiceItem>,
    ) -> AppResult<ServiceOrder> {
        let (vehicle_id, customer_id) = match self.find_vehicle(vehicle_id) {
            Some(vehicle) => (vehicle.id.clone(), vehicle.customer_id.clone()),
            None => return Err(validation_error("vehicle_id", "unknown vehicle")),
        };
        if items.is_empty() {
            return Err(validation_error("items", "at least one item is required"));
        }

        self.add_order(CreateOrderRequest {
            vehicle_id,
            customer_id,
            date: today_string(),
            km: km.to_string(),
            problem_description: None,
            items,
            notes: String::new(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            labor_value: None,
            discount: None,
        })
    }

    /// Edición parcial; `None` cuando la orden no existe, sin mutar nada
    pub fn update_order(
        &mut self,
        id: &str,
        changes: UpdateOrderRequest,
    ) -> AppResult<Option<ServiceOrder>> {
        changes.validate()?;

        let Some(order) = self.orders.iter_mut().find(|order| order.id == id) else {
            log::warn!("⚠️ Edición sobre orden inexistente: {}", id);
            return Ok(None);
        };

        changes.apply_to(order);
        let updated = order.clone();

        log::info!("🧾 Orden {} actualizada", id);
        self.persist_all();
        Ok(Some(updated))
    }

    pub fn delete_order(&mut self, id: &str) -> AppResult<bool> {
        if !self.gate.confirm("¿Eliminar la orden de servicio?") {
            log::info!("↩️ Eliminación de orden cancelada por el operador");
            return Ok(false);
        }

        self.orders.retain(|order| order.id != id);

        log::info!("🗑️ Orden {} eliminada", id);
        self.persist_all();
        Ok(true)
    }

    // ==================== Planillas de inspección ====================

    pub fn add_checklist(&mut self, request: CreateChecklistRequest) -> AppResult<Checklist> {
        request.validate()?;

        let checklist = Checklist {
            id: self.ids.checklist_id(),
            vehicle_id: request.vehicle_id,
            date: request.date,
            km: request.km,
            items: if request.items.is_empty() {
                default_checklist_items()
            } else {
                request.items
            },
            general_notes: request.general_notes,
        };

        log::info!(
            "📋 Planilla {} registrada para el vehículo {}",
            checklist.id,
            checklist.vehicle_id
        );
        self.checklists.push(checklist.clone());
        self.persist_all();
        Ok(checklist)
    }

    pub fn delete_checklist(&mut self, id: &str) -> AppResult<()> {
        self.checklists.retain(|checklist| checklist.id != id);
        log::info!("🗑️ Planilla {} eliminada", id);
        self.persist_all();
        Ok(())
    }

    // ==================== Inventario ====================

    pub fn add_inventory_item(
        &mut self,
        request: CreateInventoryItemRequest,
    ) -> AppResult<InventoryItem> {
        request.validate()?;

        // Umbral cero u omitido cae al valor por defecto
        let min_quantity = request
            .min_quantity
            .filter(|minimum| *minimum != 0)
            .unwrap_or(DEFAULT_MIN_QUANTITY);

        let item = InventoryItem {
            id: self.ids.entity_id(),
            name: request.name,
            quantity: request.quantity,
            min_quantity,
            price: request.price,
        };

        log::info!("📦 Artículo {} dado de alta: {}", item.id, item.name);
        self.inventory.push(item.clone());
        self.persist_all();
        Ok(item)
    }

    /// Reemplaza la cantidad tal cual llega; acotar la resta es
    /// responsabilidad del llamador
    pub fn update_inventory(
        &mut self,
        id: &str,
        quantity: i64,
    ) -> AppResult<Option<InventoryItem>> {
        let Some(item) = self.inventory.iter_mut().find(|item| item.id == id) else {
            log::warn!("⚠️ Ajuste sobre artículo inexistente: {}", id);
            return Ok(None);
        };

        item.quantity = quantity;
        let updated = item.clone();

        log::debug!("📦 Artículo {} ajustado a {}", id, quantity);
        self.persist_all();
        Ok(Some(updated))
    }

    pub fn delete_inventory_item(&mut self, id: &str) -> AppResult<()> {
        self.inventory.retain(|item| item.id != id);
        log::info!("🗑️ Artículo {} eliminado", id);
        self.persist_all();
        Ok(())
    }

    // ==================== Personal ====================

    pub fn add_staff(&mut self, request: CreateStaffRequest) -> AppResult<Staff> {
        request.validate()?;

        let member = Staff {
            id: self.ids.entity_id(),
            name: request.name,
            role: request.role,
        };

        log::info!("🧑‍🔧 Personal {} incorporado: {}", member.id, member.name);
        self.staff.push(member.clone());
        self.persist_all();
        Ok(member)
    }

    pub fn delete_staff(&mut self, id: &str) -> AppResult<()> {
        self.staff.retain(|member| member.id != id);
        log::info!("🗑️ Personal {} eliminado", id);
        self.persist_all();
        Ok(())
    }

    // ==================== Lecturas ====================

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn orders(&self) -> &[ServiceOrder] {
        &self.orders
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    pub fn find_customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn find_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn find_order(&self, id: &str) -> Option<&ServiceOrder> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Nombre del cliente, o el genérico cuando la referencia no resuelve
    pub fn customer_label(&self, id: &str) -> String {
        self.find_customer(id)
            .map(|customer| customer.name.clone())
            .unwrap_or_else(|| "Cliente General".to_string())
    }

    /// Descripción del vehículo; las órdenes manuales no tienen vehículo real
    pub fn vehicle_label(&self, id: &str) -> String {
        if id == MANUAL_VEHICLE_ID {
            return "Entrada manual".to_string();
        }
        self.find_vehicle(id)
            .map(|vehicle| format!("{} ({})", vehicle.model, vehicle.plate))
            .unwrap_or_else(|| "Entrada manual".to_string())
    }

    /// Patente del vehículo, o el marcador cuando no hay vehículo
    pub fn vehicle_plate(&self, id: &str) -> String {
        self.find_vehicle(id)
            .map(|vehicle| vehicle.plate.clone())
            .unwrap_or_else(|| "SIN PLACA".to_string())
    }
}
