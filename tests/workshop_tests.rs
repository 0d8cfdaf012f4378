use std::sync::Arc;

use rust_decimal::Decimal;

use taller_gestion::models::{
    ChecklistItemStatus, CreateChecklistRequest, CreateCustomerRequest,
    CreateInventoryItemRequest, CreateOrderRequest, CreateStaffRequest, CreateVehicleRequest,
    OrderStatus, PaymentStatus, ServiceItem, ServiceItemKind, UpdateOrderRequest,
    MANUAL_VEHICLE_ID,
};
use taller_gestion::services::{
    daily_revenue, low_stock, order_total, today_string, AutoConfirm, ConfirmationGate,
    WorkshopService,
};
use taller_gestion::store::{
    MemoryStorage, PersistentStore, StorageMedium, CUSTOMERS_KEY, ORDERS_KEY, VEHICLES_KEY,
};

#[test]
fn test_invoice_total_for_a_full_order() {
    let mut workshop = fresh_workshop();

    let customer = workshop
        .add_customer(customer_request("Ana Silva"))
        .unwrap();
    let vehicle = workshop
        .add_vehicle(vehicle_request(&customer.id, "Corolla", "ABC1234"))
        .unwrap();

    let mut request = order_request(
        &vehicle.id,
        &customer.id,
        "2024-03-10",
        vec![
            item("Cambio de aceite", ServiceItemKind::Service, Decimal::new(4500, 2)),
            item("Filtro", ServiceItemKind::Part, Decimal::ZERO),
        ],
    );
    request.labor_value = Some(Decimal::from(120));
    request.discount = Some(Decimal::from(20));

    let order = workshop.add_order(request).unwrap();
    assert_eq!(order_total(&order), Decimal::from(145));

    // la facturación diaria solo cuenta órdenes terminadas
    assert_eq!(
        daily_revenue(workshop.orders(), "2024-03-10"),
        Decimal::ZERO
    );

    let finished = workshop
        .update_order(&order.id, UpdateOrderRequest::finish())
        .unwrap()
        .unwrap();
    assert_eq!(finished.status, OrderStatus::Finished);
    assert_eq!(
        daily_revenue(workshop.orders(), "2024-03-10"),
        Decimal::from(145)
    );
}

#[test]
fn test_discount_beyond_subtotal_goes_negative() {
    let mut workshop = fresh_workshop();
    let customer = workshop.add_customer(customer_request("Bruno")).unwrap();

    let mut request = order_request(
        MANUAL_VEHICLE_ID,
        &customer.id,
        "2024-03-11",
        vec![item("Revisión", ServiceItemKind::Service, Decimal::from(30))],
    );
    request.discount = Some(Decimal::from(50));

    let order = workshop.add_order(request).unwrap();
    assert_eq!(order_total(&order), Decimal::from(-20));
}

#[test]
fn test_customer_delete_cascades_vehicles_and_orders() {
    let mut workshop = fresh_workshop();

    let victim = workshop.add_customer(customer_request("Carla")).unwrap();
    let other = workshop.add_customer(customer_request("Diego")).unwrap();

    let victim_car = workshop
        .add_vehicle(vehicle_request(&victim.id, "Gol", "AAA1111"))
        .unwrap();
    let victim_truck = workshop
        .add_vehicle(vehicle_request(&victim.id, "Saveiro", "BBB2222"))
        .unwrap();
    let other_car = workshop
        .add_vehicle(vehicle_request(&other.id, "Uno", "CCC3333"))
        .unwrap();

    for vehicle_id in [&victim_car.id, &victim_car.id, &victim_truck.id] {
        workshop
            .add_order(order_request(vehicle_id, &victim.id, "2024-03-01", Vec::new()))
            .unwrap();
    }
    workshop
        .add_order(order_request(&other_car.id, &other.id, "2024-03-01", Vec::new()))
        .unwrap();

    // la planilla del vehículo de la víctima va a sobrevivir la cascada
    workshop
        .add_checklist(checklist_request(&victim_car.id))
        .unwrap();

    assert!(workshop.delete_customer(&victim.id).unwrap());

    assert_eq!(workshop.customers().len(), 1);
    assert_eq!(workshop.customers()[0].id, other.id);
    assert_eq!(workshop.vehicles().len(), 1);
    assert_eq!(workshop.vehicles()[0].id, other_car.id);
    assert_eq!(workshop.orders().len(), 1);
    assert_eq!(workshop.orders()[0].customer_id, other.id);
    assert_eq!(workshop.checklists().len(), 1);
}

#[test]
fn test_vehicle_delete_cascades_orders_but_not_checklists() {
    let mut workshop = fresh_workshop();

    let customer = workshop.add_customer(customer_request("Elena")).unwrap();
    let vehicle = workshop
        .add_vehicle(vehicle_request(&customer.id, "Ka", "DDD4444"))
        .unwrap();

    workshop
        .add_order(order_request(&vehicle.id, &customer.id, "2024-03-02", Vec::new()))
        .unwrap();
    workshop.add_checklist(checklist_request(&vehicle.id)).unwrap();

    assert!(workshop.delete_vehicle(&vehicle.id).unwrap());

    assert!(workshop.vehicles().is_empty());
    assert!(workshop.orders().is_empty());
    // el cliente y la planilla quedan
    assert_eq!(workshop.customers().len(), 1);
    assert_eq!(workshop.checklists().len(), 1);
    assert_eq!(workshop.checklists()[0].vehicle_id, vehicle.id);
}

#[test]
fn test_declined_confirmation_changes_nothing() {
    let medium = Arc::new(MemoryStorage::default());
    let mut workshop = WorkshopService::open(
        PersistentStore::new(medium.clone()),
        Arc::new(AutoConfirm),
    );

    let customer = workshop.add_customer(customer_request("Franco")).unwrap();
    let vehicle = workshop
        .add_vehicle(vehicle_request(&customer.id, "Palio", "EEE5555"))
        .unwrap();
    let order = workshop
        .add_order(order_request(&vehicle.id, &customer.id, "2024-03-03", Vec::new()))
        .unwrap();

    let mut declined = WorkshopService::open(
        PersistentStore::new(medium),
        Arc::new(DecliningGate),
    );

    assert!(!declined.delete_customer(&customer.id).unwrap());
    assert!(!declined.delete_vehicle(&vehicle.id).unwrap());
    assert!(!declined.delete_order(&order.id).unwrap());

    assert_eq!(declined.customers().len(), 1);
    assert_eq!(declined.vehicles().len(), 1);
    assert_eq!(declined.orders().len(), 1);
}

#[test]
fn test_unconditional_deletes_skip_the_gate() {
    let medium = Arc::new(MemoryStorage::default());
    let mut workshop = WorkshopService::open(
        PersistentStore::new(medium),
        Arc::new(DecliningGate),
    );

    let item = workshop
        .add_inventory_item(inventory_request("Bujía", 4, None))
        .unwrap();
    let member = workshop
        .add_staff(CreateStaffRequest {
            name: "Hugo".to_string(),
            role: "Mecánico".to_string(),
        })
        .unwrap();
    let checklist = workshop
        .add_checklist(checklist_request("veh-externo"))
        .unwrap();

    // estos borrados no consultan la puerta de confirmación
    workshop.delete_inventory_item(&item.id).unwrap();
    workshop.delete_staff(&member.id).unwrap();
    workshop.delete_checklist(&checklist.id).unwrap();

    assert!(workshop.inventory().is_empty());
    assert!(workshop.staff().is_empty());
    assert!(workshop.checklists().is_empty());
}

#[test]
fn test_orders_prepend_and_carry_readable_ids() {
    let mut workshop = fresh_workshop();
    let customer = workshop.add_customer(customer_request("Gina")).unwrap();

    let first = workshop
        .add_order(order_request(MANUAL_VEHICLE_ID, &customer.id, "2024-03-04", Vec::new()))
        .unwrap();
    let second = workshop
        .add_order(order_request(MANUAL_VEHICLE_ID, &customer.id, "2024-03-05", Vec::new()))
        .unwrap();

    assert_eq!(workshop.orders()[0].id, second.id);
    assert_eq!(workshop.orders()[1].id, first.id);

    for order in workshop.orders() {
        assert!(order.id.starts_with("OS-"));
        assert_eq!(order.id.len(), 9);
    }
    assert_eq!(customer.id.len(), 7);
}

#[test]
fn test_update_of_missing_order_is_a_noop() {
    let mut workshop = fresh_workshop();
    let customer = workshop.add_customer(customer_request("Iván")).unwrap();
    workshop
        .add_order(order_request(MANUAL_VEHICLE_ID, &customer.id, "2024-03-06", Vec::new()))
        .unwrap();

    let result = workshop
        .update_order("OS-000000", UpdateOrderRequest::finish())
        .unwrap();
    assert!(result.is_none());
    assert_eq!(workshop.orders()[0].status, OrderStatus::Pending);
}

#[test]
fn test_update_order_merges_only_present_fields() {
    let mut workshop = fresh_workshop();
    let customer = workshop.add_customer(customer_request("Julia")).unwrap();

    let mut request = order_request(
        MANUAL_VEHICLE_ID,
        &customer.id,
        "2024-03-07",
        vec![item("Frenos", ServiceItemKind::Service, Decimal::from(200))],
    );
    request.problem_description = Some("Ruido al frenar".to_string());
    let order = workshop.add_order(request).unwrap();

    let changes = UpdateOrderRequest {
        notes: Some("Esperando repuesto".to_string()),
        payment_status: Some(PaymentStatus::Paid),
        ..UpdateOrderRequest::default()
    };
    let updated = workshop.update_order(&order.id, changes).unwrap().unwrap();

    assert_eq!(updated.notes, "Esperando repuesto");
    assert_eq!(updated.payment_status, PaymentStatus::Paid);
    // lo no incluido queda igual
    assert_eq!(updated.date, "2024-03-07");
    assert_eq!(updated.status, OrderStatus::Pending);
    assert_eq!(updated.problem_description.as_deref(), Some("Ruido al frenar"));
    assert_eq!(updated.items.len(), 1);
}

#[test]
fn test_terminal_order_copies_the_current_owner() {
    let mut workshop = fresh_workshop();
    let customer = workshop.add_customer(customer_request("Karen")).unwrap();
    let vehicle = workshop
        .add_vehicle(vehicle_request(&customer.id, "Onix", "FFF6666"))
        .unwrap();

    let order = workshop
        .add_terminal_order(
            &vehicle.id,
            "74000",
            vec![item("Diagnóstico", ServiceItemKind::Service, Decimal::from(40))],
        )
        .unwrap();

    assert_eq!(order.customer_id, customer.id);
    assert_eq!(order.vehicle_id, vehicle.id);
    assert_eq!(order.date, today_string());
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.labor_value, None);
    assert_eq!(order.discount, None);
    assert_eq!(workshop.orders()[0].id, order.id);
}

#[test]
fn test_terminal_order_boundary_rejections() {
    let mut workshop = fresh_workshop();
    let customer = workshop.add_customer(customer_request("Luisa")).unwrap();
    let vehicle = workshop
        .add_vehicle(vehicle_request(&customer.id, "Fox", "GGG7777"))
        .unwrap();

    let unknown = workshop.add_terminal_order(
        "veh-que-no-existe",
        "50000",
        vec![item("Revisión", ServiceItemKind::Service, Decimal::from(10))],
    );
    assert!(unknown.is_err());

    let empty = workshop.add_terminal_order(&vehicle.id, "50000", Vec::new());
    assert!(empty.is_err());
    assert!(workshop.orders().is_empty());
}

#[test]
fn test_manual_orders_and_placeholder_labels() {
    let mut workshop = fresh_workshop();
    let customer = workshop.add_customer(customer_request("Mario")).unwrap();

    let order = workshop
        .add_order(order_request(MANUAL_VEHICLE_ID, &customer.id, "2024-03-08", Vec::new()))
        .unwrap();

    assert_eq!(order.vehicle_id, MANUAL_VEHICLE_ID);
    assert_eq!(workshop.vehicle_label(MANUAL_VEHICLE_ID), "Entrada manual");
    assert_eq!(workshop.vehicle_plate(MANUAL_VEHICLE_ID), "SIN PLACA");
    assert_eq!(workshop.customer_label("cliente-fantasma"), "Cliente General");
    assert_eq!(workshop.customer_label(&customer.id), "Mario");
}

#[test]
fn test_validation_rejects_malformed_requests() {
    let mut workshop = fresh_workshop();

    let empty_name = workshop.add_customer(CreateCustomerRequest {
        name: String::new(),
        phone: "11999990000".to_string(),
        document: None,
    });
    assert!(empty_name.is_err());

    let short_phone = workshop.add_customer(CreateCustomerRequest {
        name: "Nora".to_string(),
        phone: "123".to_string(),
        document: None,
    });
    assert!(short_phone.is_err());

    let customer = workshop.add_customer(customer_request("Nora")).unwrap();

    let bad_plate = workshop.add_vehicle(CreateVehicleRequest {
        customer_id: customer.id.clone(),
        model: "Clio".to_string(),
        plate: "A1".to_string(),
        km: String::new(),
    });
    assert!(bad_plate.is_err());

    let bad_date = workshop.add_order(order_request(
        MANUAL_VEHICLE_ID,
        &customer.id,
        "10/03/2024",
        Vec::new(),
    ));
    assert!(bad_date.is_err());

    let negative_price = workshop.add_order(order_request(
        MANUAL_VEHICLE_ID,
        &customer.id,
        "2024-03-10",
        vec![item("Mal renglón", ServiceItemKind::Part, Decimal::from(-5))],
    ));
    assert!(negative_price.is_err());

    // nada quedó a medias
    assert_eq!(workshop.customers().len(), 1);
    assert!(workshop.vehicles().is_empty());
    assert!(workshop.orders().is_empty());
}

#[test]
fn test_min_quantity_defaults_when_omitted_or_zero() {
    let mut workshop = fresh_workshop();

    let omitted = workshop
        .add_inventory_item(inventory_request("Aceite 10W40", 12, None))
        .unwrap();
    let zero = workshop
        .add_inventory_item(inventory_request("Filtro de aire", 3, Some(0)))
        .unwrap();
    let explicit = workshop
        .add_inventory_item(inventory_request("Pastillas", 8, Some(2)))
        .unwrap();

    assert_eq!(omitted.min_quantity, 5);
    assert_eq!(zero.min_quantity, 5);
    assert_eq!(explicit.min_quantity, 2);
}

#[test]
fn test_low_stock_set_over_live_inventory() {
    let mut workshop = fresh_workshop();

    workshop
        .add_inventory_item(inventory_request("A", 2, Some(5)))
        .unwrap();
    workshop
        .add_inventory_item(inventory_request("B", 10, Some(5)))
        .unwrap();

    let alerts = low_stock(workshop.inventory());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].name, "A");
}

#[test]
fn test_inventory_quantity_can_go_negative() {
    let mut workshop = fresh_workshop();
    let item = workshop
        .add_inventory_item(inventory_request("Correa", 0, Some(1)))
        .unwrap();

    // el llamador restó sin acotar; el contenedor guarda lo que llega
    let updated = workshop
        .update_inventory(&item.id, item.quantity - 1)
        .unwrap()
        .unwrap();
    assert_eq!(updated.quantity, -1);

    let missing = workshop.update_inventory("no-existe", 5).unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_checklist_gets_the_default_template() {
    let mut workshop = fresh_workshop();

    let checklist = workshop.add_checklist(checklist_request("veh0001")).unwrap();

    assert!(checklist.id.starts_with("CHK-"));
    assert_eq!(checklist.items.len(), 7);
    assert!(checklist
        .items
        .iter()
        .all(|item| item.status == ChecklistItemStatus::Ok));
}

#[test]
fn test_state_survives_a_reopen_on_the_same_medium() {
    let medium = Arc::new(MemoryStorage::default());

    let mut workshop = WorkshopService::open(
        PersistentStore::new(medium.clone()),
        Arc::new(AutoConfirm),
    );
    let customer = workshop.add_customer(customer_request("Olga")).unwrap();
    let vehicle = workshop
        .add_vehicle(vehicle_request(&customer.id, "Kwid", "HHH8888"))
        .unwrap();
    workshop
        .add_order(order_request(&vehicle.id, &customer.id, "2024-03-09", Vec::new()))
        .unwrap();
    workshop
        .add_inventory_item(inventory_request("Lámpara H4", 6, None))
        .unwrap();
    drop(workshop);

    let reopened = WorkshopService::open(
        PersistentStore::new(medium),
        Arc::new(AutoConfirm),
    );

    assert_eq!(reopened.customers().len(), 1);
    assert_eq!(reopened.customers()[0].name, "Olga");
    assert_eq!(reopened.vehicles().len(), 1);
    assert_eq!(reopened.vehicles()[0].customer_id, customer.id);
    assert_eq!(reopened.orders().len(), 1);
    assert_eq!(reopened.inventory().len(), 1);
    assert_eq!(reopened.inventory()[0].min_quantity, 5);
}

#[test]
fn test_corrupt_collections_fall_back_to_empty_on_open() {
    let medium = Arc::new(MemoryStorage::default());

    let mut workshop = WorkshopService::open(
        PersistentStore::new(medium.clone()),
        Arc::new(AutoConfirm),
    );
    workshop.add_customer(customer_request("Pablo")).unwrap();
    drop(workshop);

    // solo la colección de órdenes se corrompe
    medium.write(ORDERS_KEY, "{esto no es json");

    let reopened = WorkshopService::open(
        PersistentStore::new(medium),
        Arc::new(AutoConfirm),
    );
    assert_eq!(reopened.customers().len(), 1);
    assert!(reopened.orders().is_empty());
}

#[test]
fn test_documents_written_by_the_predecessor_load_unchanged() {
    let medium = Arc::new(MemoryStorage::default());

    medium.write(
        CUSTOMERS_KEY,
        r#"[{"id":"c1","name":"Ana Silva","phone":"11999990000"}]"#,
    );
    medium.write(
        VEHICLES_KEY,
        r#"[{"id":"v1","customerId":"c1","model":"Gol","plate":"XYZ9B87","km":"120000"}]"#,
    );
    medium.write(
        ORDERS_KEY,
        r#"[{"id":"OS-123456","vehicleId":"v1","customerId":"c1","date":"2024-01-05","km":"120000","items":[{"description":"Revisión general","type":"service","price":50}],"notes":"","status":"finished","paymentStatus":"pending"}]"#,
    );

    let workshop = WorkshopService::open(
        PersistentStore::new(medium),
        Arc::new(AutoConfirm),
    );

    assert_eq!(workshop.vehicles()[0].customer_id, "c1");
    let order = &workshop.orders()[0];
    assert_eq!(order.items[0].kind, ServiceItemKind::Service);
    assert_eq!(order.labor_value, None);
    assert_eq!(order.problem_description, None);
    assert_eq!(
        daily_revenue(workshop.orders(), "2024-01-05"),
        Decimal::from(50)
    );
}

// ==================== Helpers ====================

struct DecliningGate;

impl ConfirmationGate for DecliningGate {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

fn fresh_workshop() -> WorkshopService {
    WorkshopService::open(
        PersistentStore::new(Arc::new(MemoryStorage::default())),
        Arc::new(AutoConfirm),
    )
}

fn customer_request(name: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        name: name.to_string(),
        phone: "11999990000".to_string(),
        document: None,
    }
}

fn vehicle_request(customer_id: &str, model: &str, plate: &str) -> CreateVehicleRequest {
    CreateVehicleRequest {
        customer_id: customer_id.to_string(),
        model: model.to_string(),
        plate: plate.to_string(),
        km: "50000".to_string(),
    }
}

fn order_request(
    vehicle_id: &str,
    customer_id: &str,
    date: &str,
    items: Vec<ServiceItem>,
) -> CreateOrderRequest {
    CreateOrderRequest {
        vehicle_id: vehicle_id.to_string(),
        customer_id: customer_id.to_string(),
        date: date.to_string(),
        km: "50000".to_string(),
        problem_description: None,
        items,
        notes: String::new(),
        status: OrderStatus::Pending,
        payment_status: PaymentStatus::Pending,
        labor_value: None,
        discount: None,
    }
}

fn checklist_request(vehicle_id: &str) -> CreateChecklistRequest {
    CreateChecklistRequest {
        vehicle_id: vehicle_id.to_string(),
        date: "2024-03-01".to_string(),
        km: "50000".to_string(),
        items: Vec::new(),
        general_notes: String::new(),
    }
}

fn inventory_request(name: &str, quantity: i64, min_quantity: Option<i64>) -> CreateInventoryItemRequest {
    CreateInventoryItemRequest {
        name: name.to_string(),
        quantity,
        min_quantity,
        price: None,
    }
}

fn item(description: &str, kind: ServiceItemKind, price: Decimal) -> ServiceItem {
    ServiceItem {
        description: description.to_string(),
        kind,
        price,
    }
}
