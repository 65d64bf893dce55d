use super::repository;
use contracts::domain::a005_purchase_order::aggregate::{
    PurchaseOrder, PurchaseOrderDto, PurchaseOrderLine,
};
use contracts::enums::order_status::OrderStatus;
use uuid::Uuid;

/// Сгенерировать следующий номер заказа (PO-1001, PO-1002, ...)
async fn next_po_number() -> anyhow::Result<String> {
    let count = repository::count_all().await?;
    Ok(format!("PO-{}", 1001 + count))
}

/// Создание нового заказа поставщику
pub async fn create(dto: PurchaseOrderDto) -> anyhow::Result<Uuid> {
    let po_number = next_po_number().await?;
    let mut aggregate = PurchaseOrder::new_for_insert(po_number, &dto);
    aggregate.before_write();
    repository::insert(&aggregate).await
}

/// Обновление существующего заказа
pub async fn update(id: Uuid, dto: PurchaseOrderDto) -> anyhow::Result<Option<PurchaseOrder>> {
    let Some(mut aggregate) = repository::get_by_id(id).await? else {
        return Ok(None);
    };

    aggregate.update(&dto);
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(Some(aggregate))
}

/// Мягкое удаление заказа
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Получение заказа по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<PurchaseOrder>> {
    repository::get_by_id(id).await
}

/// Получение списка всех заказов
pub async fn list_all() -> anyhow::Result<Vec<PurchaseOrder>> {
    repository::list_all().await
}

/// Вставка демонстрационных заказов
pub async fn insert_test_data() -> anyhow::Result<()> {
    let line = |product: &str, quantity: f64, unit_price: f64| {
        PurchaseOrderLine::new(product.to_string(), quantity, unit_price)
    };

    let data = vec![
        (
            "Acme Industries",
            "Central Warehouse",
            "Москва, ул. Складская, 1",
            "2025-05-12",
            OrderStatus::Received,
            vec![line("Steel Bolt M8", 500.0, 2.5), line("Angle Bracket", 120.0, 12.0)],
        ),
        (
            "Globex Corporation",
            "North Hub",
            "Санкт-Петербург, Приморское ш., 42",
            "2025-05-28",
            OrderStatus::Approved,
            vec![line("Plywood Sheet 12mm", 60.0, 45.0)],
        ),
        (
            "Initech Ltd",
            "Central Warehouse",
            "Москва, ул. Складская, 1",
            "2025-06-03",
            OrderStatus::Draft,
            vec![
                line("Wood Screw 4x40", 2000.0, 1.2),
                line("Paint, White 5L", 25.0, 38.5),
            ],
        ),
        (
            "Acme Industries",
            "South Depot",
            "Казань, ул. Портовая, 9",
            "2025-06-17",
            OrderStatus::Draft,
            vec![line("Safety Gloves", 300.0, 6.0)],
        ),
    ];

    for (supplier, warehouse, address, date, status, lines) in data {
        let dto = PurchaseOrderDto {
            id: None,
            supplier: supplier.into(),
            warehouse: warehouse.into(),
            shipping_address: address.into(),
            vat_rate: 20.0,
            order_date: date.into(),
            lines,
            status: Some(status),
            notes: None,
        };
        create(dto).await?;
    }

    Ok(())
}
