use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::order_status::OrderStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор заказа поставщику
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseOrderId(pub Uuid);

impl PurchaseOrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PurchaseOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PurchaseOrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Строка табличной части «Товары» заказа поставщику
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    /// Название товара (ссылка на a003_product по названию)
    pub product: String,

    /// Количество
    pub quantity: f64,

    /// Цена за единицу
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,

    /// Сумма строки (quantity * unit_price)
    #[serde(rename = "lineTotal")]
    pub line_total: f64,
}

impl PurchaseOrderLine {
    pub fn new(product: String, quantity: f64, unit_price: f64) -> Self {
        Self {
            product,
            quantity,
            unit_price,
            line_total: quantity * unit_price,
        }
    }
}

/// Итоги документа: подытог, сумма НДС и итого к оплате
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    #[serde(rename = "vatAmount")]
    pub vat_amount: f64,
    #[serde(rename = "grandTotal")]
    pub grand_total: f64,
}

/// Рассчитать итоги по строкам и ставке НДС (в процентах)
pub fn compute_totals(lines: &[PurchaseOrderLine], vat_rate: f64) -> OrderTotals {
    let subtotal: f64 = lines.iter().map(|l| l.quantity * l.unit_price).sum();
    let vat_amount = subtotal * vat_rate / 100.0;
    OrderTotals {
        subtotal,
        vat_amount,
        grand_total: subtotal + vat_amount,
    }
}

/// Документ «Заказ поставщику» (агрегат a005)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<PurchaseOrderId>,

    /// Номер заказа (напр. "PO-1001"), дублирует base.code
    #[serde(rename = "poNumber")]
    pub po_number: String,

    /// Название поставщика
    pub supplier: String,

    /// Название склада
    pub warehouse: String,

    /// Адрес доставки
    #[serde(rename = "shippingAddress")]
    pub shipping_address: String,

    /// Ставка НДС в процентах
    #[serde(rename = "vatRate")]
    pub vat_rate: f64,

    /// Дата заказа (YYYY-MM-DD)
    #[serde(rename = "orderDate")]
    pub order_date: String,

    /// JSON-массив строк табличной части «Товары»
    #[serde(rename = "linesJson")]
    pub lines_json: Option<String>,

    /// Итоги документа
    #[serde(flatten)]
    pub totals: OrderTotals,

    /// Статус заказа
    pub status: OrderStatus,

    /// Примечания
    pub notes: Option<String>,
}

impl PurchaseOrder {
    /// Создать новый заказ для вставки в БД.
    /// Итоги пересчитываются из строк, переданные значения не принимаются.
    pub fn new_for_insert(po_number: String, dto: &PurchaseOrderDto) -> Self {
        let description = format!("{} от {}", po_number, dto.order_date);
        let base = BaseAggregate::new(
            PurchaseOrderId::new_v4(),
            po_number.clone(),
            description,
        );

        let lines_json = if dto.lines.is_empty() {
            None
        } else {
            serde_json::to_string(&dto.lines).ok()
        };

        Self {
            base,
            po_number,
            supplier: dto.supplier.clone(),
            warehouse: dto.warehouse.clone(),
            shipping_address: dto.shipping_address.clone(),
            vat_rate: dto.vat_rate,
            order_date: dto.order_date.clone(),
            lines_json,
            totals: compute_totals(&dto.lines, dto.vat_rate),
            status: dto.status.unwrap_or_default(),
            notes: dto.notes.clone(),
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Десериализовать lines_json в вектор строк
    pub fn parse_lines(&self) -> Vec<PurchaseOrderLine> {
        self.lines_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    /// Обновить данные из DTO (номер и дата создания не меняются)
    pub fn update(&mut self, dto: &PurchaseOrderDto) {
        self.supplier = dto.supplier.clone();
        self.warehouse = dto.warehouse.clone();
        self.shipping_address = dto.shipping_address.clone();
        self.vat_rate = dto.vat_rate;
        self.order_date = dto.order_date.clone();
        self.lines_json = if dto.lines.is_empty() {
            None
        } else {
            serde_json::to_string(&dto.lines).ok()
        };
        self.totals = compute_totals(&dto.lines, dto.vat_rate);
        if let Some(status) = dto.status {
            self.status = status;
        }
        self.notes = dto.notes.clone();
        self.base.description = format!("{} от {}", self.po_number, self.order_date);
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "purchase_order"
    }

    fn element_name() -> &'static str {
        "Заказ поставщику"
    }

    fn list_name() -> &'static str {
        "Заказы поставщикам"
    }
}

/// DTO для создания/обновления заказа поставщику
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDto {
    pub id: Option<String>,
    pub supplier: String,
    pub warehouse: String,
    #[serde(rename = "shippingAddress")]
    pub shipping_address: String,
    #[serde(rename = "vatRate")]
    pub vat_rate: f64,
    #[serde(rename = "orderDate")]
    pub order_date: String,
    #[serde(default)]
    pub lines: Vec<PurchaseOrderLine>,
    pub status: Option<OrderStatus>,
    pub notes: Option<String>,
}

impl PurchaseOrderDto {
    /// Валидация формы заказа (выполняется на клиенте перед отправкой)
    pub fn validate(&self) -> Result<(), String> {
        if self.supplier.trim().is_empty() {
            return Err("Не выбран поставщик".into());
        }
        if self.warehouse.trim().is_empty() {
            return Err("Не выбран склад".into());
        }
        if self.shipping_address.trim().is_empty() {
            return Err("Не указан адрес доставки".into());
        }
        if self.order_date.trim().is_empty() {
            return Err("Не указана дата заказа".into());
        }
        if self.lines.is_empty() {
            return Err("Добавьте хотя бы одну строку товаров".into());
        }
        for (i, line) in self.lines.iter().enumerate() {
            if line.product.trim().is_empty() {
                return Err(format!("Строка {}: не выбран товар", i + 1));
            }
            if line.quantity < 1.0 {
                return Err(format!("Строка {}: количество должно быть не меньше 1", i + 1));
            }
            if line.unit_price < 1.0 {
                return Err(format!("Строка {}: цена должна быть не меньше 1", i + 1));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product: &str, quantity: f64, unit_price: f64) -> PurchaseOrderLine {
        PurchaseOrderLine::new(product.to_string(), quantity, unit_price)
    }

    fn valid_dto() -> PurchaseOrderDto {
        PurchaseOrderDto {
            id: None,
            supplier: "Acme Industries".into(),
            warehouse: "Central Warehouse".into(),
            shipping_address: "Москва, ул. Складская, 1".into(),
            vat_rate: 20.0,
            order_date: "2025-06-15".into(),
            lines: vec![line("Steel Bolt M8", 100.0, 2.5), line("Angle Bracket", 40.0, 12.0)],
            status: None,
            notes: None,
        }
    }

    #[test]
    fn test_compute_totals() {
        let totals = compute_totals(&[line("a", 100.0, 2.5), line("b", 40.0, 12.0)], 20.0);
        assert_eq!(totals.subtotal, 730.0);
        assert_eq!(totals.vat_amount, 146.0);
        assert_eq!(totals.grand_total, 876.0);
    }

    #[test]
    fn test_compute_totals_empty_lines() {
        let totals = compute_totals(&[], 20.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.vat_amount, 0.0);
        assert_eq!(totals.grand_total, 0.0);
    }

    #[test]
    fn test_new_for_insert_recalculates_totals() {
        let order = PurchaseOrder::new_for_insert("PO-1001".into(), &valid_dto());
        assert_eq!(order.po_number, "PO-1001");
        assert_eq!(order.base.code, "PO-1001");
        assert_eq!(order.totals.grand_total, 876.0);
        assert_eq!(order.status, OrderStatus::Draft);
        assert_eq!(order.parse_lines().len(), 2);
    }

    #[test]
    fn test_lines_roundtrip_through_json() {
        let order = PurchaseOrder::new_for_insert("PO-1001".into(), &valid_dto());
        let lines = order.parse_lines();
        assert_eq!(lines[0].product, "Steel Bolt M8");
        assert_eq!(lines[0].line_total, 250.0);
    }

    #[test]
    fn test_validate_accepts_valid_dto() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut dto = valid_dto();
        dto.supplier = "".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.lines.clear();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.lines[0].quantity = 0.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_keeps_number_and_rewrites_lines() {
        let mut order = PurchaseOrder::new_for_insert("PO-1001".into(), &valid_dto());
        let mut dto = valid_dto();
        dto.lines = vec![line("Steel Bolt M8", 10.0, 2.0)];
        dto.status = Some(OrderStatus::Approved);
        order.update(&dto);

        assert_eq!(order.po_number, "PO-1001");
        assert_eq!(order.totals.subtotal, 20.0);
        assert_eq!(order.status, OrderStatus::Approved);
        assert_eq!(order.parse_lines().len(), 1);
    }

    #[test]
    fn test_dto_wire_format_is_camel_case() {
        let json = serde_json::to_string(&valid_dto()).unwrap();
        assert!(json.contains("shippingAddress"));
        assert!(json.contains("vatRate"));
        assert!(json.contains("orderDate"));
        assert!(json.contains("unitPrice"));
    }
}
