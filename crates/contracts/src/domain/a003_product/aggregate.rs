use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Товар (справочник)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// Цена по умолчанию, подставляется в строку заказа при выборе товара
    pub price: f64,
}

impl Product {
    /// Создать новый товар для вставки в БД
    pub fn new_for_insert(code: String, name: String, price: f64) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), code, name),
            price,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Товары"
    }
}
