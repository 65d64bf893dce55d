use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
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

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Поставщик (справочник)
///
/// Название поставщика хранится в `base.description`; документы ссылаются
/// на поставщика по названию.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(flatten)]
    pub base: BaseAggregate<SupplierId>,
}

impl Supplier {
    /// Создать нового поставщика для вставки в БД
    pub fn new_for_insert(code: String, name: String) -> Self {
        Self {
            base: BaseAggregate::new(SupplierId::new_v4(), code, name),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Поставщик"
    }

    fn list_name() -> &'static str {
        "Поставщики"
    }
}
