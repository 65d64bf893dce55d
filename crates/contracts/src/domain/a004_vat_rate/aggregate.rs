use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор ставки НДС
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VatRateId(pub Uuid);

impl VatRateId {
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

impl AggregateId for VatRateId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VatRateId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Ставка НДС (справочник)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatRate {
    #[serde(flatten)]
    pub base: BaseAggregate<VatRateId>,

    /// Ставка в процентах (0, 10, 20)
    pub rate: f64,
}

impl VatRate {
    /// Создать новую ставку для вставки в БД
    pub fn new_for_insert(code: String, rate: f64) -> Self {
        Self {
            base: BaseAggregate::new(VatRateId::new_v4(), code, format!("{}%", rate)),
            rate,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for VatRate {
    type Id = VatRateId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "vat_rate"
    }

    fn element_name() -> &'static str {
        "Ставка НДС"
    }

    fn list_name() -> &'static str {
        "Ставки НДС"
    }
}
