use serde::{Deserialize, Serialize};

/// Статусы заказа поставщику
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Draft,
    Approved,
    Received,
}

impl OrderStatus {
    /// Код статуса (хранится в БД и передается по API)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Draft",
            OrderStatus::Approved => "Approved",
            OrderStatus::Received => "Received",
        }
    }

    /// Человекочитаемое название для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Черновик",
            OrderStatus::Approved => "Утвержден",
            OrderStatus::Received => "Получен",
        }
    }

    /// Все статусы в порядке жизненного цикла
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Draft,
            OrderStatus::Approved,
            OrderStatus::Received,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Draft" => Some(OrderStatus::Draft),
            "Approved" => Some(OrderStatus::Approved),
            "Received" => Some(OrderStatus::Received),
            _ => None,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Draft
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
