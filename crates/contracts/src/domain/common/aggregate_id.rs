/// Трейт для типов-идентификаторов агрегатов
///
/// Каждый агрегат имеет собственный newtype-идентификатор поверх UUID,
/// чтобы ID разных агрегатов нельзя было перепутать на уровне типов.
pub trait AggregateId: Sized {
    /// Строковое представление для API и БД
    fn as_string(&self) -> String;

    /// Парсинг из строкового представления
    fn from_string(s: &str) -> Result<Self, String>;
}
