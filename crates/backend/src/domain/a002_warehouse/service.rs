use super::repository;
use contracts::domain::a002_warehouse::aggregate::Warehouse;

/// Получение списка всех складов
pub async fn list_all() -> anyhow::Result<Vec<Warehouse>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let names = ["Central Warehouse", "North Hub", "South Depot"];

    for (i, name) in names.iter().enumerate() {
        let warehouse = Warehouse::new_for_insert(format!("WH-{:03}", i + 1), name.to_string());
        repository::insert(&warehouse).await?;
    }

    Ok(())
}
