use super::repository;
use contracts::domain::a001_supplier::aggregate::Supplier;

/// Получение списка всех поставщиков
pub async fn list_all() -> anyhow::Result<Vec<Supplier>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let names = [
        "Acme Industries",
        "Globex Corporation",
        "Initech Ltd",
        "Stark Supplies",
        "Wayne Components",
    ];

    for (i, name) in names.iter().enumerate() {
        let supplier = Supplier::new_for_insert(format!("SUP-{:03}", i + 1), name.to_string());
        repository::insert(&supplier).await?;
    }

    Ok(())
}
