use super::repository;
use contracts::domain::a003_product::aggregate::Product;

/// Получение списка всех товаров
pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let items: [(&str, f64); 6] = [
        ("Steel Bolt M8", 2.5),
        ("Angle Bracket", 12.0),
        ("Plywood Sheet 12mm", 45.0),
        ("Wood Screw 4x40", 1.2),
        ("Paint, White 5L", 38.5),
        ("Safety Gloves", 6.0),
    ];

    for (i, (name, price)) in items.iter().enumerate() {
        let product =
            Product::new_for_insert(format!("PRD-{:03}", i + 1), name.to_string(), *price);
        repository::insert(&product).await?;
    }

    Ok(())
}
