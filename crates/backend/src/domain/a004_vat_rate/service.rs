use super::repository;
use contracts::domain::a004_vat_rate::aggregate::VatRate;

/// Получение списка всех ставок НДС
pub async fn list_all() -> anyhow::Result<Vec<VatRate>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    for (i, rate) in [0.0, 10.0, 20.0].iter().enumerate() {
        let vat_rate = VatRate::new_for_insert(format!("VAT-{:02}", i + 1), *rate);
        repository::insert(&vat_rate).await?;
    }

    Ok(())
}
