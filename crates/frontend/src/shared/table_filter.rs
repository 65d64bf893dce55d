//! Клиентский движок фильтрации таблиц (поиск, статус, период, сортировка,
//! пагинация).
//!
//! Движок владеет снимком данных и состоянием фильтров; представления только
//! присылают замену данных (`set_data`) и частичные патчи (`update_filters`),
//! а читают два реактивных выхода: текущую страницу и количество записей,
//! прошедших фильтры (до пагинации). Пересчет дебаунсится, эмиссия
//! пропускается, если результат не изменился.

use chrono::NaiveDate;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Значение фильтра статуса, отключающее фильтр
pub const STATUS_ALL: &str = "All";

/// Окно дебаунса пересчета, мс
pub const DEBOUNCE_MS: i32 = 200;

/// Направление сортировки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Полное состояние фильтров списка.
///
/// Всегда полностью заполнено (после инициализации частичных значений нет).
/// Имена полей в сериализации — camelCase, как в query-строке списка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFilters {
    /// Регистронезависимый поиск подстроки
    #[serde(rename = "searchTerm")]
    pub search_term: String,

    /// Точное совпадение статуса; "All" отключает фильтр
    pub status: String,

    /// Начало периода (YYYY-MM-DD), включительно
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Конец периода (YYYY-MM-DD), включительно
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Поле сортировки; пустая строка — без сортировки
    #[serde(rename = "sortKey")]
    pub sort_key: String,

    #[serde(rename = "sortDirection")]
    pub sort_direction: SortDirection,

    /// Номер страницы, начиная с 1
    pub page: usize,

    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

impl Default for TableFilters {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status: STATUS_ALL.to_string(),
            start_date: None,
            end_date: None,
            sort_key: String::new(),
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: 10,
        }
    }
}

impl TableFilters {
    /// Применить частичный патч поверх текущего состояния (shallow merge).
    /// Пустая строка в границе периода снимает границу.
    pub fn merged(&self, patch: &TableFiltersPatch) -> TableFilters {
        let mut next = self.clone();
        if let Some(v) = &patch.search_term {
            next.search_term = v.clone();
        }
        if let Some(v) = &patch.status {
            next.status = v.clone();
        }
        if let Some(v) = &patch.start_date {
            next.start_date = if v.is_empty() { None } else { Some(v.clone()) };
        }
        if let Some(v) = &patch.end_date {
            next.end_date = if v.is_empty() { None } else { Some(v.clone()) };
        }
        if let Some(v) = &patch.sort_key {
            next.sort_key = v.clone();
        }
        if let Some(v) = patch.sort_direction {
            next.sort_direction = v;
        }
        if let Some(v) = patch.page {
            next.page = v;
        }
        if let Some(v) = patch.page_size {
            next.page_size = v;
        }
        next
    }

    /// Сериализация в query-строку (без ведущего '?')
    pub fn to_query(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Частичный патч состояния фильтров: присутствующие ключи перезаписывают
/// значения, отсутствующие оставляют прежние
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFiltersPatch {
    #[serde(rename = "searchTerm", skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "sortKey", skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
    #[serde(rename = "sortDirection", skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl TableFiltersPatch {
    /// Разбор query-строки (с '?' или без) в патч; нечитаемая строка — None
    pub fn from_query(query: &str) -> Option<TableFiltersPatch> {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return None;
        }
        serde_qs::from_str(query).ok()
    }
}

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    /// `term` приходит уже обрезанным и в нижнем регистре; реализация
    /// сравнивает его с полями, приведенными к нижнему регистру.
    /// Отсутствующее поле никогда не совпадает.
    fn matches_filter(&self, term: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю.
    /// Неизвестное поле — `Ordering::Equal` (порядок ввода сохраняется).
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Запись, которую умеет обрабатывать движок фильтрации
pub trait TableRecord: Searchable + Sortable {
    /// Код статуса для точного сравнения с фильтром
    fn status_code(&self) -> Option<&str>;

    /// Дата записи (YYYY-MM-DD) для фильтра по периоду
    fn order_date(&self) -> Option<&str>;
}

/// Разбор даты формата YYYY-MM-DD (допускается хвост "T...")
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Тотальный порядок для опциональных значений: отсутствующее значение
/// всегда меньше присутствующего
pub fn cmp_optional<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Фильтрация и сортировка без пагинации.
///
/// Стадии применяются в фиксированном порядке: поиск → статус → период →
/// сортировка. Каждая стадия независима и пропускается, если ее параметр
/// не задан.
pub fn filter_and_sort<T: TableRecord + Clone>(data: &[T], filters: &TableFilters) -> Vec<T> {
    let mut filtered: Vec<T> = data.to_vec();

    // Поиск
    let term = filters.search_term.trim().to_lowercase();
    if !term.is_empty() {
        filtered.retain(|x| x.matches_filter(&term));
    }

    // Статус
    if filters.status != STATUS_ALL {
        filtered.retain(|x| x.status_code() == Some(filters.status.as_str()));
    }

    // Период: обе границы обязательны; нечитаемая граница отключает стадию,
    // запись с нечитаемой датой при активной стадии исключается
    if let (Some(start), Some(end)) = (&filters.start_date, &filters.end_date) {
        if let (Some(start), Some(end)) = (parse_iso_date(start), parse_iso_date(end)) {
            filtered.retain(|x| match x.order_date().and_then(parse_iso_date) {
                Some(d) => start <= d && d <= end,
                None => false,
            });
        }
    }

    // Сортировка: stable sort, равные ключи сохраняют порядок ввода
    if !filters.sort_key.is_empty() {
        let key = filters.sort_key.clone();
        filtered.sort_by(|a, b| {
            let ord = a.compare_by_field(b, &key);
            match filters.sort_direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    filtered
}

/// Срез текущей страницы: полуинтервал [(page-1)*pageSize, page*pageSize).
/// Страница за пределами данных дает пустой результат, не ошибку.
pub fn paginate<T>(rows: Vec<T>, filters: &TableFilters) -> Vec<T> {
    let start = filters
        .page
        .saturating_sub(1)
        .saturating_mul(filters.page_size);
    rows.into_iter().skip(start).take(filters.page_size).collect()
}

/// Полный конвейер: фильтрация, сортировка и пагинация
pub fn apply_filters<T: TableRecord + Clone>(data: &[T], filters: &TableFilters) -> Vec<T> {
    paginate(filter_and_sort(data, filters), filters)
}

/// Реактивный движок фильтрации.
///
/// Владеет снимком данных и состоянием фильтров; оба входа независимы,
/// изменение любого из них планирует пересчет.
pub struct TableFilterEngine<T: Send + Sync + 'static> {
    data: RwSignal<Vec<T>>,
    filters: RwSignal<TableFilters>,
    page: RwSignal<Vec<T>>,
    total: RwSignal<usize>,
    /// Идентификатор активного setTimeout, если пересчет запланирован
    timer: StoredValue<Option<i32>>,
}

impl<T: Send + Sync + 'static> Clone for TableFilterEngine<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TableFilterEngine<T> {}

impl<T> TableFilterEngine<T>
where
    T: TableRecord + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(Vec::new()),
            filters: RwSignal::new(TableFilters::default()),
            page: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            timer: StoredValue::new(None),
        }
    }

    /// Полная замена снимка данных; прежний снимок отбрасывается
    pub fn set_data(&self, records: Vec<T>) {
        self.data.set(records);
        self.schedule_recompute();
    }

    /// Слить частичный патч поверх текущих фильтров.
    /// Значения не валидируются: за разумный `page` отвечает вызывающий.
    pub fn update_filters(&self, patch: TableFiltersPatch) {
        self.filters.update(|f| *f = f.merged(&patch));
        self.schedule_recompute();
    }

    /// Снимок текущего состояния фильтров (без подписки)
    pub fn filters(&self) -> TableFilters {
        self.filters.get_untracked()
    }

    /// Реактивное состояние фильтров для отображения в UI
    pub fn filters_signal(&self) -> Signal<TableFilters> {
        self.filters.into()
    }

    /// Текущая страница отфильтрованных и отсортированных записей
    pub fn filtered_data(&self) -> Signal<Vec<T>> {
        self.page.into()
    }

    /// Количество записей, прошедших фильтры, до пагинации.
    /// Именно это число видит виджет пагинации.
    pub fn total_count(&self) -> Signal<usize> {
        self.total.into()
    }

    /// Отложить пересчет: серия быстрых изменений (например, обе границы
    /// периода подряд) схлопывается в один пересчет
    fn schedule_recompute(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsCast;

            let window = match web_sys::window() {
                Some(w) => w,
                None => {
                    self.recompute_now();
                    return;
                }
            };

            // Новый ввод отменяет и перезапускает таймер
            if let Some(prev) = self.timer.get_value() {
                window.clear_timeout_with_handle(prev);
            }

            let engine = *self;
            let closure = Closure::wrap(Box::new(move || {
                engine.timer.set_value(None);
                engine.recompute_now();
            }) as Box<dyn Fn()>);

            let timeout_id = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref::<js_sys::Function>(),
                    DEBOUNCE_MS,
                )
                .expect("setTimeout failed");

            closure.forget();
            self.timer.set_value(Some(timeout_id));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            // Вне браузера таймеров нет, пересчет синхронный
            self.recompute_now();
        }
    }

    /// Пересчитать выходы из актуальных значений обоих входов.
    /// Эмиссия пропускается, если результат совпадает с предыдущим.
    pub fn recompute_now(&self) {
        let filters = self.filters.get_untracked();
        let (rows, total) = self.data.with_untracked(|data| {
            let kept = filter_and_sort(data, &filters);
            let total = kept.len();
            (paginate(kept, &filters), total)
        });

        if self.page.with_untracked(|prev| *prev != rows) {
            self.page.set(rows);
        }
        if self.total.get_untracked() != total {
            self.total.set(total);
        }
    }
}

impl<T> Default for TableFilterEngine<T>
where
    T: TableRecord + Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestOrder {
        po_number: String,
        supplier: String,
        warehouse: String,
        status: String,
        order_date: String,
        notes: Option<String>,
    }

    impl TestOrder {
        fn new(po_number: &str, supplier: &str, status: &str, order_date: &str) -> Self {
            Self {
                po_number: po_number.to_string(),
                supplier: supplier.to_string(),
                warehouse: "Central Warehouse".to_string(),
                status: status.to_string(),
                order_date: order_date.to_string(),
                notes: None,
            }
        }
    }

    impl Searchable for TestOrder {
        fn matches_filter(&self, term: &str) -> bool {
            self.po_number.to_lowercase().contains(term)
                || self.supplier.to_lowercase().contains(term)
                || self.warehouse.to_lowercase().contains(term)
        }
    }

    impl Sortable for TestOrder {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "poNumber" => self
                    .po_number
                    .to_lowercase()
                    .cmp(&other.po_number.to_lowercase()),
                "supplier" => self
                    .supplier
                    .to_lowercase()
                    .cmp(&other.supplier.to_lowercase()),
                "orderDate" => cmp_optional(
                    parse_iso_date(&self.order_date).as_ref(),
                    parse_iso_date(&other.order_date).as_ref(),
                ),
                "notes" => cmp_optional(self.notes.as_ref(), other.notes.as_ref()),
                _ => Ordering::Equal,
            }
        }
    }

    impl TableRecord for TestOrder {
        fn status_code(&self) -> Option<&str> {
            Some(&self.status)
        }

        fn order_date(&self) -> Option<&str> {
            Some(&self.order_date)
        }
    }

    fn sample(count: usize) -> Vec<TestOrder> {
        (0..count)
            .map(|i| {
                TestOrder::new(
                    &format!("PO-{}", 1001 + i),
                    "Acme Industries",
                    "Draft",
                    "2025-06-15",
                )
            })
            .collect()
    }

    #[test]
    fn default_filters_paginate_in_input_order() {
        let data = sample(25);
        let page = apply_filters(&data, &TableFilters::default());
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].po_number, "PO-1001");
        assert_eq!(page[9].po_number, "PO-1010");
        assert_eq!(filter_and_sort(&data, &TableFilters::default()).len(), 25);
    }

    #[test]
    fn patch_merge_is_idempotent() {
        let patch = TableFiltersPatch {
            search_term: Some("acme".into()),
            status: Some("Draft".into()),
            page: Some(3),
            ..Default::default()
        };
        let once = TableFilters::default().merged(&patch);
        let twice = once.merged(&patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn patch_keeps_unmentioned_fields() {
        let state = TableFilters {
            search_term: "bolt".into(),
            page: 4,
            ..Default::default()
        };
        let next = state.merged(&TableFiltersPatch {
            status: Some("Approved".into()),
            ..Default::default()
        });
        assert_eq!(next.search_term, "bolt");
        assert_eq!(next.page, 4);
        assert_eq!(next.status, "Approved");
    }

    #[test]
    fn empty_date_in_patch_clears_bound() {
        let state = TableFilters {
            start_date: Some("2025-06-01".into()),
            end_date: Some("2025-06-30".into()),
            ..Default::default()
        };
        let next = state.merged(&TableFiltersPatch {
            start_date: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(next.start_date, None);
        assert_eq!(next.end_date, Some("2025-06-30".into()));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let data = vec![
            TestOrder::new("PO-1001", "Acme Industries", "Draft", "2025-06-01"),
            TestOrder::new("PO-2001", "Globex Corporation", "Draft", "2025-06-02"),
        ];
        let filters = TableFilters {
            search_term: "po-10".into(),
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].po_number, "PO-1001");
    }

    #[test]
    fn search_matches_supplier_and_trims_whitespace() {
        let data = vec![
            TestOrder::new("PO-1001", "Acme Industries", "Draft", "2025-06-01"),
            TestOrder::new("PO-1002", "Globex Corporation", "Draft", "2025-06-02"),
        ];
        let filters = TableFilters {
            search_term: "  GLOBEX  ".into(),
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].supplier, "Globex Corporation");
    }

    #[test]
    fn status_filter_is_exact() {
        let data = vec![
            TestOrder::new("PO-1001", "Acme Industries", "Draft", "2025-06-01"),
            TestOrder::new("PO-1002", "Acme Industries", "Approved", "2025-06-02"),
        ];
        let filters = TableFilters {
            status: "Draft".into(),
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, "Draft");
    }

    #[test]
    fn status_all_disables_filter() {
        let data = vec![
            TestOrder::new("PO-1001", "Acme Industries", "Draft", "2025-06-01"),
            TestOrder::new("PO-1002", "Acme Industries", "Received", "2025-06-02"),
        ];
        assert_eq!(apply_filters(&data, &TableFilters::default()).len(), 2);
    }

    #[test]
    fn status_scenario_keeps_relative_order() {
        let data = vec![
            TestOrder::new("PO-1001", "Acme Industries", "Draft", "2025-06-01"),
            TestOrder::new("PO-1002", "Acme Industries", "Approved", "2025-06-02"),
            TestOrder::new("PO-1003", "Acme Industries", "Draft", "2025-06-03"),
        ];
        let filters = TableFilters {
            status: "Draft".into(),
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].po_number, "PO-1001");
        assert_eq!(result[1].po_number, "PO-1003");
    }

    #[test]
    fn date_range_is_inclusive_at_both_ends() {
        let data = vec![
            TestOrder::new("PO-1001", "Acme Industries", "Draft", "2025-05-31"),
            TestOrder::new("PO-1002", "Acme Industries", "Draft", "2025-06-01"),
            TestOrder::new("PO-1003", "Acme Industries", "Draft", "2025-06-15"),
            TestOrder::new("PO-1004", "Acme Industries", "Draft", "2025-06-30"),
            TestOrder::new("PO-1005", "Acme Industries", "Draft", "2025-07-01"),
        ];
        let filters = TableFilters {
            start_date: Some("2025-06-01".into()),
            end_date: Some("2025-06-30".into()),
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        let numbers: Vec<&str> = result.iter().map(|o| o.po_number.as_str()).collect();
        assert_eq!(numbers, ["PO-1002", "PO-1003", "PO-1004"]);
    }

    #[test]
    fn date_range_with_one_bound_is_skipped() {
        let data = vec![TestOrder::new(
            "PO-1001",
            "Acme Industries",
            "Draft",
            "2020-01-01",
        )];
        let filters = TableFilters {
            start_date: Some("2025-06-01".into()),
            ..Default::default()
        };
        assert_eq!(apply_filters(&data, &filters).len(), 1);
    }

    #[test]
    fn record_with_unparsable_date_is_excluded_when_range_active() {
        let data = vec![
            TestOrder::new("PO-1001", "Acme Industries", "Draft", "not-a-date"),
            TestOrder::new("PO-1002", "Acme Industries", "Draft", "2025-06-15"),
        ];
        let filters = TableFilters {
            start_date: Some("2025-06-01".into()),
            end_date: Some("2025-06-30".into()),
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].po_number, "PO-1002");
    }

    #[test]
    fn unparsable_bound_disables_range_stage() {
        let data = vec![TestOrder::new(
            "PO-1001",
            "Acme Industries",
            "Draft",
            "2025-06-15",
        )];
        let filters = TableFilters {
            start_date: Some("garbage".into()),
            end_date: Some("2025-06-30".into()),
            ..Default::default()
        };
        assert_eq!(apply_filters(&data, &filters).len(), 1);
    }

    #[test]
    fn sort_desc_keeps_input_order_of_equal_keys() {
        let data = vec![
            TestOrder::new("PO-1001", "Acme", "Draft", "2025-06-01"),
            TestOrder::new("PO-1002", "Globex", "Draft", "2025-06-02"),
            TestOrder::new("PO-1003", "Acme", "Draft", "2025-06-03"),
        ];
        let filters = TableFilters {
            sort_key: "supplier".into(),
            sort_direction: SortDirection::Desc,
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        let pairs: Vec<(&str, &str)> = result
            .iter()
            .map(|o| (o.supplier.as_str(), o.po_number.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("Globex", "PO-1002"),
                ("Acme", "PO-1001"),
                ("Acme", "PO-1003"),
            ]
        );
    }

    #[test]
    fn sort_asc_keeps_input_order_of_equal_keys() {
        let data = vec![
            TestOrder::new("PO-1003", "Acme", "Draft", "2025-06-01"),
            TestOrder::new("PO-1001", "Acme", "Draft", "2025-06-02"),
            TestOrder::new("PO-1002", "Globex", "Draft", "2025-06-03"),
        ];
        let filters = TableFilters {
            sort_key: "supplier".into(),
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        let numbers: Vec<&str> = result.iter().map(|o| o.po_number.as_str()).collect();
        assert_eq!(numbers, ["PO-1003", "PO-1001", "PO-1002"]);
    }

    #[test]
    fn absent_sort_value_orders_first_ascending() {
        let mut with_note = TestOrder::new("PO-1001", "Acme", "Draft", "2025-06-01");
        with_note.notes = Some("urgent".into());
        let without_note = TestOrder::new("PO-1002", "Acme", "Draft", "2025-06-02");
        let data = vec![with_note, without_note];

        let asc = TableFilters {
            sort_key: "notes".into(),
            ..Default::default()
        };
        let result = apply_filters(&data, &asc);
        assert_eq!(result[0].po_number, "PO-1002");

        let desc = TableFilters {
            sort_key: "notes".into(),
            sort_direction: SortDirection::Desc,
            ..Default::default()
        };
        let result = apply_filters(&data, &desc);
        assert_eq!(result[0].po_number, "PO-1001");
    }

    #[test]
    fn unknown_sort_key_keeps_input_order() {
        let data = vec![
            TestOrder::new("PO-1002", "Globex", "Draft", "2025-06-02"),
            TestOrder::new("PO-1001", "Acme", "Draft", "2025-06-01"),
        ];
        let filters = TableFilters {
            sort_key: "missingField".into(),
            ..Default::default()
        };
        let result = apply_filters(&data, &filters);
        assert_eq!(result[0].po_number, "PO-1002");
        assert_eq!(result[1].po_number, "PO-1001");
    }

    #[test]
    fn pagination_slices_half_open_window() {
        let data = sample(25);
        let page3 = apply_filters(
            &data,
            &TableFilters {
                page: 3,
                ..Default::default()
            },
        );
        assert_eq!(page3.len(), 5);
        assert_eq!(page3[0].po_number, "PO-1021");

        let page4 = apply_filters(
            &data,
            &TableFilters {
                page: 4,
                ..Default::default()
            },
        );
        assert!(page4.is_empty());
    }

    #[test]
    fn query_string_roundtrip_restores_filters() {
        let filters = TableFilters {
            search_term: "acme".into(),
            status: "Draft".into(),
            start_date: Some("2025-06-01".into()),
            end_date: Some("2025-06-30".into()),
            sort_key: "supplier".into(),
            sort_direction: SortDirection::Desc,
            page: 2,
            page_size: 20,
        };
        let query = filters.to_query();
        let patch = TableFiltersPatch::from_query(&query).expect("query should parse");
        assert_eq!(TableFilters::default().merged(&patch), filters);
    }

    #[test]
    fn empty_query_produces_no_patch() {
        assert_eq!(TableFiltersPatch::from_query(""), None);
        assert_eq!(TableFiltersPatch::from_query("?"), None);
    }

    // Вне wasm пересчет синхронный, дебаунс не участвует
    #[test]
    fn engine_emits_page_and_unpaginated_count() {
        let engine: TableFilterEngine<TestOrder> = TableFilterEngine::new();
        let mut data = sample(20);
        data.extend(vec![
            TestOrder::new("XX-9001", "Globex", "Approved", "2025-06-20"),
            TestOrder::new("XX-9002", "Globex", "Approved", "2025-06-21"),
        ]);
        engine.set_data(data);

        assert_eq!(engine.total_count().get_untracked(), 22);
        assert_eq!(engine.filtered_data().get_untracked().len(), 10);

        engine.update_filters(TableFiltersPatch {
            search_term: Some("po-".into()),
            page: Some(1),
            ..Default::default()
        });
        // Счетчик отражает отфильтрованный, но не постраничный набор
        assert_eq!(engine.total_count().get_untracked(), 20);
        assert_eq!(engine.filtered_data().get_untracked().len(), 10);

        engine.update_filters(TableFiltersPatch {
            page: Some(2),
            ..Default::default()
        });
        assert_eq!(engine.filtered_data().get_untracked().len(), 10);
        assert_eq!(
            engine.filtered_data().get_untracked()[0].po_number,
            "PO-1011"
        );
    }

    #[test]
    fn engine_replaces_snapshot_wholesale() {
        let engine: TableFilterEngine<TestOrder> = TableFilterEngine::new();
        engine.set_data(sample(5));
        assert_eq!(engine.total_count().get_untracked(), 5);

        engine.set_data(Vec::new());
        assert_eq!(engine.total_count().get_untracked(), 0);
        assert!(engine.filtered_data().get_untracked().is_empty());
    }
}
