use crate::domain::a005_purchase_order::service;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Select, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, highlight_matches};
use crate::shared::table_filter::{
    cmp_optional, parse_iso_date, Searchable, SortDirection, Sortable, TableFilterEngine,
    TableFiltersPatch, TableRecord, STATUS_ALL,
};
use contracts::domain::a005_purchase_order::aggregate::PurchaseOrder;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use std::cmp::Ordering;
use thaw::*;

const TABLE_ID: &str = "a005-purchase-order-table";

/// Отразить текущие фильтры в query-строке адреса, не перезагружая страницу
fn replace_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let url = if query.is_empty() {
        "/purchase-orders".to_string()
    } else {
        format!("/purchase-orders?{}", query)
    };
    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
}

impl Searchable for PurchaseOrder {
    fn matches_filter(&self, term: &str) -> bool {
        self.po_number.to_lowercase().contains(term)
            || self.supplier.to_lowercase().contains(term)
            || self.warehouse.to_lowercase().contains(term)
    }
}

impl Sortable for PurchaseOrder {
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
            "warehouse" => self
                .warehouse
                .to_lowercase()
                .cmp(&other.warehouse.to_lowercase()),
            "orderDate" => cmp_optional(
                parse_iso_date(&self.order_date).as_ref(),
                parse_iso_date(&other.order_date).as_ref(),
            ),
            "grandTotal" => self.totals.grand_total.total_cmp(&other.totals.grand_total),
            "status" => self.status.code().cmp(other.status.code()),
            "notes" => cmp_optional(self.notes.as_ref(), other.notes.as_ref()),
            _ => Ordering::Equal,
        }
    }
}

impl TableRecord for PurchaseOrder {
    fn status_code(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn order_date(&self) -> Option<&str> {
        Some(&self.order_date)
    }
}

/// Список заказов поставщикам: поиск, фильтры, сортировка и пагинация
/// выполняются на клиенте движком фильтрации
#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let engine: TableFilterEngine<PurchaseOrder> = TableFilterEngine::new();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_filter_expanded, set_is_filter_expanded) = signal(true);

    // Восстановление фильтров из query-строки при монтировании
    let location = use_location();
    if let Some(patch) = TableFiltersPatch::from_query(&location.search.get_untracked()) {
        engine.update_filters(patch);
    }

    let filters = engine.filters_signal();
    let orders = engine.filtered_data();
    let total_count = engine.total_count();
    let total_pages = Signal::derive(move || {
        let count = total_count.get();
        let page_size = filters.with(|f| f.page_size).max(1);
        (count + page_size - 1) / page_size
    });

    let load_orders = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match service::load_all().await {
                Ok(items) => {
                    engine.set_data(items);
                    set_loading.set(false);
                }
                Err(e) => {
                    // Прежний снимок остается видимым до успешной перезагрузки
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| {
        load_orders();
    });

    // Патч фильтров + синхронизация query-строки
    let apply_patch = move |patch: TableFiltersPatch| {
        engine.update_filters(patch);
        replace_query(&engine.filters().to_query());
    };

    // Поисковая строка: значение уходит в движок, дебаунс на его стороне
    let search_query = RwSignal::new(engine.filters().search_term.clone());
    Effect::new(move |_| {
        let value = search_query.get();
        untrack(move || {
            if value != engine.filters().search_term {
                apply_patch(TableFiltersPatch {
                    search_term: Some(value),
                    page: Some(1),
                    ..Default::default()
                });
            }
        });
    });

    let on_status_change = Callback::new(move |value: String| {
        apply_patch(TableFiltersPatch {
            status: Some(value),
            page: Some(1),
            ..Default::default()
        });
    });

    let on_date_range = Callback::new(move |(from, to): (String, String)| {
        apply_patch(TableFiltersPatch {
            start_date: Some(from),
            end_date: Some(to),
            page: Some(1),
            ..Default::default()
        });
    });

    let toggle_sort = move |field: &'static str| {
        let current = engine.filters();
        let direction =
            if current.sort_key == field && current.sort_direction == SortDirection::Asc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
        apply_patch(TableFiltersPatch {
            sort_key: Some(field.to_string()),
            sort_direction: Some(direction),
            ..Default::default()
        });
    };

    let go_to_page = move |page: usize| {
        apply_patch(TableFiltersPatch {
            page: Some(page),
            ..Default::default()
        });
    };

    let change_page_size = move |size: usize| {
        apply_patch(TableFiltersPatch {
            page_size: Some(size),
            page: Some(1),
            ..Default::default()
        });
    };

    let delete_order = move |id: String, po_number: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить заказ {}?", po_number))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match service::delete(&id).await {
                Ok(_) => load_orders(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let active_filters_count = Signal::derive(move || {
        filters.with(|f| {
            let mut count = 0;
            if !f.search_term.is_empty() {
                count += 1;
            }
            if f.status != STATUS_ALL {
                count += 1;
            }
            if f.start_date.is_some() || f.end_date.is_some() {
                count += 1;
            }
            count
        })
    });

    let status_options = {
        let mut options = vec![(STATUS_ALL.to_string(), "Все статусы".to_string())];
        options.extend(
            OrderStatus::all()
                .into_iter()
                .map(|s| (s.code().to_string(), s.display_name().to_string())),
        );
        options
    };
    let status_options = Signal::derive(move || status_options.clone());

    let sortable_header = move |field: &'static str, title: &'static str| {
        view! {
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| toggle_sort(field)
            >
                {title}
                <span class=move || filters.with(|f| get_sort_class(&f.sort_key, field))>
                    {move || {
                        filters.with(|f| {
                            get_sort_indicator(
                                &f.sort_key,
                                field,
                                f.sort_direction == SortDirection::Asc,
                            )
                        })
                    }}
                </span>
            </div>
        }
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">"Заказы поставщикам"</h1>
                <span class="badge badge--primary">
                    {move || total_count.get().to_string()}
                </span>
            </div>
            <div class="page__header-right">
                <A href="/purchase-orders/new" attr:class="button button--primary">
                    {icon("plus")}
                    "Новый заказ"
                </A>
            </div>
        </div>

        <div class="page__content">
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div
                        class="filter-panel-header__left"
                        on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                    >
                        <svg
                            width="16" height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class=move || {
                                if is_filter_expanded.get() {
                                    "filter-panel__chevron filter-panel__chevron--expanded"
                                } else {
                                    "filter-panel__chevron"
                                }
                            }
                        >
                            <polyline points="6 9 12 15 18 9"></polyline>
                        </svg>
                        {icon("filter")}
                        <span class="filter-panel__title">"Фильтры"</span>
                        {move || {
                            let count = active_filters_count.get();
                            if count > 0 {
                                view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>

                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=Signal::derive(move || filters.with(|f| f.page))
                            total_pages=total_pages
                            total_count=total_count
                            page_size=Signal::derive(move || filters.with(|f| f.page_size))
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                        />
                    </div>

                    <div class="filter-panel-header__right">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| load_orders()
                            disabled=Signal::derive(move || loading.get())
                        >
                            {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                        </Button>
                    </div>
                </div>

                <Show when=move || is_filter_expanded.get()>
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="min-width: 420px;">
                                <DateRangePicker
                                    date_from=Signal::derive(move || {
                                        filters.with(|f| f.start_date.clone().unwrap_or_default())
                                    })
                                    date_to=Signal::derive(move || {
                                        filters.with(|f| f.end_date.clone().unwrap_or_default())
                                    })
                                    on_change=on_date_range
                                    label="Период:".to_string()
                                />
                            </div>

                            <div style="min-width: 180px;">
                                <Select
                                    label="Статус:".to_string()
                                    value=Signal::derive(move || filters.with(|f| f.status.clone()))
                                    on_change=on_status_change
                                    options=status_options
                                />
                            </div>

                            <div style="flex: 1; max-width: 320px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Поиск:"</Label>
                                    <Input
                                        value=search_query
                                        placeholder="Номер, поставщик, склад..."
                                    />
                                </Flex>
                            </div>
                        </Flex>
                    </div>
                </Show>
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="table-wrapper">
                <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 900px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=110.0>
                                {sortable_header("orderDate", "Дата")}
                            </TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=130.0>
                                {sortable_header("poNumber", "Номер")}
                            </TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=220.0>
                                {sortable_header("supplier", "Поставщик")}
                            </TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>
                                {sortable_header("warehouse", "Склад")}
                            </TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>
                                {sortable_header("grandTotal", "Сумма")}
                            </TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>
                                {sortable_header("status", "Статус")}
                            </TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>
                                ""
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || orders.get()
                            key=|order| {
                                // Ключ включает версию, чтобы строка
                                // перерисовалась после редактирования
                                format!("{}-{}", order.to_string_id(), order.base.metadata.version)
                            }
                            children=move |order| {
                                let id = order.to_string_id();
                                let po_number = order.po_number.clone();
                                let supplier = order.supplier.clone();
                                let warehouse = order.warehouse.clone();
                                let formatted_date = format_date(&order.order_date);
                                let grand_total = format!("{:.2}", order.totals.grand_total);
                                let status = order.status;
                                let edit_href = format!("/purchase-orders/{}/edit", id);
                                let edit_href_action = edit_href.clone();
                                let delete_id = id.clone();
                                let delete_number = po_number.clone();

                                let po_number_cell = po_number.clone();
                                let supplier_cell = supplier.clone();
                                let warehouse_cell = warehouse.clone();

                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                {formatted_date}
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <A
                                                    href=edit_href.clone()
                                                    attr:class="table__link"
                                                >
                                                    {move || {
                                                        filters.with(|f| {
                                                            highlight_matches(&po_number_cell, &f.search_term)
                                                        })
                                                    }}
                                                </A>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {move || {
                                                    filters.with(|f| {
                                                        highlight_matches(&supplier_cell, &f.search_term)
                                                    })
                                                }}
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {move || {
                                                    filters.with(|f| {
                                                        highlight_matches(&warehouse_cell, &f.search_term)
                                                    })
                                                }}
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-variant-numeric: tabular-nums;">
                                                    {grand_total}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge status=status />
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="table__actions">
                                                    <A
                                                        href=edit_href_action.clone()
                                                        attr:class="table__action-btn"
                                                        attr:title="Редактировать"
                                                    >
                                                        {icon("edit")}
                                                    </A>
                                                    <button
                                                        class="table__action-btn table__action-btn--danger"
                                                        title="Удалить"
                                                        on:click=move |_| {
                                                            delete_order(
                                                                delete_id.clone(),
                                                                delete_number.clone(),
                                                            )
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || !loading.get() && orders.with(|o| o.is_empty())>
                    <div class="table-empty">"Нет заказов по заданным условиям"</div>
                </Show>
            </div>
        </div>
    }
}
