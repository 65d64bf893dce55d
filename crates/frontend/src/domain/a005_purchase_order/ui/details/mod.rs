use crate::domain::a005_purchase_order::service;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_vat_rate::aggregate::VatRate;
use contracts::domain::a005_purchase_order::aggregate::{
    compute_totals, PurchaseOrderDto, PurchaseOrderLine,
};
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Строка табличной части в форме редактирования
#[derive(Clone)]
struct LineRow {
    key: usize,
    product: RwSignal<String>,
    quantity: RwSignal<String>,
    unit_price: RwSignal<String>,
}

impl LineRow {
    fn new(key: usize, product: String, quantity: f64, unit_price: f64) -> Self {
        Self {
            key,
            product: RwSignal::new(product),
            quantity: RwSignal::new(format!("{}", quantity)),
            unit_price: RwSignal::new(format!("{}", unit_price)),
        }
    }

    fn to_line(&self) -> PurchaseOrderLine {
        PurchaseOrderLine::new(
            self.product.get_untracked(),
            self.quantity.get_untracked().parse().unwrap_or(0.0),
            self.unit_price.get_untracked().parse().unwrap_or(0.0),
        )
    }
}

/// Форма заказа поставщику: создание и редактирование.
/// Итоги пересчитываются реактивно при каждом изменении строк или ставки НДС.
#[component]
pub fn PurchaseOrderForm() -> impl IntoView {
    let params = use_params_map();
    let editing_id = StoredValue::new(params.with_untracked(|p| p.get("id")));
    let is_edit = editing_id.with_value(|id| id.is_some());

    let supplier = RwSignal::new(String::new());
    let warehouse = RwSignal::new(String::new());
    let shipping_address = RwSignal::new(String::new());
    let vat_rate = RwSignal::new("20".to_string());
    let order_date = RwSignal::new(today_iso());
    let status = RwSignal::new(OrderStatus::Draft.code().to_string());
    let notes = RwSignal::new(String::new());
    let lines = RwSignal::new(Vec::<LineRow>::new());
    let next_key = StoredValue::new(0usize);

    let suppliers = RwSignal::new(Vec::<(String, String)>::new());
    let warehouses = RwSignal::new(Vec::<(String, String)>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let vat_rates = RwSignal::new(Vec::<VatRate>::new());

    let (po_title, set_po_title) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let add_line = move |product: String, quantity: f64, unit_price: f64| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        lines.update(|rows| rows.push(LineRow::new(key, product, quantity, unit_price)));
    };

    let remove_line = move |key: usize| {
        lines.update(|rows| rows.retain(|row| row.key != key));
    };

    // Справочники + заказ при редактировании
    Effect::new(move |_| {
        spawn_local(async move {
            match service::load_suppliers().await {
                Ok(items) => suppliers.set(
                    items
                        .into_iter()
                        .map(|s| (s.base.description.clone(), s.base.description))
                        .collect(),
                ),
                Err(e) => set_error.set(Some(e)),
            }
            match service::load_warehouses().await {
                Ok(items) => warehouses.set(
                    items
                        .into_iter()
                        .map(|w| (w.base.description.clone(), w.base.description))
                        .collect(),
                ),
                Err(e) => set_error.set(Some(e)),
            }
            match service::load_products().await {
                Ok(items) => products.set(items),
                Err(e) => set_error.set(Some(e)),
            }
            match service::load_vat_rates().await {
                Ok(items) => vat_rates.set(items),
                Err(e) => set_error.set(Some(e)),
            }

            if let Some(id) = editing_id.get_value() {
                match service::get_by_id(&id).await {
                    Ok(order) => {
                        set_po_title.set(Some(order.po_number.clone()));
                        supplier.set(order.supplier.clone());
                        warehouse.set(order.warehouse.clone());
                        shipping_address.set(order.shipping_address.clone());
                        vat_rate.set(format!("{}", order.vat_rate));
                        order_date.set(order.order_date.clone());
                        status.set(order.status.code().to_string());
                        notes.set(order.notes.clone().unwrap_or_default());
                        lines.set(Vec::new());
                        for line in order.parse_lines() {
                            add_line(line.product, line.quantity, line.unit_price);
                        }
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            } else {
                // Хотя бы одна строка товаров по умолчанию
                add_line(String::new(), 1.0, 0.0);
            }
        });
    });

    // Итоги документа: подытог, НДС, итого
    let totals = Memo::new(move |_| {
        let rate = vat_rate.get().parse::<f64>().unwrap_or(0.0);
        let parsed: Vec<PurchaseOrderLine> = lines
            .get()
            .iter()
            .map(|row| {
                PurchaseOrderLine::new(
                    row.product.get(),
                    row.quantity.get().parse().unwrap_or(0.0),
                    row.unit_price.get().parse().unwrap_or(0.0),
                )
            })
            .collect();
        compute_totals(&parsed, rate)
    });

    let navigate = use_navigate();
    let on_submit = move |_| {
        let dto = PurchaseOrderDto {
            id: editing_id.get_value(),
            supplier: supplier.get_untracked(),
            warehouse: warehouse.get_untracked(),
            shipping_address: shipping_address.get_untracked(),
            vat_rate: vat_rate.get_untracked().parse().unwrap_or(0.0),
            order_date: order_date.get_untracked(),
            lines: lines
                .get_untracked()
                .iter()
                .map(LineRow::to_line)
                .collect(),
            status: OrderStatus::from_code(&status.get_untracked()),
            notes: {
                let text = notes.get_untracked();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            },
        };

        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match editing_id.get_value() {
                Some(id) => service::update(&id, &dto).await,
                None => service::create(&dto).await,
            };
            set_saving.set(false);
            match result {
                Ok(_) => navigate("/purchase-orders", Default::default()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let status_options: Vec<(String, String)> = OrderStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    let supplier_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "— выберите поставщика —".to_string())];
        options.extend(suppliers.get());
        options
    });

    let warehouse_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "— выберите склад —".to_string())];
        options.extend(warehouses.get());
        options
    });

    let vat_rate_options = Signal::derive(move || {
        vat_rates
            .get()
            .iter()
            .map(|v| (format!("{}", v.rate), v.base.description.clone()))
            .collect::<Vec<_>>()
    });

    let product_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "— товар —".to_string())];
        options.extend(
            products
                .get()
                .iter()
                .map(|p| (p.base.description.clone(), p.base.description.clone())),
        );
        options
    });

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">
                    {move || {
                        po_title
                            .get()
                            .map(|n| format!("Заказ {}", n))
                            .unwrap_or_else(|| "Новый заказ поставщику".to_string())
                    }}
                </h1>
            </div>
        </div>

        <div class="page__content">
            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="form-card">
                <div class="form-card__grid">
                    <Select
                        label="Поставщик:".to_string()
                        value=supplier
                        on_change=Callback::new(move |v| supplier.set(v))
                        options=supplier_options
                        required=true
                    />
                    <Select
                        label="Склад:".to_string()
                        value=warehouse
                        on_change=Callback::new(move |v| warehouse.set(v))
                        options=warehouse_options
                        required=true
                    />
                    <Input
                        label="Адрес доставки:".to_string()
                        value=shipping_address
                        on_input=Callback::new(move |v| shipping_address.set(v))
                        placeholder="Город, улица, дом"
                        required=true
                    />
                    <Input
                        label="Дата заказа:".to_string()
                        value=order_date
                        on_input=Callback::new(move |v| order_date.set(v))
                        input_type="date"
                        required=true
                    />
                    <Select
                        label="Ставка НДС:".to_string()
                        value=vat_rate
                        on_change=Callback::new(move |v| vat_rate.set(v))
                        options=vat_rate_options
                    />
                    <Show when=move || is_edit>
                        <Select
                            label="Статус:".to_string()
                            value=status
                            on_change=Callback::new(move |v| status.set(v))
                            options=status_options.clone()
                        />
                    </Show>
                </div>

                <div class="form-card__section">
                    <div class="form-card__section-header">
                        <h2 class="form-card__section-title">"Товары"</h2>
                        <button
                            class="button button--secondary button--smallall"
                            on:click=move |_| add_line(String::new(), 1.0, 0.0)
                        >
                            {icon("plus")}
                            "Добавить строку"
                        </button>
                    </div>

                    <table class="form-lines-table">
                        <thead>
                            <tr>
                                <th style="width: 40%;">"Товар"</th>
                                <th>"Кол-во"</th>
                                <th>"Цена"</th>
                                <th>"Сумма"</th>
                                <th style="width: 40px;"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || lines.get()
                                key=|row| row.key
                                children=move |row| {
                                    let quantity = row.quantity;
                                    let unit_price = row.unit_price;
                                    let product = row.product;
                                    let key = row.key;

                                    let on_product_change = Callback::new(move |name: String| {
                                        product.set(name.clone());
                                        // Подставляем цену из справочника,
                                        // пока пользователь ее не менял
                                        let current: f64 =
                                            unit_price.get_untracked().parse().unwrap_or(0.0);
                                        if current == 0.0 {
                                            if let Some(price) = products
                                                .get_untracked()
                                                .iter()
                                                .find(|p| p.base.description == name)
                                                .map(|p| p.price)
                                            {
                                                unit_price.set(format!("{}", price));
                                            }
                                        }
                                    });

                                    let line_total = move || {
                                        let q: f64 = quantity.get().parse().unwrap_or(0.0);
                                        let p: f64 = unit_price.get().parse().unwrap_or(0.0);
                                        format!("{:.2}", q * p)
                                    };

                                    view! {
                                        <tr>
                                            <td>
                                                <Select
                                                    value=product
                                                    on_change=on_product_change
                                                    options=product_options
                                                />
                                            </td>
                                            <td>
                                                <Input
                                                    value=quantity
                                                    on_input=Callback::new(move |v| quantity.set(v))
                                                    input_type="number"
                                                />
                                            </td>
                                            <td>
                                                <Input
                                                    value=unit_price
                                                    on_input=Callback::new(move |v| unit_price.set(v))
                                                    input_type="number"
                                                />
                                            </td>
                                            <td class="form-lines-table__total">
                                                {line_total}
                                            </td>
                                            <td>
                                                <button
                                                    class="table__action-btn table__action-btn--danger"
                                                    title="Удалить строку"
                                                    on:click=move |_| remove_line(key)
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Textarea
                    label="Примечания:".to_string()
                    value=notes
                    on_input=Callback::new(move |v| notes.set(v))
                    placeholder="Необязательно"
                />

                <div class="form-card__totals">
                    <div class="form-card__totals-row">
                        <span>"Подытог:"</span>
                        <span>{move || format!("{:.2}", totals.get().subtotal)}</span>
                    </div>
                    <div class="form-card__totals-row">
                        <span>
                            {move || format!("НДС ({}%):", vat_rate.get())}
                        </span>
                        <span>{move || format!("{:.2}", totals.get().vat_amount)}</span>
                    </div>
                    <div class="form-card__totals-row form-card__totals-row--grand">
                        <span>"Итого:"</span>
                        <span>{move || format!("{:.2}", totals.get().grand_total)}</span>
                    </div>
                </div>

                <div class="form-card__actions">
                    <button
                        class="button button--primary"
                        disabled=move || saving.get()
                        on:click=on_submit
                    >
                        {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </button>
                    <A href="/purchase-orders" attr:class="button button--secondary">
                        "Отмена"
                    </A>
                </div>
            </div>
        </div>
    }
}
