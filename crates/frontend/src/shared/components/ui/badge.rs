use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

/// Бейдж статуса заказа
#[component]
pub fn StatusBadge(
    /// Статус заказа
    #[prop(into)]
    status: Signal<OrderStatus>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        OrderStatus::Draft => "badge badge--status badge--status-draft",
        OrderStatus::Approved => "badge badge--status badge--status-approved",
        OrderStatus::Received => "badge badge--status badge--status-received",
    };

    view! {
        <span class=status_class>
            {move || status.get().display_name()}
        </span>
    }
}
