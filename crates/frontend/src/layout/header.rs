use leptos::prelude::*;
use leptos_router::components::A;

/// Шапка приложения с навигацией
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <span class="app-header__logo">"PO"</span>
                <span class="app-header__title">"Заказы поставщикам"</span>
            </div>
            <nav class="app-header__nav">
                <A href="/" attr:class="app-header__link">
                    "Главная"
                </A>
                <A href="/purchase-orders" attr:class="app-header__link">
                    "Заказы"
                </A>
                <A href="/purchase-orders/new" attr:class="app-header__link">
                    "Новый заказ"
                </A>
            </nav>
        </header>
    }
}
