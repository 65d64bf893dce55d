use crate::domain::a005_purchase_order::ui::details::PurchaseOrderForm;
use crate::domain::a005_purchase_order::ui::list::PurchaseOrderList;
use crate::layout::Header;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Таблица маршрутов приложения
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="page">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/purchase-orders") view=PurchaseOrderList />
                    <Route path=path!("/purchase-orders/new") view=PurchaseOrderForm />
                    <Route path=path!("/purchase-orders/:id/edit") view=PurchaseOrderForm />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="home-card">
            <h1 class="home-card__title">"Управление заказами поставщикам"</h1>
            <p class="home-card__text">
                "Создание, согласование и учет заказов поставщикам: поиск, фильтры по статусу и периоду, сортировка и постраничный просмотр."
            </p>
            <A href="/purchase-orders" attr:class="button button--primary">
                "Открыть список заказов"
            </A>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="home-card">
            <h1 class="home-card__title">"Страница не найдена"</h1>
            <A href="/" attr:class="button button--secondary">
                "На главную"
            </A>
        </div>
    }
}
