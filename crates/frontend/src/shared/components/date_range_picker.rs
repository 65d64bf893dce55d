use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)? - Duration::days(1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)? - Duration::days(1)
    };
    Some((start, end))
}

/// Компонент выбора периода дат: два поля ввода и кнопки быстрого выбора.
/// Пустые значения означают отсутствие границы (фильтр по периоду выключен).
#[component]
pub fn DateRangePicker(
    /// Значение даты "от" в формате yyyy-mm-dd, пустая строка — нет границы
    #[prop(into)]
    date_from: Signal<String>,

    /// Значение даты "до" в формате yyyy-mm-dd, пустая строка — нет границы
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback при изменении диапазона дат (from, to)
    on_change: Callback<(String, String)>,

    /// Опциональная метка для компонента
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    // Установить текущий месяц
    let on_current_month = move |_| {
        let now = Utc::now().date_naive();
        if let Some((start, end)) = month_bounds(now.year(), now.month()) {
            on_change.run((
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            ));
        }
    };

    // Установить предыдущий месяц (отсчитывается от текущей границы "от")
    let on_previous_month = move |_| {
        let anchor = NaiveDate::parse_from_str(&date_from.get_untracked(), "%Y-%m-%d")
            .unwrap_or_else(|_| Utc::now().date_naive());
        let (year, month) = if anchor.month() == 1 {
            (anchor.year() - 1, 12)
        } else {
            (anchor.year(), anchor.month() - 1)
        };
        if let Some((start, end)) = month_bounds(year, month) {
            on_change.run((
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            ));
        }
    };

    // Снять обе границы
    let on_clear = move |_| {
        on_change.run((String::new(), String::new()));
    };

    view! {
        <div class="date-range-picker">
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <div class="date-range-picker__row">
                <input
                    type="date"
                    class="form__input date-range-picker__input"
                    prop:value=move || date_from.get()
                    on:change=move |ev| on_from_change(event_target_value(&ev))
                />
                <span class="date-range-picker__dash">"—"</span>
                <input
                    type="date"
                    class="form__input date-range-picker__input"
                    prop:value=move || date_to.get()
                    on:change=move |ev| on_to_change(event_target_value(&ev))
                />
                <button class="button button--ghost button--smallall" on:click=on_current_month>
                    "Текущий месяц"
                </button>
                <button class="button button--ghost button--smallall" on:click=on_previous_month>
                    "Предыдущий месяц"
                </button>
                <button class="button button--ghost button--smallall" on:click=on_clear>
                    "Сбросить"
                </button>
            </div>
        </div>
    }
}
