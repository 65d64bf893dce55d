/// Утилиты для списковых представлений (индикаторы сортировки, подсветка поиска)
use leptos::prelude::*;

/// Получить индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Подсветка совпадений поискового запроса в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(
                view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any(),
            );
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! {
                <span class="search-highlight">
                    {text[actual_pos..match_end].to_string()}
                </span>
            }
            .into_any(),
        );

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}
