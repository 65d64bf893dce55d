use leptos::prelude::*;

/// SVG-иконки в стиле feather; неизвестное имя дает пустой фрагмент
pub fn icon(name: &str) -> AnyView {
    let path: &str = match name {
        "chevrons-left" => "M11 17l-5-5 5-5 M18 17l-5-5 5-5",
        "chevron-left" => "M15 18l-6-6 6-6",
        "chevron-right" => "M9 18l6-6-6-6",
        "chevrons-right" => "M13 17l5-5-5-5 M6 17l5-5-5-5",
        "filter" => "M22 3H2l8 9.46V19l4 2v-8.54L22 3z",
        "plus" => "M12 5v14 M5 12h14",
        "edit" => "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7 M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z",
        "trash" => "M3 6h18 M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2 M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
        "x" => "M18 6L6 18 M6 6l12 12",
        _ => return view! { <></> }.into_any(),
    };

    view! {
        <svg
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d=path.to_string()></path>
        </svg>
    }
    .into_any()
}
