use crate::shared::icons::icon;
use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

/// PaginationControls component - "назад", номера всех страниц, "вперёд".
///
/// Страницы нумеруются с 1. Текущая страница помечается классом `active`.
/// При пустом списке обе кнопки навигации неактивны.
#[component]
pub fn PaginationControls(
    /// Состояние пагинации
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Callback when page changes (1-indexed)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get_untracked();
                    if p.has_previous() {
                        on_page_change.run(p.current_page - 1);
                    }
                }
                disabled=move || !pagination.get().has_previous()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
                "Previous"
            </button>

            {move || {
                let p = pagination.get();
                p.page_numbers()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:active={page == p.current_page}
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get_untracked();
                    if p.has_next() {
                        on_page_change.run(p.current_page + 1);
                    }
                }
                disabled=move || !pagination.get().has_next()
                title="Следующая страница"
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
