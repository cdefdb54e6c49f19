mod state;

use super::product_card::ProductCard;
use crate::shared::components::pagination_controls::PaginationControls;
use contracts::domain::a001_product::Product;
use contracts::shared::grid_config::GridConfig;
use contracts::shared::pagination::page_slice;
use leptos::prelude::*;
use state::create_state;
use thaw::Spinner;

/// Срез товаров для страницы `page` (страницы с 1, выход за границы зажимается)
fn slice_page(products: &[Product], page: usize, config: &GridConfig) -> Result<Vec<Product>, String> {
    config.validate().map_err(|e| e.to_string())?;
    Ok(page_slice(products, page, config.page_size).to_vec())
}

async fn fetch_page(
    catalog: StoredValue<Vec<Product>>,
    page: usize,
    config: GridConfig,
) -> Result<Vec<Product>, String> {
    if config.fetch_delay_ms > 0 {
        gloo_timers::future::TimeoutFuture::new(config.fetch_delay_ms).await;
    }
    catalog
        .try_with_value(|items| slice_page(items, page, &config))
        .unwrap_or_else(|| Err("product grid was unmounted".to_string()))
}

/// Сетка товаров с постраничной навигацией.
///
/// Список товаров фиксирован и принадлежит вызывающему; сетка хранит только
/// номер текущей страницы и срез для неё.
#[component]
pub fn ProductGrid(
    /// Полный список товаров
    products: Vec<Product>,
    /// Настройки сетки (по умолчанию 15 товаров на странице, 5 колонок)
    #[prop(optional)]
    config: Option<GridConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = create_state(products.len(), config.page_size);
    let catalog = StoredValue::new(products);

    let (items, set_items) = signal(Vec::<Product>::new());

    let columns = config.columns;
    let root_margin_px = config.root_margin_px;
    let height_px = config.placeholder_height_px;
    let settings = StoredValue::new(config);

    let load = move |page: usize| {
        let Some((request, page)) = state.try_update(|s| s.begin_load(page)) else {
            return;
        };
        let cfg = settings.get_value();

        leptos::task::spawn_local(async move {
            log::debug!("Loading product page {}", page);
            match fetch_page(catalog, page, cfg).await {
                Ok(page_items) => {
                    let is_current = state.try_update(|s| s.finish_load(request)).unwrap_or(false);
                    if is_current {
                        log::debug!("Product page {} ready: {} items", page, page_items.len());
                        let _ = set_items.try_set(page_items);
                    }
                }
                Err(e) => {
                    log::error!("Error fetching products: {}", e);
                    state.try_update(|s| s.fail_load(request));
                }
            }
        });
    };

    // Initial load
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded || s.is_loading) {
            load(1);
        }
    });

    let go_to_page = Callback::new(move |page: usize| {
        if state.with_untracked(|s| s.needs_load(page)) {
            load(page);
        }
    });

    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let grid_style = format!(
        "display: grid; grid-template-columns: repeat({}, 1fr); gap: 20px; padding: 20px;",
        columns
    );

    view! {
        <div class="product-grid-container">
            {move || {
                if state.with(|s| s.is_loading) {
                    view! {
                        <div
                            class="loading-spinner"
                            style="display: flex; justify-content: center; padding: 40px;"
                        >
                            <Spinner />
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="product-grid" style=grid_style.clone()>
                            {items
                                .get()
                                .into_iter()
                                .map(|product| {
                                    view! {
                                        <ProductCard
                                            product=product
                                            root_margin_px=root_margin_px
                                            height_px=height_px
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                        <PaginationControls pagination=pagination on_page_change=go_to_page />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product::new(format!("Product {}", i), i as f64, format!("https://img/{}.jpg", i)))
            .collect()
    }

    #[test]
    fn test_slice_page_sizes() {
        let all = products(32);
        let cfg = GridConfig::default();
        assert_eq!(slice_page(&all, 1, &cfg).unwrap().len(), 15);
        assert_eq!(slice_page(&all, 2, &cfg).unwrap().len(), 15);

        let last = slice_page(&all, 3, &cfg).unwrap();
        assert_eq!(last.len(), 2);
        assert_eq!(last[0].product_name, "Product 30");
        assert_eq!(last[1].product_name, "Product 31");
    }

    #[test]
    fn test_slice_page_empty_catalog() {
        let cfg = GridConfig::default();
        assert!(slice_page(&[], 1, &cfg).unwrap().is_empty());
    }

    #[test]
    fn test_slice_page_invalid_config() {
        let cfg = GridConfig {
            page_size: 0,
            ..GridConfig::default()
        };
        let err = slice_page(&products(3), 1, &cfg).unwrap_err();
        assert_eq!(err, "page_size must be greater than zero");
    }
}
