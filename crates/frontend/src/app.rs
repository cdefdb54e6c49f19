use crate::domain::a001_product::ui::grid::ProductGrid;
use contracts::domain::a001_product::{Product, ProductCatalog};
use contracts::shared::grid_config::GridConfig;
use leptos::prelude::*;
use serde::Deserialize;

/// Демонстрационный каталог, встроенный в бандл
const DEMO_CATALOG: &str = include_str!("../assets/catalog.json");

/// Необязательный блок `config` рядом с `record`
#[derive(Deserialize, Default)]
struct CatalogSettings {
    #[serde(default)]
    config: GridConfig,
}

/// Разбирает документ каталога. При ошибке пишет в лог и возвращает пустой список,
/// чтобы сетка отрисовалась без товаров, а не упала.
fn load_catalog(raw: &str) -> (Vec<Product>, GridConfig) {
    let products = match ProductCatalog::from_json(raw) {
        Ok(catalog) => catalog.record,
        Err(e) => {
            log::error!("Failed to parse product catalog: {}", e);
            Vec::new()
        }
    };
    let config = serde_json::from_str::<CatalogSettings>(raw)
        .map(|s| s.config)
        .unwrap_or_default();
    (products, config)
}

#[component]
pub fn App() -> impl IntoView {
    let (products, config) = load_catalog(DEMO_CATALOG);
    log::debug!("Catalog loaded: {} products", products.len());

    view! {
        <main class="app">
            <ProductGrid products=products config=config />
        </main>
    }
}
