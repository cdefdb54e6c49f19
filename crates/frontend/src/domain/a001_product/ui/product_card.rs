use super::lazy_image::LazyImage;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// Карточка товара: картинка с ленивой загрузкой, название и цена
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(optional)] root_margin_px: Option<u32>,
    #[prop(optional)] height_px: Option<u32>,
) -> impl IntoView {
    let price = product.price_label();
    let Product {
        product_name,
        image_url,
        ..
    } = product;

    view! {
        <div class="product-card">
            <LazyImage
                src=image_url
                alt=product_name.clone()
                root_margin_px=root_margin_px.unwrap_or(200)
                height_px=height_px.unwrap_or(300)
            />
            <div class="product-details">
                <h3>{product_name}</h3>
                <p>{price}</p>
            </div>
        </div>
    }
}
