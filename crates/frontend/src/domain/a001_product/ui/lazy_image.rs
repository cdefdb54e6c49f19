use crate::shared::visibility::{RevealGate, ViewportNotifier, ViewportSubscription, VisibilityNotifier};
use leptos::html::Div;
use leptos::prelude::*;

/// Картинка, которая подгружается только при приближении к окну просмотра.
///
/// До раскрытия показывает заглушку фиксированной высоты. Подписка на
/// `IntersectionObserver` снимается сразу после раскрытия или при размонтировании.
#[component]
pub fn LazyImage(
    /// Адрес изображения
    #[prop(into)]
    src: String,
    /// Alt-текст
    #[prop(into)]
    alt: String,
    /// Отступ от окна просмотра, px (по умолчанию 200)
    #[prop(optional)]
    root_margin_px: Option<u32>,
    /// Высота блока, px (по умолчанию 300)
    #[prop(optional)]
    height_px: Option<u32>,
) -> impl IntoView {
    let root_margin_px = root_margin_px.unwrap_or(200);
    let height_px = height_px.unwrap_or(300);

    let container_ref = NodeRef::<Div>::new();
    let (is_visible, set_is_visible) = signal(false);
    // IntersectionObserver is not Send+Sync, store locally
    let gate = StoredValue::new_local(RevealGate::<ViewportSubscription>::new());

    let src_for_log = src.clone();
    Effect::new(move |_| {
        let Some(container) = container_ref.get() else {
            return;
        };
        if gate.with_value(|g| g.is_revealed() || g.is_armed()) {
            return;
        }

        let on_visible = Box::new(move || {
            let fired = gate.try_update_value(|g| g.reveal()).unwrap_or(false);
            if fired {
                set_is_visible.set(true);
            }
        });

        match ViewportNotifier::with_margin_px(root_margin_px).subscribe(&container, on_visible) {
            Ok(subscription) => gate.update_value(|g| g.arm(subscription)),
            Err(e) => {
                // Без observer картинку показываем сразу, иначе она не появится никогда
                log::error!("IntersectionObserver failed for {}: {}", src_for_log, e);
                gate.update_value(|g| {
                    g.reveal();
                });
                set_is_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        gate.try_update_value(|g| g.release());
    });

    let box_style = format!(
        "height: {}px; background-color: #f0f0f0; display: flex; justify-content: center; align-items: center;",
        height_px
    );

    view! {
        <div node_ref=container_ref class="lazy-image" style=box_style>
            {move || {
                if is_visible.get() {
                    view! {
                        <img
                            src=src.clone()
                            alt=alt.clone()
                            style="width: 100%; height: 100%; object-fit: cover;"
                        />
                    }
                    .into_any()
                } else {
                    view! { <div class="lazy-image__placeholder" style="color: #888;">"Loading..."</div> }
                        .into_any()
                }
            }}
        </div>
    }
}
