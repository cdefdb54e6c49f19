//! Реализация `VisibilityNotifier` поверх браузерного `IntersectionObserver`.

use super::{Subscription, VisibilityNotifier};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Уведомитель о пересечении элемента с окном просмотра.
///
/// Порог 0: достаточно, чтобы в расширенную область попал хотя бы один пиксель.
#[derive(Debug, Clone)]
pub struct ViewportNotifier {
    root_margin: String,
}

impl ViewportNotifier {
    /// `root_margin` в синтаксисе CSS, например `"200px 0px"`
    pub fn new(root_margin: impl Into<String>) -> Self {
        Self {
            root_margin: root_margin.into(),
        }
    }

    /// Отступ только по вертикали
    pub fn with_margin_px(margin_px: u32) -> Self {
        Self::new(format!("{}px 0px", margin_px))
    }
}

/// Подписка держит observer и JS-колбэк; колбэк живёт ровно столько же, сколько подписка
pub struct ViewportSubscription {
    observer: IntersectionObserver,
    target: Element,
    _callback: ObserverCallback,
}

impl Subscription for ViewportSubscription {
    fn cancel(self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

impl VisibilityNotifier for ViewportNotifier {
    type Target = Element;
    type Handle = ViewportSubscription;

    fn subscribe(
        &self,
        target: &Element,
        mut on_visible: Box<dyn FnMut()>,
    ) -> Result<ViewportSubscription, String> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if intersecting {
                    on_visible();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&self.root_margin);
        options.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| format!("{e:?}"))?;
        observer.observe(target);

        Ok(ViewportSubscription {
            observer,
            target: target.clone(),
            _callback: callback,
        })
    }
}
