//! Уведомления о попадании элемента в область просмотра.
//!
//! `VisibilityNotifier` — абстракция над механизмом отслеживания видимости
//! (в браузере это `IntersectionObserver`, см. [`viewport`]).
//! `RevealGate` — одноразовый переключатель "заглушка → контент":
//! срабатывает не более одного раза и сразу отписывается от уведомлений.

pub mod viewport;

pub use viewport::{ViewportNotifier, ViewportSubscription};

/// Активная подписка на уведомления о видимости
pub trait Subscription {
    /// Отписаться и освободить всё, что держит подписка
    fn cancel(self);
}

/// Источник уведомлений о видимости элементов
pub trait VisibilityNotifier {
    type Target;
    type Handle: Subscription;

    /// Подписка на появление `target` в области просмотра (с учётом отступа).
    ///
    /// `on_visible` вызывается каждый раз, когда элемент пересекает область;
    /// отписку выполняет владелец подписки.
    fn subscribe(
        &self,
        target: &Self::Target,
        on_visible: Box<dyn FnMut()>,
    ) -> Result<Self::Handle, String>;
}

/// Одноразовое раскрытие ячейки.
///
/// Флаг `revealed` переходит false → true не более одного раза и обратно не
/// возвращается. Подписка отменяется ровно один раз: при раскрытии или при
/// размонтировании (`release`).
pub struct RevealGate<S: Subscription> {
    revealed: bool,
    subscription: Option<S>,
}

impl<S: Subscription> Default for RevealGate<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscription> RevealGate<S> {
    pub fn new() -> Self {
        Self {
            revealed: false,
            subscription: None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Сохраняет подписку. Если ячейка уже раскрыта, подписка сразу отменяется.
    pub fn arm(&mut self, subscription: S) {
        if self.revealed {
            subscription.cancel();
            return;
        }
        if let Some(previous) = self.subscription.replace(subscription) {
            previous.cancel();
        }
    }

    /// Раскрывает ячейку. true только при первом вызове.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        self.release();
        true
    }

    /// Отменяет подписку, не меняя флаг раскрытия
    pub fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.subscription.is_some()
    }
}
