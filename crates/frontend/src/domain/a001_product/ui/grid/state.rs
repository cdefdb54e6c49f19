use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductGridState {
    // Pagination
    pub pagination: Pagination,

    // Load flags
    pub is_loading: bool,
    pub is_loaded: bool,

    /// Номер последнего запроса страницы; ответы на устаревшие запросы отбрасываются
    pub request_seq: u64,
}

impl ProductGridState {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(total_items, page_size),
            is_loading: false,
            is_loaded: false,
            request_seq: 0,
        }
    }

    /// Переход на страницу и начало загрузки.
    ///
    /// Возвращает (номер запроса, фактическую страницу после зажатия).
    pub fn begin_load(&mut self, page: usize) -> (u64, usize) {
        self.pagination.go_to(page);
        self.is_loading = true;
        self.request_seq += 1;
        (self.request_seq, self.pagination.current_page)
    }

    /// Завершение загрузки. false — ответ устарел и показывать его не нужно.
    pub fn finish_load(&mut self, request: u64) -> bool {
        if request != self.request_seq {
            return false;
        }
        self.is_loading = false;
        self.is_loaded = true;
        true
    }

    /// Ошибка загрузки: снимаем флаг, товары на экране остаются прежними
    pub fn fail_load(&mut self, request: u64) {
        if request == self.request_seq {
            self.is_loading = false;
        }
    }

    /// Нужно ли грузить страницу: повторный клик по текущей странице игнорируется
    pub fn needs_load(&self, page: usize) -> bool {
        !self.is_loaded || self.pagination.clamp_page(page) != self.pagination.current_page
    }
}

pub fn create_state(total_items: usize, page_size: usize) -> RwSignal<ProductGridState> {
    RwSignal::new(ProductGridState::new(total_items, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cycle() {
        let mut st = ProductGridState::new(32, 15);
        assert!(!st.is_loading);

        let (req, page) = st.begin_load(1);
        assert_eq!(page, 1);
        assert!(st.is_loading);
        assert!(st.finish_load(req));
        assert!(!st.is_loading);
        assert!(st.is_loaded);
    }

    #[test]
    fn test_begin_load_clamps_page() {
        let mut st = ProductGridState::new(32, 15);
        let (_, page) = st.begin_load(10);
        assert_eq!(page, 3);
        assert_eq!(st.pagination.current_page, 3);

        let mut empty = ProductGridState::new(0, 15);
        let (_, page) = empty.begin_load(2);
        assert_eq!(page, 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut st = ProductGridState::new(100, 15);
        let (first, _) = st.begin_load(2);
        let (second, _) = st.begin_load(3);

        assert!(!st.finish_load(first));
        assert!(st.is_loading);
        st.fail_load(first);
        assert!(st.is_loading);

        assert!(st.finish_load(second));
        assert!(!st.is_loading);
        assert_eq!(st.pagination.current_page, 3);
    }

    #[test]
    fn test_fail_load_clears_flag() {
        let mut st = ProductGridState::new(100, 15);
        let (req, _) = st.begin_load(2);
        st.fail_load(req);
        assert!(!st.is_loading);
        assert!(!st.is_loaded);
    }

    #[test]
    fn test_needs_load() {
        let mut st = ProductGridState::new(32, 15);
        assert!(st.needs_load(1));

        let (req, _) = st.begin_load(1);
        st.finish_load(req);
        assert!(!st.needs_load(1));
        assert!(!st.needs_load(0));
        assert!(st.needs_load(2));
        assert!(!st.needs_load(1));
    }
}
