//! Постраничная разбивка списка, хранящегося целиком в памяти.
//!
//! Страницы нумеруются с 1. Для пустого списка число страниц равно 0,
//! а текущая страница остаётся 1. Запросы за пределами диапазона
//! зажимаются в допустимые границы, ошибок здесь нет.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Количество товаров на странице по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// ceil(total_items / page_size); нулевой размер страницы даёт 0 страниц
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        (total_items + page_size - 1) / page_size
    }
}

/// Полуоткрытый диапазон индексов страницы: [(p-1)*size, p*size) ∩ [0, total_items).
///
/// Страница 0 трактуется как первая.
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// Срез элементов указанной страницы
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(page, page_size, items.len())]
}

/// Состояние пагинации: текущая страница, размер страницы и общее количество
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl Pagination {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_items,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Зажимает номер страницы в [1, total_pages]; при 0 страниц возвращает 1
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    /// Переход на страницу (с зажатием). Возвращает true, если страница изменилась.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = self.clamp_page(page);
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.go_to(self.current_page + 1)
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.go_to(self.current_page - 1)
    }

    /// Кнопка "назад" активна только если страницы есть и текущая не первая
    pub fn has_previous(&self) -> bool {
        self.total_pages() > 0 && self.current_page > 1
    }

    /// Кнопка "вперёд" активна только если текущая страница не последняя
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn bounds(&self) -> Range<usize> {
        page_bounds(self.current_page, self.page_size, self.total_items)
    }

    pub fn page_numbers(&self) -> Range<usize> {
        1..self.total_pages() + 1
    }

    /// Обновляет общее количество и возвращает текущую страницу в допустимый диапазон
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.clamp_page(self.current_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 15), 0);
        assert_eq!(total_pages(1, 15), 1);
        assert_eq!(total_pages(15, 15), 1);
        assert_eq!(total_pages(16, 15), 2);
        assert_eq!(total_pages(32, 15), 3);
        assert_eq!(total_pages(45, 15), 3);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_page_bounds_match_window() {
        for len in [0usize, 1, 14, 15, 16, 32, 45, 46] {
            for page in 1..=total_pages(len, 15) + 1 {
                let expected_start = ((page - 1) * 15).min(len);
                let expected_end = (page * 15).min(len);
                assert_eq!(page_bounds(page, 15, len), expected_start..expected_end);
            }
        }
    }

    #[test]
    fn test_thirty_two_items() {
        let items: Vec<usize> = (0..32).collect();
        assert_eq!(page_slice(&items, 1, 15).len(), 15);
        assert_eq!(page_slice(&items, 2, 15).len(), 15);
        assert_eq!(page_slice(&items, 3, 15), &[30, 31]);
        assert!(page_slice(&items, 4, 15).is_empty());

        let mut p = Pagination::new(items.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.total_pages(), 3);
        assert!(p.go_to(3));
        assert_eq!(p.bounds(), 30..32);
        assert!(!p.has_next());
        assert!(p.has_previous());
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let items: Vec<usize> = (0..20).collect();
        assert_eq!(page_slice(&items, 0, 15), page_slice(&items, 1, 15));
    }

    #[test]
    fn test_empty_list() {
        let p = Pagination::new(0, DEFAULT_PAGE_SIZE);
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.current_page, 1);
        assert!(!p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.page_numbers().count(), 0);
        assert!(p.bounds().is_empty());
    }

    #[test]
    fn test_navigation_buttons() {
        let mut p = Pagination::new(40, 15);
        assert!(!p.has_previous());
        assert!(p.has_next());

        assert!(p.next());
        assert_eq!(p.current_page, 2);
        assert!(p.has_previous());
        assert!(p.has_next());

        assert!(p.next());
        assert!(!p.next());
        assert_eq!(p.current_page, 3);

        assert!(p.previous());
        assert!(p.previous());
        assert!(!p.previous());
        assert_eq!(p.current_page, 1);
    }

    #[test]
    fn test_single_page() {
        let p = Pagination::new(7, 15);
        assert_eq!(p.total_pages(), 1);
        assert!(!p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.page_numbers().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut p = Pagination::new(32, 15);
        assert!(p.go_to(99));
        assert_eq!(p.current_page, 3);
        assert!(p.go_to(0));
        assert_eq!(p.current_page, 1);
        assert!(!p.go_to(1));
    }

    #[test]
    fn test_set_total_items_clamps_current_page() {
        let mut p = Pagination::new(100, 15);
        p.go_to(7);
        p.set_total_items(20);
        assert_eq!(p.current_page, 2);
        p.set_total_items(0);
        assert_eq!(p.current_page, 1);
    }
}
