use std::ops::Range;

/// 1-based page cursor over a fixed-length list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    total: usize,
    page_size: usize,
    page: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Never less than 1, even for an empty list.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Jump to `page`, clamped to `[1, page_count]`.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    /// Index range of the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.range();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_items_six_per_page() {
        let items = (1..=10).collect::<Vec<_>>();
        let mut pager = Pager::new(items.len(), 6);
        assert_eq!(pager.page_count(), 2);
        assert_eq!(pager.slice(&items), &[1, 2, 3, 4, 5, 6]);
        assert!(!pager.has_prev());
        assert!(pager.has_next());

        pager.next();
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.slice(&items), &[7, 8, 9, 10]);
        assert!(pager.has_prev());
        assert!(!pager.has_next());
    }

    #[test]
    fn test_go_to_clamps() {
        let mut pager = Pager::new(10, 6);
        pager.go_to(0);
        assert_eq!(pager.page(), 1);
        pager.go_to(3);
        assert_eq!(pager.page(), 2);
        pager.go_to(usize::MAX);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_prev_next_do_not_wrap() {
        let mut pager = Pager::new(10, 6);
        pager.prev();
        assert_eq!(pager.page(), 1);
        pager.next();
        pager.next();
        assert_eq!(pager.page(), 2);
        pager.prev();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_empty_and_exact_lists() {
        let empty: [u8; 0] = [];
        let pager = Pager::new(0, 6);
        assert_eq!(pager.page_count(), 1);
        assert!(pager.slice(&empty).is_empty());
        assert!(!pager.has_next());

        let mut pager = Pager::new(12, 6);
        assert_eq!(pager.page_count(), 2);
        pager.go_to(2);
        assert_eq!(pager.range(), 6..12);
    }

    #[test]
    fn test_zero_page_size() {
        let pager = Pager::new(3, 0);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.range(), 0..1);
    }
}
