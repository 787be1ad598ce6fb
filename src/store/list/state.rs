use crate::api::Page;
use crate::store::mvi::StoreState;
use crate::store::status::RequestStatus;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page-scoped view of a larger server-side dataset.
///
/// Invariants: `items.len() <= page_size`, `page_size > 0`, and
/// `total_pages == ceil(total_count / page_size)` after every successful
/// fetch and every incremental change.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCollection<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> Default for PaginatedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

impl<T> PaginatedCollection<T> {
    pub fn total_pages_for(total_count: u64, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let pages = total_count.div_ceil(u64::from(page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_room(&self) -> bool {
        self.items.len() < self.page_size as usize
    }

    pub(crate) fn recount(&mut self) {
        self.total_pages = Self::total_pages_for(self.total_count, self.page_size);
    }
}

impl<T> From<Page<T>> for PaginatedCollection<T> {
    fn from(page: Page<T>) -> Self {
        // Page count is rederived rather than trusted; a zero page size
        // from the server is clamped so the division stays defined.
        let page_size = page.page_size.max(1);
        Self {
            total_pages: Self::total_pages_for(page.total_count, page_size),
            items: page.items,
            total_count: page.total_count,
            current_page: page.current_page,
            page_size,
        }
    }
}

/// Page the latest `load` asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub collection: PaginatedCollection<T>,
    pub load: RequestStatus,
    pub create: RequestStatus,
    pub delete: RequestStatus,
    pub query: PageQuery,
    /// Sequence number of the most recently issued load.
    pub latest_load: u64,
    pub loaded_once: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            collection: PaginatedCollection::default(),
            load: RequestStatus::Idle,
            create: RequestStatus::Idle,
            delete: RequestStatus::Idle,
            query: PageQuery::default(),
            latest_load: 0,
            loaded_once: false,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> StoreState for ListState<T> {}

impl<T> ListState<T> {
    pub fn items(&self) -> &[T] {
        &self.collection.items
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// Most relevant failure message: the list fetch first, then mutations.
    pub fn error(&self) -> Option<&str> {
        self.load
            .error()
            .or_else(|| self.create.error())
            .or_else(|| self.delete.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PaginatedCollection::<()>::total_pages_for(25, 10), 3);
        assert_eq!(PaginatedCollection::<()>::total_pages_for(20, 10), 2);
        assert_eq!(PaginatedCollection::<()>::total_pages_for(0, 10), 0);
        assert_eq!(PaginatedCollection::<()>::total_pages_for(1, 10), 1);
    }

    #[test]
    fn zero_page_size_from_server_is_clamped() {
        let page = Page::<u8> {
            items: vec![],
            total_count: 0,
            current_page: 0,
            page_size: 0,
            total_pages: 0,
        };
        let collection = PaginatedCollection::from(page);
        assert_eq!(collection.page_size, 1);
    }
}
