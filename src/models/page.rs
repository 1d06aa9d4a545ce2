//! Fixed-size pagination shared by the in-memory and store-level code paths.

use std::num::NonZeroU32;

pub const PAGE_SIZE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Page(NonZeroU32);

impl Default for Page {
    fn default() -> Self {
        Page(NonZeroU32::MIN)
    }
}

impl Page {
    /// Returns `None` for page zero.
    pub fn new(number: u32) -> Option<Page> {
        NonZeroU32::new(number).map(Page)
    }

    /// Reads the `page` query parameter; absent, unparsable and zero all mean the first page.
    pub fn from_query(raw: Option<u32>) -> Page {
        raw.and_then(Page::new)
            .unwrap_or_default()
    }

    pub fn number(self) -> u32 {
        self.0.get()
    }

    pub fn start(self) -> usize {
        (self.number() as usize - 1).saturating_mul(PAGE_SIZE)
    }

    pub fn end(self) -> usize {
        self.start().saturating_add(PAGE_SIZE)
    }

    pub fn offset(self) -> i64 {
        i64::try_from(self.start()).unwrap_or(i64::MAX)
    }

    pub fn limit(self) -> i64 {
        PAGE_SIZE as i64
    }

    /// The window of `items` this page covers; empty when the page lies past the end.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = self.start().min(items.len());
        let end = self.end().min(items.len());
        &items[start..end]
    }
}

/// One page of results together with the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: i64
}

impl <T: Clone> Paged<T> {
    pub fn from_slice(all: &[T], page: Page) -> Paged<T> {
        Paged {
            items: page.slice(all).to_vec(),
            total: all.len() as i64
        }
    }
}
