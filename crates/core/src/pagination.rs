//! Page arithmetic for list requests.
//!
//! Pages are 1-based. The reported page count is never below one, so page 1
//! is always a valid request even for an empty collection; pages past the end
//! simply come back empty.

use crate::constants::{DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::{ContentError, ContentResult};

/// A validated request for one page of records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    /// Builds a request from optional query parameters.
    ///
    /// Returns `Ok(None)` when neither parameter is given, meaning the caller
    /// wants the whole collection. A missing `page` defaults to 1 and a
    /// missing `per_page` to [`DEFAULT_PER_PAGE`].
    ///
    /// # Errors
    ///
    /// [`ContentError::InvalidInput`] if either value is zero or `per_page`
    /// exceeds [`MAX_PER_PAGE`].
    pub fn from_params(page: Option<usize>, per_page: Option<usize>) -> ContentResult<Option<Self>> {
        if page.is_none() && per_page.is_none() {
            return Ok(None);
        }
        Self::new(page.unwrap_or(1), per_page.unwrap_or(DEFAULT_PER_PAGE)).map(Some)
    }

    pub fn new(page: usize, per_page: usize) -> ContentResult<Self> {
        if page == 0 {
            return Err(ContentError::InvalidInput("page must be at least 1".into()));
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ContentError::InvalidInput(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}"
            )));
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Cuts this request's page out of `items`.
    pub fn slice<T>(&self, items: Vec<T>) -> Page<T> {
        let total_items = items.len();
        let start = (self.page - 1).saturating_mul(self.per_page);
        let items = items
            .into_iter()
            .skip(start)
            .take(self.per_page)
            .collect();

        Page {
            items,
            page: self.page,
            per_page: self.per_page,
            total_pages: total_pages(total_items, self.per_page),
            total_items,
        }
    }
}

/// One page of results plus the metadata a pager needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// `max(1, ceil(total_items / per_page))`.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total_items.div_ceil(per_page).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_params_means_no_pagination() {
        assert_eq!(PageRequest::from_params(None, None).unwrap(), None);
    }

    #[test]
    fn missing_params_take_defaults() {
        let req = PageRequest::from_params(Some(3), None).unwrap().unwrap();
        assert_eq!((req.page(), req.per_page()), (3, DEFAULT_PER_PAGE));

        let req = PageRequest::from_params(None, Some(5)).unwrap().unwrap();
        assert_eq!((req.page(), req.per_page()), (1, 5));
    }

    #[test]
    fn zero_and_oversized_values_are_rejected() {
        assert!(PageRequest::new(0, 10).unwrap_err().is_validation());
        assert!(PageRequest::new(1, 0).unwrap_err().is_validation());
        assert!(PageRequest::new(1, MAX_PER_PAGE + 1).unwrap_err().is_validation());
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn slice_returns_the_requested_window() {
        let items: Vec<u32> = (1..=25).collect();

        let page = PageRequest::new(3, 10).unwrap().slice(items.clone());
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);

        let beyond = PageRequest::new(4, 10).unwrap().slice(items);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);
    }
}
