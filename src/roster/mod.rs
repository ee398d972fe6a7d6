//! Roster retrieval.
//!
//! This module pages through the active-employee roster. The page size is
//! whatever the source returns for the first request; the total count from
//! that same response decides how many more pages are fetched.

mod client;

use std::future::Future;

use tracing::{debug, info, warn};

use crate::error::SnapshotResult;
use crate::models::EmployeeRecord;

pub use client::{HrRosterClient, ROSTER_OPERATION_NAME, ROSTER_QUERY, parse_roster_response};

/// One page of the roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterPage {
    /// Employees on this page, in roster order.
    pub employees: Vec<EmployeeRecord>,
    /// Total number of employees the roster reports across all pages.
    pub total_count: u64,
}

/// A source of roster pages.
pub trait RosterSource {
    /// Fetches the page starting at offset `skip`.
    fn fetch_page(&self, skip: u64) -> impl Future<Output = SnapshotResult<RosterPage>> + Send;
}

/// Number of pages needed to cover `total_count` records at `page_size` per page.
///
/// # Examples
///
/// ```
/// use position_snapshot::roster::page_count;
///
/// assert_eq!(page_count(250, 100), 3);
/// assert_eq!(page_count(200, 100), 2);
/// assert_eq!(page_count(0, 100), 0);
/// ```
pub fn page_count(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

#[derive(Debug, Clone, Copy)]
enum PaginatorState {
    NotStarted,
    Paging { page_size: u64, next_page: u64, page_count: u64 },
    Finished,
}

/// Lazily walks the roster one page at a time.
///
/// The first call to [`RosterPaginator::next_page`] fetches offset zero and
/// fixes the page size and page count. Later calls fetch offsets
/// `page_size`, `2 * page_size`, and so on until the page count is reached.
/// Any fetch error is returned as is; nothing is retried.
#[derive(Debug)]
pub struct RosterPaginator<'a, S> {
    source: &'a S,
    state: PaginatorState,
}

impl<'a, S: RosterSource> RosterPaginator<'a, S> {
    /// Creates a paginator over the given source.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            state: PaginatorState::NotStarted,
        }
    }

    /// Fetches the next page, or returns `None` once the roster is exhausted.
    pub async fn next_page(&mut self) -> SnapshotResult<Option<Vec<EmployeeRecord>>> {
        match self.state {
            PaginatorState::Finished => Ok(None),
            PaginatorState::NotStarted => {
                let page = self.fetch(0).await?;
                let page_size = page.employees.len() as u64;

                if page.total_count == 0 || page_size == 0 {
                    if page.total_count > 0 {
                        warn!(
                            total_count = page.total_count,
                            "First roster page is empty, treating roster as empty"
                        );
                    }
                    self.state = PaginatorState::Finished;
                    return Ok(None);
                }

                let page_count = page_count(page.total_count, page_size);
                info!(
                    total_count = page.total_count,
                    page_size, page_count, "Roster size determined"
                );

                self.state = if page_count > 1 {
                    PaginatorState::Paging {
                        page_size,
                        next_page: 1,
                        page_count,
                    }
                } else {
                    PaginatorState::Finished
                };
                Ok(Some(page.employees))
            }
            PaginatorState::Paging {
                page_size,
                next_page,
                page_count,
            } => {
                let page = self.fetch(next_page * page_size).await?;
                let next_page = next_page + 1;

                self.state = if next_page < page_count {
                    PaginatorState::Paging {
                        page_size,
                        next_page,
                        page_count,
                    }
                } else {
                    PaginatorState::Finished
                };
                Ok(Some(page.employees))
            }
        }
    }

    async fn fetch(&self, skip: u64) -> SnapshotResult<RosterPage> {
        info!(skip, "Fetching roster page");
        let page = self.source.fetch_page(skip).await?;
        debug!(skip, returned = page.employees.len(), "Roster page received");
        Ok(page)
    }
}
