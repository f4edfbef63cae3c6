//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};

/// Pagination query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct PaginationParams {
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (max 100). Defaults to 20.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Pagination metadata included in list responses.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl PaginationParams {
    /// Clamps `page` to at least 1 and `per_page` to 1..=100.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, 100),
        }
    }
}

/// Slices a full result set into one page plus its metadata.
pub fn paginate<T>(items: Vec<T>, params: &PaginationParams) -> (Vec<T>, PaginationMeta) {
    let params = params.clamped();
    let total = items.len() as u32;
    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(params.per_page)
    };
    let start = u64::from(params.page - 1) * u64::from(params.per_page);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let data = items
        .into_iter()
        .skip(start)
        .take(params.per_page as usize)
        .collect();
    (
        data,
        PaginationMeta {
            page: params.page,
            per_page: params.per_page,
            total,
            total_pages,
        },
    )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_inputs() {
        let params = PaginationParams { page: 0, per_page: 500 };
        let clamped = params.clamped();
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.per_page, 100);
    }

    #[test]
    fn paginate_slices_and_counts() {
        let items: Vec<u32> = (1..=45).collect();
        let params = PaginationParams { page: 2, per_page: 20 };
        let (page, meta) = paginate(items, &params);
        assert_eq!(page.first(), Some(&21));
        assert_eq!(page.len(), 20);
        assert_eq!(meta.total, 45);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn paginate_huge_page_number_yields_empty_page() {
        let items: Vec<u32> = (1..=5).collect();
        let params = PaginationParams { page: u32::MAX, per_page: 100 };
        let (page, meta) = paginate(items, &params);
        assert!(page.is_empty());
        assert_eq!(meta.page, u32::MAX);
        assert_eq!(meta.total, 5);
    }

    #[test]
    fn paginate_empty_set() {
        let (page, meta) = paginate(Vec::<u32>::new(), &PaginationParams { page: 1, per_page: 20 });
        assert!(page.is_empty());
        assert_eq!(meta.total_pages, 0);
    }
}
