//! Offset pagination shared by the listing endpoints.

use crate::error::{AppError, AppResult};

pub const CATEGORIES_PER_PAGE: usize = 10;
pub const QUESTIONS_PER_PAGE: usize = 5;

/// Parses the `page` query value. Anything that is not an integer counts as page 1.
pub fn page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(1)
}

/// Returns `items[(page-1)*per_page .. page*per_page]`, clamped to the slice end.
///
/// A start offset past the end of `items` is `NotFound`; a start offset exactly
/// at the end yields an empty page. Pages below 1 end before the first item and
/// are therefore empty as well.
pub fn paginate<T>(items: &[T], page: i64, per_page: usize) -> AppResult<&[T]> {
    if page < 1 {
        return Ok(&items[..0]);
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(per_page))
        .ok_or_else(|| AppError::NotFound(format!("page {} is out of range", page)))?;
    if start > items.len() {
        return Err(AppError::NotFound(format!(
            "page {} starts at {} but only {} items exist",
            page,
            start,
            items.len()
        )));
    }
    let end = start.saturating_add(per_page).min(items.len());
    Ok(&items[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_defaults_to_one() {
        assert_eq!(page_number(None), 1);
        assert_eq!(page_number(Some("abc")), 1);
        assert_eq!(page_number(Some("")), 1);
        assert_eq!(page_number(Some("3")), 3);
        assert_eq!(page_number(Some("-2")), -2);
    }

    #[test]
    fn test_twelve_categories_paginate_in_tens() {
        let items: Vec<i64> = (1..=12).collect();
        assert_eq!(paginate(&items, 1, CATEGORIES_PER_PAGE).unwrap(), &items[0..10]);
        assert_eq!(paginate(&items, 2, CATEGORIES_PER_PAGE).unwrap(), &[11, 12]);
        assert!(matches!(paginate(&items, 3, CATEGORIES_PER_PAGE), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_start_equal_to_len_is_an_empty_page() {
        let items: Vec<i64> = (1..=10).collect();
        let page = paginate(&items, 3, QUESTIONS_PER_PAGE).unwrap();
        assert!(page.is_empty());
        assert!(paginate(&items, 4, QUESTIONS_PER_PAGE).is_err());
    }

    #[test]
    fn test_empty_set_first_page_is_ok() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1, QUESTIONS_PER_PAGE).unwrap().is_empty());
        assert!(paginate(&items, 2, QUESTIONS_PER_PAGE).is_err());
    }

    #[test]
    fn test_non_positive_pages_are_empty() {
        let items: Vec<i64> = (1..=3).collect();
        assert!(paginate(&items, 0, QUESTIONS_PER_PAGE).unwrap().is_empty());
        assert!(paginate(&items, -1, QUESTIONS_PER_PAGE).unwrap().is_empty());
        assert!(paginate(&items, i64::MIN, QUESTIONS_PER_PAGE).unwrap().is_empty());

        let none: Vec<i64> = Vec::new();
        assert!(paginate(&none, 0, CATEGORIES_PER_PAGE).unwrap().is_empty());
    }

    #[test]
    fn test_huge_page_is_not_found() {
        let items: Vec<i64> = (1..=3).collect();
        assert!(matches!(paginate(&items, i64::MAX, QUESTIONS_PER_PAGE), Err(AppError::NotFound(_))));
    }
}
