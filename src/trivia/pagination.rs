pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the items of a 1-based `page`. Pages past the end are empty.
pub fn paginate<T: Clone>(page: usize, items: &[T]) -> Vec<T> {
    let start = page
        .max(1)
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE);
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_ten() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(1, &items), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_is_clipped() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(3, &items), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(4, &items).is_empty());
        assert!(paginate(usize::MAX, &items).is_empty());
    }

    #[test]
    fn page_zero_is_first_page() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(0, &items), items);
    }

    #[test]
    fn pages_are_slices_of_the_whole() {
        let items: Vec<u32> = (0..37).collect();
        for page in 1..6 {
            let start = ((page - 1) * QUESTIONS_PER_PAGE).min(items.len());
            let end = (page * QUESTIONS_PER_PAGE).min(items.len());
            assert_eq!(paginate(page, &items), items[start..end].to_vec());
        }
    }
}
