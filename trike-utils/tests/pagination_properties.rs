use std::collections::BTreeSet;

use proptest::prelude::*;
use trike_utils::pagination::{
    Paginator, SelectorEntry, page_window, selector_layout, total_pages,
};

proptest! {
    #[test]
    fn total_pages_is_ceiling_with_floor_of_one(items in 0usize..5_000, per_page in 1usize..200) {
        let expected = std::cmp::max(1, items.div_ceil(per_page));
        prop_assert_eq!(total_pages(items, per_page), expected);
    }

    #[test]
    fn every_page_but_the_last_is_full(items in 1usize..2_000, per_page in 1usize..100) {
        let total = total_pages(items, per_page);

        for page in 1..=total {
            let window = page_window(items, per_page, page);
            if page < total {
                prop_assert_eq!(window.len(), per_page);
            } else {
                prop_assert_eq!(window.len(), items - (page - 1) * per_page);
            }
        }
    }

    #[test]
    fn windows_tile_the_list(items in 0usize..2_000, per_page in 1usize..100) {
        let total = total_pages(items, per_page);
        let mut next_start = 0;

        for page in 1..=total {
            let window = page_window(items, per_page, page);
            prop_assert_eq!(window.start, next_start);
            next_start = window.end;
        }

        prop_assert_eq!(next_start, items);
    }

    #[test]
    fn page_size_change_always_returns_to_page_one(
        items in 0usize..1_000,
        per_page in 1usize..60,
        page in 1usize..100,
        new_size in 0usize..60,
    ) {
        let mut pager = Paginator::new((0..items).collect::<Vec<_>>(), per_page);
        pager.set_page(page);
        pager.set_page_size(new_size);

        prop_assert_eq!(pager.current_page(), 1);
        prop_assert_eq!(pager.window(), page_window(items, new_size.max(1), 1));
    }

    #[test]
    fn selector_never_repeats_a_page(total in 0usize..300, current_seed in 0usize..300) {
        let current = current_seed % total.max(1) + 1;
        let layout = selector_layout(total, current);
        let pages: Vec<usize> = layout.iter().filter_map(|entry| entry.page()).collect();
        let unique: BTreeSet<usize> = pages.iter().copied().collect();

        prop_assert_eq!(pages.len(), unique.len());
        prop_assert!(pages.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(pages.iter().all(|page| (1..=total).contains(page)));
    }

    #[test]
    fn selector_keeps_current_page_and_marks_gaps(total in 2usize..300, current_seed in 0usize..300) {
        let current = current_seed % total + 1;
        let layout = selector_layout(total, current);

        prop_assert!(layout.contains(&SelectorEntry::Page(current)));
        prop_assert!(layout.contains(&SelectorEntry::Page(1)) || current <= 3);
        prop_assert!(layout.contains(&SelectorEntry::Page(total)) || current + 2 >= total);

        let head_gap = layout.get(1) == Some(&SelectorEntry::Ellipsis);
        let tail_gap = layout.len() >= 2 && layout[layout.len() - 2] == SelectorEntry::Ellipsis;
        prop_assert_eq!(head_gap, current > 4 && total > 5);
        prop_assert_eq!(tail_gap, current + 3 < total && total > 5);

        for (index, entry) in layout.iter().enumerate() {
            if *entry != SelectorEntry::Ellipsis {
                continue;
            }
            let before = layout.get(index.wrapping_sub(1)).and_then(|entry| entry.page());
            let after = layout.get(index + 1).and_then(|entry| entry.page());
            match (before, after) {
                (Some(before), Some(after)) => prop_assert!(after > before),
                _ => prop_assert!(false, "ellipsis must sit between two pages"),
            }
        }
    }
}

#[test]
fn hundred_items_on_page_five() {
    let mut pager = Paginator::new((0..100).collect::<Vec<_>>(), 10);
    pager.set_page(5);

    let block: Vec<usize> = pager
        .selector()
        .into_iter()
        .skip(2)
        .take(5)
        .filter_map(|entry| entry.page())
        .collect();

    assert_eq!(block, vec![3, 4, 5, 6, 7]);
    assert_eq!(
        &pager.selector()[..2],
        &[SelectorEntry::Page(1), SelectorEntry::Ellipsis]
    );
}

#[test]
fn page_size_change_from_page_five() {
    let mut pager = Paginator::new((0..100).collect::<Vec<_>>(), 10);
    pager.set_page(5);

    pager.set_page_size(25);

    assert_eq!(pager.current_page(), 1);
    assert_eq!(pager.window(), 0..25);
}
