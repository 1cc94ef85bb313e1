use std::collections::BTreeMap;

use clause_review::models::{ChangeType, TrackedChange};
use clause_review::services::{build_batch, sanitize};
use proptest::prelude::*;

fn change_strategy() -> impl Strategy<Value = TrackedChange> {
    (0usize..8, "[a-z\\t\\n ]{0,12}", "[A-Za-z]{0,6}").prop_map(|(paragraph_index, text, author)| TrackedChange {
        key: format!("{}-x", paragraph_index),
        change_type: ChangeType::Insertion,
        author,
        date: String::new(),
        text,
        paragraph_index,
    })
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(text in any::<String>()) {
        let once = sanitize(&text);
        prop_assert_eq!(sanitize(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_ascii_control()));
        prop_assert_eq!(once.chars().count(), text.chars().count());
    }

    #[test]
    fn sanitize_keeps_clean_text(text in "[^\\x00-\\x1F\\x7F]{0,64}") {
        prop_assert_eq!(sanitize(&text), text);
    }

    #[test]
    fn batch_has_one_item_per_changed_paragraph(
        mut changes in proptest::collection::vec(change_strategy(), 0..24),
        paragraphs in proptest::collection::vec("[a-z ]{0,10}", 0..6),
    ) {
        changes.sort_by_key(|c| c.paragraph_index);
        let batch = build_batch(&changes, &paragraphs);

        let mut expected: BTreeMap<usize, usize> = BTreeMap::new();
        for change in &changes {
            *expected.entry(change.paragraph_index).or_default() += 1;
        }

        prop_assert_eq!(batch.items.len(), expected.len());
        for item in &batch.items {
            prop_assert_eq!(Some(&item.changelog.len()), expected.get(&item.paragraph_index));
            // 越界的段落用空串
            let paragraph = paragraphs.get(item.paragraph_index).map(|p| sanitize(p)).unwrap_or_default();
            prop_assert_eq!(&item.paragraph, &paragraph);
        }
        prop_assert!(batch.items.windows(2).all(|w| w[0].paragraph_index < w[1].paragraph_index));
    }
}
