//! Property tests for the scan engine
//!
//! Images are drawn from a small alphabet so headers and footers collide
//! often. The engine is checked against a direct substring-search scanner.

use proptest::prelude::*;
use sigcarve::{ScanEngine, Signature, SignatureCatalog};
use std::num::NonZeroUsize;

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Straightforward scanner: repeated find per signature, stable sort by offset
fn reference_scan(
    image: &[u8],
    catalog: &SignatureCatalog,
    limit: Option<usize>,
) -> Vec<(u64, u64, String)> {
    let mut found: Vec<(u64, u64, String)> = Vec::new();
    'outer: for sig in catalog {
        let mut start = 0;
        while let Some(h) = find(image, sig.header(), start) {
            let from = h + sig.header().len();
            let end = match sig.footer().and_then(|f| find(image, f, from).map(|p| p + f.len())) {
                Some(end) => end,
                None => (from as u64 + sig.max_size()).min(image.len() as u64) as usize,
            };
            found.push((h as u64, (end - h) as u64, sig.extension().to_string()));
            if limit.is_some_and(|l| found.len() >= l) {
                break 'outer;
            }
            start = from;
        }
    }
    found.sort_by_key(|m| m.0);
    found
}

fn test_catalog() -> SignatureCatalog {
    SignatureCatalog::new(vec![
        Signature::new("Alpha", "a", b"ab".to_vec(), 5)
            .unwrap()
            .with_footer(b"c".to_vec()),
        Signature::new("Bravo", "b", b"b".to_vec(), 3).unwrap(),
        Signature::new("Echo", "e", b"aa".to_vec(), 4)
            .unwrap()
            .with_footer(b"bc".to_vec()),
        Signature::new("Alias", "a2", b"ab".to_vec(), 7).unwrap(),
    ])
    .unwrap()
}

fn image_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'x']), 0..200)
}

proptest! {
    #[test]
    fn matches_reference_scanner(image in image_strategy(), limit in prop::option::of(1usize..12)) {
        let catalog = test_catalog();
        let engine = ScanEngine::new(&catalog).unwrap();
        let got: Vec<(u64, u64, String)> = engine
            .scan(&image, limit.and_then(NonZeroUsize::new))
            .iter()
            .map(|m| (m.offset(), m.size(), m.extension().to_string()))
            .collect();
        prop_assert_eq!(got, reference_scan(&image, &catalog, limit));
    }

    #[test]
    fn output_is_sorted_with_contiguous_ids(image in image_strategy()) {
        let catalog = test_catalog();
        let matches = ScanEngine::new(&catalog).unwrap().scan(&image, None);
        for (index, m) in matches.iter().enumerate() {
            prop_assert_eq!(m.id(), index as u64 + 1);
            prop_assert!(m.end() <= image.len() as u64);
            prop_assert!(m.size() >= m.signature().header().len() as u64);
        }
        prop_assert!(matches.windows(2).all(|w| w[0].offset() <= w[1].offset()));
    }

    #[test]
    fn scanning_twice_is_identical(image in image_strategy()) {
        let catalog = test_catalog();
        let engine = ScanEngine::new(&catalog).unwrap();
        prop_assert_eq!(engine.scan(&image, None), engine.scan(&image, None));
    }

    #[test]
    fn footer_extent_is_exact(
        prefix in prop::collection::vec(b'0'..=b'9', 0..32),
        gap in prop::collection::vec(b'0'..=b'9', 0..64),
        suffix in prop::collection::vec(b'0'..=b'9', 0..32),
    ) {
        let catalog = SignatureCatalog::new(vec![
            Signature::new("Tagged", "tag", b"<TAG>".to_vec(), 8)
                .unwrap()
                .with_footer(b"</TAG>".to_vec()),
        ])
        .unwrap();
        let mut image = prefix.clone();
        image.extend_from_slice(b"<TAG>");
        image.extend_from_slice(&gap);
        image.extend_from_slice(b"</TAG>");
        image.extend_from_slice(&suffix);

        let matches = ScanEngine::new(&catalog).unwrap().scan(&image, None);
        prop_assert_eq!(matches.len(), 1);
        prop_assert_eq!(matches[0].offset(), prefix.len() as u64);
        prop_assert_eq!(matches[0].size(), (5 + gap.len() + 6) as u64);
    }

    #[test]
    fn footerless_extent_is_capped(
        prefix in prop::collection::vec(b'0'..=b'9', 0..32),
        body in prop::collection::vec(b'0'..=b'9', 0..64),
        max_size in 4u64..48,
    ) {
        let catalog = SignatureCatalog::new(vec![
            Signature::new("Raw", "raw", b"RAW".to_vec(), max_size).unwrap(),
        ])
        .unwrap();
        let mut image = prefix.clone();
        image.extend_from_slice(b"RAW");
        image.extend_from_slice(&body);

        let matches = ScanEngine::new(&catalog).unwrap().scan(&image, None);
        prop_assert_eq!(matches.len(), 1);
        let remaining = (image.len() - prefix.len()) as u64;
        prop_assert_eq!(matches[0].size(), (3 + max_size).min(remaining));
    }
}
