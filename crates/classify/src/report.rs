use std::collections::HashMap;

use crate::model::{Bucket, ProcessSummary, VenueRecord};

/// Compute summary statistics from the three buckets.
pub fn compute_summary(
    working: &[VenueRecord],
    ignored: &[VenueRecord],
    to_search: &[VenueRecord],
) -> ProcessSummary {
    let mut bucket_counts: HashMap<String, usize> = HashMap::new();
    bucket_counts.insert(Bucket::Working.to_string(), working.len());
    bucket_counts.insert(Bucket::Ignored.to_string(), ignored.len());
    bucket_counts.insert(Bucket::ToSearch.to_string(), to_search.len());

    ProcessSummary {
        total: working.len() + ignored.len() + to_search.len(),
        resolved: working.len(),
        ignored: ignored.len(),
        needs_search: to_search.len(),
        bucket_counts,
    }
}

/// One `id | address | postcode` line per to-search row, for human review.
/// The reviewer resolves these into override-table entries for the next run.
pub fn search_listing(to_search: &[VenueRecord]) -> Vec<String> {
    to_search
        .iter()
        .map(|r| {
            format!(
                "{} | {} | {}",
                r.id(),
                r.get("address"),
                r.get("postcode")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap as Map;

    fn record(id: &str, address: &str, postcode: &str) -> VenueRecord {
        VenueRecord::new(Map::from([
            ("id".to_string(), id.to_string()),
            ("address".to_string(), address.to_string()),
            ("postcode".to_string(), postcode.to_string()),
        ]))
    }

    #[test]
    fn summary_counts() {
        let working = vec![record("1", "a", ""), record("2", "b", "")];
        let ignored = vec![record("3", "online", "")];
        let to_search = vec![record("4", "9 High St", "N1")];

        let summary = compute_summary(&working, &ignored, &to_search);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.resolved, 2);
        assert_eq!(summary.ignored, 1);
        assert_eq!(summary.needs_search, 1);
        assert_eq!(summary.bucket_counts["working"], 2);
        assert_eq!(summary.bucket_counts["to_search"], 1);
    }

    #[test]
    fn listing_format() {
        let rows = vec![record("3", "316 High Road", "N15 4BN")];
        assert_eq!(search_listing(&rows), vec!["3 | 316 High Road | N15 4BN"]);
    }

    #[test]
    fn listing_empty() {
        assert!(search_listing(&[]).is_empty());
    }
}
