use std::collections::HashMap;

use crate::models::decision::GroupDecision;
use crate::models::record::PlaceRecord;

// Groups come back in first-seen order so the report reads in scan order.
fn group_by_place_id(records: Vec<PlaceRecord>) -> Vec<(String, Vec<PlaceRecord>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<PlaceRecord>> = HashMap::new();

    for record in records {
        if !record.has_place_id() {
            continue;
        }
        if !groups.contains_key(&record.place_id) {
            order.push(record.place_id.clone());
        }
        groups
            .entry(record.place_id.clone())
            .or_default()
            .push(record);
    }

    order
        .into_iter()
        .map(|id| {
            let members = groups.remove(&id).unwrap_or_default();
            (id, members)
        })
        .collect()
}

pub fn plan_purge(records: Vec<PlaceRecord>) -> Vec<GroupDecision> {
    let mut decisions = Vec::new();

    for (place_id, mut members) in group_by_place_id(records) {
        if members.len() < 2 {
            continue;
        }
        // Stable sort: members with fully equal keys keep their scan order.
        members.sort_by(|a, b| b.quality_key().cmp(&a.quality_key()));
        let mut members = members.into_iter();
        if let Some(keep) = members.next() {
            decisions.push(GroupDecision {
                place_id,
                keep,
                delete: members.collect(),
            });
        }
    }

    decisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(name: &str, place_id: &str, finals: bool, scrape: bool, size: u64) -> PlaceRecord {
        PlaceRecord {
            path: PathBuf::from(format!("/tmp/{name}")),
            place_id: place_id.to_string(),
            scrape_success: scrape,
            final_success: finals,
            display_name: String::new(),
            size_bytes: size,
        }
    }

    #[test]
    fn test_final_success_beats_larger_scrape_success() {
        let records = vec![
            record("x.json", "p1", true, false, 500),
            record("y.json", "p1", false, true, 900),
            record("z.json", "p1", false, false, 100),
        ];

        let decisions = plan_purge(records);

        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].keep.file_name(), "x.json");
        let doomed: Vec<String> = decisions[0].delete.iter().map(|r| r.file_name()).collect();
        assert_eq!(doomed, ["y.json", "z.json"]);
    }

    #[test]
    fn test_equal_flags_keep_larger_file() {
        let records = vec![
            record("a.json", "p2", false, false, 200),
            record("b.json", "p2", false, false, 800),
        ];

        let decisions = plan_purge(records);

        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].keep.file_name(), "b.json");
        assert_eq!(decisions[0].delete.len(), 1);
        assert_eq!(decisions[0].delete[0].file_name(), "a.json");
    }

    #[test]
    fn test_fully_tied_members_keep_input_order() {
        let records = vec![
            record("first.json", "p3", true, true, 400),
            record("second.json", "p3", true, true, 400),
        ];

        let decisions = plan_purge(records);

        assert_eq!(decisions[0].keep.file_name(), "first.json");
        assert_eq!(decisions[0].delete[0].file_name(), "second.json");
    }

    #[test]
    fn test_ranking_is_deterministic_for_same_input() {
        let build = || {
            vec![
                record("a.json", "p1", false, true, 300),
                record("b.json", "p1", false, true, 300),
                record("c.json", "p1", false, false, 900),
            ]
        };

        let first = plan_purge(build());
        let second = plan_purge(build());

        assert_eq!(
            first[0].keep.file_name(),
            second[0].keep.file_name()
        );
        assert_eq!(first[0].keep.file_name(), "a.json");
    }

    #[test]
    fn test_singleton_groups_are_never_flagged() {
        let records = vec![
            record("only.json", "p1", false, false, 10),
            record("dup1.json", "p2", false, false, 10),
            record("dup2.json", "p2", false, false, 20),
        ];

        let decisions = plan_purge(records);

        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].place_id, "p2");
    }

    #[test]
    fn test_records_without_place_id_join_no_group() {
        let records = vec![
            record("anon1.json", "", false, false, 10),
            record("anon2.json", "", false, false, 20),
            record("real.json", "p1", false, false, 30),
        ];

        let decisions = plan_purge(records);

        assert!(decisions.is_empty());
    }

    #[test]
    fn test_groups_partition_identified_records() {
        let records = vec![
            record("a1.json", "a", false, false, 1),
            record("b1.json", "b", false, false, 2),
            record("a2.json", "a", false, false, 3),
            record("b2.json", "b", false, false, 4),
            record("b3.json", "b", false, false, 5),
        ];

        let groups = group_by_place_id(records);

        assert_eq!(groups.len(), 2);
        // First-seen order, every member accounted for exactly once.
        assert_eq!(groups[0].0, "a");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "b");
        assert_eq!(groups[1].1.len(), 3);
        for (id, members) in &groups {
            assert!(members.iter().all(|r| &r.place_id == id));
        }
    }

    #[test]
    fn test_every_duplicate_group_has_exactly_one_keep() {
        let records = vec![
            record("a1.json", "a", true, false, 1),
            record("a2.json", "a", false, true, 2),
            record("a3.json", "a", false, false, 3),
            record("b1.json", "b", false, false, 4),
            record("b2.json", "b", true, true, 5),
        ];

        let decisions = plan_purge(records);

        assert_eq!(decisions.len(), 2);
        assert_eq!(decisions[0].place_id, "a");
        assert_eq!(decisions[0].delete.len(), 2);
        assert_eq!(decisions[0].keep.file_name(), "a1.json");
        assert_eq!(decisions[1].place_id, "b");
        assert_eq!(decisions[1].delete.len(), 1);
        assert_eq!(decisions[1].keep.file_name(), "b2.json");
    }
}
