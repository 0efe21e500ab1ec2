use kwgroup_core::intent::Intent;
use kwgroup_core::models::*;

fn metrics(clicks: u64) -> GroupMetrics {
    GroupMetrics {
        total_clicks: clicks,
        total_impressions: clicks * 10,
        avg_ctr: 10.0,
        avg_position: 3.2,
        keyword_count: 2,
    }
}

fn group(id: &str, clicks: u64) -> Group {
    Group {
        id: id.to_string(),
        topic: "running shoes".to_string(),
        intent: Intent::Commercial,
        keywords: vec![
            KeywordRecord::new("best running shoes", clicks, clicks * 5, 0.2, 3.0),
            KeywordRecord::new("running shoes price", 0, clicks * 5, 0.0, 3.4),
        ],
        metrics: metrics(clicks),
        size: 2,
    }
}

#[test]
fn group_metrics_serialize_with_external_field_names() {
    let json = serde_json::to_value(metrics(5)).unwrap();
    assert_eq!(json["totalClicks"], 5);
    assert_eq!(json["totalImpressions"], 50);
    assert_eq!(json["avgCTR"], 10.0);
    assert_eq!(json["avgPosition"], 3.2);
    assert_eq!(json["keywordCount"], 2);
}

#[test]
fn intent_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Intent::Transactional).unwrap(),
        "\"transactional\""
    );
    let parsed: Intent = serde_json::from_str("\"navigational\"").unwrap();
    assert_eq!(parsed, Intent::Navigational);
}

#[test]
fn intent_all_is_in_declaration_order() {
    let ordinals: Vec<usize> = Intent::ALL.iter().map(|i| i.ordinal()).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3]);
    assert_eq!(Intent::ALL.len(), Intent::COUNT);
    assert_eq!(Intent::default(), Intent::Informational);
}

#[test]
fn grouping_result_from_parts_derives_counters() {
    let result = GroupingResult::from_parts(
        vec![group("grp-a", 9), group("grp-b", 4)],
        vec![KeywordRecord::from_query("xyz123")],
    );
    assert_eq!(result.total_groups, 2);
    assert_eq!(result.grouped_keywords, 4);
    assert_eq!(result.total_keywords, 5);
    assert!(result.is_consistent());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["totalGroups"], 2);
    assert_eq!(json["groupedKeywords"], 4);
    assert_eq!(json["groups"][0]["intent"], "commercial");
}

#[test]
fn inconsistent_counters_are_detected() {
    let mut result = GroupingResult::from_parts(vec![group("grp-a", 1)], vec![]);
    result.total_keywords += 1;
    assert!(!result.is_consistent());
}

#[test]
fn empty_result_is_consistent() {
    let result = GroupingResult::empty();
    assert!(result.groups.is_empty());
    assert!(result.is_consistent());
}
