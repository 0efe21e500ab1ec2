//! End-to-end grouping behaviour: golden scenarios plus targeted cases.

use kwgroup_core::config::GroupingOptions;
use kwgroup_core::intent::Intent;
use kwgroup_core::models::{GroupingResult, KeywordRecord};
use kwgroup_core::traits::IKeywordGrouper;
use kwgroup_grouping::{classify, group_keywords, GroupingEngine};
use test_fixtures::{load_scenario, scenario_names};

fn records(queries: &[&str]) -> Vec<KeywordRecord> {
    queries.iter().map(|q| KeywordRecord::from_query(*q)).collect()
}

fn queries_of(records: &[KeywordRecord]) -> Vec<&str> {
    records.iter().map(|r| r.query.as_str()).collect()
}

fn options(threshold: f64, min_group_size: usize, max_groups: usize, by_intent: bool) -> GroupingOptions {
    GroupingOptions {
        similarity_threshold: threshold,
        min_group_size,
        max_groups,
        group_by_intent: by_intent,
    }
}

// ---------------------------------------------------------------------------
// Golden scenarios
// ---------------------------------------------------------------------------

fn run_scenario(name: &str) {
    let scenario = load_scenario(name);
    let opts: GroupingOptions = serde_json::from_value(scenario.options.clone())
        .unwrap_or_else(|e| panic!("{name}: bad options: {e}"));
    let input = KeywordRecord::parse_batch(&scenario.input.to_string())
        .unwrap_or_else(|e| panic!("{name}: bad input: {e}"));

    let result = group_keywords(&input, &opts);
    let expected = &scenario.expected;

    assert!(result.is_consistent(), "{name}: inconsistent counters");
    assert_eq!(result.total_groups, expected.total_groups, "{name}: group count");
    assert_eq!(result.total_keywords, expected.total_keywords, "{name}: keyword count");
    assert_eq!(
        queries_of(&result.ungrouped),
        expected.ungrouped.iter().map(String::as_str).collect::<Vec<_>>(),
        "{name}: ungrouped"
    );

    for (idx, (got, want)) in result.groups.iter().zip(&expected.groups).enumerate() {
        assert_eq!(got.topic, want.topic, "{name}: group {idx} topic");
        assert_eq!(got.intent.label(), want.intent, "{name}: group {idx} intent");
        assert_eq!(
            queries_of(&got.keywords),
            want.queries.iter().map(String::as_str).collect::<Vec<_>>(),
            "{name}: group {idx} members"
        );
        assert_eq!(got.metrics.total_clicks, want.total_clicks, "{name}: group {idx} clicks");
        if let Some(impressions) = want.total_impressions {
            assert_eq!(got.metrics.total_impressions, impressions, "{name}: group {idx}");
        }
        if let Some(ctr) = want.avg_ctr {
            assert!((got.metrics.avg_ctr - ctr).abs() < 1e-9, "{name}: group {idx} ctr");
        }
        if let Some(position) = want.avg_position {
            assert!(
                (got.metrics.avg_position - position).abs() < 1e-9,
                "{name}: group {idx} position"
            );
        }
    }
}

#[test]
fn golden_running_shoes() {
    run_scenario("running_shoes.json");
}

#[test]
fn golden_single_record() {
    run_scenario("single_record.json");
}

#[test]
fn golden_intent_buckets() {
    run_scenario("intent_buckets.json");
}

#[test]
fn golden_intent_off() {
    run_scenario("intent_off.json");
}

#[test]
fn golden_cjk_cluster() {
    run_scenario("cjk_cluster.json");
}

#[test]
fn every_golden_file_passes() {
    for name in scenario_names() {
        run_scenario(&name);
    }
}

// ---------------------------------------------------------------------------
// Targeted behaviour
// ---------------------------------------------------------------------------

#[test]
fn running_shoes_group_topic_is_shared_phrase() {
    let input = records(&["buy running shoes", "best running shoes", "running shoes price"]);
    let result = group_keywords(&input, &options(0.4, 2, 20, false));
    assert_eq!(result.total_groups, 1);
    assert!(result.groups[0].topic.contains("running shoes"));
    assert!(result.ungrouped.is_empty());
}

#[test]
fn classification_examples() {
    assert_eq!(classify("how to fix a leaky faucet"), Intent::Informational);
    assert_eq!(classify("buy iphone 15 price"), Intent::Commercial);
}

#[test]
fn disjoint_vocabularies_never_merge_in_any_order() {
    let forward = [
        "apple pie recipe",
        "quantum entanglement",
        "easy apple pie recipe",
        "quantum entanglement explained",
    ];
    let mut reversed = forward;
    reversed.reverse();
    let opts = options(0.5, 2, 20, false);

    for order in [&forward[..], &reversed[..]] {
        let result = group_keywords(&records(order), &opts);
        assert_eq!(result.total_groups, 2, "order {order:?}");
        for group in &result.groups {
            let apple = group.keywords.iter().filter(|k| k.query.contains("apple")).count();
            assert!(apple == 0 || apple == group.size, "mixed group {:?}", group.keywords);
        }
    }
}

#[test]
fn group_cap_dissolves_lowest_click_groups() {
    let words = [
        "aardvark", "bicycle", "cathedral", "dolphin", "eclipse", "falcon", "glacier",
        "harmonica", "iceberg", "jaguar", "kaleidoscope", "lighthouse", "mandolin", "nebula",
        "octopus", "pyramid", "quartz", "rhinoceros", "saxophone", "tornado", "umbrella",
        "volcano", "walrus", "xylophone", "zeppelin",
    ];
    // Each word appears twice; pair i carries 2 * (i + 1) clicks in total.
    let input: Vec<KeywordRecord> = words
        .iter()
        .enumerate()
        .flat_map(|(i, w)| {
            let clicks = i as u64 + 1;
            [
                KeywordRecord::new(*w, clicks, 100, 0.01, 1.0),
                KeywordRecord::new(*w, clicks, 100, 0.01, 1.0),
            ]
        })
        .collect();

    let result = group_keywords(&input, &options(0.95, 2, 20, false));
    assert!(result.is_consistent());
    assert_eq!(result.total_groups, 20);
    assert_eq!(result.total_keywords, 50);
    assert_eq!(result.ungrouped.len(), 10);

    let kept_clicks: Vec<u64> = result.groups.iter().map(|g| g.metrics.total_clicks).collect();
    let expected: Vec<u64> = (6..=25u64).rev().map(|c| c * 2).collect();
    assert_eq!(kept_clicks, expected);

    // Dissolved groups are appended in ranked order.
    let ungrouped = queries_of(&result.ungrouped);
    assert_eq!(
        ungrouped,
        vec![
            "eclipse", "eclipse", "dolphin", "dolphin", "cathedral", "cathedral", "bicycle",
            "bicycle", "aardvark", "aardvark"
        ]
    );
}

#[test]
fn intent_grouping_keeps_intents_apart() {
    let input = records(&["best running shoes", "buy running shoes"]);
    let split = group_keywords(&input, &options(0.5, 2, 20, true));
    assert_eq!(split.total_groups, 0);
    assert_eq!(split.ungrouped.len(), 2);

    let merged = group_keywords(&input, &options(0.5, 2, 20, false));
    assert_eq!(merged.total_groups, 1);
}

#[test]
fn groups_carry_bucket_intent() {
    let input = records(&["how to tie shoes", "how to tie shoelaces"]);
    let result = group_keywords(&input, &GroupingOptions::default());
    assert_eq!(result.total_groups, 1);
    assert_eq!(result.groups[0].intent, Intent::Informational);
}

#[test]
fn min_group_size_one_groups_everything() {
    let input = records(&["apple pie", "quantum physics", "jazz guitar"]);
    let result = group_keywords(&input, &options(0.9, 1, 20, false));
    assert_eq!(result.total_groups, 3);
    assert!(result.ungrouped.is_empty());
    assert!(result.groups.iter().all(|g| g.size == 1));
}

#[test]
fn threshold_zero_merges_one_bucket() {
    let input = records(&["apple pie", "quantum physics", "jazz guitar"]);
    let result = group_keywords(&input, &options(0.0, 2, 20, false));
    assert_eq!(result.total_groups, 1);
    assert_eq!(result.groups[0].size, 3);
}

#[test]
fn nan_threshold_falls_back_to_default() {
    let input = records(&["seo tools", "seo tools free", "apple pie"]);
    let nan = group_keywords(&input, &options(f64::NAN, 2, 20, false));
    let default = group_keywords(&input, &options(0.5, 2, 20, false));
    assert_eq!(nan, default);
}

#[test]
fn empty_input_gives_empty_result() {
    let result = group_keywords(&[], &GroupingOptions::default());
    assert_eq!(result, GroupingResult::empty());
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(GroupingEngine::new());
    let input = records(&["seo tools", "best seo tools", "seo tools free"]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = std::sync::Arc::clone(&engine);
            let input = input.clone();
            std::thread::spawn(move || engine.group_keywords(&input, &GroupingOptions::default()))
        })
        .collect();
    let results: Vec<GroupingResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let input = records(&["seo tools", "best seo tools"]);
    let result = group_keywords(&input, &options(0.5, 2, 20, false));
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("totalGroups").is_some());
    assert!(json.get("groupedKeywords").is_some());
    assert!(json["groups"][0]["metrics"].get("avgCTR").is_some());
    // One informational and one commercial member: the tie goes to informational.
    assert_eq!(json["groups"][0]["intent"], "informational");
}
