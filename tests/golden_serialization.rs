use serde_json::{json, Value};
use task_provenance::profile::profile;
use task_provenance::types::{CorpusProfile, RepoMetadata, TaskRecord};

fn golden_corpus() -> Vec<TaskRecord> {
    let raw = json!([
        { "id": "a", "title": "Buy milk", "due_date": "" },
        { "id": "b", "title": "  Buy   milk " },
        { "id": "c", "title": "Study AI" },
        { "title": null },
        { "id": 3, "title": "ab ab" }
    ]);
    raw.as_array()
        .unwrap()
        .iter()
        .map(TaskRecord::from_json)
        .collect()
}

#[test]
fn golden_profile_snapshot() {
    let meta = RepoMetadata::from_json(&json!({ "fingerprint": "repo-1" }));
    let p = profile(&golden_corpus(), Some(&meta));

    let json_str = serde_json::to_string_pretty(&p).unwrap();

    let expected = r#"{
  "repo_fingerprint": "repo-1",
  "n_tasks": 5,
  "uniqueness": {
    "avg": 0.7593,
    "min": 0.0,
    "max": 1.0
  },
  "top_signatures": [
    {
      "sig": "2vrhh3yn1czk",
      "count": 2
    },
    {
      "sig": "2we04gepjrsb",
      "count": 1
    },
    {
      "sig": "33niihzj4ux4",
      "count": 1
    },
    {
      "sig": "jqh46gze7qnw",
      "count": 1
    }
  ],
  "sample_signatures": [
    {
      "id": "a",
      "title_norm": "Buy milk",
      "phonetic": "buy-milk",
      "trigram_count": 10,
      "trigram_uniques": 10,
      "uniqueness_score": 1.0,
      "signature": "2vrhh3yn1czk"
    },
    {
      "id": "b",
      "title_norm": "Buy milk",
      "phonetic": "buy-milk",
      "trigram_count": 10,
      "trigram_uniques": 10,
      "uniqueness_score": 1.0,
      "signature": "2vrhh3yn1czk"
    },
    {
      "id": "c",
      "title_norm": "Study AI",
      "phonetic": "study-ai",
      "trigram_count": 10,
      "trigram_uniques": 10,
      "uniqueness_score": 1.0,
      "signature": "jqh46gze7qnw"
    },
    {
      "id": null,
      "title_norm": "",
      "phonetic": "",
      "trigram_count": 0,
      "trigram_uniques": 0,
      "uniqueness_score": 0.0,
      "signature": "33niihzj4ux4"
    },
    {
      "id": 3,
      "title_norm": "ab ab",
      "phonetic": "ab-ab",
      "trigram_count": 7,
      "trigram_uniques": 5,
      "uniqueness_score": 0.7965,
      "signature": "2we04gepjrsb"
    }
  ]
}"#;

    assert_eq!(json_str, expected, "Golden snapshot mismatch");
}

#[test]
fn golden_empty_profile_snapshot() {
    let json_str = serde_json::to_string(&profile(&[], None)).unwrap();
    assert_eq!(
        json_str,
        r#"{"repo_fingerprint":null,"n_tasks":0,"uniqueness":{"avg":0.0,"min":0.0,"max":0.0},"top_signatures":[],"sample_signatures":[]}"#
    );
}

#[test]
fn profile_key_order() {
    let json_str = serde_json::to_string(&profile(&golden_corpus(), None)).unwrap();

    let fp_pos = json_str.find("\"repo_fingerprint\":").unwrap();
    let n_pos = json_str.find("\"n_tasks\":").unwrap();
    let u_pos = json_str.find("\"uniqueness\":").unwrap();
    let top_pos = json_str.find("\"top_signatures\":").unwrap();
    let sample_pos = json_str.find("\"sample_signatures\":").unwrap();

    assert!(fp_pos < n_pos);
    assert!(n_pos < u_pos);
    assert!(u_pos < top_pos);
    assert!(top_pos < sample_pos);
}

#[test]
fn downstream_fields_are_addressable() {
    let value: Value = serde_json::to_value(profile(&golden_corpus(), None)).unwrap();

    assert_eq!(value["n_tasks"], json!(5));
    assert_eq!(value["uniqueness"]["avg"], json!(0.7593));
    assert_eq!(value["uniqueness"]["min"], json!(0.0));
    assert_eq!(value["uniqueness"]["max"], json!(1.0));
    assert_eq!(value["top_signatures"][0]["sig"], json!("2vrhh3yn1czk"));
    assert_eq!(value["top_signatures"][0]["count"], json!(2));
}

#[test]
fn profile_roundtrips_through_json() {
    let meta = RepoMetadata::with_fingerprint(7);
    let p = profile(&golden_corpus(), Some(&meta));

    let json_str = serde_json::to_string(&p).unwrap();
    let back: CorpusProfile = serde_json::from_str(&json_str).expect("Deserialization failed");

    assert_eq!(back, p);
}
