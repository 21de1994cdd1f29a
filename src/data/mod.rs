/// Data layer: record types and the scores loader.
///
/// Architecture:
/// ```text
///   <scores_path>/scores.jsonl
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  one JSON object per line → RecordSet
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ RecordSet  │  Vec<Record { pvalue }>
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  metric   │  share of p-values below threshold
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
