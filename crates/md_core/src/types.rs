use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed entry as returned by the aggregation service. Immutable once
/// fetched; identity is the URL and duplicates are not collapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}
