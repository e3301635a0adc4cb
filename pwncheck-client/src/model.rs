use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One historical breach event, in the upstream PascalCase wire format.
///
/// The live API may answer with truncated records (name only), so every
/// other field defaults. Records are never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BreachRecord {
    pub name: String,
    pub title: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
    pub pwn_count: u64,
    pub description: String,
    pub data_classes: Vec<String>,
    pub is_verified: bool,
    pub is_fabricated: bool,
    pub is_sensitive: bool,
    pub is_retired: bool,
    pub is_spam_list: bool,
    pub is_malware: bool,
    pub is_subscription_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
}
