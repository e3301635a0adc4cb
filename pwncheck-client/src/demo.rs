use std::collections::HashMap;
use std::time::Duration;

use crate::model::BreachRecord;

/// Notice attached to every demo-mode response.
pub const DEMO_MESSAGE: &str =
    "Demo mode - using sample data. Get a real API key from haveibeenpwned.com/API/Key";

/// Keeps demo-mode timing close enough to a live lookup for UI work.
const SIMULATED_LATENCY: Duration = Duration::from_millis(500);

static DEMO_BREACHES: &str = include_str!("../assets/demo-breaches.json");

/// Canned breach data served when no API key is configured.
///
/// Keyed by lowercase email. Not a cache: the table is fixed at build time
/// and exists only so the email flow works without an upstream credential.
pub struct DemoDataset {
    entries: HashMap<String, Vec<BreachRecord>>,
}

impl DemoDataset {
    pub fn load() -> Self {
        let entries =
            serde_json::from_str(DEMO_BREACHES).expect("embedded demo dataset is valid JSON");
        Self { entries }
    }

    /// Looks the address up in the canned table, with simulated latency.
    /// Unknown addresses get an empty answer, same as the live API's 404.
    pub async fn lookup(&self, email: &str) -> Vec<BreachRecord> {
        tokio::time::sleep(SIMULATED_LATENCY).await;
        self.entries.get(&email.to_lowercase()).cloned().unwrap_or_default()
    }
}
