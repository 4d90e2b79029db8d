use serde::{Deserialize, Serialize};

use super::lenient;

// ---------------------------------------------------------------------------
// PendingOffer — Announced offer whose details are not published yet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOffer {
    #[serde(default, deserialize_with = "lenient::text")]
    pub maker: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub official_page_url: Option<String>,
}
