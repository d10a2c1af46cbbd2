use serde::Deserialize;
use serde_derive::Serialize;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupToolConfig {
    #[serde(rename = "base_url")]
    pub base_url: Option<String>,
    #[serde(rename = "default_country")]
    pub default_country: Option<String>,
}
