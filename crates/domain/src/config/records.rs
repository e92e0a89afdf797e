use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static zone table as written in the configuration file.
///
/// Keys are domain names, values are the answer for that name: an IP literal
/// for `a`, a mail-exchanger hostname (without trailing dot) for `mx`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordTable {
    #[serde(default, alias = "A")]
    pub a: BTreeMap<String, String>,

    #[serde(default, alias = "MX")]
    pub mx: BTreeMap<String, String>,
}
