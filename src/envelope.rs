//! Response envelope
//!
//! Every platform response wraps its payload in `{ code, msg, data }`.
//! `code == 0` is success; anything else carries a platform error code and
//! message. List endpoints additionally put pagination metadata inside
//! `data` (handled by the pagination module, not here).

use crate::error::{Error, Result};
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// Wire envelope for all API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Platform status code; 0 means success
    #[serde(default)]
    pub code: i64,

    /// Human-readable status message
    #[serde(default)]
    pub msg: String,

    /// Response payload; may be absent even on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonObject>,
}

impl Envelope {
    /// Check whether the envelope reports success
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// Unwrap the payload, converting a non-zero code into `Error::Api`.
    ///
    /// A missing `data` object on a success envelope is tolerated and
    /// returned as an empty object.
    pub fn into_data(self) -> Result<JsonObject> {
        if self.code != 0 {
            return Err(Error::api(self.code, self.msg));
        }
        Ok(self.data.unwrap_or_default())
    }
}
