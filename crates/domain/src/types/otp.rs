//! OTP slot identifiers
//!
//! Two independent slots exist: the login-mobile OTP and the Aadhaar OTP.
//! They never share storage and never invalidate each other.

use serde::{Deserialize, Serialize};

use crate::constants::{AADHAR_OTP_STORE_KEY, LOGIN_OTP_STORE_KEY};

/// Named slot an OTP code is generated into and verified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpSlot {
    /// Mobile-number login verification
    Login,
    /// Aadhaar verification during basic info
    Aadhar,
}

impl OtpSlot {
    /// Storage key the code for this slot is persisted under.
    #[must_use]
    pub fn store_key(self) -> &'static str {
        match self {
            Self::Login => LOGIN_OTP_STORE_KEY,
            Self::Aadhar => AADHAR_OTP_STORE_KEY,
        }
    }
}
