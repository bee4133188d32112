//! Screen routes and navigation transitions
//!
//! The screens themselves are out of scope; commands return a [`Transition`]
//! describing where the app should go next and whether the history stack is
//! kept or replaced.

use serde::{Deserialize, Serialize};

/// Named screens of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    Login,
    /// OTP entry for the login mobile number
    OtpVerification { mobile: String },
    /// Basic-info step of the onboarding wizard, pre-filled with the mobile
    BasicInfo { mobile: String },
    ProfessionalInfo,
    LoanCustomization,
    FinalSteps,
    Dashboard,
    EmiSchedule,
    Profile,
    ThankYou,
}

/// How the app moves to a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "route", rename_all = "camelCase")]
pub enum Transition {
    /// Push onto the history stack; back returns to the current screen
    Push(Route),
    /// Replace the whole stack; back exits the app instead of returning
    Reset(Route),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_serialize_with_screen_tag() {
        let json = serde_json::to_string(&Route::BasicInfo { mobile: "9876543210".into() })
            .expect("serializes");
        assert_eq!(json, r#"{"screen":"basicInfo","mobile":"9876543210"}"#);
    }

    #[test]
    fn transitions_carry_their_route() {
        let json =
            serde_json::to_string(&Transition::Reset(Route::Dashboard)).expect("serializes");
        assert_eq!(json, r#"{"kind":"reset","route":{"screen":"dashboard"}}"#);
    }
}
