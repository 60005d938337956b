//! Built-in demo account.
//!
//! Logging in with these credentials short-circuits the network entirely
//! and loads a pre-populated household, so the dashboard can be explored
//! without a backend.

use voltura_core::{Device, SetupProfile, UserProfile};

/// Demo login email.
pub const DEMO_EMAIL: &str = "test@gmail.com";

/// Demo login password.
pub const DEMO_PASSWORD: &str = "test123";

/// True if the credentials match the demo account.
#[must_use]
pub fn is_demo_login(email: &str, password: &str) -> bool {
    email == DEMO_EMAIL && password == DEMO_PASSWORD
}

/// Profile fields of the demo account.
#[must_use]
pub fn demo_profile() -> UserProfile {
    UserProfile {
        name: "Demo User".to_owned(),
        email: DEMO_EMAIL.to_owned(),
        company: "PT. Demo Indonesia".to_owned(),
        phone: "08123456789".to_owned(),
    }
}

/// Pre-populated household of the demo account.
#[must_use]
pub fn demo_setup() -> SetupProfile {
    SetupProfile {
        power_category: "900 VA".to_owned(),
        kwh_price: "1352".to_owned(),
        monthly_bill: "350000".to_owned(),
        devices: vec![
            Device::new("1", "AC Ruang Tamu", "750", "8"),
            Device::new("2", "TV", "150", "6"),
            Device::new("3", "Komputer", "300", "10"),
            Device::new("4", "Lampu LED (Total)", "100", "12"),
        ],
    }
}
