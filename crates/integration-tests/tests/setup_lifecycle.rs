//! End-to-end lifecycle tests: controller + HTTP gateway + live server.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The storage gateway running (cargo run -p voltura-server)
//!
//! Run with: cargo test -p voltura-integration-tests -- --ignored

use uuid::Uuid;

use voltura_client::{HttpGateway, LifecycleController, Screen, SignupData, StorageGateway};
use voltura_core::{Device, SetupProfile};
use voltura_integration_tests::gateway_base_url;

fn fresh_email() -> String {
    format!("it-{}@example.com", Uuid::new_v4().simple())
}

fn signup_data(email: &str) -> SignupData {
    SignupData {
        name: "Integration Tester".to_owned(),
        email: email.to_owned(),
        password: "secret7".to_owned(),
        company: "PT. Uji Coba".to_owned(),
        phone: "0812000000".to_owned(),
    }
}

fn household() -> SetupProfile {
    SetupProfile {
        power_category: "1300 VA".to_owned(),
        kwh_price: "1444.7".to_owned(),
        monthly_bill: "500000".to_owned(),
        devices: vec![
            Device::new("1", "Kulkas", "150", "24"),
            Device::new("2", "Mesin Cuci", "400", "1"),
        ],
    }
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_full_lifecycle_roundtrip() {
    let gateway = HttpGateway::new(gateway_base_url());
    let email = fresh_email();

    // Signup lands on setup with a live session.
    let mut controller = LifecycleController::new(gateway.clone());
    controller.signup(signup_data(&email)).await;
    assert!(controller.authenticated());
    assert!(controller.session().is_some());
    assert_eq!(controller.screen(), Screen::Setup);

    // Completing setup persists the document.
    controller.complete_setup(household()).await;
    assert!(controller.setup_complete());
    assert_eq!(controller.screen(), Screen::Dashboard);

    // A fresh controller logging in finds the document and goes straight
    // to the dashboard.
    let mut controller = LifecycleController::new(gateway.clone());
    controller.login(&email, "secret7").await;
    assert!(controller.setup_complete());
    assert_eq!(controller.screen(), Screen::Dashboard);
    let setup = controller.setup().expect("setup document missing");
    assert_eq!(setup.power_category, "1300 VA");
    assert_eq!(setup.devices.len(), 2);

    // Reset deletes the remote document; the next login starts over.
    controller.reset().await;
    assert!(!controller.setup_complete());

    let mut controller = LifecycleController::new(gateway);
    controller.login(&email, "secret7").await;
    assert!(!controller.setup_complete());
    assert_eq!(controller.screen(), Screen::Setup);
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_delete_is_idempotent_on_the_wire() {
    let gateway = HttpGateway::new(gateway_base_url());
    let email = fresh_email();

    let mut controller = LifecycleController::new(gateway.clone());
    controller.signup(signup_data(&email)).await;
    let session = controller.session().expect("missing session").clone();

    // Deleting a document that was never saved still succeeds.
    gateway
        .delete_setup_document(&session)
        .await
        .expect("first delete failed");
    gateway
        .delete_setup_document(&session)
        .await
        .expect("second delete failed");

    let found = gateway
        .get_setup_document(&session)
        .await
        .expect("get failed");
    assert!(found.is_none());
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_save_overwrites_wholesale() {
    let gateway = HttpGateway::new(gateway_base_url());
    let email = fresh_email();

    let mut controller = LifecycleController::new(gateway.clone());
    controller.signup(signup_data(&email)).await;
    let session = controller.session().expect("missing session").clone();

    gateway
        .put_setup_document(&session, &household())
        .await
        .expect("first save failed");

    let mut replacement = household();
    replacement.devices = vec![Device::new("1", "AC", "750", "8")];
    gateway
        .put_setup_document(&session, &replacement)
        .await
        .expect("second save failed");

    let found = gateway
        .get_setup_document(&session)
        .await
        .expect("get failed")
        .expect("document missing");
    assert_eq!(found.devices.len(), 1);
    assert_eq!(found.devices[0].name, "AC");
}
