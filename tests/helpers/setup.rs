use udhaar_api::Application;
use udhaar_infra::setup_context;
use udhaar_sdk::UdhaarSDK;

// Launch the application as a background task on a random port
pub async fn spawn_app() -> (UdhaarSDK, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0;

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = UdhaarSDK::new(address.clone());
    (sdk, address)
}
