//! Binary entry point for the speedhost demo server.

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    lib_speedhost::init().await
}
