use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(error) = jagjar_api::run().await {
        error!("API exited with error: {}", error);
        std::process::exit(1);
    }
}
