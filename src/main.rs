#[tokio::main]
async fn main() {
    // Failures are logged inside the bootstrap before surfacing here.
    if wallet_gateway::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
