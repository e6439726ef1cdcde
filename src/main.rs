mod cli;
mod config;
mod gateways;
mod store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run().await
}
