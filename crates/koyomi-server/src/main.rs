use koyomi_server::{logging, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    logging::init(config.log_format)?;
    koyomi_server::run(config).await
}
