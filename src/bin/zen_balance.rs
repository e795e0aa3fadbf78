use anyhow::Result;
use zenkit::app::balance::report_balance;
use zenkit::libs::config::Config;
use zenkit::libs::writing::Colors;
use zenkit::libs::zen::client::ZenClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let client = ZenClient::from_config(&cfg)?;
    let mut out = Colors::stdout(cfg.color);
    report_balance(&cfg, &client, &mut out).await?;
    Ok(())
}
