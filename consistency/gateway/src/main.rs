use consistency_core::{app, telemetry::init_tracing, ServerCfg};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = ServerCfg::from_env();
    init_tracing(cfg.log_format);

    let addr = cfg.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app(&cfg)).await?;
    Ok(())
}
