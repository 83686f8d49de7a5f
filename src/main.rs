use anyhow::Context;
use courses_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load settings")?;
    courses_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        addr = %settings.server.bind_addr(),
        "courses-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    courses_app::modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("courses-app bootstrap complete");

    let served = courses_http::start_server(&registry, &settings).await;
    registry.stop_all().await?;
    served
}
