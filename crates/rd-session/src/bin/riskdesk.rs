use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use rd_client::HttpRiskService;
use rd_session::{CalculationState, HealthMonitor, RiskOrchestrator};
use rd_state::{MarketDataStore, PortfolioStore};
use rd_types::{DashboardConfig, ExerciseStyle, Instrument, OptionType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = DashboardConfig::default();
    if let Ok(url) = std::env::var("RISKDESK_API_URL") {
        config.api_base_url = url;
    }

    let service = Arc::new(HttpRiskService::new(&config.api_base_url));
    let monitor = HealthMonitor::start(
        service.clone(),
        Duration::from_millis(config.health_check_interval_ms),
    );

    // Sample portfolio: one long AAPL call, defaults for market data.
    let mut portfolio = PortfolioStore::new();
    portfolio.add(Instrument::new(
        "AAPL",
        ExerciseStyle::European,
        OptionType::Call,
        Decimal::from(150),
        Decimal::ONE,
        Decimal::from(10),
    ))?;

    let mut market_data = MarketDataStore::from_config(&config);
    market_data.seed(portfolio.distinct_assets());

    let orchestrator = RiskOrchestrator::new(service);
    if let Err(err) = orchestrator.calculate(&portfolio, &market_data).await {
        println!("validation failed: {err}");
        return Ok(());
    }

    match orchestrator.state().await {
        CalculationState::Succeeded(result) => {
            println!("PV:        {}", result.total_pv);
            println!("Delta:     {}", result.total_delta);
            println!("Gamma:     {}", result.total_gamma);
            println!("Vega:      {}", result.total_vega);
            println!("Theta:     {}", result.total_theta);
            println!("VaR (95%): {}", result.value_at_risk_95);
        }
        CalculationState::Failed { message } => println!("calculation failed: {message}"),
        other => println!("unexpected state: {other:?}"),
    }

    // Give the first health probe a moment to resolve before reporting.
    tokio::time::sleep(Duration::from_millis(250)).await;
    let health = monitor.status();
    println!(
        "service {} (cached assets: {})",
        if health.online { "online" } else { "offline" },
        health
            .cached_assets
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    );
    monitor.stop();

    Ok(())
}
