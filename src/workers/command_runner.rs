use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::StatsResult;
use crate::services::dashboard_controller::DashboardController;
use crate::services::demo_catalog::DemoCatalog;
use crate::services::stats_api::StatsApi;
use crate::structs::cli::Cli;
use crate::ui::dashboard_renderer::DashboardRenderer;
use crate::ui::user_table;

pub struct CommandRunner;

impl CommandRunner {
    pub async fn run_command(cli: Cli) -> StatsResult<()> {
        let start = Instant::now();

        let config = ConfigManager::load()?;
        let api_url = ConfigManager::resolve_api_url(&config, cli.api_url.as_deref());
        log::info!("🌐 Using stats backend: {}", api_url);

        let backend = StatsApi::new(api_url);
        let mut controller = DashboardController::new(backend, DemoCatalog);

        match cli.command {
            Commands::Overview => Self::overview_command(&mut controller).await,
            Commands::User { dni } => Self::user_command(&mut controller, &dni).await,
        }

        log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        Ok(())
    }

    async fn overview_command(controller: &mut DashboardController<StatsApi, DemoCatalog>) {
        log::info!("📊 Fetching dashboard sections...");
        controller.refresh_overview().await;
        let renderer = DashboardRenderer::new();
        print!("{}", renderer.render_overview(&controller.state));
    }

    async fn user_command(controller: &mut DashboardController<StatsApi, DemoCatalog>, dni: &str) {
        if dni.trim().is_empty() {
            log::warn!("⚠️ Empty DNI, nothing to look up");
            return;
        }
        log::info!("🔍 Looking up responses for DNI: {}", dni.trim());
        controller.lookup_user(dni).await;

        if let Some(notice) = controller.state.user.notice() {
            println!("⚠️  {}", notice);
        }
        let records = controller.state.user.data().map(Vec::as_slice).unwrap_or(&[]);
        print!("{}", user_table::render_user_table(dni.trim(), records));
    }
}
