use clap::Parser;
use lueur_site::utils::{logger, validation::Validate};
use lueur_site::{
    CliConfig, ConfigProvider, LocalStorage, ShellSurface, SiteEngine, SiteError, SiteSettings,
    Storage,
};

const DEFAULT_SHELL: &str = include_str!("../assets/page.html");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init(cli.verbose, cli.log_json);

    tracing::info!("Starting lueur-site build");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match SiteSettings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    let shell = match &cli.shell {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(shell) => shell,
            Err(e) => {
                tracing::error!("❌ Could not read page shell '{}': {}", path, e);
                fail(SiteError::from(e));
            }
        },
        None => DEFAULT_SHELL.to_string(),
    };

    let mut engine = match SiteEngine::from_config(&settings) {
        Ok(engine) => engine,
        Err(e) => fail(e),
    };

    let mut surface = ShellSurface::new(shell);
    let report = engine.assemble(&mut surface).await;

    let storage = LocalStorage::new(settings.output_path().to_string());
    if let Err(e) = storage.write_file("index.html", surface.render().as_bytes()).await {
        tracing::error!("❌ Could not write the built page: {}", e);
        fail(e);
    }

    tracing::info!("✅ Page built");
    println!("✅ Page built: {}/index.html", settings.output_path());
    for (name, reason) in report.skipped.iter().chain(report.failed.iter()) {
        println!("⚠️  '{}' section degraded: {}", name, reason);
    }

    Ok(())
}

fn fail(e: SiteError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        lueur_site::utils::error::ErrorSeverity::Low => 0,
        lueur_site::utils::error::ErrorSeverity::Medium => 2,
        lueur_site::utils::error::ErrorSeverity::High => 1,
        lueur_site::utils::error::ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code.max(1));
}
