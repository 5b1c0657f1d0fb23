use referral_check::utils::{logger, validation::Validate};
use referral_check::{CheckEngine, CheckerConfig, ChromeSession, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日誌
    logger::init_cli_logger();

    println!("=== REFERRAL CODE CHECKER ===");

    let config = CheckerConfig::from_program_dir();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 建立瀏覽器工作階段；失敗時整個執行中止
    let session = match ChromeSession::launch(&config).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("❌ Failed to launch browser: {}", e);
            eprintln!("❌ Failed to launch browser: {}", e);
            eprintln!("💡 Make sure Chrome or Chromium is installed and on your PATH");
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(config.data_dir.clone());
    let engine = CheckEngine::new(storage, config);

    let outcome = tokio::select! {
        result = engine.run(&session) => Some(result),
        _ = tokio::signal::ctrl_c() => {
            println!("\n\nOperation cancelled by user");
            None
        }
    };

    // the browser process is released on every exit path
    session.close().await;

    match outcome {
        Some(Ok(output_path)) => {
            println!("\n💾 Results saved to: {}", output_path);
        }
        Some(Err(e)) => {
            tracing::error!("❌ Referral check failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        None => {}
    }

    Ok(())
}
