use clap::Parser;
use portfolio_site::config::cli::Command;
use portfolio_site::domain::model::SubmissionResult;
use portfolio_site::utils::error::{ErrorSeverity, PortfolioError};
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{CliConfig, HttpPortfolioApi, Site};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting portfolio");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併並驗證配置
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };

    let api = HttpPortfolioApi::new(&settings.base_url);
    let site = Site::new(api, settings);

    match &config.command {
        Command::Show => {
            let page = site.render().await;
            println!("{}", page.render_text());
        }
        Command::Projects { json } => {
            let projects = site.projects().await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                for project in &projects {
                    println!("• {} — {}", project.title, project.description);
                }
            }
        }
        Command::Contact { .. } => {
            let mut form = config.command.contact_form().unwrap_or_default();
            match site.contact(&mut form).await {
                Ok(SubmissionResult::Succeeded(msg)) => println!("✅ {}", msg),
                Ok(SubmissionResult::Failed(msg)) => {
                    eprintln!("❌ {}", msg);
                    std::process::exit(1);
                }
                Ok(SubmissionResult::Pending) => {}
                Err(e) => fail(e),
            }
        }
    }

    Ok(())
}

fn fail(e: PortfolioError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
