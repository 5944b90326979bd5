use anyhow::Result;
use clap::Parser;
use toeic_admin::cli::Cli;
use toeic_admin::utils::logging;
use toeic_admin::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置：TOML 文件 → 环境变量 → 命令行参数
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }
    if let Some(token) = cli.token {
        config.token = token;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run(cli.command).await?;

    Ok(())
}
