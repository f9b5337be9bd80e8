//! 日志基础设施

use anyhow::Result;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// `RUST_LOG` 存在时优先于配置中的日志级别。开启文件日志时返回
    /// 后台写入线程的 guard，调用方需要持有它直到进程退出，
    /// 否则缓冲中的日志会丢失。
    pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
        let filter =
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

        let console_layer = config
            .console_output
            .then(|| fmt::layer().with_writer(std::io::stdout).with_ansi(true));

        let (file_layer, guard) = if config.file_output {
            std::fs::create_dir_all(&config.log_path)?;

            // 按日期分割日志文件
            let file_appender = rolling::daily(&config.log_path, &config.file_prefix);
            let (writer, guard) = non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_thread_names(true);
            (Some(layer), Some(guard))
        } else {
            (None, None)
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }
}
