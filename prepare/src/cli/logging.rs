use std::io::IsTerminal;
use std::str::FromStr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::Layer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::LogArgs;

/// уровень логирования: --quiet, затем RUST_LOG, затем количество -v
pub fn log_level(args: LogArgs, rust_log: Option<&str>) -> LevelFilter
{
    if args.quiet {
        return LevelFilter::ERROR;
    }

    if let Some(level) = rust_log.and_then(|v| LevelFilter::from_str(v).ok()) {
        return level;
    }

    match args.verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// фильтр событий: директивы RUST_LOG и общий уровень; с --quiet директивы RUST_LOG не применяются
pub fn env_filter(args: LogArgs, rust_log: Option<&str>) -> EnvFilter
{
    let level = log_level(args, rust_log);

    let filter = match (args.quiet, rust_log) {
        (false, Some(rust_log)) => EnvFilter::new(rust_log),
        _ => EnvFilter::default(),
    };

    filter.add_directive(level.into())
}

/// глобальный подписчик: текст в терминал, JSON если stderr перенаправлен
pub fn init_global_subscriber(args: LogArgs) -> WorkerGuard
{
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = env_filter(args, rust_log.as_deref());

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let fmt = match std::io::stderr().is_terminal() {
        true => fmt::layer().without_time().with_writer(non_blocking).boxed(),
        false => fmt::layer()
            .with_ansi(false)
            .json()
            .with_writer(non_blocking)
            .boxed(),
    };

    tracing_subscriber::registry().with(fmt).with(env_filter).init();

    guard
}
