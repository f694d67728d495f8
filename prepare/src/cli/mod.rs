mod commands;
pub mod logging;

pub use commands::run;
pub use commands::Commands;
pub use logging::init_global_subscriber;

use clap::Parser;

/// подготовка и проверка сериализованной базы данных Unicode, нормализация текста
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args
{
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Parser, Clone, Copy, Debug, Default)]
#[command(next_help_heading = "Log Options")]
pub struct LogArgs
{
    /// подробность логирования
    ///
    ///   -v    INFO
    ///   -vv   DEBUG
    ///   -vvv  TRACE
    ///
    /// по умолчанию WARN; переменная окружения `RUST_LOG` имеет приоритет
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        verbatim_doc_comment
    )]
    pub verbosity: u8,

    /// выводить только ошибки, перекрывает -v и `RUST_LOG`
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
