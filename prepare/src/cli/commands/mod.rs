mod bake;
mod normalize;
mod stats;

use std::io::Write;
use std::path::Path;

use abdera_ucd::UnicodeCharacterDatabase;
use anyhow::Context;
use clap::Subcommand;

use super::Args;

pub use bake::BakeArgs;
pub use normalize::NormalizeArgs;
pub use stats::StatsArgs;

#[derive(Subcommand, Debug)]
pub enum Commands
{
    /// собрать сериализованный ресурс из файлов UCD
    Bake(BakeArgs),
    /// статистика таблиц встроенной или собранной базы
    Stats(StatsArgs),
    /// нормализовать файл или stdin
    Normalize(NormalizeArgs),
}

/// выполнить команду, вывод пишется в `out`
pub fn run(args: Args, out: &mut impl Write) -> anyhow::Result<()>
{
    match args.command {
        Commands::Bake(args) => bake::run(args, out),
        Commands::Stats(args) => stats::run(args, out),
        Commands::Normalize(args) => normalize::run(args, out),
    }
}

/// прочитать ресурс, если путь указан
fn load_resource(path: Option<&Path>) -> anyhow::Result<Option<UnicodeCharacterDatabase>>
{
    path.map(|path| {
        UnicodeCharacterDatabase::load_file(path)
            .with_context(|| format!("не удалось прочитать ресурс {}", path.display()))
    })
    .transpose()
}
