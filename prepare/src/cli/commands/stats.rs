use std::io::Write;
use std::path::PathBuf;

use abdera_ucd::{UnicodeCharacterDatabase, UNICODE_VERSION};
use clap::Parser;

use crate::output;

#[derive(Parser, Debug)]
pub struct StatsArgs
{
    /// собранный ресурс вместо встроенной базы
    #[arg(short, long, value_name = "PATH")]
    pub resource: Option<PathBuf>,
}

pub(super) fn run(args: StatsArgs, out: &mut impl Write) -> anyhow::Result<()>
{
    let loaded = super::load_resource(args.resource.as_deref())?;

    let (name, database) = match (&args.resource, &loaded) {
        (Some(path), Some(database)) => (path.display().to_string(), database),
        _ => (format!("UCD {}", UNICODE_VERSION), UnicodeCharacterDatabase::builtin()),
    };

    output::stats::print(out, &name, &database.stats())?;

    Ok(())
}
