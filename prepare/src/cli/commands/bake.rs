use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use abdera_ucd::{UnicodeCharacterDatabase, COMPOSITION_EXCLUSIONS, UNICODE_DATA};
use anyhow::Context;
use clap::Parser;

use crate::output;

#[derive(Parser, Debug)]
pub struct BakeArgs
{
    /// UnicodeData.txt, по умолчанию встроенный
    #[arg(long, value_name = "PATH")]
    pub unicode_data: Option<PathBuf>,

    /// CompositionExclusions.txt, по умолчанию встроенный
    #[arg(long, value_name = "PATH")]
    pub exclusions: Option<PathBuf>,

    /// куда записать ресурс
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}

fn read_source(path: Option<&Path>, builtin: &'static str) -> anyhow::Result<String>
{
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("не удалось прочитать {}", path.display())),
        None => Ok(builtin.to_owned()),
    }
}

pub(super) fn run(args: BakeArgs, out: &mut impl Write) -> anyhow::Result<()>
{
    let unicode_data = read_source(args.unicode_data.as_deref(), UNICODE_DATA)?;
    let exclusions = read_source(args.exclusions.as_deref(), COMPOSITION_EXCLUSIONS)?;

    let database = UnicodeCharacterDatabase::from_sources(&unicode_data, &exclusions)
        .context("не удалось разобрать данные UCD")?;

    database
        .save_file(&args.output)
        .with_context(|| format!("не удалось записать {}", args.output.display()))?;

    output::stats::print(out, &args.output.display().to_string(), &database.stats())?;

    Ok(())
}
