use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use abdera_normalization::{Form, Normalizer};
use abdera_ucd::UnicodeCharacterDatabase;
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct NormalizeArgs
{
    /// форма нормализации: NFD, NFC, NFKD, NFKC
    #[arg(short, long, default_value_t = Form::C)]
    pub form: Form,

    /// собранный ресурс вместо встроенной базы
    #[arg(short, long, value_name = "PATH")]
    pub resource: Option<PathBuf>,

    /// только проверить, нормализован ли текст
    #[arg(long)]
    pub check: bool,

    /// исходный файл, по умолчанию stdin
    pub file: Option<PathBuf>,
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String>
{
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("не удалось прочитать {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("не удалось прочитать stdin")?;

            Ok(input)
        }
    }
}

pub(super) fn run(args: NormalizeArgs, out: &mut impl Write) -> anyhow::Result<()>
{
    let loaded = super::load_resource(args.resource.as_deref())?;
    let database = loaded.as_ref().unwrap_or_else(|| UnicodeCharacterDatabase::builtin());

    let normalizer = Normalizer::with_database(database, args.form);
    let input = read_input(args.file.as_ref())?;

    tracing::debug!(form = %args.form, bytes = input.len(), "normalizing input");

    match args.check {
        true => {
            let normalized = normalizer.is_normalized(&input);
            writeln!(out, "{}: {}", args.form, normalized)?;
        }
        false => {
            let mut result = String::with_capacity(input.len());
            normalizer.normalize_to(&input, &mut result);
            out.write_all(result.as_bytes())?;
        }
    }

    out.flush()?;

    Ok(())
}
