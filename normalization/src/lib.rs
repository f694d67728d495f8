use abdera_ucd::UnicodeCharacterDatabase;
use thiserror::Error;

pub use abdera_ucd::QuickCheck;
pub use codepoint::Codepoint;
pub use form::Form;

mod codepoint;
mod composition;
mod decomposition;
mod form;
mod quick_check;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NormalizationError
{
    #[error("unknown normalization form: {0:?}")]
    UnknownForm(String),
}

/// нормализатор NFD / NFC / NFKD / NFKC (UTR #15):
///  1. декомпозиция (каноническая или совместимости) с каноническим упорядочиванием
///  2. каноническая композиция (для NFC и NFKC)
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a>
{
    /// данные UCD
    database: &'a UnicodeCharacterDatabase,
    /// форма нормализации
    form: Form,
}

impl Normalizer<'static>
{
    /// нормализатор на встроенных данных
    pub fn new(form: Form) -> Self
    {
        Self::with_database(UnicodeCharacterDatabase::builtin(), form)
    }

    pub fn nfd() -> Self
    {
        Self::new(Form::D)
    }

    pub fn nfc() -> Self
    {
        Self::new(Form::C)
    }

    pub fn nfkd() -> Self
    {
        Self::new(Form::KD)
    }

    pub fn nfkc() -> Self
    {
        Self::new(Form::KC)
    }
}

impl<'a> Normalizer<'a>
{
    /// нормализатор на данных, загруженных отдельно (например, из сериализованного ресурса)
    pub fn with_database(database: &'a UnicodeCharacterDatabase, form: Form) -> Self
    {
        Self { database, form }
    }

    #[inline]
    pub fn form(&self) -> Form
    {
        self.form
    }

    #[inline]
    pub fn database(&self) -> &'a UnicodeCharacterDatabase
    {
        self.database
    }

    /// нормализация строки
    pub fn normalize(&self, input: &str) -> String
    {
        let mut result = String::with_capacity(input.len());

        self.normalize_to(input, &mut result);

        result
    }

    /// нормализация строки с записью результата в конец result
    pub fn normalize_to(&self, input: &str, result: &mut String)
    {
        if input.is_empty() {
            return;
        }

        // строка уже нормализована - копируем как есть
        if self.quick_check(input) == QuickCheck::Yes {
            result.push_str(input);
            return;
        }

        let mut buffer = Vec::with_capacity(input.len());

        decomposition::decompose(self.database, input, self.form.is_canonical(), &mut buffer);

        if self.form.is_composition() {
            composition::compose(self.database, &mut buffer);
        }

        result.extend(buffer.iter().map(|&c| char::from(c)));
    }
}

/// нормализация NFKC
pub fn normalize(input: &str) -> String
{
    Normalizer::new(Form::default()).normalize(input)
}

/// нормализация в заданной форме
pub fn normalize_form(input: &str, form: Form) -> String
{
    Normalizer::new(form).normalize(input)
}

/// является ли строка нормализованной в заданной форме?
pub fn is_normalized(input: &str, form: Form) -> bool
{
    Normalizer::new(form).is_normalized(input)
}
