use thiserror::Error;

/// ошибка разбора значения свойства кодпоинта
#[derive(Error, Debug, PartialEq)]
pub enum PropertiesError
{
    #[error("unknown property value: {0:?}")]
    UnknownPropertyValue(String),
    #[error("invalid code point: {0:?}")]
    InvalidCodepoint(String),
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(e: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue(e.to_string())
    }
}

/// ошибки загрузки и сохранения базы данных Unicode
#[derive(Error, Debug)]
pub enum UcdError
{
    /// строка файла UCD не содержит необходимых полей
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingFields
    {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// некорректное значение свойства
    #[error("line {line}: {source}")]
    Property
    {
        line: usize,
        #[source]
        source: PropertiesError,
    },
    /// диапазон <..., First> без закрывающей строки <..., Last>
    #[error("line {line}: range {name:?} is not closed")]
    UnclosedRange
    {
        line: usize,
        name: String,
    },
    /// цепочка декомпозиций возвращается к исходному кодпоинту
    #[error("U+{code:04X}: cyclic decomposition")]
    CyclicDecomposition
    {
        code: u32,
    },
    /// заголовок сериализованного ресурса не совпадает
    #[error("not a serialized Unicode character database")]
    InvalidResource,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
}

impl UcdError
{
    /// привязать ошибку разбора свойства к номеру строки
    pub(crate) fn at_line(line: usize) -> impl Fn(PropertiesError) -> Self
    {
        move |source| Self::Property { line, source }
    }
}
