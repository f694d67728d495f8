use serde::{Deserialize, Serialize};

use crate::PropertiesError;

/// декомпозиция
/// берется из UCD: 5 колонка UnicodeData.txt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition
{
    /// декомпозиция (один уровень, элементы могут иметь свою декомпозицию)
    pub codes: Vec<u32>,
    /// тег декомпозиции, если есть - декомпозиция совместимости
    pub tag: Option<DecompositionTag>,
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        let (tag_string, decomposition_string) = match value.starts_with('<') {
            true => match value.split_once('>') {
                Some((tag, rest)) => (&value[.. tag.len() + 1], rest),
                None => return Err(PropertiesError::UnknownPropertyValue(value.to_owned())),
            },
            false => ("", value),
        };

        let tag = match !tag_string.is_empty() {
            true => Some(DecompositionTag::try_from(tag_string)?),
            false => None,
        };

        let codes = decomposition_string
            .split_whitespace()
            .map(parse_code)
            .collect::<Result<Vec<u32>, PropertiesError>>()?;

        if tag.is_some() && codes.is_empty() {
            return Err(PropertiesError::UnknownPropertyValue(value.to_owned()));
        }

        Ok(Self { codes, tag })
    }
}

/// разобрать шестнадцатеричный код символа
pub fn parse_code(value: &str) -> Result<u32, PropertiesError>
{
    let value = value.trim();

    match u32::from_str_radix(value, 16) {
        Ok(code) if code <= 0x10FFFF => Ok(code),
        _ => Err(PropertiesError::InvalidCodepoint(value.to_owned())),
    }
}

/// тег декомпозиции
/// берется из UCD: 5 колонка UnicodeData.txt
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font = 0,
    /// неразрывная версия пробела или дефиса
    NoBreak = 1,
    /// начальная форма представления (арабский)
    Initial = 2,
    /// средняя форма представления (арабский)
    Medial = 3,
    /// конечная форма представления (арабский)
    Final = 4,
    /// изолированная форма представления (арабский)
    Isolated = 5,
    /// окруженная форма
    Circle = 6,
    /// надстрочная форма
    Super = 7,
    /// подстрочная форма
    Sub = 8,
    /// вертикальная форма представления
    Vertical = 9,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide = 10,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow = 11,
    /// малая вариантная форма (совместимость CNS)
    Small = 12,
    /// вариант шрифта в квадрате CJK
    Square = 13,
    /// форма обыкновенной дроби
    Fraction = 14,
    /// неопределенный символ для обеспечения совместимости
    Compat = 15,
}

impl TryFrom<&str> for DecompositionTag
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "<font>" => Self::Font,
            "<noBreak>" => Self::NoBreak,
            "<initial>" => Self::Initial,
            "<medial>" => Self::Medial,
            "<final>" => Self::Final,
            "<isolated>" => Self::Isolated,
            "<circle>" => Self::Circle,
            "<super>" => Self::Super,
            "<sub>" => Self::Sub,
            "<vertical>" => Self::Vertical,
            "<wide>" => Self::Wide,
            "<narrow>" => Self::Narrow,
            "<small>" => Self::Small,
            "<square>" => Self::Square,
            "<fraction>" => Self::Fraction,
            "<compat>" => Self::Compat,
            _ => return Err(PropertiesError::UnknownPropertyValue(abbr.to_owned())),
        })
    }
}

impl core::fmt::Display for DecompositionTag
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            DecompositionTag::Font => "<font>",
            DecompositionTag::NoBreak => "<noBreak>",
            DecompositionTag::Initial => "<initial>",
            DecompositionTag::Medial => "<medial>",
            DecompositionTag::Final => "<final>",
            DecompositionTag::Isolated => "<isolated>",
            DecompositionTag::Circle => "<circle>",
            DecompositionTag::Super => "<super>",
            DecompositionTag::Sub => "<sub>",
            DecompositionTag::Vertical => "<vertical>",
            DecompositionTag::Wide => "<wide>",
            DecompositionTag::Narrow => "<narrow>",
            DecompositionTag::Small => "<small>",
            DecompositionTag::Square => "<square>",
            DecompositionTag::Fraction => "<fraction>",
            DecompositionTag::Compat => "<compat>",
        };

        write!(f, "{}", value)
    }
}
