use core::fmt;
use core::str::FromStr;

use crate::NormalizationError;

/// декомпозиция совместимости
const MASK_COMPATIBILITY: u8 = 0b01;
/// каноническая композиция после декомпозиции
const MASK_COMPOSITION: u8 = 0b10;

/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Form
{
    /// каноническая декомпозиция
    D,
    /// каноническая декомпозиция, затем каноническая композиция
    C,
    /// декомпозиция совместимости
    KD,
    /// декомпозиция совместимости, затем каноническая композиция
    #[default]
    KC,
}

impl Form
{
    pub const ALL: [Form; 4] = [Form::D, Form::C, Form::KD, Form::KC];

    #[inline]
    const fn mask(self) -> u8
    {
        match self {
            Form::D => 0,
            Form::C => MASK_COMPOSITION,
            Form::KD => MASK_COMPATIBILITY,
            Form::KC => MASK_COMPATIBILITY | MASK_COMPOSITION,
        }
    }

    #[inline]
    pub const fn is_compatibility(self) -> bool
    {
        self.mask() & MASK_COMPATIBILITY != 0
    }

    #[inline]
    pub const fn is_canonical(self) -> bool
    {
        !self.is_compatibility()
    }

    #[inline]
    pub const fn is_composition(self) -> bool
    {
        self.mask() & MASK_COMPOSITION != 0
    }

    /// название формы, как в UAX #15
    pub const fn name(self) -> &'static str
    {
        match self {
            Form::D => "NFD",
            Form::C => "NFC",
            Form::KD => "NFKD",
            Form::KC => "NFKC",
        }
    }
}

impl fmt::Display for Form
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

impl FromStr for Form
{
    type Err = NormalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let name = s.trim().to_ascii_uppercase();
        let name = name.strip_prefix("NF").unwrap_or(&name);

        match name {
            "D" => Ok(Form::D),
            "C" => Ok(Form::C),
            "KD" => Ok(Form::KD),
            "KC" => Ok(Form::KC),
            _ => Err(NormalizationError::UnknownForm(s.to_owned())),
        }
    }
}
