mod canonical_combining_class;
mod decomposition;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::parse_code;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;

/// Кодпоинт Unicode
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// тег декомпозиции
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция
    pub decomposition: Vec<u32>,
}

impl Codepoint
{
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.ccc.is_starter()
    }

    #[inline]
    pub fn is_nonstarter(&self) -> bool
    {
        self.ccc.is_non_starter()
    }

    /// декомпозиция совместимости?
    #[inline]
    pub fn is_compatibility(&self) -> bool
    {
        self.decomposition_tag.is_some()
    }
}
