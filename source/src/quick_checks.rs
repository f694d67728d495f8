use std::collections::HashMap;

use crate::hangul::is_hangul_syllable;
use crate::UnicodeCharacterDatabase;

/// значение свойства быстрой проверки (NF*_Quick_Check)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickCheck
{
    Yes,
    No,
    Maybe,
}

/// таблицы быстрых проверок. хранятся только кодпоинты со значением, отличным от Yes
///
/// в UCD эти свойства записаны в DerivedNormalizationProps.txt, здесь мы вычисляем их по базе:
///  - NFD_QC=N: есть каноническая декомпозиция
///  - NFKD_QC=N: есть любая декомпозиция
///  - NFC_QC=N: Full_Composition_Exclusion, NFC_QC=M: кодпоинт комбинируется с предыдущим
///  - NFKC_QC=N: как NFC, а также полная декомпозиция совместимости отличается от канонической
#[derive(Debug, Default, Clone)]
pub struct QuickChecks
{
    nfd: HashMap<u32, QuickCheck>,
    nfkd: HashMap<u32, QuickCheck>,
    nfc: HashMap<u32, QuickCheck>,
    nfkc: HashMap<u32, QuickCheck>,
}

impl QuickChecks
{
    /// вычислить таблицы по базе данных
    pub fn derive(database: &UnicodeCharacterDatabase) -> Self
    {
        let mut tables = Self::default();

        let mut canonical = vec![];
        let mut compatibility = vec![];

        for code in database.decomposing_codepoints() {
            if database.has_decomposition(code, true) {
                tables.nfd.insert(code, QuickCheck::No);
            }

            tables.nfkd.insert(code, QuickCheck::No);

            if database.is_full_composition_exclusion(code) {
                tables.nfc.insert(code, QuickCheck::No);
                tables.nfkc.insert(code, QuickCheck::No);

                continue;
            }

            canonical.clear();
            compatibility.clear();

            database.decompose(code, true, &mut canonical);
            database.decompose(code, false, &mut compatibility);

            if canonical != compatibility {
                tables.nfkc.insert(code, QuickCheck::No);
            }
        }

        // Maybe не перекрывает No
        for code in database.backward_combining_codepoints() {
            tables.nfc.entry(code).or_insert(QuickCheck::Maybe);
            tables.nfkc.entry(code).or_insert(QuickCheck::Maybe);
        }

        tables
    }

    #[inline]
    pub fn nfd(&self, code: u32) -> QuickCheck
    {
        match is_hangul_syllable(code) {
            true => QuickCheck::No,
            false => lookup(&self.nfd, code),
        }
    }

    #[inline]
    pub fn nfkd(&self, code: u32) -> QuickCheck
    {
        match is_hangul_syllable(code) {
            true => QuickCheck::No,
            false => lookup(&self.nfkd, code),
        }
    }

    #[inline]
    pub fn nfc(&self, code: u32) -> QuickCheck
    {
        lookup(&self.nfc, code)
    }

    #[inline]
    pub fn nfkc(&self, code: u32) -> QuickCheck
    {
        lookup(&self.nfkc, code)
    }
}

#[inline(always)]
fn lookup(table: &HashMap<u32, QuickCheck>, code: u32) -> QuickCheck
{
    match table.get(&code) {
        Some(&value) => value,
        None => QuickCheck::Yes,
    }
}
