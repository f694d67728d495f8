use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::composition_exclusions::parse_composition_exclusions;
use crate::hangul::*;
use crate::quick_checks::QuickChecks;
use crate::unicode::parse_unicode_data;
use crate::UcdError;

/// заголовок сериализованного ресурса
const RESOURCE_MAGIC: &[u8; 4] = b"UCD\x01";

/// последний кодпоинт Unicode
const LAST_CODEPOINT: u32 = 0x10FFFF;

/// база данных Unicode - данные для нормализации:
///  - классы канонического комбинирования
///  - декомпозиции (один уровень, как в UnicodeData.txt)
///  - пары для канонической композиции
///
/// слоги хангыль в таблицах отсутствуют, они обрабатываются алгоритмически
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UnicodeCharacterDatabase
{
    /// CCC, отсутствующие кодпоинты - стартеры
    ccc: HashMap<u32, u8>,
    /// декомпозиции
    decompositions: HashMap<u32, Vec<u32>>,
    /// кодпоинты с декомпозицией совместимости
    compatibility: HashSet<u32>,
    /// исключения композиции (CompositionExclusions.txt)
    exclusions: HashSet<u32>,
    /// композиции: (первый << 32 | второй) -> результат
    compositions: HashMap<u64, u32>,
    /// кодпоинты, которые комбинируются с предыдущими
    #[serde(skip)]
    seconds: HashSet<u32>,
    /// быстрые проверки, вычисляются по таблицам выше
    #[serde(skip)]
    quick_checks: QuickChecks,
}

/// количество записей в таблицах
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatabaseStats
{
    pub nonstarters: usize,
    pub canonical_decompositions: usize,
    pub compatibility_decompositions: usize,
    pub compositions: usize,
    pub exclusions: usize,
    pub full_exclusions: usize,
}

#[inline(always)]
fn pair_key(first: u32, second: u32) -> u64
{
    (first as u64) << 32 | second as u64
}

impl UnicodeCharacterDatabase
{
    /// собрать базу из UnicodeData.txt и CompositionExclusions.txt
    pub fn from_sources(unicode_data: &str, exclusions: &str) -> Result<Self, UcdError>
    {
        let codepoints = parse_unicode_data(unicode_data)?;
        let exclusions = parse_composition_exclusions(exclusions)?;

        let mut database = Self {
            exclusions,
            ..Self::default()
        };

        for codepoint in codepoints.iter() {
            if codepoint.is_nonstarter() {
                database.ccc.insert(codepoint.code, codepoint.ccc.u8());
            }

            if codepoint.decomposition.is_empty() {
                continue;
            }

            if codepoint.is_compatibility() {
                database.compatibility.insert(codepoint.code);
            }

            database
                .decompositions
                .insert(codepoint.code, codepoint.decomposition.clone());
        }

        // пары для композиции: каноническая декомпозиция из 2х кодпоинтов, которая не является исключением
        // (синглтоны в пары не попадают - у них декомпозиция из одного кодпоинта)
        let mut compositions = HashMap::new();

        for (&code, decomposition) in database.decompositions.iter() {
            if decomposition.len() != 2
                || database.compatibility.contains(&code)
                || database.is_full_composition_exclusion(code)
            {
                continue;
            }

            compositions.insert(pair_key(decomposition[0], decomposition[1]), code);
        }

        database.compositions = compositions;
        database.check_decompositions()?;
        database.derive_tables();

        tracing::debug!(
            codepoints = codepoints.len(),
            decompositions = database.decompositions.len(),
            compositions = database.compositions.len(),
            exclusions = database.exclusions.len(),
            "built unicode character database"
        );

        Ok(database)
    }

    /// встроенные данные UCD
    #[inline]
    pub fn builtin() -> &'static Self
    {
        &crate::UNICODE_DATABASE
    }

    /// рекурсивная декомпозиция должна завершаться: ни одна цепочка декомпозиций
    /// не может вернуться к уже раскладываемому кодпоинту
    fn check_decompositions(&self) -> Result<(), UcdError>
    {
        #[derive(Clone, Copy, PartialEq)]
        enum Visit
        {
            InProgress,
            Done,
        }

        let mut visits: HashMap<u32, Visit> = HashMap::with_capacity(self.decompositions.len());
        let mut stack: Vec<(u32, usize)> = vec![];

        for &root in self.decompositions.keys() {
            if visits.contains_key(&root) {
                continue;
            }

            visits.insert(root, Visit::InProgress);
            stack.push((root, 0));

            while let Some(&(code, index)) = stack.last() {
                let element = self
                    .decompositions
                    .get(&code)
                    .and_then(|decomposition| decomposition.get(index))
                    .copied();

                let element = match element {
                    Some(element) => element,
                    None => {
                        visits.insert(code, Visit::Done);
                        stack.pop();
                        continue;
                    }
                };

                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }

                if !self.decompositions.contains_key(&element) {
                    continue;
                }

                match visits.get(&element) {
                    Some(Visit::InProgress) => {
                        return Err(UcdError::CyclicDecomposition { code: element });
                    }
                    Some(Visit::Done) => (),
                    None => {
                        visits.insert(element, Visit::InProgress);
                        stack.push((element, 0));
                    }
                }
            }
        }

        Ok(())
    }

    /// вычисляемые таблицы (не сериализуются)
    fn derive_tables(&mut self)
    {
        let mut seconds: HashSet<u32> = self.compositions.keys().map(|&key| key as u32).collect();

        seconds.extend(
            (HANGUL_V_BASE .. HANGUL_T_BASE + HANGUL_T_COUNT)
                .filter(|&code| is_composable_hangul_jamo(code)),
        );

        self.seconds = seconds;
        self.quick_checks = QuickChecks::derive(self);
    }

    /// класс канонического комбинирования
    #[inline]
    pub fn canonical_class(&self, code: u32) -> u8
    {
        match self.ccc.get(&code) {
            Some(&ccc) => ccc,
            None => 0,
        }
    }

    /// результат канонической композиции пары кодпоинтов (включая хангыль)
    #[inline]
    pub fn pair_composition(&self, first: u32, second: u32) -> Option<u32>
    {
        if first > LAST_CODEPOINT || second > LAST_CODEPOINT {
            return None;
        }

        match compose_hangul(first, second) {
            Some(code) => Some(code),
            None => self.compositions.get(&pair_key(first, second)).copied(),
        }
    }

    /// комбинируется ли пара кодпоинтов?
    #[inline]
    pub fn is_composite(&self, first: u32, second: u32) -> bool
    {
        self.pair_composition(first, second).is_some()
    }

    /// может ли кодпоинт быть скомбинирован с предыдущим?
    #[inline]
    pub fn combines_backwards(&self, code: u32) -> bool
    {
        self.seconds.contains(&code)
    }

    /// декомпозиция одного уровня, как она записана в UnicodeData.txt
    #[inline]
    pub fn decomposition(&self, code: u32) -> Option<&[u32]>
    {
        self.decompositions.get(&code).map(Vec::as_slice)
    }

    /// есть ли у кодпоинта декомпозиция (каноническая или любая)?
    #[inline]
    pub fn has_decomposition(&self, code: u32, canonical: bool) -> bool
    {
        if is_hangul_syllable(code) {
            return true;
        }

        match self.decompositions.contains_key(&code) {
            true => !(canonical && self.compatibility.contains(&code)),
            false => false,
        }
    }

    /// декомпозиция совместимости?
    #[inline]
    pub fn is_compatibility(&self, code: u32) -> bool
    {
        self.compatibility.contains(&code)
    }

    /// полная (рекурсивная) декомпозиция кодпоинта, дописывается в result.
    /// если декомпозиции нет - дописываем сам кодпоинт
    pub fn decompose(&self, code: u32, canonical: bool, result: &mut Vec<u32>)
    {
        if decompose_hangul(code, result) {
            return;
        }

        match self.decompositions.get(&code) {
            Some(decomposition) if !(canonical && self.compatibility.contains(&code)) => {
                for &element in decomposition.iter() {
                    self.decompose(element, canonical, result);
                }
            }
            _ => result.push(code),
        }
    }

    /// исключение композиции из списка CompositionExclusions.txt?
    #[inline]
    pub fn is_composition_exclusion(&self, code: u32) -> bool
    {
        self.exclusions.contains(&code)
    }

    /// Full_Composition_Exclusion: каноническая декомпозиция кодпоинта не собирается обратно.
    ///  - исключения из CompositionExclusions.txt
    ///  - синглтоны
    ///  - декомпозиции нестартеров и декомпозиции, начинающиеся с нестартера
    pub fn is_full_composition_exclusion(&self, code: u32) -> bool
    {
        if self.compatibility.contains(&code) {
            return false;
        }

        let decomposition = match self.decompositions.get(&code) {
            Some(decomposition) => decomposition,
            None => return false,
        };

        self.exclusions.contains(&code)
            || decomposition.len() == 1
            || self.canonical_class(code) != 0
            || self.canonical_class(decomposition[0]) != 0
    }

    /// быстрые проверки
    #[inline]
    pub fn quick_checks(&self) -> &QuickChecks
    {
        &self.quick_checks
    }

    /// все кодпоинты, которые комбинируются с предыдущими
    pub fn backward_combining_codepoints(&self) -> impl Iterator<Item = u32> + '_
    {
        self.seconds.iter().copied()
    }

    /// все кодпоинты, у которых есть декомпозиция
    pub fn decomposing_codepoints(&self) -> impl Iterator<Item = u32> + '_
    {
        self.decompositions.keys().copied()
    }

    /// количество записей в таблицах
    pub fn stats(&self) -> DatabaseStats
    {
        DatabaseStats {
            nonstarters: self.ccc.len(),
            canonical_decompositions: self.decompositions.len() - self.compatibility.len(),
            compatibility_decompositions: self.compatibility.len(),
            compositions: self.compositions.len(),
            exclusions: self.exclusions.len(),
            full_exclusions: self
                .decompositions
                .keys()
                .filter(|&&code| self.is_full_composition_exclusion(code))
                .count(),
        }
    }

    /// записать базу в виде сериализованного ресурса
    pub fn save<W: Write>(&self, mut writer: W) -> Result<(), UcdError>
    {
        writer.write_all(RESOURCE_MAGIC)?;
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;

        Ok(())
    }

    /// прочитать базу из сериализованного ресурса
    pub fn load<R: Read>(mut reader: R) -> Result<Self, UcdError>
    {
        let mut magic = [0u8; 4];

        reader.read_exact(&mut magic).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => UcdError::InvalidResource,
            _ => UcdError::Io(e),
        })?;

        if &magic != RESOURCE_MAGIC {
            return Err(UcdError::InvalidResource);
        }

        let mut database: Self = bincode::deserialize_from(reader)?;
        database.check_decompositions()?;
        database.derive_tables();

        Ok(database)
    }

    /// записать ресурс в файл
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), UcdError>
    {
        let path = path.as_ref();

        self.save(BufWriter::new(File::create(path)?))?;

        tracing::info!(path = %path.display(), "saved unicode character database");

        Ok(())
    }

    /// прочитать ресурс из файла
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, UcdError>
    {
        let path = path.as_ref();
        let database = Self::load(BufReader::new(File::open(path)?))?;

        tracing::info!(
            path = %path.display(),
            decompositions = database.decompositions.len(),
            "loaded unicode character database"
        );

        Ok(database)
    }
}
