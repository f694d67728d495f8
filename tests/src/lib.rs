//! проверки нормализации на общих данных: тесты в формате NormalizationTest.txt,
//! сравнение с ICU4X и тексты на разных языках

pub mod data;

#[cfg(test)]
mod icu;
#[cfg(test)]
mod ucd;
