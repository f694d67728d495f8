use std::fs;
use std::path::{Path, PathBuf};

/// строка NormalizationTest.txt
#[derive(Debug)]
pub struct NormalizationTest
{
    pub part: String,
    pub description: String,
    pub line: usize,
    pub c1: String,
    pub c2: String,
    pub c3: String,
    pub c4: String,
    pub c5: String,
}

/// папка с тестовыми данными
pub fn test_data() -> PathBuf
{
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../test_data")
}

/// данные на разных языках для тестов
pub fn files(dir: &str) -> Vec<(String, String)>
{
    let dir = fs::read_dir(test_data().join(dir)).unwrap();

    let mut data = vec![];

    for entry in dir {
        let path = entry.unwrap().path();

        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let text = fs::read_to_string(&path).unwrap();

        data.push((name, text));
    }

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// разбор NormalizationTest.txt
pub fn normalization_tests() -> Vec<NormalizationTest>
{
    let data = fs::read_to_string(test_data().join("NormalizationTest.txt")).unwrap();

    let mut result = vec![];
    let mut part = String::new();

    for (i, line) in data.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('@') {
            part = line.to_owned();
            continue;
        }

        let (codes, description) = line.split_once('#').unwrap_or((line, ""));
        let codes: Vec<&str> = codes.split(';').collect();

        assert!(codes.len() >= 5, "строка {}: ожидается 5 колонок", i + 1);

        macro_rules! codes {
            ($str: expr) => {
                $str.split_whitespace()
                    .map(|v| char::from_u32(u32::from_str_radix(v, 16).unwrap()).unwrap())
                    .collect()
            };
        }

        result.push(NormalizationTest {
            part: part.clone(),
            description: description.trim().to_owned(),
            line: i + 1,
            c1: codes!(codes[0]),
            c2: codes!(codes[1]),
            c3: codes!(codes[2]),
            c4: codes!(codes[3]),
            c5: codes!(codes[4]),
        });
    }

    result
}
