pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// группа бенчмарков: нормализатор на каждом тексте из папки
#[macro_export]
macro_rules! group {
    ($dir: expr, $fn: ident, $test: ident, $group: expr, $name: expr, $type: ty, $normalizer: expr) => {
        #[inline(never)]
        fn $test(normalizer: &$type, source: &str) -> String
        {
            normalizer.normalize(source)
        }

        fn $fn(c: &mut criterion::Criterion)
        {
            let mut group = c.benchmark_group($group);
            let normalizer = $normalizer;

            group.warm_up_time(core::time::Duration::from_secs($crate::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs($crate::MEASUREMENT_TIME));

            for data in $crate::read_dir($dir) {
                let text_name = data.0.as_str();
                let text = data.1.as_str();

                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    &(&normalizer, text),
                    |b, data| b.iter(|| $test(data.0, criterion::black_box(data.1))),
                );
            }

            group.finish();
        }
    };
}

/// прочитать папку с тестовыми текстами (путь относительно test_data)
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../test_data")
        .join(dir);

    let mut data: Vec<(String, String)> = vec![];

    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();

        let name = path.file_stem().unwrap().to_string_lossy().into_owned();

        data.push((name, read(&path, 1)));
    }

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// прочитать файл и повторить текст n + 1 раз
fn read(source: &std::path::Path, times: usize) -> String
{
    let buffer = std::fs::read_to_string(source).unwrap();

    let mut result = String::with_capacity(buffer.len() * (times + 1));

    for _ in 0 ..= times {
        result.push_str(buffer.as_str());
    }

    result
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn texts()
    {
        let texts = read_dir("texts");
        let decomposed = read_dir("texts_decomposed");

        assert!(!texts.is_empty());
        assert_eq!(
            texts.iter().map(|t| &t.0).collect::<Vec<_>>(),
            decomposed.iter().map(|t| &t.0).collect::<Vec<_>>()
        );
    }
}
