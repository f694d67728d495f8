use crate::properties::*;
use crate::UcdError;

/// минимальное количество колонок строки UnicodeData.txt, которые нам нужны:
/// код, название, категория, CCC, Bidi класс, декомпозиция
const REQUIRED_FIELDS: usize = 6;

/// разбор UnicodeData.txt из UCD
///
/// диапазоны (`<..., First>` / `<..., Last>`) разворачиваются в отдельные кодпоинты,
/// кроме Private Use и суррогатов - у них нет ни CCC, ни декомпозиции
pub fn parse_unicode_data(data: &str) -> Result<Vec<Codepoint>, UcdError>
{
    let mut codepoints = vec![];

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<(usize, Codepoint)> = None;

    for (index, line) in data.lines().enumerate() {
        let line_number = index + 1;
        let line = strip_comment(line);

        if line.is_empty() {
            continue;
        }

        let props: Vec<&str> = line.split(';').collect();

        if props.len() < REQUIRED_FIELDS {
            return Err(UcdError::MissingFields {
                line: line_number,
                expected: REQUIRED_FIELDS,
                found: props.len(),
            });
        }

        let at_line = UcdError::at_line(line_number);

        let code = parse_code(props[0]).map_err(&at_line)?;
        let name = props[1].trim().to_owned();
        let ccc = CanonicalCombiningClass::try_from(props[3]).map_err(&at_line)?;
        let decomposition = Decomposition::try_from(props[5]).map_err(at_line)?;

        let codepoint = Codepoint {
            code,
            name,
            ccc,
            decomposition_tag: decomposition.tag,
            decomposition: decomposition.codes,
        };

        if codepoint.name.starts_with('<') && codepoint.name.ends_with("First>") {
            range_start = Some((line_number, codepoint));
            continue;
        }

        if codepoint.name.starts_with('<') && codepoint.name.ends_with("Last>") {
            let (_, first) = match range_start.take() {
                Some(start) => start,
                None => {
                    return Err(UcdError::UnclosedRange {
                        line: line_number,
                        name: codepoint.name,
                    })
                }
            };

            // сразу отсекаем Private Use и суррогатные пары
            if first.name.contains("Private Use") || first.name.contains("Surrogate") {
                continue;
            }

            let group_name = first
                .name
                .trim_start_matches('<')
                .trim_end_matches("First>")
                .trim_end_matches(&[',', ' '][..])
                .to_owned();

            for code in first.code ..= code {
                codepoints.push(Codepoint {
                    code,
                    name: format!("{} - {:X}", group_name, code),
                    ..first.clone()
                });
            }

            continue;
        }

        if let Some((line, first)) = range_start.take() {
            return Err(UcdError::UnclosedRange {
                line,
                name: first.name,
            });
        }

        codepoints.push(codepoint);
    }

    if let Some((line, first)) = range_start {
        return Err(UcdError::UnclosedRange {
            line,
            name: first.name,
        });
    }

    Ok(codepoints)
}

/// отрезать комментарий (от `#` до конца строки)
pub(crate) fn strip_comment(line: &str) -> &str
{
    match line.split_once('#') {
        Some((data, _)) => data.trim(),
        None => line.trim(),
    }
}
