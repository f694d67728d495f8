use std::collections::HashSet;

use crate::properties::parse_code;
use crate::unicode::strip_comment;
use crate::UcdError;

/// разбор CompositionExclusions.txt из UCD
/// исключения композиции не могут быть вычислены, этот список составляется консорциумом Unicode в ручном режиме
pub fn parse_composition_exclusions(data: &str) -> Result<HashSet<u32>, UcdError>
{
    let mut exclusions = HashSet::new();

    for (index, line) in data.lines().enumerate() {
        let line = strip_comment(line);

        if line.is_empty() {
            continue;
        }

        let at_line = UcdError::at_line(index + 1);

        // в DerivedNormalizationProps.txt встречаются диапазоны и свойства после `;`
        let (codes, _) = line.split_once(';').unwrap_or((line, ""));

        match codes.split_once("..") {
            Some((from, to)) => {
                let from = parse_code(from).map_err(&at_line)?;
                let to = parse_code(to).map_err(at_line)?;

                exclusions.extend(from ..= to);
            }
            None => {
                exclusions.insert(parse_code(codes).map_err(at_line)?);
            }
        }
    }

    Ok(exclusions)
}
