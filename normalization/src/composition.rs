use abdera_ucd::UnicodeCharacterDatabase;

use crate::codepoint::Codepoint;

/// CCC, который не может быть меньше CCC следующего кодпоинта - буфер начинается с нестартера
const BLOCKED: u16 = 256;

/// каноническая композиция декомпозированного и упорядоченного буфера (на месте).
///
/// кодпоинт комбинируется с последним стартером, если между ними нет кодпоинта с тем же или большим CCC,
/// два стартера комбинируются, только если они соседние
pub fn compose(database: &UnicodeCharacterDatabase, buffer: &mut Vec<Codepoint>)
{
    if buffer.is_empty() {
        return;
    }

    let mut starter_position = 0;
    let mut starter = buffer[0].code();

    let mut last_ccc = match buffer[0].is_starter() {
        true => 0,
        false => BLOCKED,
    };

    let mut write_position = 1;

    for read_position in 1 .. buffer.len() {
        let codepoint = buffer[read_position];
        let ccc = codepoint.ccc() as u16;

        let composite = match last_ccc < ccc || last_ccc == 0 {
            true => database.pair_composition(starter, codepoint.code()),
            false => None,
        };

        match composite {
            Some(composite) => {
                // результат канонической композиции всегда стартер
                buffer[starter_position] = Codepoint::from_code(composite);
                starter = composite;
            }
            None => {
                if ccc == 0 {
                    starter_position = write_position;
                    starter = codepoint.code();
                }

                last_ccc = ccc;
                buffer[write_position] = codepoint;
                write_position += 1;
            }
        }
    }

    buffer.truncate(write_position);
}
