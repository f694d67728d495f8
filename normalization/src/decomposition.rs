use abdera_ucd::UnicodeCharacterDatabase;

use crate::codepoint::Codepoint;

/// до этого кодпоинта декомпозиции нет ни в одной из форм, все кодпоинты - стартеры
const FIRST_DECOMPOSING_CODE: u32 = 0xA0;

/// декомпозиция строки в буфер с каноническим упорядочиванием.
/// нестартеры вставляются после последнего кодпоинта с CCC, не превышающим их собственный
pub fn decompose(
    database: &UnicodeCharacterDatabase,
    input: &str,
    canonical: bool,
    buffer: &mut Vec<Codepoint>,
)
{
    let mut expansion: Vec<u32> = Vec::with_capacity(18);

    for char in input.chars() {
        let code = u32::from(char);

        if code < FIRST_DECOMPOSING_CODE {
            buffer.push(Codepoint::from_code(code));
            continue;
        }

        expansion.clear();
        database.decompose(code, canonical, &mut expansion);

        for &code in expansion.iter() {
            let codepoint = Codepoint::from_code_and_ccc(code, database.canonical_class(code));

            insert_ordered(buffer, codepoint);
        }
    }
}

/// вставка с сохранением канонического порядка (устойчивая сортировка по CCC внутри последовательности нестартеров)
#[inline(always)]
fn insert_ordered(buffer: &mut Vec<Codepoint>, codepoint: Codepoint)
{
    if codepoint.is_starter() {
        buffer.push(codepoint);
        return;
    }

    let ccc = codepoint.ccc();
    let mut index = buffer.len();

    while index > 0 && buffer[index - 1].ccc() > ccc {
        index -= 1;
    }

    buffer.insert(index, codepoint);
}
