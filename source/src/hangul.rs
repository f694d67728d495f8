// слоги хангыль раскладываются и собираются алгоритмически, в UnicodeData.txt их декомпозиций нет:
//  - LV:  S = S_BASE + (L * V_COUNT + V) * T_COUNT
//  - LVT: S = LV + T

/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// начало блока завершающих согласных
pub const HANGUL_T_BASE: u32 = 0x11A8;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных (на 1 больше - слог без завершающей согласной)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;

/// является ли кодпоинт слогом хангыль?
#[inline]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// последовательность (предполагаются 2 стартера) - чамо хангыль
#[inline]
pub fn compose_hangul(first: u32, second: u32) -> Option<u32>
{
    // кейс L, V

    let l = first.wrapping_sub(HANGUL_L_BASE);

    // кодпоинт является ведущей согласной чамо
    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        // второй кодпоинт - гласная
        if v < HANGUL_V_COUNT {
            return Some(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_COUNT);
        }
    }

    // кейс LV, T

    let lv = first.wrapping_sub(HANGUL_S_BASE);

    // первый кодпоинт - слог хангыль LV
    if lv < HANGUL_S_COUNT && lv % HANGUL_T_COUNT == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        // второй кодпоинт - завершающая согласная
        if t < HANGUL_T_COUNT - 1 {
            return Some(first + t + 1);
        }
    }

    None
}

/// декомпозиция слога хангыль, если кодпоинт - не слог, возвращаем false
#[inline]
pub fn decompose_hangul(code: u32, result: &mut Vec<u32>) -> bool
{
    let s = code.wrapping_sub(HANGUL_S_BASE);

    if s >= HANGUL_S_COUNT {
        return false;
    }

    let l = s / HANGUL_N_COUNT;
    let v = (s % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = s % HANGUL_T_COUNT;

    result.push(HANGUL_L_BASE + l);
    result.push(HANGUL_V_BASE + v);

    if t != 0 {
        result.push(HANGUL_T_BASE + t - 1);
    }

    true
}

/// является ли кодпоинт гласной или завершающей согласной чамо?
/// такие кодпоинты комбинируются с предыдущими
#[inline]
pub fn is_composable_hangul_jamo(code: u32) -> bool
{
    let v = code.wrapping_sub(HANGUL_V_BASE);
    let t = code.wrapping_sub(HANGUL_T_BASE);

    (v < HANGUL_V_COUNT) || (t < HANGUL_T_COUNT - 1)
}
