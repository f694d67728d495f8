use abdera_ucd::QuickCheck;

use crate::{Form, Normalizer};

impl<'a> Normalizer<'a>
{
    /// быстрая проверка (UAX #15): является ли строка нормализованной?
    ///  - No: нарушен канонический порядок или встретился кодпоинт со значением NF*_QC=No
    ///  - Maybe: встретился кодпоинт со значением NF*_QC=Maybe
    pub fn quick_check(&self, input: &str) -> QuickCheck
    {
        let checks = self.database().quick_checks();
        let mut last_ccc = 0;
        let mut result = QuickCheck::Yes;

        for char in input.chars() {
            let code = u32::from(char);

            // ASCII нормализован во всех формах
            if code < 0x80 {
                last_ccc = 0;
                continue;
            }

            let ccc = self.database().canonical_class(code);

            if last_ccc > ccc && ccc != 0 {
                return QuickCheck::No;
            }

            let check = match self.form() {
                Form::D => checks.nfd(code),
                Form::C => checks.nfc(code),
                Form::KD => checks.nfkd(code),
                Form::KC => checks.nfkc(code),
            };

            match check {
                QuickCheck::No => return QuickCheck::No,
                QuickCheck::Maybe => result = QuickCheck::Maybe,
                QuickCheck::Yes => (),
            }

            last_ccc = ccc;
        }

        result
    }

    /// является ли строка нормализованной? если быстрая проверка не дала ответа - нормализуем и сравниваем
    pub fn is_normalized(&self, input: &str) -> bool
    {
        match self.quick_check(input) {
            QuickCheck::Yes => true,
            QuickCheck::No => false,
            QuickCheck::Maybe => {
                tracing::trace!(form = %self.form(), len = input.len(), "quick check: maybe");

                self.normalize(input) == input
            }
        }
    }
}
