use abdera_normalization::{Form, Normalizer};
use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};

use crate::data::files;

/// нормализация ICU для формы
fn icu_normalize(form: Form, input: &str) -> String
{
    match form {
        Form::D => DecomposingNormalizer::new_nfd().normalize(input),
        Form::KD => DecomposingNormalizer::new_nfkd().normalize(input),
        Form::C => ComposingNormalizer::new_nfc().normalize(input),
        Form::KC => ComposingNormalizer::new_nfkc().normalize(input),
    }
}

fn icu_is_normalized(form: Form, input: &str) -> bool
{
    match form {
        Form::D => DecomposingNormalizer::new_nfd().is_normalized(input),
        Form::KD => DecomposingNormalizer::new_nfkd().is_normalized(input),
        Form::C => ComposingNormalizer::new_nfc().is_normalized(input),
        Form::KC => ComposingNormalizer::new_nfkc().is_normalized(input),
    }
}

/// все скалярные значения Unicode
fn scalars() -> impl Iterator<Item = char>
{
    (0 ..= 0x10FFFF).filter_map(char::from_u32)
}

/// сравниваем с результатами нормализации ICU по каждому символу
#[test]
fn icu_codepoints()
{
    for form in Form::ALL {
        let normalizer = Normalizer::new(form);

        for c in scalars() {
            let source = c.to_string();

            assert_eq!(
                normalizer.normalize(&source),
                icu_normalize(form, &source),
                "{} - U+{:04X}",
                form,
                c as u32
            );
        }
    }
}

/// символ, предварённый стартером и завершённый комбинируемым знаком
#[test]
fn icu_codepoints_in_context()
{
    for form in Form::ALL {
        let normalizer = Normalizer::new(form);

        for c in scalars() {
            let source = format!("a{}\u{0301}\u{0327}", c);

            assert_eq!(
                normalizer.normalize(&source),
                icu_normalize(form, &source),
                "{} - U+{:04X}",
                form,
                c as u32
            );
        }
    }
}

/// тексты на разных языках, исходные и декомпозированные
#[test]
fn icu_texts()
{
    for dir in ["texts", "texts_decomposed"] {
        for (name, text) in files(dir) {
            for form in Form::ALL {
                assert_eq!(
                    Normalizer::new(form).normalize(&text),
                    icu_normalize(form, &text),
                    "{} - {}/{}",
                    form,
                    dir,
                    name
                );
            }
        }
    }
}

/// is_normalized совпадает с ICU
#[test]
fn icu_is_normalized_texts()
{
    for dir in ["texts", "texts_decomposed"] {
        for (name, text) in files(dir) {
            for form in Form::ALL {
                assert_eq!(
                    Normalizer::new(form).is_normalized(&text),
                    icu_is_normalized(form, &text),
                    "{} - {}/{}",
                    form,
                    dir,
                    name
                );
            }
        }
    }
}

#[test]
fn icu_is_normalized_codepoints()
{
    for form in Form::ALL {
        let normalizer = Normalizer::new(form);

        for c in scalars() {
            let source = format!("{}\u{0334}", c);

            assert_eq!(
                normalizer.is_normalized(&source),
                icu_is_normalized(form, &source),
                "{} - U+{:04X}",
                form,
                c as u32
            );
        }
    }
}
