use abdera_normalization::{Form, Normalizer};

use crate::data::normalization_tests;

macro_rules! test {
    ($left: expr, $right: expr, $normalizer: expr, $test: expr, $str: expr) => {
        assert_eq!(
            $left,
            $normalizer.normalize(&$right),
            $str,
            $test.line,
            $test.description
        );
    };
}

/// тесты NFC нормализации
#[test]
fn ucd_test_nfc()
{
    // c2 ==  toNFC(c1) ==  toNFC(c2) ==  toNFC(c3)
    // c4 ==  toNFC(c4) ==  toNFC(c5)

    let normalizer = Normalizer::new(Form::C);

    for t in normalization_tests().iter() {
        test!(t.c2, t.c1, normalizer, t, "{} {}: c2 == toNFC(c1)");
        test!(t.c2, t.c2, normalizer, t, "{} {}: c2 == toNFC(c2)");
        test!(t.c2, t.c3, normalizer, t, "{} {}: c2 == toNFC(c3)");
        test!(t.c4, t.c4, normalizer, t, "{} {}: c4 == toNFC(c4)");
        test!(t.c4, t.c5, normalizer, t, "{} {}: c4 == toNFC(c5)");
    }
}

/// тесты NFD нормализации
#[test]
fn ucd_test_nfd()
{
    // c3 ==  toNFD(c1) ==  toNFD(c2) ==  toNFD(c3)
    // c5 ==  toNFD(c4) ==  toNFD(c5)

    let normalizer = Normalizer::new(Form::D);

    for t in normalization_tests().iter() {
        test!(t.c3, t.c1, normalizer, t, "{} {}: c3 == toNFD(c1)");
        test!(t.c3, t.c2, normalizer, t, "{} {}: c3 == toNFD(c2)");
        test!(t.c3, t.c3, normalizer, t, "{} {}: c3 == toNFD(c3)");
        test!(t.c5, t.c4, normalizer, t, "{} {}: c5 == toNFD(c4)");
        test!(t.c5, t.c5, normalizer, t, "{} {}: c5 == toNFD(c5)");
    }
}

/// тесты NFKC нормализации
#[test]
fn ucd_test_nfkc()
{
    // c4 == toNFKC(c1) == toNFKC(c2) == toNFKC(c3) == toNFKC(c4) == toNFKC(c5)

    let normalizer = Normalizer::new(Form::KC);

    for t in normalization_tests().iter() {
        test!(t.c4, t.c1, normalizer, t, "{} {}: c4 == toNFKC(c1)");
        test!(t.c4, t.c2, normalizer, t, "{} {}: c4 == toNFKC(c2)");
        test!(t.c4, t.c3, normalizer, t, "{} {}: c4 == toNFKC(c3)");
        test!(t.c4, t.c4, normalizer, t, "{} {}: c4 == toNFKC(c4)");
        test!(t.c4, t.c5, normalizer, t, "{} {}: c4 == toNFKC(c5)");
    }
}

/// тесты NFKD нормализации
#[test]
fn ucd_test_nfkd()
{
    // c5 == toNFKD(c1) == toNFKD(c2) == toNFKD(c3) == toNFKD(c4) == toNFKD(c5)

    let normalizer = Normalizer::new(Form::KD);

    for t in normalization_tests().iter() {
        test!(t.c5, t.c1, normalizer, t, "{} {}: c5 == toNFKD(c1)");
        test!(t.c5, t.c2, normalizer, t, "{} {}: c5 == toNFKD(c2)");
        test!(t.c5, t.c3, normalizer, t, "{} {}: c5 == toNFKD(c3)");
        test!(t.c5, t.c4, normalizer, t, "{} {}: c5 == toNFKD(c4)");
        test!(t.c5, t.c5, normalizer, t, "{} {}: c5 == toNFKD(c5)");
    }
}

/// нормализованные колонки проходят быструю проверку
#[test]
fn ucd_test_is_normalized()
{
    for t in normalization_tests().iter() {
        assert!(Normalizer::nfc().is_normalized(&t.c2), "{}: {}", t.line, t.description);
        assert!(Normalizer::nfd().is_normalized(&t.c3), "{}: {}", t.line, t.description);
        assert!(Normalizer::nfkc().is_normalized(&t.c4), "{}: {}", t.line, t.description);
        assert!(Normalizer::nfkd().is_normalized(&t.c5), "{}: {}", t.line, t.description);
    }
}

#[test]
fn ucd_test_parts()
{
    let tests = normalization_tests();

    for part in ["@Part0", "@Part1", "@Part2", "@Part3"] {
        assert!(tests.iter().any(|t| t.part.starts_with(part)), "{}", part);
    }
}

/// нормализатор на базе, прочитанной из сериализованного ресурса
#[test]
fn ucd_test_resource()
{
    use abdera_ucd::UnicodeCharacterDatabase;

    let mut resource = vec![];
    UnicodeCharacterDatabase::builtin().save(&mut resource).unwrap();

    let database = UnicodeCharacterDatabase::load(resource.as_slice()).unwrap();

    let nfc = Normalizer::with_database(&database, Form::C);
    let nfkd = Normalizer::with_database(&database, Form::KD);

    for t in normalization_tests().iter() {
        test!(t.c2, t.c1, nfc, t, "{} {}: c2 == toNFC(c1)");
        test!(t.c5, t.c1, nfkd, t, "{} {}: c5 == toNFKD(c1)");
        assert!(nfc.is_normalized(&t.c2), "{}: {}", t.line, t.description);
    }
}

/// стартер, отделённый от следующего стартера комбинируемым знаком, с ним не комбинируется
#[test]
fn ucd_test_blocked_starters()
{
    let tests = normalization_tests();
    let part3: Vec<_> = tests.iter().filter(|t| t.part.starts_with("@Part3")).collect();

    assert!(!part3.is_empty());

    for t in part3 {
        test!(t.c2, t.c1, Normalizer::nfc(), t, "{} {}: c2 == toNFC(c1)");
        test!(t.c4, t.c1, Normalizer::nfkc(), t, "{} {}: c4 == toNFKC(c1)");
    }
}
