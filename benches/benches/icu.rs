use abdera_normalization_benches::group;
use criterion::{criterion_group, criterion_main};
use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};

group!("texts", nfd, test_nfd, "nfd", "icu", DecomposingNormalizer, DecomposingNormalizer::new_nfd());
group!("texts", nfkd, test_nfkd, "nfkd", "icu", DecomposingNormalizer, DecomposingNormalizer::new_nfkd());
group!("texts", nfc, test_nfc, "nfc", "icu", ComposingNormalizer, ComposingNormalizer::new_nfc());
group!("texts", nfkc, test_nfkc, "nfkc", "icu", ComposingNormalizer, ComposingNormalizer::new_nfkc());
group!("texts_decomposed", dec, test_dec, "dec", "icu", ComposingNormalizer, ComposingNormalizer::new_nfc());

criterion_group!(benches, nfd, nfkd, nfc, nfkc, dec);
criterion_main!(benches);
