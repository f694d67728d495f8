use std::io::{self, Write};

use abdera_ucd::DatabaseStats;

/// информация о таблицах базы данных
pub fn print(out: &mut impl Write, name: &str, stats: &DatabaseStats) -> io::Result<()>
{
    writeln!(
        out,
        "\n{}:\n  \
        нестартеры: {}\n  \
        канонические декомпозиции: {}\n  \
        декомпозиции совместимости: {}\n  \
        композиции: {}\n  \
        исключения композиции: {}\n  \
        полные исключения композиции: {}",
        name,
        stats.nonstarters,
        stats.canonical_decompositions,
        stats.compatibility_decompositions,
        stats.compositions,
        stats.exclusions,
        stats.full_exclusions,
    )?;

    writeln!(out)
}
