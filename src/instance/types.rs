//! The employee record and synthetic instance generation.

use rand::Rng;

/// One employee in the input sequence.
///
/// Immutable once constructed. A team is always a contiguous sub-range of
/// the employee sequence; partitions never reorder or skip employees.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    /// Productivity when the team's chosen language is this employee's
    /// favorite.
    pub primary: i64,

    /// Productivity under any other language.
    pub secondary: i64,

    /// The favorite language token.
    pub language: String,
}

impl Employee {
    pub fn new(primary: i64, secondary: i64, language: impl Into<String>) -> Self {
        Self {
            primary,
            secondary,
            language: language.into(),
        }
    }
}

/// Language pool used for synthetic instances.
pub const LANGUAGE_POOL: &[&str] = &[
    "cpp", "python", "java", "javascript", "go", "rust", "c", "csharp", "ruby", "php", "swift",
    "kotlin", "typescript", "scala", "haskell", "perl",
];

/// Generates a random instance of `n` employees.
///
/// Productivity values are drawn uniformly from `lo..=hi`; favorite
/// languages come from [`LANGUAGE_POOL`]. Used by tests and benchmarks;
/// pass a seeded RNG for reproducibility.
pub fn random_instance<R: Rng>(rng: &mut R, n: usize, lo: i64, hi: i64) -> Vec<Employee> {
    (0..n)
        .map(|_| {
            let lang = LANGUAGE_POOL[rng.random_range(0..LANGUAGE_POOL.len())];
            Employee::new(
                rng.random_range(lo..=hi),
                rng.random_range(lo..=hi),
                lang,
            )
        })
        .collect()
}
