//! Character categories and the pooled character set.

use std::sync::LazyLock;

const DIGITS: &[u8] = b"0123456789";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A character class every generated password must sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Digit,
    Uppercase,
    Lowercase,
    Symbol,
}

impl Category {
    /// Every category, in seeding order.
    pub const ALL: [Category; 4] = [
        Category::Digit,
        Category::Uppercase,
        Category::Lowercase,
        Category::Symbol,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Member characters, all printable ASCII.
    pub const fn members(self) -> &'static [u8] {
        match self {
            Category::Digit => DIGITS,
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Symbol => SYMBOLS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Digit => "digit",
            Category::Uppercase => "uppercase letter",
            Category::Lowercase => "lowercase letter",
            Category::Symbol => "symbol",
        }
    }

    /// Category containing `c`, if any.
    pub fn of(c: char) -> Option<Category> {
        if !c.is_ascii() {
            return None;
        }
        let byte = c as u8;
        Self::ALL
            .into_iter()
            .find(|category| category.members().contains(&byte))
    }
}

static POOL: LazyLock<Vec<u8>> = LazyLock::new(|| {
    Category::ALL
        .iter()
        .flat_map(|category| category.members())
        .copied()
        .collect()
});

/// Union of every category's members, in `Category::ALL` order.
pub fn pool() -> &'static [u8] {
    &POOL
}

/// True when `password` has at least one character from each category.
pub fn covers_all(password: &str) -> bool {
    Category::ALL
        .into_iter()
        .all(|category| password.chars().any(|c| Category::of(c) == Some(category)))
}
