//! Plural form selection for numerus messages.
//!
//! Qt stores numerus translations as an ordered list of forms whose count and
//! meaning depend on the target language. [`numerus_form`] maps a language
//! code and a count to the index of the form to use.

/// Plural rule families, grouped by how many forms they use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumerusRule {
    /// One form for every count (Japanese, Chinese, Turkish, Hungarian, ...).
    Single,
    /// `n == 1` uses form 0, everything else form 1.
    OneOther,
    /// `n <= 1` uses form 0, everything else form 1.
    French,
    /// one (1, 21, 31...), few (2-4, 22-24...), many (0, 5-20, 25-30...).
    Slavic,
    /// one (1), few (2-4, 22-24...), many (0, 5-21, 25-31...).
    Polish,
    /// one (1), few (2-4), many.
    Czech,
    /// zero, one, two, few (3-10), many (11-99), other.
    Arabic,
}

impl NumerusRule {
    /// Rule for a Qt language code such as `en_GB`, `pt-BR` or `ru`.
    ///
    /// Unknown languages use the one/other rule.
    pub fn for_language(language: &str) -> Self {
        let normalized = language.replace('-', "_").to_ascii_lowercase();
        if normalized == "pt_br" {
            return Self::French;
        }

        let code = normalized.split('_').next().unwrap_or_default();
        match code {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "my" | "tr" | "hu" | "fa" => {
                Self::Single
            }
            "fr" | "fil" | "ln" => Self::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Slavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::Czech,
            "ar" => Self::Arabic,
            _ => Self::OneOther,
        }
    }

    /// Rule for the `language` attribute of a catalog, one/other when absent.
    pub fn for_header(language: Option<&str>) -> Self {
        language.map(Self::for_language).unwrap_or(Self::OneOther)
    }

    /// Number of numerus forms a complete translation carries.
    pub fn form_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::OneOther | Self::French => 2,
            Self::Slavic | Self::Polish | Self::Czech => 3,
            Self::Arabic => 6,
        }
    }

    /// Form index for `n`.
    pub fn form(&self, n: u64) -> usize {
        let n10 = n % 10;
        let n100 = n % 100;
        match self {
            Self::Single => 0,
            Self::OneOther => usize::from(n != 1),
            Self::French => usize::from(n > 1),
            Self::Slavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Arabic => match (n, n100) {
                (0, _) => 0,
                (1, _) => 1,
                (2, _) => 2,
                (_, 3..=10) => 3,
                (_, 11..=99) => 4,
                _ => 5,
            },
        }
    }
}

/// Form index for `n` in `language`, defaulting to one/other when the
/// language is unknown or absent.
pub fn numerus_form(language: Option<&str>, n: u64) -> usize {
    NumerusRule::for_header(language).form(n)
}
