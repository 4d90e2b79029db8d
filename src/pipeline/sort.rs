//! Sort keys and the comparator behind them.

use std::cmp::Ordering;
use std::fmt;

use crate::repository::CatalogEntry;

use super::metrics::{comparable_price, engine_power, monthly_payment, rank};

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep the input order.
    #[default]
    Unspecified,
    PriceAsc,
    PriceDesc,
    MonthlyAsc,
    MonthlyDesc,
    PowerDesc,
    MakerAsc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Unspecified => "",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::MonthlyAsc => "monthly-asc",
            SortKey::MonthlyDesc => "monthly-desc",
            SortKey::PowerDesc => "power-desc",
            SortKey::MakerAsc => "maker-asc",
        }
    }
}

/// Unrecognised option values fall back to [`SortKey::Unspecified`].
impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value.trim() {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "monthly-asc" => SortKey::MonthlyAsc,
            "monthly-desc" => SortKey::MonthlyDesc,
            "power-desc" => SortKey::PowerDesc,
            "maker-asc" => SortKey::MakerAsc,
            _ => SortKey::Unspecified,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Comparator
// ---------------------------------------------------------------------------

pub fn compare(a: &CatalogEntry, b: &CatalogEntry, key: SortKey) -> Ordering {
    let (oa, ob) = (a.offer(), b.offer());
    match key {
        SortKey::PriceAsc => rank(comparable_price(oa)).total_cmp(&rank(comparable_price(ob))),
        SortKey::PriceDesc => rank(comparable_price(ob)).total_cmp(&rank(comparable_price(oa))),
        SortKey::MonthlyAsc => rank(monthly_payment(oa)).total_cmp(&rank(monthly_payment(ob))),
        SortKey::MonthlyDesc => rank(monthly_payment(ob)).total_cmp(&rank(monthly_payment(oa))),
        SortKey::PowerDesc => engine_power(b).cmp(&engine_power(a)),
        SortKey::MakerAsc => {
            locale_cmp(&oa.maker, &ob.maker).then_with(|| locale_cmp(&oa.model, &ob.model))
        }
        SortKey::Unspecified => Ordering::Equal,
    }
}

/// Stable in-place sort; ties keep their relative order.
pub fn sort(entries: &mut [&CatalogEntry], key: SortKey) {
    if key == SortKey::Unspecified {
        return;
    }
    entries.sort_by(|a, b| compare(a, b, key));
}

// ---------------------------------------------------------------------------
// Locale-aware string ordering
// ---------------------------------------------------------------------------

/// Dictionary-style comparison: letters compare without regard to case or
/// diacritics first, then lowercase sorts before uppercase, then unaccented
/// before accented.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| s.chars().flat_map(|c| fold(c).to_lowercase()).collect::<Vec<_>>();
    primary(a)
        .cmp(&primary(b))
        .then_with(|| {
            let case = |s: &str| s.chars().map(|c| c.is_uppercase()).collect::<Vec<_>>();
            case(a).cmp(&case(b))
        })
        .then_with(|| a.cmp(b))
}

fn fold(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ă' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ă' => 'A',
        'ç' | 'ć' | 'č' => 'c',
        'Ç' | 'Ć' | 'Č' => 'C',
        'è' | 'é' | 'ê' | 'ë' | 'ě' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ě' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' | 'ń' => 'n',
        'Ñ' | 'Ń' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'ș' | 'ş' | 'š' | 'ś' => 's',
        'Ș' | 'Ş' | 'Š' | 'Ś' => 'S',
        'ț' | 'ţ' => 't',
        'Ț' | 'Ţ' => 'T',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        'ž' | 'ź' | 'ż' => 'z',
        'Ž' | 'Ź' | 'Ż' => 'Z',
        other => other,
    }
}
