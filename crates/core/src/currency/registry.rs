//! Registry of currencies supported by the exchange rate source.
//!
//! The rate source does not index rates by ISO 4217 code. It names each
//! currency as `<Country>-<Currency>` (e.g. `Canada-Dollar`), so callers
//! translate codes through this registry before querying.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// ISO 4217 code of the base currency. Amounts are recorded in it.
pub const USD: &str = "USD";

/// A supported currency and the description the rate source uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyDescriptor {
    /// ISO 4217 alphabetic code.
    pub iso_code: &'static str,
    /// Rate source description (e.g. `Canada-Dollar`).
    pub description: &'static str,
}

const fn currency(description: &'static str, iso_code: &'static str) -> CurrencyDescriptor {
    CurrencyDescriptor {
        iso_code,
        description,
    }
}

/// Every supported currency, in listing order.
///
/// When two descriptions share a code, the first one listed is what the
/// code resolves to.
const CURRENCIES: &[CurrencyDescriptor] = &[
    currency("United-States-Dollar", "USD"),
    currency("Afghanistan-Afghani", "AFN"),
    currency("Albania-Lek", "ALL"),
    currency("Algeria-Dinar", "DZD"),
    currency("Angola-Kwanza", "AOA"),
    currency("Argentina-Peso", "ARS"),
    currency("Armenia-Dram", "AMD"),
    currency("Australia-Dollar", "AUD"),
    currency("Bahamas-Dollar", "BSD"),
    currency("Bahrain-Dinar", "BHD"),
    currency("Bangladesh-Taka", "BDT"),
    currency("Barbados-Dollar", "BBD"),
    currency("Belarus-New Ruble", "BYN"),
    currency("Belize-Dollar", "BZD"),
    currency("Bermuda-Dollar", "BMD"),
    currency("Bolivia-Boliviano", "BOB"),
    currency("Bosnia-Marka", "BAM"),
    currency("Botswana-Pula", "BWP"),
    currency("Brazil-Real", "BRL"),
    currency("Brunei-Dollar", "BND"),
    currency("Bulgaria-Lev New", "BGN"),
    currency("Canada-Dollar", "CAD"),
    currency("Chile-Peso", "CLP"),
    currency("China-Renminbi", "CNY"),
    currency("Colombia-Peso", "COP"),
    currency("Costa Rica-Colon", "CRC"),
    currency("Cuba-Peso", "CUP"),
    currency("Czech Republic-Koruna", "CZK"),
    currency("Denmark-Krone", "DKK"),
    currency("Dominican Rep.-Peso", "DOP"),
    currency("Egypt-Pound", "EGP"),
    currency("Euro-Zone-Euro", "EUR"),
    // Legacy country listing; EUR resolves to Euro-Zone-Euro.
    currency("Austria-Euro", "EUR"),
    currency("Ghana-Cedi", "GHS"),
    currency("Hong-Kong-Dollar", "HKD"),
    currency("India-Rupee", "INR"),
    currency("Japan-Yen", "JPY"),
    currency("Mexico-Peso", "MXN"),
    currency("New-Zealand-Dollar", "NZD"),
    currency("Norway-Krone", "NOK"),
    currency("South-Africa-Rand", "ZAR"),
    currency("South-Korea-Won", "KRW"),
    currency("Sweden-Krona", "SEK"),
    currency("Switzerland-Franc", "CHF"),
    currency("Taiwan-Dollar", "TWD"),
    currency("Thailand-Baht", "THB"),
    currency("United-Kingdom-Pound", "GBP"),
];

struct Index {
    by_code: HashMap<String, &'static CurrencyDescriptor>,
    by_description: HashMap<String, &'static CurrencyDescriptor>,
}

static INDEX: LazyLock<Index> = LazyLock::new(|| {
    let mut by_code = HashMap::with_capacity(CURRENCIES.len());
    let mut by_description = HashMap::with_capacity(CURRENCIES.len());

    for descriptor in CURRENCIES {
        by_code
            .entry(descriptor.iso_code.to_ascii_uppercase())
            .or_insert(descriptor);
        by_description.insert(descriptor.description.to_ascii_uppercase(), descriptor);
    }

    Index {
        by_code,
        by_description,
    }
});

/// Read-only lookups over the supported currency table.
pub struct CurrencyRegistry;

impl CurrencyRegistry {
    /// Finds a currency by ISO code, ignoring case.
    #[must_use]
    pub fn descriptor_for_code(code: &str) -> Option<&'static CurrencyDescriptor> {
        INDEX.by_code.get(&code.to_ascii_uppercase()).copied()
    }

    /// Finds a currency by rate source description, ignoring case.
    #[must_use]
    pub fn descriptor_for_description(description: &str) -> Option<&'static CurrencyDescriptor> {
        INDEX
            .by_description
            .get(&description.to_ascii_uppercase())
            .copied()
    }

    /// Translates an ISO code into the description the rate source expects.
    #[must_use]
    pub fn description_for_code(code: &str) -> Option<&'static str> {
        Self::descriptor_for_code(code).map(|descriptor| descriptor.description)
    }

    /// Returns true for the base currency, which never needs conversion.
    #[must_use]
    pub fn is_usd(code: &str) -> bool {
        code.eq_ignore_ascii_case(USD)
    }

    /// All supported currencies, in listing order.
    #[must_use]
    pub fn all() -> &'static [CurrencyDescriptor] {
        CURRENCIES
    }
}
