//! 환율표의 통화 이름 → 3자리 통화 코드 매핑.
//!
//! 환율표는 "Euro", "Japanese Yen"처럼 전체 이름만 제공하므로 고정 테이블로 변환합니다.
//! 테이블에 없는 이름은 그대로 통과시킵니다 (에러 아님).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 통화 전체 이름과 코드.
pub const CURRENCY_CODES: [(&str, &str); 52] = [
    ("Euro", "EUR"),
    ("British Pound", "GBP"),
    ("Indian Rupee", "INR"),
    ("Australian Dollar", "AUD"),
    ("Canadian Dollar", "CAD"),
    ("Singapore Dollar", "SGD"),
    ("Swiss Franc", "CHF"),
    ("Malaysian Ringgit", "MYR"),
    ("Japanese Yen", "JPY"),
    ("Chinese Yuan Renminbi", "CNY"),
    ("Argentine Peso", "ARS"),
    ("Bahraini Dinar", "BHD"),
    ("Botswana Pula", "BWP"),
    ("Brazilian Real", "BRL"),
    ("Bruneian Dollar", "BND"),
    ("Bulgarian Lev", "BGN"),
    ("Chilean Peso", "CLP"),
    ("Colombian Peso", "COP"),
    ("Czech Koruna", "CZK"),
    ("Danish Krone", "DKK"),
    ("Hong Kong Dollar", "HKD"),
    ("Hungarian Forint", "HUF"),
    ("Icelandic Krona", "ISK"),
    ("Indonesian Rupiah", "IDR"),
    ("Iranian Rial", "IRR"),
    ("Israeli Shekel", "ILS"),
    ("Kazakhstani Tenge", "KZT"),
    ("South Korean Won", "KRW"),
    ("Kuwaiti Dinar", "KWD"),
    ("Libyan Dinar", "LYD"),
    ("Mauritian Rupee", "MUR"),
    ("Mexican Peso", "MXN"),
    ("Nepalese Rupee", "NPR"),
    ("New Zealand Dollar", "NZD"),
    ("Norwegian Krone", "NOK"),
    ("Omani Rial", "OMR"),
    ("Pakistani Rupee", "PKR"),
    ("Philippine Peso", "PHP"),
    ("Polish Zloty", "PLN"),
    ("Qatari Riyal", "QAR"),
    ("Romanian New Leu", "RON"),
    ("Russian Ruble", "RUB"),
    ("Saudi Arabian Riyal", "SAR"),
    ("South African Rand", "ZAR"),
    ("Sri Lankan Rupee", "LKR"),
    ("Swedish Krona", "SEK"),
    ("Taiwan New Dollar", "TWD"),
    ("Thai Baht", "THB"),
    ("Trinidadian Dollar", "TTD"),
    ("Turkish Lira", "TRY"),
    ("Emirati Dirham", "AED"),
    ("Venezuelan Bolivar", "VEF"),
];

static CURRENCY_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CURRENCY_CODES.iter().copied().collect());

/// 통화 이름을 코드로 변환합니다. 매핑이 없으면 이름을 그대로 반환합니다.
pub fn currency_code(name: &str) -> &str {
    CURRENCY_MAP.get(name).copied().unwrap_or(name)
}
