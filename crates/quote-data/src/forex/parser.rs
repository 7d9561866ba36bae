//! 환율표 HTML 파서.
//!
//! HTML 구조 (x-rates 환율표):
//! ```html
//! <table class="ratesTable">
//!   <tr><th>US Dollar</th><th>1.00 USD</th><th>inv. 1.00 USD</th></tr>
//!   <tr><td>Euro</td><td class="rtRates"><a href="...">0.921234</a></td><td>...</td></tr>
//! </table>
//! ```
//!
//! 페이지에는 같은 클래스의 테이블이 두 개(상위 10개 통화, 전체 통화) 있으므로
//! 같은 통화쌍이 다시 나오면 처음 값을 유지합니다.

use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, warn};

use quote_core::RateEntry;

use crate::error::{DataError, Result};
use crate::forex::currency::currency_code;

/// 환율표 행 셀렉터.
const RATES_ROW_SELECTOR: &str = "table.ratesTable tr";

/// 환율 문자열 파싱 ("1,234.56" → 1234.56).
///
/// 천 단위 구분자를 허용하며, 양의 유한값만 유효합니다.
pub fn parse_rate(text: &str) -> Result<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    let rate: f64 = cleaned
        .parse()
        .map_err(|_| DataError::ParseError(format!("숫자가 아닌 환율: '{}'", text)))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(DataError::ParseError(format!(
            "환율은 양의 유한값이어야 합니다: '{}'",
            text
        )));
    }

    Ok(rate)
}

/// 환율표 HTML을 `RateEntry` 목록으로 변환합니다.
///
/// - 첫 번째 행(헤더)은 건너뜁니다.
/// - 셀이 2개 미만이거나 이름/환율 셀이 비어 있는 행은 건너뜁니다.
/// - 환율 파싱에 실패한 행은 경고 후 건너뜁니다 (부분 성공 허용).
/// - 매핑 없는 통화 이름은 `USD/<이름>`으로 그대로 통과합니다.
pub fn parse_rates_table(html: &str) -> Result<Vec<RateEntry>> {
    let row_selector = Selector::parse(RATES_ROW_SELECTOR)
        .map_err(|e| DataError::ParseError(format!("셀렉터 생성 실패: {}", e)))?;
    let cell_selector = Selector::parse("td")
        .map_err(|e| DataError::ParseError(format!("셀렉터 생성 실패: {}", e)))?;

    let document = Html::parse_document(html);
    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    let mut skipped = 0usize;

    for row in document.select(&row_selector).skip(1) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .take(2)
            .map(|td| td.text().collect::<String>().trim().to_string())
            .collect();

        if cells.len() < 2 {
            continue;
        }

        let (name, rate_text) = (&cells[0], &cells[1]);
        if name.is_empty() || rate_text.is_empty() {
            skipped += 1;
            continue;
        }

        let rate = match parse_rate(rate_text) {
            Ok(rate) => rate,
            Err(e) => {
                warn!(currency = %name, error = %e, "환율 행 건너뜀");
                skipped += 1;
                continue;
            }
        };

        let entry = RateEntry::from_usd(currency_code(name), rate);
        if seen.insert(entry.pair.clone()) {
            entries.push(entry);
        }
    }

    debug!(count = entries.len(), skipped, "환율표 파싱 완료");
    Ok(entries)
}
