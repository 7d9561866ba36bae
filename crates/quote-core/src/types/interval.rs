//! 캔들 조회 간격(`timeframe`)과 기간(`duration`) 정의.
//!
//! Yahoo Finance chart API의 `interval` / `range` 파라미터 어휘를 그대로 따릅니다.

use std::fmt;
use std::str::FromStr;

use crate::error::GatewayError;

/// Yahoo가 분봉/시간봉을 제공하는 최근 기간 (일).
pub const INTRADAY_WINDOW_DAYS: u32 = 60;

/// 캔들 간격.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartInterval {
    M1,
    M2,
    M5,
    M15,
    M30,
    M60,
    M90,
    H1,
    D1,
    D5,
    W1,
    Mo1,
    Mo3,
}

impl ChartInterval {
    /// 지원하는 모든 간격.
    pub const ALL: [ChartInterval; 13] = [
        ChartInterval::M1,
        ChartInterval::M2,
        ChartInterval::M5,
        ChartInterval::M15,
        ChartInterval::M30,
        ChartInterval::M60,
        ChartInterval::M90,
        ChartInterval::H1,
        ChartInterval::D1,
        ChartInterval::D5,
        ChartInterval::W1,
        ChartInterval::Mo1,
        ChartInterval::Mo3,
    ];

    /// Yahoo Finance 간격 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartInterval::M1 => "1m",
            ChartInterval::M2 => "2m",
            ChartInterval::M5 => "5m",
            ChartInterval::M15 => "15m",
            ChartInterval::M30 => "30m",
            ChartInterval::M60 => "60m",
            ChartInterval::M90 => "90m",
            ChartInterval::H1 => "1h",
            ChartInterval::D1 => "1d",
            ChartInterval::D5 => "5d",
            ChartInterval::W1 => "1wk",
            ChartInterval::Mo1 => "1mo",
            ChartInterval::Mo3 => "3mo",
        }
    }

    /// 분봉/시간봉 여부 (`INTRADAY_WINDOW_DAYS` 제한 대상).
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            ChartInterval::M1
                | ChartInterval::M2
                | ChartInterval::M5
                | ChartInterval::M15
                | ChartInterval::M30
                | ChartInterval::M60
                | ChartInterval::M90
                | ChartInterval::H1
        )
    }
}

impl fmt::Display for ChartInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartInterval {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| {
                GatewayError::InvalidInput(format!(
                    "지원하지 않는 timeframe: '{}' (지원: {})",
                    s,
                    Self::ALL.map(|i| i.as_str()).join(", ")
                ))
            })
    }
}

/// 조회 기간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRange {
    D1,
    D5,
    Mo1,
    Mo3,
    Mo6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl ChartRange {
    /// 지원하는 모든 기간.
    pub const ALL: [ChartRange; 11] = [
        ChartRange::D1,
        ChartRange::D5,
        ChartRange::Mo1,
        ChartRange::Mo3,
        ChartRange::Mo6,
        ChartRange::Y1,
        ChartRange::Y2,
        ChartRange::Y5,
        ChartRange::Y10,
        ChartRange::Ytd,
        ChartRange::Max,
    ];

    /// Yahoo Finance 기간 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartRange::D1 => "1d",
            ChartRange::D5 => "5d",
            ChartRange::Mo1 => "1mo",
            ChartRange::Mo3 => "3mo",
            ChartRange::Mo6 => "6mo",
            ChartRange::Y1 => "1y",
            ChartRange::Y2 => "2y",
            ChartRange::Y5 => "5y",
            ChartRange::Y10 => "10y",
            ChartRange::Ytd => "ytd",
            ChartRange::Max => "max",
        }
    }

    /// 기간이 항상 `INTRADAY_WINDOW_DAYS` 안에 들어가는지 확인합니다.
    ///
    /// `ytd`와 `max`는 날짜에 따라 길이가 달라지므로 포함하지 않습니다.
    pub fn within_intraday_window(&self) -> bool {
        matches!(self, ChartRange::D1 | ChartRange::D5 | ChartRange::Mo1)
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| {
                GatewayError::InvalidInput(format!(
                    "지원하지 않는 duration: '{}' (지원: {})",
                    s,
                    Self::ALL.map(|r| r.as_str()).join(", ")
                ))
            })
    }
}
