//! 게이트웨이 핵심 타입.

pub mod candle;
pub mod forex;
pub mod interval;

pub use candle::Candle;
pub use forex::{CacheSnapshot, RateEntry, BASE_CURRENCY};
pub use interval::{ChartInterval, ChartRange, INTRADAY_WINDOW_DAYS};
