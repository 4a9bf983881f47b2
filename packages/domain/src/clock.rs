//! # Clock（時刻プロバイダ）
//!
//! 請求書の発行日（`add_date`）と支払日（`paid_date`）を同じ時刻源から決める。
//! `Utc::now()` を直接呼ばず、
//! テストで固定日付を注入できるようにするための抽象化。

use chrono::{DateTime, NaiveDate, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;

   /// 今日の日付（UTC）
   fn today(&self) -> NaiveDate {
      self.now().date_naive()
   }
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }

   /// 指定日の 00:00:00 UTC に固定する
   pub fn at_date(date: NaiveDate) -> Self {
      Self {
         now: date.and_time(chrono::NaiveTime::MIN).and_utc(),
      }
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_system_clock_のtodayは現在のutc日付を返す() {
      let before = Utc::now().date_naive();
      let result = SystemClock.today();
      let after = Utc::now().date_naive();

      assert!(result >= before);
      assert!(result <= after);
   }

   #[test]
   fn test_fixed_clock_at_dateは指定日を返し続ける() {
      let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
      let clock = FixedClock::at_date(date);

      assert_eq!(clock.today(), date);
      assert_eq!(clock.today(), date);
   }

   #[test]
   fn test_fixed_clock_はutc日付の境界で切り捨てる() {
      let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
      let clock = FixedClock::new(now);

      assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
   }
}
