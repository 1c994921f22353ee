use chrono::{Local, NaiveDate};

/// 当前日期来源，订单创建时用于写入 `date`
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 使用本地时区的系统时钟
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日期的时钟
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
