//! 農曆年表數據
//!
//! 每年以一個 17 位數字壓縮保存：
//!
//! - 第 `3..=0` 位：閏月月序號，無閏月則為 0
//! - 第 `15..=4` 位：依次為正月至臘月，1 為大月（30 日），0 為小月（29 日）
//! - 第 16 位：閏月大小，僅在有閏月時有效
//!
//! 首項為 1900 年，其正月初一為公曆 1900 年 1 月 31 日。

use std::sync::LazyLock;

use crate::date::Date;

/// 表中首年
pub const FIRST_YEAR: i32 = 1900;
/// 表中末年
pub const LAST_YEAR: i32 = FIRST_YEAR + RAW_DATA.len() as i32 - 1;

/// 保存一年的排月數據
#[derive(Debug)]
pub struct YearInfo {
    /// 序號，為正月初一所在公元年
    pub year: i32,
    /// 正月初一所在日期
    pub new_year: Date,
    /// 閏月月序號，無閏月則為 `None`
    pub leap_month: Option<u32>,
    /// 依次為正月至臘月的日數
    pub month_days: [u32; 12],
    /// 閏月日數，無閏月則為 0
    pub leap_days: u32,
}

impl YearInfo {
    /// 取得公元 `year` 年對應的農曆年數據。
    ///
    /// 無數據則返回 `None`。
    pub fn get(year: i32) -> Option<&'static Self> {
        let idx = usize::try_from(year - FIRST_YEAR).ok()?;
        DATA.get(idx)
    }

    /// 全年日數
    pub fn days(&self) -> u32 {
        self.month_days.iter().sum::<u32>() + self.leap_days
    }
}

static DATA: LazyLock<Vec<YearInfo>> = LazyLock::new(expand_raw_data);

fn expand_raw_data() -> Vec<YearInfo> {
    // 1900-01-31
    let mut new_year = Date::from_jdn(2415051);
    let mut res = Vec::with_capacity(RAW_DATA.len());
    for (year, &raw) in (FIRST_YEAR..).zip(RAW_DATA) {
        let leap_month = match raw & 0xf {
            0 => None,
            m => Some(m),
        };
        let mut month_days = [29; 12];
        for (m, days) in (1..).zip(month_days.iter_mut()) {
            if raw & (0x10000 >> m) != 0 {
                *days = 30;
            }
        }
        let leap_days = match (leap_month, raw & 0x10000 != 0) {
            (None, _) => 0,
            (Some(_), true) => 30,
            (Some(_), false) => 29,
        };
        let info = YearInfo {
            year,
            new_year,
            leap_month,
            month_days,
            leap_days,
        };
        new_year = new_year + info.days() as i32;
        res.push(info);
    }
    log::trace!("expanded {} years of Chinese calendar data", res.len());
    res
}

const RAW_DATA: &[u32] = &[
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06aa0, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];
