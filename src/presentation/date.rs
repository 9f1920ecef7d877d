// ABOUTME: Japanese long-form date formatting for recipe cards and history rows
// ABOUTME: Produces text such as 2025年10月18日土曜日 from a calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use chrono::{Datelike, NaiveDate, Weekday};

/// Single-character weekday name
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}

/// `YYYY年M月D日<weekday>曜日`
#[must_use]
pub fn format_japanese_date(date: NaiveDate) -> String {
    format!(
        "{}年{}月{}日{}曜日",
        date.year(),
        date.month(),
        date.day(),
        weekday_name(date.weekday())
    )
}
