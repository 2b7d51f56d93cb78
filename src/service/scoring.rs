use crate::models::{Item, Receipt};
use chrono::{Datelike, NaiveDateTime, Timelike};

/// 合并后的购买时间格式: "YYYY-MM-DD HH:MM"
const PURCHASED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 各规则得分明细
///
/// `odd_day` / `afternoon` 为 `None` 表示购买日期时间解析失败，两条规则一并跳过。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: i64,
    pub round_dollar: i64,
    pub quarter_multiple: i64,
    pub item_pairs: i64,
    pub item_descriptions: i64,
    pub odd_day: Option<i64>,
    pub afternoon: Option<i64>,
}

impl PointsBreakdown {
    pub fn total(&self) -> i64 {
        // 价格极大时单项得分已饱和为 i64::MAX，合计同样饱和
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day.unwrap_or(0),
            self.afternoon.unwrap_or(0),
        ]
        .into_iter()
        .fold(0, i64::saturating_add)
    }
}

/// 计算收据积分
pub fn points(receipt: &Receipt) -> i64 {
    breakdown(receipt).total()
}

/// 按固定顺序逐条计算规则得分
///
/// 金额解析失败按 0 处理；日期时间解析失败时直接返回前五条规则的结果。
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);

    let mut result = PointsBreakdown {
        retailer_name: count_alphanumeric(&receipt.retailer) as i64,
        round_dollar: if total == total.trunc() { 50 } else { 0 },
        quarter_multiple: if total % 0.25 == 0.0 { 25 } else { 0 },
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, i64::saturating_add),
        odd_day: None,
        afternoon: None,
    };

    let Some(purchased_at) = purchased_at(receipt) else {
        return result;
    };

    result.odd_day = Some(if purchased_at.day() % 2 != 0 { 6 } else { 0 });
    // 16:00-16:59 同样计分，与既有实现保持一致
    let hour = purchased_at.hour();
    result.afternoon = Some(if (14..=16).contains(&hour) { 10 } else { 0 });

    result
}

/// 统计 ASCII 字母与数字个数 (按字符而非字节)
pub fn count_alphanumeric(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).count()
}

/// 每两件商品 5 分，仅当商品数大于 2
pub fn item_pair_points(count: usize) -> i64 {
    if count > 2 {
        (count / 2 * 5) as i64
    } else {
        0
    }
}

/// 描述去除首尾空白后长度为 3 的倍数 (含 0) 时，得 ceil(价格 * 0.2) 分
fn description_points(item: &Item) -> i64 {
    let len = item.short_description.trim().chars().count();
    if len % 3 != 0 {
        return 0;
    }
    (parse_amount(&item.price) * 0.2).ceil() as i64
}

fn parse_amount(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(0.0)
}

fn purchased_at(receipt: &Receipt) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", receipt.purchase_date, receipt.purchase_time);
    if !has_timestamp_shape(&combined) {
        return None;
    }
    NaiveDateTime::parse_from_str(&combined, PURCHASED_AT_FORMAT).ok()
}

/// 严格校验 "DDDD-DD-DD DD:DD" 形状，要求补零
fn has_timestamp_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}
