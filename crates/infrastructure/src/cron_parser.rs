use cron::Schedule;
use scheduler_core::{SchedulerError, SchedulerResult};
use scheduler_domain::ports::CronParser;
use std::collections::BTreeSet;
use std::str::FromStr;

/// 基于 `cron` crate 的表达式校验
///
/// `cron` crate 要求秒字段，这里额外接受常见的5段式（分 时 日 月 周）表达式，
/// 校验前在前面补上 `0` 秒。5段式的星期字段按标准cron解释（0-7，0和7都是周日），
/// 数字写法会被改写为 `cron` crate 的 1-7（周日为1）编号。
/// 6段、7段（带年份）和 `@daily` 一类的描述符原样交给 `cron` crate。
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCronParser;

impl StandardCronParser {
    pub fn new() -> Self {
        Self
    }

    /// 解析为可迭代的调度计划
    pub fn schedule(&self, expr: &str) -> SchedulerResult<Schedule> {
        let normalized = normalize(expr);
        Schedule::from_str(&normalized).map_err(|e| SchedulerError::InvalidCron {
            expr: expr.to_string(),
            message: e.to_string(),
        })
    }
}

impl CronParser for StandardCronParser {
    fn parse(&self, expr: &str) -> SchedulerResult<()> {
        self.schedule(expr).map(|_| ())
    }
}

fn normalize(expr: &str) -> String {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    match fields.as_slice() {
        [minute, hour, day, month, weekday] => {
            let weekday: Vec<String> = weekday
                .split(',')
                .map(|item| convert_weekday_item(item).unwrap_or_else(|| item.to_string()))
                .collect();
            format!("0 {minute} {hour} {day} {month} {}", weekday.join(","))
        }
        _ => expr.trim().to_string(),
    }
}

/// 把标准cron的数字星期项展开为 `cron` crate 编号的列表
///
/// 非数字的写法（`*`、`MON-FRI` 等）返回 `None`，保持原样。
fn convert_weekday_item(item: &str) -> Option<String> {
    let (base, step) = match item.split_once('/') {
        Some((base, step)) => (base, Some(step.parse::<u32>().ok().filter(|s| *s > 0)?)),
        None => (item, None),
    };
    let (start, end) = match (base, step) {
        ("*", None) => return None,
        ("*", Some(_)) => (0, 6),
        _ => match base.split_once('-') {
            Some((start, end)) => (start.parse::<u32>().ok()?, end.parse::<u32>().ok()?),
            None => {
                let day = base.parse::<u32>().ok()?;
                (day, if step.is_some() { 6 } else { day })
            }
        },
    };
    if end > 7 || start > end {
        return None;
    }

    let days: BTreeSet<u32> = (start..=end)
        .step_by(step.unwrap_or(1) as usize)
        .map(|day| day % 7 + 1)
        .collect();
    Some(days.iter().map(u32::to_string).collect::<Vec<_>>().join(","))
}
