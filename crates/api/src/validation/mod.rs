//! 请求参数校验
//!
//! 每个接口的校验是一组按顺序执行的 (断言, 消息) 规则，遇到第一条不满足的
//! 规则立即返回它的消息，后续规则不再执行。

pub mod group;
pub mod job;
pub mod query;

/// 校验失败，消息直接作为响应的 `Message`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

struct Rule<'a, T> {
    check: Box<dyn Fn(&T) -> bool + Send + Sync + 'a>,
    message: &'static str,
}

/// 有序的校验规则列表
pub struct Pipeline<'a, T> {
    rules: Vec<Rule<'a, T>>,
}

impl<'a, T> Pipeline<'a, T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// 追加一条规则，`check` 返回 `false` 时以 `message` 失败
    pub fn rule<F>(mut self, check: F, message: &'static str) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'a,
    {
        self.rules.push(Rule {
            check: Box::new(check),
            message,
        });
        self
    }

    /// 在当前规则之后依次执行 `other` 的规则
    pub fn then(mut self, other: Pipeline<'a, T>) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn validate(&self, value: &T) -> Result<(), ValidationError> {
        match self.rules.iter().find(|rule| !(rule.check)(value)) {
            Some(rule) => Err(ValidationError::new(rule.message)),
            None => Ok(()),
        }
    }
}

impl<T> Default for Pipeline<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn present(value: &str) -> bool {
    !value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty_pipeline_accepts_everything() {
        let pipeline: Pipeline<'_, i32> = Pipeline::new();
        assert!(pipeline.is_empty());
        assert!(pipeline.validate(&42).is_ok());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let pipeline = Pipeline::new()
            .rule(|v: &i32| *v > 0, "必须为正数")
            .rule(|v: &i32| *v % 2 == 0, "必须为偶数")
            .rule(|v: &i32| *v < 100, "必须小于100");

        assert_eq!(pipeline.validate(&-3).unwrap_err().message(), "必须为正数");
        assert_eq!(pipeline.validate(&201).unwrap_err().message(), "必须为偶数");
        assert_eq!(pipeline.validate(&200).unwrap_err().message(), "必须小于100");
        assert!(pipeline.validate(&8).is_ok());
    }

    #[test]
    fn test_rules_after_failure_are_not_evaluated() {
        let evaluated = AtomicUsize::new(0);
        let pipeline = Pipeline::new().rule(|_: &()| false, "失败").rule(
            |_: &()| {
                evaluated.fetch_add(1, Ordering::SeqCst);
                true
            },
            "不会执行",
        );

        assert!(pipeline.validate(&()).is_err());
        assert_eq!(evaluated.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_then_appends_in_order() {
        let first = Pipeline::new().rule(|s: &String| !s.is_empty(), "不能为空");
        let second = Pipeline::new().rule(|s: &String| s.len() < 4, "太长");
        let pipeline = first.then(second);

        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.validate(&String::new()).unwrap_err().message(), "不能为空");
        assert_eq!(pipeline.validate(&"abcde".to_string()).unwrap_err().message(), "太长");
    }
}
