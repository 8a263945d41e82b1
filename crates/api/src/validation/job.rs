use scheduler_domain::entities::JobConf;
use scheduler_domain::ports::CronParser;

use super::{present, Pipeline};

pub const MSG_ID_REQUIRED: &str = "此任务记录不存在";
pub const MSG_NAME_REQUIRED: &str = "任务名称不能为空";
pub const MSG_GROUP_REQUIRED: &str = "任务分组不能为空";
pub const MSG_CRON_REQUIRED: &str = "任务Cron表达式不能为空";
pub const MSG_CRON_INVALID: &str = "非法的Cron表达式";
pub const MSG_TARGET_REQUIRED: &str = "任务Target不能为空";
pub const MSG_STATUS_REQUIRED: &str = "任务状态不能为空";

/// 新建任务：名称、分组、Cron（非空且可解析）、Target、状态
pub fn add_rules(cron: &dyn CronParser) -> Pipeline<'_, JobConf> {
    Pipeline::new()
        .rule(|job: &JobConf| present(&job.name), MSG_NAME_REQUIRED)
        .rule(|job: &JobConf| present(&job.group), MSG_GROUP_REQUIRED)
        .rule(|job: &JobConf| present(&job.cron), MSG_CRON_REQUIRED)
        .rule(move |job: &JobConf| cron.parse(&job.cron).is_ok(), MSG_CRON_INVALID)
        .rule(|job: &JobConf| present(&job.target), MSG_TARGET_REQUIRED)
        .rule(|job: &JobConf| job.status != 0, MSG_STATUS_REQUIRED)
}

/// 修改任务：先要求 `Id`，其余同新建
pub fn edit_rules(cron: &dyn CronParser) -> Pipeline<'_, JobConf> {
    id_rules().then(add_rules(cron))
}

pub fn delete_rules() -> Pipeline<'static, JobConf> {
    id_rules()
}

fn id_rules<'a>() -> Pipeline<'a, JobConf> {
    Pipeline::new().rule(|job: &JobConf| present(&job.id), MSG_ID_REQUIRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scheduler_infrastructure::StandardCronParser;
    use scheduler_testing_utils::JobConfBuilder;

    fn message(result: Result<(), crate::validation::ValidationError>) -> &'static str {
        result.unwrap_err().message()
    }

    #[test]
    fn test_valid_job_passes() {
        let parser = StandardCronParser::new();
        assert!(add_rules(&parser).validate(&JobConfBuilder::new().build()).is_ok());
    }

    #[test]
    fn test_each_missing_field_has_its_own_message() {
        let parser = StandardCronParser::new();
        let rules = add_rules(&parser);

        let cases = [
            (JobConfBuilder::new().with_name("").build(), MSG_NAME_REQUIRED),
            (JobConfBuilder::new().with_group("").build(), MSG_GROUP_REQUIRED),
            (JobConfBuilder::new().with_cron("").build(), MSG_CRON_REQUIRED),
            (JobConfBuilder::new().with_target("").build(), MSG_TARGET_REQUIRED),
            (JobConfBuilder::new().with_status(0).build(), MSG_STATUS_REQUIRED),
        ];
        for (job, expected) in cases {
            assert_eq!(message(rules.validate(&job)), expected);
        }
    }

    #[test]
    fn test_invalid_cron_is_distinct_from_missing_cron() {
        let parser = StandardCronParser::new();
        let job = JobConfBuilder::new().with_cron("every monday").build();

        assert_eq!(message(add_rules(&parser).validate(&job)), MSG_CRON_INVALID);
    }

    #[test]
    fn test_name_checked_before_group() {
        let parser = StandardCronParser::new();
        let job = JobConfBuilder::new().with_name("").with_group("").build();

        assert_eq!(message(add_rules(&parser).validate(&job)), MSG_NAME_REQUIRED);
    }

    #[test]
    fn test_edit_requires_id_first() {
        let parser = StandardCronParser::new();
        let job = JobConfBuilder::new().with_name("").build();

        assert_eq!(message(edit_rules(&parser).validate(&job)), MSG_ID_REQUIRED);

        let job = JobConfBuilder::new().with_id("42").with_name("").build();
        assert_eq!(message(edit_rules(&parser).validate(&job)), MSG_NAME_REQUIRED);
    }

    #[test]
    fn test_delete_only_needs_id() {
        let job = JobConf {
            id: "42".to_string(),
            ..JobConf::default()
        };
        assert!(delete_rules().validate(&job).is_ok());
        assert_eq!(message(delete_rules().validate(&JobConf::default())), MSG_ID_REQUIRED);
    }
}
