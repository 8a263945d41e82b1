use scheduler_domain::entities::GroupConf;

use super::{present, Pipeline};

pub const MSG_GROUP_NAME_REQUIRED: &str = "任务集群名称不能为空";
pub const MSG_GROUP_REMARK_REQUIRED: &str = "任务集群描述不能为空";

pub fn add_rules() -> Pipeline<'static, GroupConf> {
    Pipeline::new()
        .rule(|group: &GroupConf| present(&group.name), MSG_GROUP_NAME_REQUIRED)
        .rule(|group: &GroupConf| present(&group.remark), MSG_GROUP_REMARK_REQUIRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, remark: &str) -> GroupConf {
        GroupConf {
            name: name.to_string(),
            remark: remark.to_string(),
        }
    }

    #[test]
    fn test_group_rules() {
        let rules = add_rules();
        assert!(rules.validate(&group("trade", "交易集群")).is_ok());
        assert_eq!(
            rules.validate(&group("", "")).unwrap_err().message(),
            MSG_GROUP_NAME_REQUIRED
        );
        assert_eq!(
            rules.validate(&group("trade", "")).unwrap_err().message(),
            MSG_GROUP_REMARK_REQUIRED
        );
    }
}
