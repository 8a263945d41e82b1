use scheduler_domain::entities::{QueryClientParam, QuerySnapshotParam};

use super::{present, Pipeline};

pub const MSG_SELECT_GROUP: &str = "请选择任务集群";
pub const MSG_GROUP_NOT_FOUND: &str = "此任务集群不存在";
pub const MSG_INVALID_PARAMS: &str = "非法的请求参数";

pub fn client_rules() -> Pipeline<'static, QueryClientParam> {
    Pipeline::new().rule(|query: &QueryClientParam| present(&query.group), MSG_SELECT_GROUP)
}

/// 删除快照必须精确到 group/ip/id
pub fn snapshot_delete_rules() -> Pipeline<'static, QuerySnapshotParam> {
    Pipeline::new().rule(
        |query: &QuerySnapshotParam| {
            present(&query.group) && present(&query.ip) && present(&query.id)
        },
        MSG_INVALID_PARAMS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_query_requires_group() {
        assert_eq!(
            client_rules()
                .validate(&QueryClientParam::default())
                .unwrap_err()
                .message(),
            MSG_SELECT_GROUP
        );
    }

    #[test]
    fn test_snapshot_delete_needs_all_three() {
        let full = QuerySnapshotParam {
            group: "g".to_string(),
            ip: "10.0.0.1".to_string(),
            id: "42".to_string(),
        };
        assert!(snapshot_delete_rules().validate(&full).is_ok());

        for partial in [
            QuerySnapshotParam { group: String::new(), ..full.clone() },
            QuerySnapshotParam { ip: String::new(), ..full.clone() },
            QuerySnapshotParam { id: String::new(), ..full.clone() },
        ] {
            assert_eq!(
                snapshot_delete_rules().validate(&partial).unwrap_err().message(),
                MSG_INVALID_PARAMS
            );
        }
    }
}
