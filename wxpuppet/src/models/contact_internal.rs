use serde::Deserialize;
use serde_json::Value;

use super::common::deserialize_num_str;

/// Raw contact record as served by the web backend. Field names and shapes
/// are dictated by the remote API; everything defaults so partial payloads
/// still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactInternal {
    #[serde(default, rename = "UserName")]
    pub user_name: String,
    #[serde(default, rename = "NickName")]
    pub nick_name: String,
    /// Display override set by the logged-in user.
    #[serde(default, rename = "RemarkName")]
    pub remark_name: String,
    /// Account handle. The backend withholds it for most contacts.
    #[serde(default, rename = "Alias")]
    pub alias: String,
    #[serde(default, rename = "Sex")]
    pub sex: i64,
    #[serde(default, rename = "Province")]
    pub province: String,
    #[serde(default, rename = "City")]
    pub city: String,
    #[serde(default, rename = "Signature")]
    pub signature: String,
    #[serde(default, rename = "StarFriend")]
    pub star_friend: Value,
    /// Stable numeric account id; sometimes served as a string.
    #[serde(default, rename = "Uin", deserialize_with = "deserialize_num_str")]
    pub uin: String,
    /// Relative avatar path, including its query string.
    #[serde(default, rename = "HeadImgUrl")]
    pub head_img_url: String,
    #[serde(default, rename = "VerifyFlag")]
    pub verify_flag: i64,
    /// Set during enrichment by the page-side injector, not by the API.
    #[serde(default)]
    pub stranger: Value,
}

#[cfg(test)]
mod local_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_payload() {
        let raw: ContactInternal = serde_json::from_value(json!({
            "UserName": "@abc",
            "NickName": "nick",
            "RemarkName": "remark",
            "Alias": "handle",
            "Sex": 2,
            "Province": "Guangdong",
            "City": "Shenzhen",
            "Signature": "sig",
            "StarFriend": 1,
            "Uin": 4763975,
            "HeadImgUrl": "/webwxgeticon?seq=1",
            "VerifyFlag": 8,
            "stranger": "1"
        }))
        .unwrap();
        assert_eq!(raw.user_name, "@abc");
        assert_eq!(raw.uin, "4763975");
        assert_eq!(raw.verify_flag, 8);
        assert_eq!(raw.stranger, json!("1"));
    }

    #[test]
    fn test_deserialize_partial_payload() {
        let raw: ContactInternal = serde_json::from_value(json!({ "UserName": "@abc" })).unwrap();
        assert_eq!(raw.user_name, "@abc");
        assert_eq!(raw.nick_name, "");
        assert_eq!(raw.sex, 0);
        assert_eq!(raw.star_friend, Value::Null);
    }
}
