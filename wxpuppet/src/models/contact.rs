use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use super::common::truthy;
use super::contact_internal::ContactInternal;

/// Marker prefix of group-chat ids on the web protocol.
pub const GROUP_ID_PREFIX: &str = "@@";

/// Bit of `VerifyFlag` that marks official (service) accounts.
const VERIFY_FLAG_OFFICIAL: i64 = 8;

/// Ids of the backend's built-in system and service contacts.
const SPECIAL_CONTACT_IDS: [&str; 26] = [
    "weibo",
    "qqmail",
    "fmessage",
    "tmessage",
    "qmessage",
    "qqsync",
    "floatbottle",
    "lbsapp",
    "shakeapp",
    "medianote",
    "qqfriend",
    "readerapp",
    "blogapp",
    "facebookapp",
    "masssendapp",
    "meishiapp",
    "feedsapp",
    "voip",
    "blogappweixin",
    "weixin",
    "brandsessionholder",
    "weixinreminder",
    "wxid_novlwrv3lqwv11",
    "gh_22b87fa7cb3c",
    "officialaccounts",
    "notification_messages",
];

/// One extra family of service-account ids carries this suffix.
static SPECIAL_ID_EXPR: Lazy<Regex> = Lazy::new(|| Regex::new(r"@qqim$").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

impl From<i64> for Gender {
    fn from(value: i64) -> Self {
        match value {
            1 => Gender::Male,
            2 => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

/// Normalized contact profile. Produced wholesale by [`ContactInfo::parse`];
/// the classification flags are computed once here and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub id: String,
    pub uin: String,
    /// Account handle, empty when the backend withholds it.
    pub weixin: String,
    pub name: String,
    /// Display override set by the logged-in user.
    pub alias: Option<String>,
    pub sex: Gender,
    pub province: String,
    pub city: String,
    pub signature: String,
    /// Relative avatar path, including its query string.
    pub avatar: String,
    pub star: bool,
    pub stranger: bool,
    pub official: bool,
    pub special: bool,
}

impl ContactInfo {
    /// Normalize a raw wire record. Returns `None` when the payload carries
    /// no id; every other field is copied or coerced as-is, without further
    /// validation.
    pub fn parse(raw: &ContactInternal) -> Option<Self> {
        if raw.user_name.is_empty() {
            warn!("parse() got contact payload without UserName");
            return None;
        }

        let id = raw.user_name.clone();
        Some(Self {
            uin: raw.uin.clone(),
            weixin: raw.alias.clone(),
            name: raw.nick_name.clone(),
            alias: (!raw.remark_name.is_empty()).then(|| raw.remark_name.clone()),
            sex: Gender::from(raw.sex),
            province: raw.province.clone(),
            city: raw.city.clone(),
            signature: raw.signature.clone(),
            avatar: raw.head_img_url.clone(),
            star: truthy(&raw.star_friend),
            stranger: truthy(&raw.stranger),
            // group ids never count as official, whatever their flags say
            official: !id.starts_with(GROUP_ID_PREFIX)
                && raw.verify_flag & VERIFY_FLAG_OFFICIAL != 0,
            special: SPECIAL_CONTACT_IDS.contains(&id.as_str()) || SPECIAL_ID_EXPR.is_match(&id),
            id,
        })
    }
}
