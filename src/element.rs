//! 节点描述 - 渲染器的输入
//!
//! 对应 `{ type, props, children }` 形式的声明式元素描述。

use crate::error::DescriptionError;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// `props` 中的保留键，不会作为属性复制
pub const CHILDREN_KEY: &str = "children";

/// 属性表：属性名 -> 属性值
pub type Props = BTreeMap<String, String>;

/// 节点描述
///
/// 属性名和属性值都按原样使用，不做校验和转义。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NodeDescription {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default, deserialize_with = "deserialize_props")]
    pub props: Props,
    #[serde(default, deserialize_with = "deserialize_children")]
    pub children: Option<String>,
}

impl NodeDescription {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            props: Props::new(),
            children: None,
        }
    }

    pub fn prop(mut self, name: &str, value: &str) -> Self {
        self.props.insert(name.to_string(), value.to_string());
        self
    }

    pub fn children(mut self, content: &str) -> Self {
        self.children = Some(content.to_string());
        self
    }

    /// 节点内容：优先取 `children` 字段，其次取 `props.children`，都没有则为空串
    pub fn content(&self) -> &str {
        self.children
            .as_deref()
            .or_else(|| self.props.get(CHILDREN_KEY).map(String::as_str))
            .unwrap_or("")
    }

    /// 需要复制到节点上的属性（排除 `children`）
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props
            .iter()
            .filter(|(name, _)| name.as_str() != CHILDREN_KEY)
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes().count()
    }

    /// 从 JSON 文本解析单个描述
    pub fn from_json(input: &str) -> Result<Self, DescriptionError> {
        Ok(serde_json::from_str(input)?)
    }

    /// 解析单个描述或描述数组
    ///
    /// 先解析成 JSON 值再按形状反序列化，错误信息能指出具体的 prop。
    pub fn list_from_json(input: &str) -> Result<Vec<Self>, DescriptionError> {
        Ok(match serde_json::from_str(input)? {
            list @ JsonValue::Array(_) => serde_json::from_value(list)?,
            single => vec![serde_json::from_value(single)?],
        })
    }
}

/// 按 `createElement(type, props, children)` 的形式构造描述
pub fn create_element<'a, I>(tag: &str, props: I, children: Option<&str>) -> NodeDescription
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    NodeDescription {
        tag: tag.to_string(),
        props: props
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        children: children.map(str::to_string),
    }
}

/// 标量转文本，和浏览器 setAttribute 的字符串化一致
fn scalar_to_string(value: JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s),
        JsonValue::Number(n) => Some(number_to_string(&n)),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 数字文本与 JS `Number#toString` 一致：`1.0` 为 `1`，`-0` 为 `0`，
/// 绝对值不在 [1e-6, 1e21) 内时用 `1e+21`、`1.5e-7` 形式的指数表示
fn number_to_string(n: &serde_json::Number) -> String {
    const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() <= MAX_SAFE_INTEGER {
            return i.to_string();
        }
    } else if let Some(u) = n.as_u64() {
        if u <= MAX_SAFE_INTEGER {
            return u.to_string();
        }
    }

    let f = n.as_f64().unwrap_or(0.0);
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if (1e-6..1e21).contains(&abs) {
        // f64 的 Display 不带指数，且是最短往返表示
        return f.to_string();
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            format!("{}e+{}", mantissa, power)
        }
        _ => exp,
    }
}

fn deserialize_props<'de, D>(deserializer: D) -> Result<Props, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, JsonValue>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(name, value)| match scalar_to_string(value) {
            Some(text) => Ok((name, text)),
            None => Err(de::Error::custom(format!(
                "prop `{}` must be a string, number or boolean",
                name
            ))),
        })
        .collect()
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::Null => Ok(None),
        value => scalar_to_string(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom("children must be a string, number or boolean")),
    }
}
