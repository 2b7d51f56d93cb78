use serde::{Deserialize, Deserializer, Serialize};

/// 收据 (Receipt)
///
/// 缺失字段与 null 均按空值处理，未知字段忽略；金额保持原始字符串，计分时再解析。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String, // YYYY-MM-DD
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String, // HH:MM (24小时制)
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

/// 收据明细行 (Item)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

/// POST /receipts/process 响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// GET /receipts/:id/points 响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// null 按类型默认值处理
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Receipt {
    /// 从请求体解析收据，不校验 Content-Type；整体为 null 时得到空收据
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(serde_json::from_slice::<Option<Self>>(bytes)?.unwrap_or_default())
    }
}
