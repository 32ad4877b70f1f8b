use serde::{de, Deserialize, Deserializer, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

/// 占位响应中固定返回的消息
pub const NOT_IMPLEMENTED_MESSAGE: &str = "Not implemented yet";

/// 双文字错觉模型的生成参数
///
/// 除类型转换外不做任何校验：不检查范围，也不检查空字符串。
/// 未知字段会被忽略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub word_a: String,
    pub word_b: String,

    #[serde(default = "default_font")]
    pub font: String,

    // 数字或数字字符串（"1.5"）都接受
    #[serde(default = "default_padding", deserialize_with = "deserialize_finite_number")]
    pub padding: f64,

    #[serde(default = "default_fillet", deserialize_with = "deserialize_finite_number")]
    pub fillet: f64,
}

/// 数字字符串中的 `NaN`、`inf` 无法以 JSON 数字回显，直接拒绝
fn deserialize_finite_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value: f64 = deserialize_number_from_string(deserializer)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom(format!(
            "invalid value {}, expected a finite number",
            value
        )))
    }
}

fn default_font() -> String {
    "Sans".to_string()
}

fn default_padding() -> f64 {
    2.5
}

fn default_fillet() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateResponse {
    pub message: &'static str,
    pub received: GenerateRequest,
}

impl GenerateResponse {
    /// 几何生成尚未实现，原样回显请求
    pub fn not_implemented(received: GenerateRequest) -> Self {
        Self {
            message: NOT_IMPLEMENTED_MESSAGE,
            received,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn applies_defaults_for_omitted_fields() {
        let request: GenerateRequest =
            serde_json::from_value(json!({"wordA": "A", "wordB": "B"})).unwrap();

        assert_eq!(request.font, "Sans");
        assert_eq!(request.padding, 2.5);
        assert_eq!(request.fillet, 0.5);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"wordA": "A", "wordB": "B", "font": "Sans", "padding": 2.5, "fillet": 0.5})
        );
    }

    #[test]
    fn missing_required_word_is_rejected() {
        let err = serde_json::from_value::<GenerateRequest>(json!({"wordA": "A"})).unwrap_err();
        assert!(err.to_string().contains("wordB"), "unexpected error: {err}");
    }

    #[test]
    fn coerces_numeric_strings_and_integers() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "wordA": "A",
            "wordB": "B",
            "padding": "1.5",
            "fillet": 1,
        }))
        .unwrap();

        assert_eq!(request.padding, 1.5);
        assert_eq!(request.fillet, 1.0);
    }

    #[test]
    fn rejects_non_numeric_padding() {
        let result = serde_json::from_value::<GenerateRequest>(json!({
            "wordA": "A",
            "wordB": "B",
            "padding": "wide",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_finite_numeric_strings() {
        for padding in ["NaN", "inf", "-inf"] {
            let err = serde_json::from_value::<GenerateRequest>(json!({
                "wordA": "A",
                "wordB": "B",
                "padding": padding,
            }))
            .unwrap_err();
            assert!(err.to_string().contains("finite"), "unexpected error: {err}");
        }

        let err = serde_json::from_value::<GenerateRequest>(json!({
            "wordA": "A",
            "wordB": "B",
            "fillet": "infinity",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("finite"), "unexpected error: {err}");
    }

    #[test]
    fn ignores_unknown_fields() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "wordA": "A",
            "wordB": "B",
            "depth": 12,
        }))
        .unwrap();

        assert_eq!(request.word_a, "A");
        assert_eq!(request.word_b, "B");
    }

    #[test]
    fn response_echoes_request() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "wordA": "Hello",
            "wordB": "World",
            "font": "Serif",
            "padding": 1.0,
            "fillet": 0.25,
        }))
        .unwrap();

        let response = GenerateResponse::not_implemented(request);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "message": "Not implemented yet",
                "received": {
                    "wordA": "Hello",
                    "wordB": "World",
                    "font": "Serif",
                    "padding": 1.0,
                    "fillet": 0.25,
                },
            })
        );
    }
}
