use crate::domain::model::{Guard, JsValue, OperatorKind, OperatorOutcome};
use std::fmt;

impl JsValue {
    /// JavaScript 布林轉型規則
    pub fn is_truthy(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Bool(b) => *b,
            JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
            JsValue::Str(s) => !s.is_empty(),
            JsValue::Array(_) | JsValue::Element(_) => true,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    /// `.length`；沒有長度的值回傳 undefined
    pub fn length(&self) -> JsValue {
        match self {
            JsValue::Array(items) => JsValue::Number(items.len() as f64),
            JsValue::Str(s) => JsValue::Number(s.encode_utf16().count() as f64),
            _ => JsValue::Undefined,
        }
    }

    /// React 將此值當作子節點時畫出的文字；`None` 表示什麼都不畫
    pub fn renders_as(&self) -> Option<String> {
        match self {
            JsValue::Undefined | JsValue::Null | JsValue::Bool(_) => None,
            JsValue::Str(s) if s.is_empty() => None,
            JsValue::Str(s) => Some(s.clone()),
            JsValue::Number(_) => Some(self.to_string()),
            JsValue::Element(label) => Some(label.clone()),
            JsValue::Array(items) => {
                let text: String = items.iter().filter_map(JsValue::renders_as).collect();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }

    /// `JSON.stringify(x)`；undefined 沒有 JSON 表示
    pub fn to_json_text(&self) -> Option<String> {
        match self {
            JsValue::Undefined => None,
            other => Some(other.json_text()),
        }
    }

    fn json_text(&self) -> String {
        match self {
            // 陣列中的 undefined 與非有限數字都寫成 null
            JsValue::Undefined | JsValue::Null => "null".to_string(),
            JsValue::Bool(b) => b.to_string(),
            JsValue::Number(n) if !n.is_finite() => "null".to_string(),
            JsValue::Number(n) => number_text(*n),
            JsValue::Str(s) | JsValue::Element(s) => serde_json::Value::String(s.clone()).to_string(),
            JsValue::Array(items) => {
                let parts: Vec<String> = items.iter().map(JsValue::json_text).collect();
                format!("[{}]", parts.join(","))
            }
        }
    }

    /// 比較表「Result」欄位顯示的文字
    pub fn display_result(&self) -> String {
        match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Bool(b) => b.to_string(),
            other => other.renders_as().unwrap_or_default(),
        }
    }
}

/// 等同 `String(x)`
impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => f.write_str("undefined"),
            JsValue::Null => f.write_str("null"),
            JsValue::Bool(b) => write!(f, "{}", b),
            JsValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            JsValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            JsValue::Number(n) => f.write_str(&number_text(*n)),
            JsValue::Str(s) | JsValue::Element(s) => f.write_str(s),
            JsValue::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| {
                        if item.is_nullish() {
                            String::new()
                        } else {
                            item.to_string()
                        }
                    })
                    .collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

/// 有限數字的 `Number.prototype.toString()`：最短可還原的位數，
/// 小數點位置落在 (-6, 21] 之外時改用指數形式
fn number_text(n: f64) -> String {
    if n == 0.0 {
        // -0 也印成 0
        return "0".to_string();
    }

    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if point - 1 >= 0 { '+' } else { '-' };
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, (point - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, (point - 1).abs())
        }
    };

    if n < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

pub fn guard_condition(guard: Guard, subject: &JsValue) -> JsValue {
    match guard {
        Guard::Value => subject.clone(),
        Guard::Length => subject.length(),
    }
}

pub fn ternary(condition: &JsValue, when_truthy: &JsValue, when_falsy: &JsValue) -> JsValue {
    if condition.is_truthy() {
        when_truthy.clone()
    } else {
        when_falsy.clone()
    }
}

pub fn logical_and(condition: &JsValue, when_truthy: &JsValue) -> JsValue {
    if condition.is_truthy() {
        when_truthy.clone()
    } else {
        condition.clone()
    }
}

pub fn double_negation(condition: &JsValue) -> JsValue {
    JsValue::Bool(condition.is_truthy())
}

pub fn guarded_and(condition: &JsValue, when_truthy: &JsValue) -> JsValue {
    logical_and(&double_negation(condition), when_truthy)
}

pub fn apply(
    kind: OperatorKind,
    condition: &JsValue,
    when_truthy: &JsValue,
    when_falsy: &JsValue,
) -> JsValue {
    match kind {
        OperatorKind::Ternary => ternary(condition, when_truthy, when_falsy),
        OperatorKind::LogicalAnd => logical_and(condition, when_truthy),
        OperatorKind::DoubleNegation => double_negation(condition),
        OperatorKind::GuardedAnd => guarded_and(condition, when_truthy),
    }
}

/// `&&` 只有在條件為 falsy 且不是 null/undefined 時，才會把原值漏到畫面上
pub fn logical_and_is_safe(condition: &JsValue) -> bool {
    condition.is_truthy() || condition.is_nullish()
}

/// 對任意條件算出三種寫法的結果，`is_good` 由規則推導而非人工標註
pub fn evaluate(
    name: &str,
    condition: &JsValue,
    when_truthy: &JsValue,
    when_falsy: &JsValue,
) -> [OperatorOutcome; 3] {
    let and_result = logical_and(condition, when_truthy);
    let and_safe = logical_and_is_safe(condition);
    let and_note = if and_safe {
        None
    } else {
        match and_result.renders_as() {
            Some(text) => Some(format!("Returns {} which renders as '{}'", and_result, text)),
            None => Some(format!(
                "Returns {} which may render unexpectedly",
                and_result.to_json_text().unwrap_or_else(|| and_result.to_string())
            )),
        }
    };

    [
        OperatorOutcome {
            kind: OperatorKind::Ternary,
            expression: format!(
                "{} ? {} : {}",
                name,
                source_literal(when_truthy),
                source_literal(when_falsy)
            ),
            result: ternary(condition, when_truthy, when_falsy),
            is_good: true,
            note: None,
        },
        OperatorOutcome {
            kind: OperatorKind::LogicalAnd,
            expression: format!("{} && {}", name, source_literal(when_truthy)),
            result: and_result,
            is_good: and_safe,
            note: and_note,
        },
        OperatorOutcome {
            kind: OperatorKind::DoubleNegation,
            expression: format!("!!{}", name),
            result: double_negation(condition),
            is_good: true,
            note: None,
        },
    ]
}

fn source_literal(value: &JsValue) -> String {
    match value {
        JsValue::Str(s) => format!("'{}'", s.replace('\'', "\\'")),
        JsValue::Element(label) => format!("<{} />", label),
        JsValue::Array(_) => value
            .to_json_text()
            .unwrap_or_else(|| "[]".to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn welcome() -> JsValue {
        JsValue::str("Welcome!")
    }

    fn log_in() -> JsValue {
        JsValue::str("Log in")
    }

    #[test]
    fn test_truthiness_coercion() {
        assert!(JsValue::Bool(true).is_truthy());
        assert!(JsValue::Number(5.0).is_truthy());
        assert!(JsValue::Number(-1.0).is_truthy());
        assert!(JsValue::str("0").is_truthy());
        assert!(JsValue::Array(vec![]).is_truthy());
        assert!(JsValue::element("AdminPanel").is_truthy());

        assert!(!JsValue::Bool(false).is_truthy());
        assert!(!JsValue::Number(0.0).is_truthy());
        assert!(!JsValue::Number(-0.0).is_truthy());
        assert!(!JsValue::Number(f64::NAN).is_truthy());
        assert!(!JsValue::str("").is_truthy());
        assert!(!JsValue::Null.is_truthy());
        assert!(!JsValue::Undefined.is_truthy());
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(JsValue::Number(1.0).to_string(), "1");
        assert_eq!(JsValue::Number(-0.0).to_string(), "0");
        assert_eq!(JsValue::Number(1.5).to_string(), "1.5");
        assert_eq!(JsValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(JsValue::Null.to_string(), "null");
        assert_eq!(JsValue::Undefined.to_string(), "undefined");
        assert_eq!(
            JsValue::Array(vec![JsValue::str("Apple"), JsValue::Null, JsValue::Number(2.0)])
                .to_string(),
            "Apple,,2"
        );
    }

    #[test]
    fn test_json_text() {
        assert_eq!(JsValue::Number(1.0).to_json_text().as_deref(), Some("1"));
        assert_eq!(JsValue::str("a").to_json_text().as_deref(), Some("\"a\""));
        assert_eq!(JsValue::Null.to_json_text().as_deref(), Some("null"));
        assert_eq!(JsValue::Undefined.to_json_text(), None);
    }

    #[test]
    fn test_number_text_follows_js_notation() {
        let cases = [
            (0.1, "0.1"),
            (123.456, "123.456"),
            (-42.0, "-42"),
            (1e-6, "0.000001"),
            (1e-7, "1e-7"),
            (-2.5e-8, "-2.5e-8"),
            (1e16, "10000000000000000"),
            (1e20, "100000000000000000000"),
            (1e21, "1e+21"),
            (1.5e300, "1.5e+300"),
        ];
        for (n, expected) in cases {
            assert_eq!(JsValue::Number(n).to_string(), expected, "String({:e})", n);
            assert_eq!(JsValue::Number(n).to_json_text().as_deref(), Some(expected));
        }
        assert_eq!(JsValue::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(JsValue::Number(f64::NAN).to_json_text().as_deref(), Some("null"));
        assert_eq!(
            JsValue::Array(vec![JsValue::Undefined, JsValue::Number(1e-7), JsValue::str("x")])
                .to_json_text()
                .as_deref(),
            Some("[null,1e-7,\"x\"]")
        );
    }

    #[test]
    fn test_react_rendering() {
        assert_eq!(JsValue::Bool(false).renders_as(), None);
        assert_eq!(JsValue::Null.renders_as(), None);
        assert_eq!(JsValue::str("").renders_as(), None);
        assert_eq!(JsValue::Number(0.0).renders_as().as_deref(), Some("0"));
        assert_eq!(JsValue::element("AdminPanel rendered").renders_as().as_deref(), Some("AdminPanel rendered"));
    }

    #[test]
    fn test_display_result() {
        assert_eq!(JsValue::Bool(false).display_result(), "false");
        assert_eq!(JsValue::Undefined.display_result(), "undefined");
        assert_eq!(JsValue::Null.display_result(), "");
        assert_eq!(JsValue::Number(0.0).display_result(), "0");
    }

    #[test]
    fn test_length_guard() {
        let items = JsValue::Array(vec![JsValue::str("Apple"), JsValue::str("Banana")]);
        assert_eq!(guard_condition(Guard::Length, &items), JsValue::Number(2.0));
        assert_eq!(guard_condition(Guard::Value, &items), items);
        assert_eq!(JsValue::str("héllo").length(), JsValue::Number(5.0));
        assert_eq!(JsValue::Null.length(), JsValue::Undefined);
    }

    #[test]
    fn test_and_with_false_returns_false() {
        let [ternary, and, bang] = evaluate("isLoggedIn", &JsValue::Bool(false), &welcome(), &log_in());

        assert_eq!(ternary.result, log_in());
        assert!(ternary.is_good);
        assert_eq!(and.result, JsValue::Bool(false));
        assert!(!and.is_good);
        assert_eq!(and.expression, "isLoggedIn && 'Welcome!'");
        assert_eq!(bang.result, JsValue::Bool(false));
        assert!(bang.is_good);
    }

    #[test]
    fn test_and_with_zero_leaks_zero() {
        let [_, and, _] = evaluate(
            "count",
            &JsValue::Number(0.0),
            &JsValue::str("Has value"),
            &JsValue::str("No value"),
        );

        assert_eq!(and.result, JsValue::Number(0.0));
        assert!(!and.is_good);
        assert_eq!(and.note.as_deref(), Some("Returns 0 which renders as '0'"));
    }

    #[test]
    fn test_and_with_empty_string() {
        let [_, and, _] = evaluate(
            "name",
            &JsValue::str(""),
            &JsValue::str("Hello "),
            &JsValue::str("No name"),
        );

        assert_eq!(and.result, JsValue::str(""));
        assert!(!and.is_good);
        assert!(and.note.is_some());
    }

    #[test]
    fn test_and_with_null_is_safe() {
        let [_, and, bang] = evaluate(
            "user",
            &JsValue::Null,
            &JsValue::str("User name"),
            &JsValue::str("Guest"),
        );

        assert_eq!(and.result, JsValue::Null);
        assert!(and.is_good);
        assert_eq!(bang.result, JsValue::Bool(false));
    }

    #[test]
    fn test_guarded_and() {
        let panel = JsValue::element("AdminPanel rendered");
        assert_eq!(guarded_and(&JsValue::Number(0.0), &panel), JsValue::Bool(false));
        assert_eq!(guarded_and(&JsValue::Number(3.0), &panel), panel);
        assert_eq!(
            apply(OperatorKind::GuardedAnd, &JsValue::str(""), &panel, &JsValue::Null),
            JsValue::Bool(false)
        );
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let condition = JsValue::Number(5.0);
        let truthy = JsValue::str("Has value");
        let falsy = JsValue::str("No value");
        assert_eq!(
            evaluate("count", &condition, &truthy, &falsy),
            evaluate("count", &condition, &truthy, &falsy)
        );
    }
}
