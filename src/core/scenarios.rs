use crate::core::truthiness::{guarded_and, logical_and, ternary};
use crate::domain::model::{ComparisonScenario, Guard, JsValue, OperatorKind, OperatorOutcome};
use serde::Serialize;
use std::sync::LazyLock;

static COMPARISON_SCENARIOS: LazyLock<Vec<ComparisonScenario>> =
    LazyLock::new(build_comparison_scenarios);

/// 三種寫法的比較表，結果與評語皆為預先寫定的資料
pub fn comparison_scenarios() -> &'static [ComparisonScenario] {
    &COMPARISON_SCENARIOS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Practice {
    pub topic: &'static str,
    pub advice: &'static str,
}

pub const RECOMMENDED_PRACTICES: [Practice; 4] = [
    Practice {
        topic: "Basic conditionals",
        advice: "Use ternary `condition ? valueIfTrue : valueIfFalse` for clearest intent",
    },
    Practice {
        topic: "Conditional rendering",
        advice: "`condition && element` is fine for boolean values, `!!value && element` is safer for other types",
    },
    Practice {
        topic: "Numeric or string checks",
        advice: "Be explicit with `value > 0` or `value.length > 0` rather than relying on truthy/falsy behavior",
    },
    Practice {
        topic: "Type conversion",
        advice: "Use `!!` when you explicitly want to convert to boolean",
    },
];

pub const COMMON_PITFALLS: [Practice; 3] = [
    Practice {
        topic: "Using && with non-boolean values",
        advice: "Can lead to rendering unwanted values like 0, empty strings",
    },
    Practice {
        topic: "Complex nested ternaries",
        advice: "Can become hard to read and maintain",
    },
    Practice {
        topic: "Forgetting null/undefined checks",
        advice: "Always verify that objects exist before accessing their properties",
    },
];

pub const REAL_WORLD_EXAMPLE: &str = r#"// Combining operators in a real-world React component
function UserProfile({ user, isLoading }) {
  return (
    <div>
      {isLoading
        ? <LoadingSpinner />
        : (
          <>
            {user ? (
              <div>
                <h2>{user.name}</h2>
                {/* Safe usage of && with boolean */}
                {user.isAdmin && <AdminBadge />}

                {/* Better practice with potentially non-boolean */}
                {!!user.notifications.length && <NotificationBell />}

                {/* Clear ternary for conditional rendering */}
                {user.posts.length > 0
                  ? <UserPosts posts={user.posts} />
                  : <NoPosts />}
              </div>
            ) : <NotLoggedIn />}
          </>
        )}
    </div>
  );
}"#;

fn outcome(
    kind: OperatorKind,
    expression: &str,
    result: JsValue,
    is_good: bool,
    note: Option<&str>,
) -> OperatorOutcome {
    OperatorOutcome {
        kind,
        expression: expression.to_string(),
        result,
        is_good,
        note: note.map(str::to_string),
    }
}

fn scenario(
    label: &str,
    declaration: &str,
    subject: JsValue,
    guard: Guard,
    when_truthy: JsValue,
    when_falsy: JsValue,
    outcomes: [OperatorOutcome; 3],
) -> ComparisonScenario {
    ComparisonScenario {
        label: label.to_string(),
        declaration: declaration.to_string(),
        subject,
        guard,
        when_truthy,
        when_falsy,
        outcomes,
    }
}

fn build_comparison_scenarios() -> Vec<ComparisonScenario> {
    use OperatorKind::{DoubleNegation, GuardedAnd, LogicalAnd, Ternary};

    let s = JsValue::str;
    let admin_panel = JsValue::element("AdminPanel rendered");
    let bell = JsValue::element("NotificationBell rendered");

    vec![
        scenario(
            "Boolean true",
            "const isLoggedIn = true;",
            JsValue::Bool(true),
            Guard::Value,
            s("Welcome!"),
            s("Log in"),
            [
                outcome(Ternary, "isLoggedIn ? 'Welcome!' : 'Log in'", s("Welcome!"), true, None),
                outcome(LogicalAnd, "isLoggedIn && 'Welcome!'", s("Welcome!"), true, None),
                outcome(DoubleNegation, "!!isLoggedIn", JsValue::Bool(true), true, None),
            ],
        ),
        scenario(
            "Boolean false",
            "const isLoggedIn = false;",
            JsValue::Bool(false),
            Guard::Value,
            s("Welcome!"),
            s("Log in"),
            [
                outcome(Ternary, "isLoggedIn ? 'Welcome!' : 'Log in'", s("Log in"), true, None),
                outcome(
                    LogicalAnd,
                    "isLoggedIn && 'Welcome!'",
                    JsValue::Bool(false),
                    false,
                    Some("Returns false which may render unexpectedly"),
                ),
                outcome(DoubleNegation, "!!isLoggedIn", JsValue::Bool(false), true, None),
            ],
        ),
        scenario(
            "Number > 0",
            "const count = 5;",
            JsValue::Number(5.0),
            Guard::Value,
            s("Has value"),
            s("No value"),
            [
                outcome(Ternary, "count ? 'Has value' : 'No value'", s("Has value"), true, None),
                outcome(LogicalAnd, "count && 'Has value'", s("Has value"), true, None),
                outcome(DoubleNegation, "!!count", JsValue::Bool(true), true, None),
            ],
        ),
        scenario(
            "Number = 0",
            "const count = 0;",
            JsValue::Number(0.0),
            Guard::Value,
            s("Has value"),
            s("No value"),
            [
                outcome(Ternary, "count ? 'Has value' : 'No value'", s("No value"), true, None),
                outcome(
                    LogicalAnd,
                    "count && 'Has value'",
                    JsValue::Number(0.0),
                    false,
                    Some("Returns 0 which renders as '0'"),
                ),
                outcome(DoubleNegation, "!!count", JsValue::Bool(false), true, None),
            ],
        ),
        scenario(
            "Non-empty string",
            "const name = 'John';",
            s("John"),
            Guard::Value,
            s("Hello John"),
            s("No name"),
            [
                outcome(Ternary, "name ? `Hello ${name}` : 'No name'", s("Hello John"), true, None),
                outcome(LogicalAnd, "name && `Hello ${name}`", s("Hello John"), true, None),
                outcome(DoubleNegation, "!!name", JsValue::Bool(true), true, None),
            ],
        ),
        scenario(
            "Empty string",
            "const name = '';",
            s(""),
            Guard::Value,
            s("Hello "),
            s("No name"),
            [
                outcome(Ternary, "name ? `Hello ${name}` : 'No name'", s("No name"), true, None),
                outcome(
                    LogicalAnd,
                    "name && `Hello ${name}`",
                    s(""),
                    false,
                    Some("Returns empty string which renders as nothing"),
                ),
                outcome(DoubleNegation, "!!name", JsValue::Bool(false), true, None),
            ],
        ),
        scenario(
            "Null value",
            "const user = null;",
            JsValue::Null,
            Guard::Value,
            s("User name"),
            s("Guest"),
            [
                outcome(Ternary, "user ? user.name : 'Guest'", s("Guest"), true, None),
                outcome(
                    LogicalAnd,
                    "user && user.name",
                    JsValue::Null,
                    true,
                    Some("Safe because null is falsy and stops evaluation"),
                ),
                outcome(DoubleNegation, "!!user", JsValue::Bool(false), true, None),
            ],
        ),
        scenario(
            "Array with items",
            "const items = ['Apple', 'Banana'];",
            JsValue::Array(vec![s("Apple"), s("Banana")]),
            Guard::Length,
            s("Has items"),
            s("Empty"),
            [
                outcome(Ternary, "items.length ? 'Has items' : 'Empty'", s("Has items"), true, None),
                outcome(
                    LogicalAnd,
                    "items.length && 'Has items'",
                    s("Has items"),
                    false,
                    Some("Works but could render '2' if length is 2"),
                ),
                outcome(DoubleNegation, "!!items.length", JsValue::Bool(true), true, None),
            ],
        ),
        scenario(
            "Empty array",
            "const items = [];",
            JsValue::Array(vec![]),
            Guard::Length,
            s("Has items"),
            s("Empty"),
            [
                outcome(Ternary, "items.length ? 'Has items' : 'Empty'", s("Empty"), true, None),
                outcome(
                    LogicalAnd,
                    "items.length && 'Has items'",
                    JsValue::Number(0.0),
                    false,
                    Some("Returns 0 which renders as '0'"),
                ),
                outcome(DoubleNegation, "!!items.length", JsValue::Bool(false), true, None),
            ],
        ),
        scenario(
            "Conditional rendering",
            "const isAdmin = true;",
            JsValue::Bool(true),
            Guard::Value,
            admin_panel.clone(),
            JsValue::Null,
            [
                outcome(
                    Ternary,
                    "isAdmin ? <AdminPanel /> : null",
                    admin_panel.clone(),
                    true,
                    Some("Explicitly returns null when false"),
                ),
                outcome(
                    LogicalAnd,
                    "isAdmin && <AdminPanel />",
                    admin_panel.clone(),
                    true,
                    Some("Shorter but beware with falsy values"),
                ),
                outcome(
                    GuardedAnd,
                    "!!isAdmin && <AdminPanel />",
                    admin_panel,
                    true,
                    Some("Most explicit about boolean intention"),
                ),
            ],
        ),
        scenario(
            "Conditional rendering with a count",
            "const notifications = [];",
            JsValue::Array(vec![]),
            Guard::Length,
            bell.clone(),
            JsValue::Null,
            [
                outcome(
                    Ternary,
                    "notifications.length ? <NotificationBell /> : null",
                    JsValue::Null,
                    true,
                    Some("Explicitly returns null when empty"),
                ),
                outcome(
                    LogicalAnd,
                    "notifications.length && <NotificationBell />",
                    JsValue::Number(0.0),
                    false,
                    Some("Returns 0 which renders as '0'"),
                ),
                outcome(
                    GuardedAnd,
                    "!!notifications.length && <NotificationBell />",
                    JsValue::Bool(false),
                    true,
                    Some("Boolean guard renders nothing"),
                ),
            ],
        ),
    ]
}

/// 未讀訊息示範：同一個值以三種寫法渲染後畫面上的文字
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnreadMessageCase {
    pub input: JsValue,
    pub heading: String,
    pub ternary: Option<String>,
    pub bang_and: Option<String>,
    pub and_only: Option<String>,
}

pub fn unread_message_inputs() -> Vec<JsValue> {
    vec![
        JsValue::Number(1.0),
        JsValue::Number(0.0),
        JsValue::Null,
        JsValue::Undefined,
    ]
}

pub fn unread_message_case(count: &JsValue) -> UnreadMessageCase {
    let message = JsValue::Element(format!(
        "Vous avez {} messages non lus.",
        count.to_json_text().unwrap_or_default()
    ));

    UnreadMessageCase {
        input: count.clone(),
        heading: format!("x: {}", count),
        ternary: ternary(count, &message, &JsValue::Null).renders_as(),
        bang_and: guarded_and(count, &message).renders_as(),
        and_only: logical_and(count, &message).renders_as(),
    }
}

pub fn unread_message_cases() -> Vec<UnreadMessageCase> {
    unread_message_inputs()
        .iter()
        .map(unread_message_case)
        .collect()
}
