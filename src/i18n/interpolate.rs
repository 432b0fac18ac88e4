//! `{{name}}` placeholder substitution.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// A value substituted into a placeholder.
///
/// Integers render in plain decimal; integers wider than `i64` are kept as
/// their decimal text. Floats use the shortest round-trip form (`2.0` renders
/// as `2`), with `Infinity`, `-Infinity` and `NaN` for non-finite values and
/// `0` for negative zero.
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Text(s) => f.write_str(s),
            VarValue::Int(n) => write!(f, "{}", n),
            VarValue::Float(n) if n.is_nan() => f.write_str("NaN"),
            VarValue::Float(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            VarValue::Float(n) if *n == 0.0 => f.write_str("0"),
            VarValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::Text(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::Text(value)
    }
}

impl From<&String> for VarValue {
    fn from(value: &String) -> Self {
        VarValue::Text(value.clone())
    }
}

macro_rules! int_var_value {
    ($($t:ty),*) => {
        $(impl From<$t> for VarValue {
            fn from(value: $t) -> Self {
                VarValue::Int(i64::from(value))
            }
        })*
    };
}

int_var_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_int_var_value {
    ($($t:ty),*) => {
        $(impl From<$t> for VarValue {
            fn from(value: $t) -> Self {
                match i64::try_from(value) {
                    Ok(n) => VarValue::Int(n),
                    Err(_) => VarValue::Text(value.to_string()),
                }
            }
        })*
    };
}

wide_int_var_value!(u64, u128, i128, usize, isize);

impl From<f32> for VarValue {
    fn from(value: f32) -> Self {
        VarValue::Float(f64::from(value))
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        VarValue::Float(value)
    }
}

/// Named values for one interpolation call.
///
/// ```
/// use app_i18n::i18n::{interpolate, Vars};
///
/// let vars = Vars::new().with("name", "Ann").with("count", 3);
/// assert_eq!(interpolate("{{name}} has {{ count }}", &vars), "Ann has 3");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vars {
    values: HashMap<String, VarValue>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<VarValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Vars
where
    K: Into<String>,
    V: Into<VarValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Vars::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

/// Replace every `{{ name }}` in `template` with the matching value.
///
/// Whitespace inside the braces is ignored. Placeholders whose name is not in
/// `vars` are rewritten as `{{name}}` (inner whitespace dropped) and otherwise
/// left in place. Substituted values are never rescanned.
pub fn interpolate(template: &str, vars: &Vars) -> String {
    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{\{\s*([^}\s]+)\s*\}\}").expect("valid placeholder regex"));

    regex
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match vars.get(name) {
                Some(value) => value.to_string(),
                None => format!("{{{{{}}}}}", name),
            }
        })
        .into_owned()
}
