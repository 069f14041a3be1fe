use serde_json::{Map, Value};

use fauxgen_core::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// Non-negative integer.
    UInt,
    String,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::UInt => "uint",
            ParamKind::String => "string",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub key: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParamSpec {
    pub const fn new(key: &'static str, kind: ParamKind, required: bool) -> Self {
        Self {
            key,
            kind,
            required,
        }
    }
}

/// Validated view over generator params.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamMap<'a> {
    map: Option<&'a Map<String, Value>>,
}

pub fn validate_params<'a>(
    params: Option<&'a Value>,
    specs: &[ParamSpec],
    ctx: &str,
) -> Result<ParamMap<'a>> {
    let map = match params {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            return Err(Error::InvalidParams(format!(
                "{ctx}: params must be a JSON object"
            )));
        }
    };

    if let Some(map) = map {
        for (key, value) in map {
            let Some(spec) = specs.iter().find(|spec| spec.key == key.as_str()) else {
                return Err(Error::InvalidParams(format!("{ctx}: unknown param '{key}'")));
            };
            validate_kind(ctx, key, spec.kind, value)?;
        }
    }

    for spec in specs {
        if spec.required && !map.is_some_and(|map| map.contains_key(spec.key)) {
            return Err(Error::InvalidParams(format!(
                "{ctx}: missing required param '{}'",
                spec.key
            )));
        }
    }

    Ok(ParamMap { map })
}

impl<'a> ParamMap<'a> {
    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.map
            .and_then(|map| map.get(key))
            .and_then(|value| value.as_u64())
            .and_then(|value| usize::try_from(value).ok())
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.map
            .and_then(|map| map.get(key))
            .and_then(|value| value.as_str())
    }
}

fn validate_kind(ctx: &str, key: &str, kind: ParamKind, value: &Value) -> Result<()> {
    let valid = match kind {
        ParamKind::UInt => value.as_u64().is_some(),
        ParamKind::String => value.is_string(),
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidParams(format!(
            "{ctx}: param '{key}' must be {}",
            kind.as_str()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPECS: &[ParamSpec] = &[ParamSpec::new("length", ParamKind::UInt, false)];

    #[test]
    fn accepts_known_params() {
        let params = json!({"length": 10});
        let map = validate_params(Some(&params), SPECS, "test").expect("valid");
        assert_eq!(map.get_usize("length"), Some(10));
        assert_eq!(map.get_str("length"), None);
    }

    #[test]
    fn rejects_unknown_and_mistyped_params() {
        let unknown = json!({"size": 10});
        assert!(matches!(
            validate_params(Some(&unknown), SPECS, "test"),
            Err(Error::InvalidParams(_))
        ));
        let negative = json!({"length": -1});
        assert!(matches!(
            validate_params(Some(&negative), SPECS, "test"),
            Err(Error::InvalidParams(_))
        ));
        let not_object = json!([1, 2]);
        assert!(validate_params(Some(&not_object), SPECS, "test").is_err());
    }

    #[test]
    fn enforces_required_params() {
        let specs = &[ParamSpec::new("state_abbreviation", ParamKind::String, true)];
        assert!(validate_params(None, specs, "test").is_err());
        let params = json!({"state_abbreviation": "AZ"});
        let map = validate_params(Some(&params), specs, "test").expect("valid");
        assert_eq!(map.get_str("state_abbreviation"), Some("AZ"));
    }
}
