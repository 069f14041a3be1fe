//! Template syntax shared by the loader (reference checks) and the expander.
//!
//! - `#` is a random digit
//! - `?` is a random upper-case letter
//! - `#{key}` references another key; bare keys are relative to the
//!   namespace of the template, dotted keys are absolute

use crate::error::{Error, Result};

/// A lexical piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Digit,
    Letter,
    Reference(&'a str),
}

/// Split a template into tokens.
pub fn tokenize(template: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let bytes = template.as_bytes();
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'#' if bytes.get(idx + 1) == Some(&b'{') => {
                push_literal(&mut tokens, template, literal_start, idx);
                let body_start = idx + 2;
                let Some(len) = template[body_start..].find('}') else {
                    return Err(Error::InvalidTemplate(format!(
                        "unterminated reference in '{template}'"
                    )));
                };
                let key = template[body_start..body_start + len].trim();
                if key.is_empty() {
                    return Err(Error::InvalidTemplate(format!(
                        "empty reference in '{template}'"
                    )));
                }
                tokens.push(Token::Reference(key));
                idx = body_start + len + 1;
                literal_start = idx;
            }
            b'#' => {
                push_literal(&mut tokens, template, literal_start, idx);
                tokens.push(Token::Digit);
                idx += 1;
                literal_start = idx;
            }
            b'?' => {
                push_literal(&mut tokens, template, literal_start, idx);
                tokens.push(Token::Letter);
                idx += 1;
                literal_start = idx;
            }
            _ => idx += 1,
        }
    }
    push_literal(&mut tokens, template, literal_start, bytes.len());

    Ok(tokens)
}

fn push_literal<'a>(tokens: &mut Vec<Token<'a>>, template: &'a str, start: usize, end: usize) {
    if start < end {
        tokens.push(Token::Literal(&template[start..end]));
    }
}

/// Keys referenced by a template, qualified against `namespace`.
pub fn references(template: &str, namespace: &str) -> Result<Vec<String>> {
    Ok(tokenize(template)?
        .into_iter()
        .filter_map(|token| match token {
            Token::Reference(key) => Some(qualify(key, namespace)),
            _ => None,
        })
        .collect())
}

/// Turn a reference into an absolute key path.
pub fn qualify(key: &str, namespace: &str) -> String {
    if key.contains('.') || namespace.is_empty() {
        key.to_string()
    } else {
        format!("{namespace}.{key}")
    }
}

/// Namespace of a key path (its first segment).
pub fn namespace_of(key: &str) -> &str {
    key.split('.').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_placeholders_and_references() {
        let tokens = tokenize("#{area_code}-##?x").expect("valid template");
        assert_eq!(
            tokens,
            vec![
                Token::Reference("area_code"),
                Token::Literal("-"),
                Token::Digit,
                Token::Digit,
                Token::Letter,
                Token::Literal("x"),
            ]
        );
    }

    #[test]
    fn multibyte_literals_survive() {
        let tokens = tokenize("São #").expect("valid template");
        assert_eq!(tokens, vec![Token::Literal("São "), Token::Digit]);
    }

    #[test]
    fn unterminated_reference_is_rejected() {
        assert!(matches!(
            tokenize("#{city"),
            Err(Error::InvalidTemplate(_))
        ));
        assert!(matches!(tokenize("#{ }"), Err(Error::InvalidTemplate(_))));
    }

    #[test]
    fn qualifies_relative_references() {
        let refs = references("#{city_prefix} #{name.first_name}", "address").expect("refs");
        assert_eq!(refs, vec!["address.city_prefix", "name.first_name"]);
        assert_eq!(namespace_of("address.zip_ranges.AZ"), "address");
    }
}
