use std::fmt::Display;

use crate::Error;

/// SD-PARAM names longer than this are cut down to fit, per the RFC 5424
/// 32-byte SD-NAME limit. A formatting rule, not a rejection.
const SD_NAME_MAX: usize = 32;

/// One structured data element: an SD-ID plus its name/value params, in
/// insertion order.
///
/// The id and param names are validated up front; param values may be any
/// text and are escaped when the element is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredElement {
    id: String,
    params: Vec<(String, String)>,
}

impl StructuredElement {
    pub fn new(id: &str) -> Result<Self, Error> {
        check_sd_name("sd-id", id)?;

        Ok(StructuredElement {
            id: id.to_string(),
            params: Vec::new(),
        })
    }

    pub fn param(mut self, name: &str, value: impl Into<String>) -> Result<Self, Error> {
        check_sd_name("sd-param-name", name)?;
        self.params.push((name.to_string(), value.into()));
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    // example: [exampleSDID@32473 iut="3" eventSource="Application" eventID="1011"]
    pub(crate) fn render_into(&self, out: &mut String) {
        out.push('[');
        out.push_str(&self.id);

        for (name, value) in &self.params {
            out.push(' ');
            // names are printable ASCII, slicing cannot split a character
            out.push_str(&name[..name.len().min(SD_NAME_MAX)]);
            out.push_str("=\"");
            escape_param_value(value, out);
            out.push('"');
        }

        out.push(']');
    }
}

impl Display for StructuredElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.render_into(&mut out);
        f.write_str(&out)
    }
}

/// SD-NAME per RFC 5424: printable ASCII, minus `=`, `]` and `"`, which
/// would break the block framing.
fn check_sd_name(field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::EmptyValue(field));
    }

    for ch in value.chars() {
        match ch {
            '=' | ']' | '"' => return Err(Error::InvalidChar(field, ch)),
            '!'..='~' => {}
            _ => return Err(Error::InvalidChar(field, ch)),
        }
    }

    Ok(())
}

// PARAM-VALUE escaping per RFC 5424 section 6.3.3
fn escape_param_value(value: &str, out: &mut String) {
    for ch in value.chars() {
        if matches!(ch, '\\' | '"' | ']') {
            out.push('\\');
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render() {
        let element = StructuredElement::new("exampleSDID@32473")
            .unwrap()
            .param("iut", "3")
            .unwrap()
            .param("eventSource", "Application")
            .unwrap()
            .param("eventID", "1011")
            .unwrap();

        assert_eq!(
            element.to_string(),
            r#"[exampleSDID@32473 iut="3" eventSource="Application" eventID="1011"]"#
        );
    }

    #[test]
    fn escape_values() {
        let element = StructuredElement::new("test@xxxxx")
            .unwrap()
            .param("path", r#"C:\logs"#)
            .unwrap()
            .param("quote", r#"say "hi""#)
            .unwrap()
            .param("bracket", "a]b")
            .unwrap();

        assert_eq!(
            element.to_string(),
            r#"[test@xxxxx path="C:\\logs" quote="say \"hi\"" bracket="a\]b"]"#
        );
    }

    #[test]
    fn empty_value_renders_empty_quotes() {
        let element = StructuredElement::new("test@xxxxx")
            .unwrap()
            .param("eventSource", "")
            .unwrap();

        assert_eq!(element.to_string(), r#"[test@xxxxx eventSource=""]"#);
    }

    #[test]
    fn long_param_name_truncated_to_32_bytes() {
        let element = StructuredElement::new("test@xxxxx")
            .unwrap()
            .param("statefulset-kubernetes-iopod-name", "test")
            .unwrap();

        assert_eq!(
            element.to_string(),
            r#"[test@xxxxx statefulset-kubernetes-iopod-nam="test"]"#
        );
    }

    #[test]
    fn bad_names_rejected() {
        assert_eq!(
            StructuredElement::new(""),
            Err(Error::EmptyValue("sd-id"))
        );
        assert_eq!(
            StructuredElement::new("has space"),
            Err(Error::InvalidChar("sd-id", ' '))
        );

        let element = StructuredElement::new("test@xxxxx").unwrap();
        assert_eq!(
            element.clone().param("a=b", "v"),
            Err(Error::InvalidChar("sd-param-name", '='))
        );
        assert_eq!(
            element.param("naïve", "v"),
            Err(Error::InvalidChar("sd-param-name", 'ï'))
        );
    }
}
