use crate::error::{MenuError, MenuResult};

/// A compound selector: optional tag, then any number of `.class` and
/// `#id` parts, e.g. `nav.burger-menu#main`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident<'a>(
    input: &'a str,
    selector: &str,
) -> MenuResult<(&'a str, &'a str)> {
    let end = input
        .find(|c: char| !is_ident_char(c))
        .unwrap_or(input.len());
    if end == 0 {
        return Err(MenuError::Selector(format!(
            "expected a name in \"{}\"",
            selector
        )));
    }
    Ok((&input[..end], &input[end..]))
}

impl Selector {
    pub fn parse(selector: &str) -> MenuResult<Self> {
        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Err(MenuError::Selector("empty selector".to_string()));
        }

        let mut parsed = Selector::default();
        let mut rest = trimmed;

        if rest.starts_with(is_ident_char) {
            let (tag, tail) = take_ident(rest, selector)?;
            parsed.tag = Some(tag.to_ascii_lowercase());
            rest = tail;
        }

        while let Some(first) = rest.chars().next() {
            let (name, tail) = match first {
                '.' | '#' => take_ident(&rest[1..], selector)?,
                other => {
                    return Err(MenuError::Selector(format!(
                        "unsupported character '{}' in \"{}\"",
                        other, selector
                    )))
                }
            };
            if first == '.' {
                parsed.classes.push(name.to_string());
            } else if parsed.id.replace(name.to_string()).is_some() {
                return Err(MenuError::Selector(format!(
                    "more than one id in \"{}\"",
                    selector
                )));
            }
            rest = tail;
        }
        Ok(parsed)
    }

    pub fn matches(
        &self,
        tag: &str,
        id: Option<&str>,
        classes: &[String],
    ) -> bool {
        if let Some(expected) = &self.tag {
            if !tag.eq_ignore_ascii_case(expected) {
                return false;
            }
        }
        if let Some(expected) = &self.id {
            if id != Some(expected.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| classes.contains(class))
    }
}
