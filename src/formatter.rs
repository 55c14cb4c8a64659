use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, VersionGenError};
use crate::version_info::VersionInfo;

fn scanner() -> &'static Regex {
    static SCANNER: OnceLock<Regex> = OnceLock::new();
    SCANNER.get_or_init(|| {
        Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}|[{}]")
            .expect("placeholder scanner pattern is valid")
    })
}

/// Substitutes `{key}` placeholders in a template with version-info fields.
///
/// Doubled braces (`{{` / `}}`) are escapes for literal braces. A placeholder
/// naming a key absent from the version info, or a stray unmatched brace, is
/// a formatting error. Pure transform: no output is produced on failure.
pub fn render_template(template: &str, info: &VersionInfo) -> Result<String> {
    let scanner = scanner();

    let mut output = String::with_capacity(template.len());
    let mut last = 0;

    for caps in scanner.captures_iter(template) {
        let token = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        output.push_str(&template[last..token.start()]);
        last = token.end();

        match token.as_str() {
            "{{" => output.push('{'),
            "}}" => output.push('}'),
            "{" | "}" => {
                return Err(VersionGenError::format(format!(
                    "unmatched '{}' at byte {} in template",
                    token.as_str(),
                    token.start()
                )));
            }
            _ => {
                let key = match caps.get(1) {
                    Some(k) => k.as_str(),
                    None => continue,
                };
                let value = info.render(key).ok_or_else(|| {
                    VersionGenError::format(format!(
                        "template references unknown key '{}'",
                        key
                    ))
                })?;
                output.push_str(&value);
            }
        }
    }

    output.push_str(&template[last..]);
    Ok(output)
}
