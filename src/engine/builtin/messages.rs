//! Locale message templates and error rendering

use std::collections::BTreeMap;

use crate::data::{ErrorRecord, RenderOptions, Rendered};
use crate::locale::Locale;

/// Render accumulated errors per the options: one formatted string, or a map
/// from field name to its messages (multiple violations joined with `"; "`).
pub(super) fn render(locale: Locale, errors: &[ErrorRecord], opts: &RenderOptions) -> Rendered {
    if opts.convert_to_string {
        let lines: Vec<String> = errors
            .iter()
            .map(|record| {
                let field = format!(
                    "<span class=\"{}\">{}</span>",
                    opts.field_class,
                    humanize(&record.field)
                );
                let message = fill(template(locale, &record.rule), &field, record.param.as_deref());
                format!("<span class=\"{}\">{}</span>", opts.error_class, message)
            })
            .collect();
        Rendered::Text(lines.join("\n"))
    } else {
        let mut map: BTreeMap<String, String> = BTreeMap::new();
        for record in errors {
            let message = fill(
                template(locale, &record.rule),
                &humanize(&record.field),
                record.param.as_deref(),
            );
            match map.get_mut(&record.field) {
                Some(existing) => {
                    existing.push_str("; ");
                    existing.push_str(&message);
                }
                None => {
                    map.insert(record.field.clone(), message);
                }
            }
        }
        Rendered::PerField(map)
    }
}

/// `field_name` -> `Field Name`.
fn humanize(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn fill(template: &str, field: &str, param: Option<&str>) -> String {
    template
        .replace("{field}", field)
        .replace("{param}", param.unwrap_or_default())
}

fn template(locale: Locale, rule: &str) -> &'static str {
    match locale {
        Locale::PtBr => match rule {
            "required" => "O campo {field} é obrigatório",
            "valid_email" => "O campo {field} precisa ser um e-mail válido",
            "valid_url" => "O campo {field} precisa ser uma URL válida",
            "max_len" => "O campo {field} precisa ter {param} caracteres ou menos",
            "min_len" => "O campo {field} precisa ter pelo menos {param} caracteres",
            "exact_len" => "O campo {field} precisa ter exatamente {param} caracteres",
            "numeric" => "O campo {field} precisa ser um número",
            "integer" => "O campo {field} precisa ser um número inteiro",
            "boolean" => "O campo {field} precisa ser verdadeiro ou falso",
            "alpha" => "O campo {field} só pode conter letras",
            "alpha_numeric" => "O campo {field} só pode conter letras e números",
            "contains" => "O campo {field} precisa ser um destes valores: {param}",
            "min_numeric" => "O campo {field} precisa ser maior ou igual a {param}",
            "max_numeric" => "O campo {field} precisa ser menor ou igual a {param}",
            _ => "O campo {field} não é válido",
        },
        Locale::En => match rule {
            "required" => "The {field} field is required",
            "valid_email" => "The {field} field must be a valid email address",
            "valid_url" => "The {field} field must be a valid URL",
            "max_len" => "The {field} field must be at most {param} characters",
            "min_len" => "The {field} field must be at least {param} characters",
            "exact_len" => "The {field} field must be exactly {param} characters",
            "numeric" => "The {field} field must be a number",
            "integer" => "The {field} field must be a whole number",
            "boolean" => "The {field} field must be true or false",
            "alpha" => "The {field} field may only contain letters",
            "alpha_numeric" => "The {field} field may only contain letters and numbers",
            "contains" => "The {field} field must be one of: {param}",
            "min_numeric" => "The {field} field must be at least {param}",
            "max_numeric" => "The {field} field must be at most {param}",
            _ => "The {field} field is invalid",
        },
    }
}
