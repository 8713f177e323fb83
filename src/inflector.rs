//! String inflections for ORM naming conventions.
//!
//! Covers what enumeration declarations need: member names (`role` → `Role`),
//! pluralized listers (`role` → `roles`), table names (`BlogPost` →
//! `blog_posts`) and method-friendly labels.

use regex::Regex;
use std::sync::OnceLock;

/// Words with no distinct plural form
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// (singular, plural) pairs that don't follow the suffix rules
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

/// Suffix rules, first match wins
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(oxen)$", "${1}"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])a$", "${1}a"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|tomat)o$", "${1}oes"),
    (r"(?i)(bu)s$", "${1}ses"),
    (r"(?i)(alias|status)$", "${1}es"),
    (r"(?i)(octop|vir)(?:us|i)$", "${1}i"),
    (r"(?i)(ax|test)is$", "${1}es"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

static PLURAL_REGEXES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
static ACRONYM_BOUNDARY: OnceLock<Regex> = OnceLock::new();
static CAMEL_BOUNDARY: OnceLock<Regex> = OnceLock::new();
static NON_WORD_ASCII: OnceLock<Regex> = OnceLock::new();

fn plural_regexes() -> &'static [(Regex, &'static str)] {
    PLURAL_REGEXES.get_or_init(|| {
        PLURAL_RULES
            .iter()
            .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
            .collect()
    })
}

/// Convert a snake_case identifier to CamelCase.
///
/// `role` → `Role`, `user_role` → `UserRole`.
pub fn camelize(word: &str) -> String {
    word.split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a CamelCase name to snake_case.
///
/// `BlogPost` → `blog_post`, `HTTPRequest` → `http_request`.
pub fn underscore(word: &str) -> String {
    let acronym = ACRONYM_BOUNDARY
        .get_or_init(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").unwrap());
    let camel = CAMEL_BOUNDARY.get_or_init(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

    let word = word.replace("::", "/");
    let word = acronym.replace_all(&word, "${1}_${2}");
    let word = camel.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// Pluralize the last word of an identifier.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    if UNCOUNTABLE
        .iter()
        .any(|u| lower == *u || lower.ends_with(&format!("_{}", u)))
    {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if lower == *singular || lower.ends_with(&format!("_{}", singular)) {
            let stem = &word[..word.len() - singular.len()];
            return format!("{}{}", stem, plural);
        }
        if lower == *plural || lower.ends_with(&format!("_{}", plural)) {
            return word.to_string();
        }
    }

    for (regex, replacement) in plural_regexes() {
        if regex.is_match(word) {
            return regex.replace(word, *replacement).into_owned();
        }
    }

    word.to_string()
}

/// Derive a table name from a model name.
///
/// `User` → `users`, `BlogPost` → `blog_posts`, `Admin::User` → `admin_users`.
pub fn tableize(model_name: &str) -> String {
    pluralize(&underscore(model_name).replace('/', "_"))
}

/// Replace runs of non-word ASCII characters with `_`.
///
/// `on-hold` → `on_hold`, `a b` → `a_b`. Non-ASCII letters are kept.
pub fn method_friendly(label: &str) -> String {
    let regex = NON_WORD_ASCII.get_or_init(|| Regex::new(r"[[:ascii:]&&\W]+").unwrap());
    regex.replace_all(label, "_").into_owned()
}

/// Constant-style alias for a value: `admin` → `ADMIN`.
pub fn constant_name(value: &str) -> String {
    value.to_uppercase()
}
