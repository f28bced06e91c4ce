//! `tailwind.config.js` rendering.
//!
//! ```js
//! /** @type {import('tailwindcss').Config} */
//! module.exports = {
//!   content: {
//!     files: ["*.html", "./src/**/*.rs"],
//!   },
//!   theme: {
//!     extend: {
//!       colors: {},
//!     },
//!   },
//!   plugins: [],
//! };
//! ```
//!
//! Strings are written as JSON string literals, which are valid JavaScript.
//! Plugins become `require(...)` calls in declared order.

use crate::config::{BuildConfig, ThemeExtension, TokenMap};
use std::fmt::{self, Write};

const INDENT: &str = "  ";

/// Render the CommonJS module the compiler loads.
pub fn render(config: &BuildConfig) -> String {
    JsModule(config).to_string()
}

/// Display adapter writing a [`BuildConfig`] as a JavaScript module.
pub struct JsModule<'a>(pub &'a BuildConfig);

impl fmt::Display for JsModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;

        writeln!(f, "/** @type {{import('tailwindcss').Config}} */")?;
        writeln!(f, "module.exports = {{")?;

        writeln!(f, "{INDENT}content: {{")?;
        write!(f, "{INDENT}{INDENT}files: ")?;
        write_list(f, config.content_sources().iter().map(String::as_str), |f, s| {
            write_str_literal(f, s)
        })?;
        writeln!(f, ",")?;
        writeln!(f, "{INDENT}}},")?;

        writeln!(f, "{INDENT}theme: {{")?;
        write_extend(f, config.theme_extension())?;
        writeln!(f, "{INDENT}}},")?;

        write!(f, "{INDENT}plugins: ")?;
        write_list(f, config.plugins().iter(), |f, plugin| {
            f.write_str("require(")?;
            write_str_literal(f, plugin.specifier())?;
            f.write_char(')')
        })?;
        writeln!(f, ",")?;

        writeln!(f, "}};")
    }
}

fn write_extend(f: &mut fmt::Formatter<'_>, extend: &ThemeExtension) -> fmt::Result {
    let depth = INDENT.repeat(2);
    if extend.categories().is_empty() {
        return writeln!(f, "{depth}extend: {{}},");
    }

    writeln!(f, "{depth}extend: {{")?;
    for (category, tokens) in extend.categories() {
        write_category(f, category, tokens)?;
    }
    writeln!(f, "{depth}}},")
}

fn write_category(f: &mut fmt::Formatter<'_>, category: &str, tokens: &TokenMap) -> fmt::Result {
    let depth = INDENT.repeat(3);
    write!(f, "{depth}")?;
    write_key(f, category)?;
    if tokens.is_empty() {
        return writeln!(f, ": {{}},");
    }

    writeln!(f, ": {{")?;
    for (name, value) in tokens {
        write!(f, "{depth}{INDENT}")?;
        write_key(f, name)?;
        f.write_str(": ")?;
        write_str_literal(f, value)?;
        writeln!(f, ",")?;
    }
    writeln!(f, "{depth}}},")
}

/// Write `[a, b, c]` on one line.
fn write_list<I, T>(
    f: &mut fmt::Formatter<'_>,
    items: I,
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, T) -> fmt::Result,
) -> fmt::Result
where
    I: IntoIterator<Item = T>,
{
    f.write_char('[')?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_char(']')
}

/// Object key: bare when it is a plain identifier, quoted otherwise.
fn write_key(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    if is_identifier(key) {
        f.write_str(key)
    } else {
        write_str_literal(f, key)
    }
}

fn write_str_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let literal = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&literal)
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContentConfig, PluginRef, Theme};

    #[test]
    fn test_render_starter() {
        let expected = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: {
    files: ["*.html", "./src/**/*.rs"],
  },
  theme: {
    extend: {
      colors: {},
    },
  },
  plugins: [],
};
"#;
        assert_eq!(render(&BuildConfig::starter()), expected);
    }

    #[test]
    fn test_render_empty_config() {
        let expected = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: {
    files: [],
  },
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;
        assert_eq!(render(&BuildConfig::default()), expected);
    }

    #[test]
    fn test_render_tokens_and_plugins() {
        let mut colors = TokenMap::new();
        colors.insert("purple-cx".into(), "#0A465B".into());
        colors.insert("brand".into(), "rgb(10 70 91)".into());
        let mut categories = Theme::new();
        categories.insert("colors".into(), colors);

        let config = BuildConfig::new(
            ContentConfig::new(["./src/**/*.rs"]),
            ThemeExtension::new(categories),
            vec![
                PluginRef::new("@tailwindcss/forms"),
                PluginRef::new("./plugins/brand.js"),
            ],
        );
        let js = render(&config);

        assert!(js.contains("      colors: {\n"));
        assert!(js.contains("        brand: \"rgb(10 70 91)\",\n"));
        assert!(js.contains("        \"purple-cx\": \"#0A465B\",\n"));
        assert!(js.contains(
            "  plugins: [require(\"@tailwindcss/forms\"), require(\"./plugins/brand.js\")],\n"
        ));
    }

    #[test]
    fn test_content_order_preserved() {
        let config = BuildConfig::new(
            ContentConfig::new(["z.html", "a.html", "m.html"]),
            ThemeExtension::default(),
            Vec::new(),
        );
        assert!(render(&config).contains(r#"files: ["z.html", "a.html", "m.html"],"#));
    }

    #[test]
    fn test_strings_are_escaped() {
        let config = BuildConfig::new(
            ContentConfig::new([r#"odd "name"\*.html"#]),
            ThemeExtension::default(),
            Vec::new(),
        );
        assert!(render(&config).contains(r#"files: ["odd \"name\"\\*.html"],"#));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("colors"));
        assert!(is_identifier("fontFamily"));
        assert!(is_identifier("_private$"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("500"));
        assert!(!is_identifier("purple-cx"));
    }
}
