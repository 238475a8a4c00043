//! Rendering of per-item diagnostic lines and the summary line.

use serde_json::Value;

use crate::item::Item;
use crate::options::DebugConfig;
use crate::{path, styling};

/// Continuation indent aligning stat fields under the `stat:  ` column.
const STAT_INDENT: &str = "       ";

/// Render the per-item diagnostic line for `item`, or None when the item
/// has nothing to show (minimal mode with no path).
pub(crate) fn item_line(item: &Item, config: &DebugConfig) -> Option<String> {
    let output = if config.minimal {
        let path = item.path.as_deref()?;
        styling::path(&path::relative_to_cwd(path))
    } else {
        full_block(item, config.verbose)
    };

    Some(format!("{} {}", config.title, output))
}

/// Render the end-of-stream summary line.
pub(crate) fn count_line(count: u64, config: &DebugConfig) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!(
        "{} {}",
        config.title,
        styling::count(&format!("{count} {noun}"))
    )
}

/// The multi-line block used in full mode: cwd and base always, path when
/// present, stat only in verbose mode.
fn full_block(item: &Item, verbose: bool) -> String {
    let mut block = String::from("\n");
    block.push_str(&format!(
        "cwd:   {}",
        styling::path(&path::tilde_display(&item.cwd))
    ));
    block.push_str(&format!(
        "\nbase:  {}",
        styling::path(&path::tilde_display(&item.base))
    ));
    if let Some(path) = &item.path {
        block.push_str(&format!(
            "\npath:  {}",
            styling::path(&path::tilde_display(path))
        ));
    }
    if verbose && let Some(stat) = &item.stat {
        block.push_str(&format!(
            "\nstat:  {}",
            styling::path(&render_stat(stat, STAT_INDENT))
        ));
    }
    block.push('\n');
    block
}

/// Render a stat-like metadata value as a flat field list.
///
/// Continuation lines are prefixed with `indent`; nested structures go one
/// level deeper. The output deliberately contains no brace characters, so
/// it reads as aligned `field: value` pairs rather than an object literal.
pub fn render_stat(value: &Value, indent: &str) -> String {
    match value {
        Value::Object(map) => {
            let deeper = format!("{indent}  ");
            let fields: Vec<String> = map
                .iter()
                .map(|(key, val)| match val {
                    Value::Object(_) | Value::Array(_) => {
                        format!("{key}: \n{deeper}{}", render_stat(val, &deeper))
                    }
                    _ => format!("{key}: {}", render_scalar(val)),
                })
                .collect();
            fields.join(&format!(",\n{indent}"))
        }
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(|v| render_stat(v, indent)).collect();
            rendered.join(&format!(",\n{indent}"))
        }
        scalar => render_scalar(scalar),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => format!("'{text}'"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DebugOptions;
    use ansi_str::AnsiStr;
    use serde_json::json;

    fn config(options: DebugOptions) -> DebugConfig {
        DebugConfig::resolve(options.title("unicorn:"))
    }

    #[test]
    fn minimal_line_is_title_plus_relative_path() {
        let cwd = std::env::current_dir().unwrap();
        let item = Item::new(&cwd, &cwd).with_path(cwd.join("test").join("foo.js"));

        let line = item_line(&item, &config(DebugOptions::new())).unwrap();
        assert_eq!(
            line.ansi_strip(),
            format!(
                "unicorn: {}",
                std::path::Path::new("test").join("foo.js").display()
            )
        );
    }

    #[test]
    fn minimal_line_skipped_when_item_has_no_path() {
        let item = Item::new("/d", "/d");
        assert!(item_line(&item, &config(DebugOptions::new())).is_none());
    }

    #[test]
    fn full_block_layout() {
        let item = Item::new("/d", "/d")
            .with_path("/d/foo.js")
            .with_stat(json!({"size": 57, "mode": 33188}));

        let line = item_line(&item, &config(DebugOptions::new().verbose(true))).unwrap();
        assert_eq!(
            line.ansi_strip(),
            "unicorn: \n\
             cwd:   /d\n\
             base:  /d\n\
             path:  /d/foo.js\n\
             stat:  size: 57,\n       mode: 33188\n"
        );
    }

    #[test]
    fn full_block_omits_path_line_when_absent() {
        let item = Item::new("/d", "/d");
        let line = item_line(&item, &config(DebugOptions::new().minimal(false))).unwrap();
        let stripped = line.ansi_strip();
        assert!(!stripped.contains("path:"));
        assert!(!stripped.contains("stat:"));
    }

    #[test]
    fn full_block_omits_stat_unless_verbose() {
        let item = Item::new("/d", "/d")
            .with_path("/d/foo.js")
            .with_stat(json!({"size": 57}));

        let line = item_line(&item, &config(DebugOptions::new().minimal(false))).unwrap();
        assert!(!line.ansi_strip().contains("stat:"));
    }

    #[test]
    fn stat_rendering_has_no_braces() {
        let rendered = render_stat(
            &json!({"size": 57, "times": {"modified": "2025-01-01T00:00:00Z"}}),
            STAT_INDENT,
        );
        assert!(!rendered.contains('{'));
        assert!(!rendered.contains('}'));
        assert!(rendered.contains("modified: '2025-01-01T00:00:00Z'"));
    }

    #[test]
    fn stat_fields_align_under_column() {
        let rendered = render_stat(&json!({"size": 57, "mode": 33188}), STAT_INDENT);
        assert_eq!(rendered, "size: 57,\n       mode: 33188");
    }

    #[test]
    fn count_line_wording() {
        let config = config(DebugOptions::new());
        assert_eq!(count_line(0, &config).ansi_strip(), "unicorn: 0 items");
        assert_eq!(count_line(1, &config).ansi_strip(), "unicorn: 1 item");
        assert_eq!(count_line(2, &config).ansi_strip(), "unicorn: 2 items");
    }
}
