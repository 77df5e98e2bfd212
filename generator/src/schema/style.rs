use cf_markup::{documentation_anchor, PARAGRAPH_BEGIN};
use serde_json::{json, Map, Value};

/// The predefined styles accepted by `BasedOnStyle`, with their descriptions.
const STYLES: &[(&str, Option<&str>)] = &[
    ("LLVM", Some("A style complying with the LLVM coding standards")),
    ("Google", Some("A style complying with Google's C++ style guide")),
    ("Chromium", Some("A style complying with Chromium's style guide")),
    ("Mozilla", Some("A style complying with Mozilla's style guide")),
    ("WebKit", Some("A style complying with WebKit's style guide")),
    ("Microsoft", Some("A style complying with Microsoft's style guide")),
    ("GNU", Some("A style complying with the GNU coding standards")),
    ("InheritParentConfig", None),
];

/// `BasedOnStyle` is read by clang-format but not declared in the headers.
pub(super) fn based_on_style() -> Value {
    let description = format!(
        "{}The style used for all options not specifically set in the configuration.{PARAGRAPH_BEGIN}Invoke completion to see all options",
        documentation_anchor("BasedOnStyle")
    );
    let names: Vec<&str> = STYLES.iter().map(|(name, _)| *name).collect();
    let metadata: Map<String, Value> = STYLES
        .iter()
        .filter_map(|(name, description)| {
            description.map(|description| {
                (name.to_string(), json!({ "description": description }))
            })
        })
        .collect();

    json!({
        "x-intellij-html-description": description,
        "type": "string",
        "enum": names,
        "x-intellij-enum-metadata": metadata,
        "x-intellij-enum-order-sensitive": true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_predefined_styles_in_order() {
        let schema = based_on_style();
        assert_eq!(
            schema["enum"],
            json!([
                "LLVM",
                "Google",
                "Chromium",
                "Mozilla",
                "WebKit",
                "Microsoft",
                "GNU",
                "InheritParentConfig"
            ])
        );
        assert_eq!(schema["x-intellij-enum-order-sensitive"], json!(true));
    }

    #[test]
    fn inherit_parent_config_has_no_description() {
        let schema = based_on_style();
        let metadata = schema["x-intellij-enum-metadata"].as_object().unwrap();
        assert_eq!(metadata.len(), 7);
        assert!(!metadata.contains_key("InheritParentConfig"));
        assert_eq!(
            metadata["GNU"]["description"],
            "A style complying with the GNU coding standards"
        );
    }
}
