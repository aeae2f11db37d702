//! Example: Basic usage of cloth
//!
//! Run with `RUST_LOG=cloth=debug` to see every lookup.

use cloth::{Cloth, ClothConfig, Content, Document, FocusAction, Placement};

const CONFIG: &str = r#"
fallback_root = "body"
missing_element = "warn"
"#;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    cloth::logging::init();

    let config = ClothConfig::from_toml_str(CONFIG)?;
    let mut cloth = Cloth::with_config(Document::new(), config);

    println!("cloth v{} initialized", cloth::VERSION);

    // No #form yet, so the form lands in <body>
    cloth.append("form", "form", [("id", "form")], Placement::Append);
    cloth.append(
        "form",
        "input",
        [("id", "user"), ("type", "text"), ("style", "color: navy")],
        Placement::Append,
    );
    cloth.append("form", "h1", [("id", "title")], Placement::Prepend);

    cloth.adjust("title", "<em>Sign in</em>", Content::Markup);
    cloth.adjust("user", "ada", Content::Value);
    cloth.focus("user", FocusAction::Focus);
    cloth.scale("user", 1.5);

    println!("user = {:?}", cloth.retrieve("user", Content::Value));
    println!("form = {:?}", cloth.retrieve("form", Content::Markup));

    cloth.remove("title");
    cloth.remove("title"); // logged as a warning, nothing else happens

    let doc = cloth.into_inner();
    println!("{}", cloth::html::get_outer_html(doc.tree(), doc.tree().root()));
    Ok(())
}
