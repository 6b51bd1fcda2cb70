//! Compose Example
//!
//! Builds a complete webpack configuration out of galley's catalogs and
//! prints it as JSON.
//!
//! ## What This Shows
//!
//! - The base recipe (mode, output, common rules)
//! - Layering loader rules and plugins on top
//! - Upgrading a legacy rule to the `use` spelling
//! - Merging every fragment into one config
//!
//! Run with `NODE_ENV=development cargo run -p compose-demo` to see the
//! development variant (source maps, no clean-output plugin).

use std::path::Path;

use galley_recipes::recipes::{self, CommonOptions};
use galley_recipes::{Fragment, ToolRegistry, merge, modernize_config, plugins, rules};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    galley_recipes::logging::init();

    println!("🧩 Galley Compose Example");
    println!("=========================\n");

    let tools = ToolRegistry::default();
    let root = Path::new("/srv/app");

    // The base: mode from NODE_ENV, fixed output, the common rules
    let base = recipes::common(&tools, root, CommonOptions::default())?;
    println!("🔧 Resolved mode: {:?}\n", base.mode);

    // Style handling: eager for most sheets, lazy for *.lazy.css
    let styles = rules::style_injection_variants();

    // A fragment that still spells its loader the old way
    let mut legacy = Fragment::from_value(serde_json::json!({
        "module": {
            "rules": [
                { "test": "\\.txt$", "loader": "raw-loader", "options": { "esModule": false } }
            ]
        }
    }))?;
    modernize_config(&mut legacy);

    let config = merge([
        base,
        Fragment::from_rules(vec![
            styles.non_lazy_styles,
            styles.lazy_styles,
            recipes::ts_loader_with_babel(serde_json::json!({
                "presets": ["@babel/preset-env"]
            })),
        ]),
        legacy,
        Fragment::from_plugins(vec![
            plugins::jquery(&tools)?,
            plugins::bundle_analysis(&tools)?,
        ]),
        recipes::drop_console_optimization(&tools, recipes::console_groups::TRIVIAL)?,
        recipes::es_module_output(),
    ]);

    println!("📄 Merged configuration:\n");
    println!("{}", serde_json::to_string_pretty(&config.to_value()?)?);

    println!("\n💡 What happened:");
    println!("   1. The base recipe resolved the mode and fixed the output");
    println!("   2. Each fragment stacked its rules and plugins in order");
    println!("   3. The legacy rule was rewritten to the `use` spelling");
    println!("   4. One merge produced a config ready for the bundler");

    Ok(())
}
