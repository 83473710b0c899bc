//! List rules command implementation.

use javats_rules::{all_rules, Preset};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<26} {:<9} Description", "Code", "Name", "Scope");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<8} {:<26} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.scope().to_string(),
            rule.description()
        );
    }

    println!("\nPresets:");
    for preset in [Preset::Mature, Preset::Legacy] {
        let codes: Vec<_> = preset.rules().iter().map(|r| r.code()).collect();
        let marker = if preset == Preset::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<8} - {}{marker}", preset.as_str(), codes.join(", "));
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  javats check src --rules naming-convention,explicit-typing");
    println!("  javats check src --rules JT001,JT005");
}
