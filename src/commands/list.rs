use anyhow::Result;

use crate::content::ContentStore;
use crate::route::Route;

/// Every addressable route with a one-line description
pub fn format_routes(content: &ContentStore) -> String {
    let mut output = String::new();

    output.push_str("\nRoutes\n");
    output.push_str(&format!("{}\n", "═".repeat(60)));

    for (label, route) in Route::NAVBAR {
        output.push_str(&format!("{:<32} {}\n", route.to_string(), label));
    }
    if !content.redesigns().is_empty() {
        output.push_str(&format!("{:<32} {}\n", Route::Redesigns.to_string(), "Redesigns"));
    }

    output.push_str("\nWork\n");
    output.push_str(&format!("{}\n", "─".repeat(60)));
    for card in content.home_cards() {
        let tags = card.tags.join(" · ");
        if tags.is_empty() {
            output.push_str(&format!("{:<32} {}\n", card.route.to_string(), card.title));
        } else {
            output.push_str(&format!("{:<32} {} ({})\n", card.route.to_string(), card.title, tags));
        }
    }

    output
}

pub fn run(content: &ContentStore) -> Result<()> {
    print!("{}", format_routes(content));
    Ok(())
}
