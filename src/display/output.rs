use colored::*;
use league_endpoints::region::DEFAULT_REGION;
use league_endpoints::ApiEndpointBuilder;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct EndpointRow {
    version: String,
    #[tabled(rename = "base url")]
    url: String,
}

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "#")]
    number: String,
    region: String,
    default: String,
}

pub fn display_endpoints(builder: &ApiEndpointBuilder) {
    println!(
        "\n{}",
        format!("🌐 Base URLs for region {}", builder.region())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows = vec![
        EndpointRow {
            version: "v1.1".to_string(),
            url: builder.url_v1().to_string(),
        },
        EndpointRow {
            version: "v2.1".to_string(),
            url: builder.url_v2().to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_regions(regions: &[&str]) {
    println!("\n{}", "🗺️  Supported regions".bold().cyan());
    println!("{}\n", "=".repeat(40).cyan());

    let rows: Vec<RegionRow> = regions
        .iter()
        .enumerate()
        .map(|(idx, region)| RegionRow {
            number: format!("{}", idx + 1),
            region: region.to_string(),
            default: if *region == DEFAULT_REGION {
                "✓".green().to_string()
            } else {
                String::new()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Shows only the last four characters of the key.
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn masks_all_but_last_four() {
        assert_eq!(mask_api_key("RGAPI-1234abcd"), "**********abcd");
    }

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(mask_api_key("abc"), "***");
        assert_eq!(mask_api_key(""), "");
    }
}
