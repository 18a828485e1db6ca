// Base URL templates for the two API version families

pub const REGION_PLACEHOLDER: &str = "{region}";

pub const BASE_API_URL: &str = "http://prod.api.pvp.net/api";
pub const V1_1_URL_TEMPLATE: &str = "http://prod.api.pvp.net/api/lol/{region}/v1.1";
pub const V2_1_URL_TEMPLATE: &str = "http://prod.api.pvp.net/api/{region}/v2.1";

/// Substitutes the lowercased region for the first `{region}` in `template`.
pub fn bind_region(template: &str, region: &str) -> String {
    template.replacen(REGION_PLACEHOLDER, &region.to_lowercase(), 1)
}
