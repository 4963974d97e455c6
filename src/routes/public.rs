use rocket::response::content::RawHtml;
use std::fs;

// ── Landing page ───────────────────────────────────────

const INDEX_FILE: &str = "website/static/index.html";

fn landing_page() -> Option<RawHtml<String>> {
    fs::read_to_string(INDEX_FILE).ok().map(RawHtml)
}

#[get("/")]
pub fn index() -> Option<RawHtml<String>> {
    landing_page()
}

/// Catch-all fallback: any unmatched GET serves the single page, so
/// anchors and shared deep links always resolve to the landing page.
#[get("/<_..>", rank = 20)]
pub fn spa_fallback() -> Option<RawHtml<String>> {
    landing_page()
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, spa_fallback]
}
