use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::AppConfig;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "website",
    "website/static",
    "website/static/css",
    "website/static/js",
];

/// Critical assets — the site cannot serve without these
const CRITICAL_STATIC: &[&str] = &["website/static/index.html"];

/// Bundle assets the page links; missing ones only degrade rendering
const BUNDLE_STATIC: &[&str] = &[
    "website/static/css/landing.css",
    "website/static/js/landing.js",
];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about degraded configuration,
/// and aborts if critical assets are absent.
pub fn run(cfg: &AppConfig) {
    info!("Landing per PMI boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Critical static assets ──────────────────────
    for file in CRITICAL_STATIC {
        if !Path::new(file).exists() {
            error!("  MISSING critical asset: {}", file);
            errors += 1;
        }
    }

    // ── 3. Bundle assets ───────────────────────────────
    for file in BUNDLE_STATIC {
        if !Path::new(file).exists() {
            warn!("  Missing static asset: {} (page will render unstyled)", file);
            warnings += 1;
        }
    }

    // ── 4. Delivery / assistant configuration ──────────
    if !cfg.smtp.credentials_present() {
        warn!("  SMTP credentials not set (contact submissions will be accepted but not delivered)");
        warnings += 1;
    }
    if cfg.gemini_api_key.is_empty() {
        warn!("  GEMINI_API_KEY not set (chat assistant disabled)");
        warnings += 1;
    }

    // ── 5. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default config");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
