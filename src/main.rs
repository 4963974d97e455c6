use std::sync::Arc;

use landing_per_pmi::config::AppConfig;
use landing_per_pmi::email::smtp::SmtpMailer;
use landing_per_pmi::email::Mailer;
use landing_per_pmi::{boot, build_rocket};

#[rocket::launch]
fn rocket() -> _ {
    env_logger::init();

    let cfg = AppConfig::from_env();

    // Boot check — verify/create directories, validate critical files
    boot::run(&cfg);

    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(cfg.smtp.clone()));

    build_rocket(cfg, mailer)
}
