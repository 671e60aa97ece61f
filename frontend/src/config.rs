use crate::contact::submit::{HttpSubmitter, SimulatedSubmitter, Submitter};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Fixed delay of the simulated contact submission.
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1_500;

/// Margin added around the viewport before reveal wrappers count as visible.
/// Negative values shrink it: -80 waits until an element is 80px inside.
pub const REVEAL_MARGIN_PX: f64 = -80.0;

pub const TESTIMONIAL_ROTATE_MS: u32 = 6_000;

pub const CAREERS_EMAIL: &str = "careers@krovos.com";

/// Contact endpoint baked in at build time, e.g.
/// `KROVOS_CONTACT_ENDPOINT=/api/contact trunk build --release`.
pub fn contact_endpoint() -> Option<String> {
    option_env!("KROVOS_CONTACT_ENDPOINT")
        .map(str::trim)
        .filter(|endpoint| !endpoint.is_empty())
        .map(|endpoint| {
            if endpoint.starts_with('/') {
                format!("{}{}", get_backend_url(), endpoint)
            } else {
                endpoint.to_string()
            }
        })
}

pub fn contact_submitter() -> Submitter {
    match contact_endpoint() {
        Some(endpoint) => {
            log::info!("Contact form posts to {}", endpoint);
            Submitter::new(HttpSubmitter::new(endpoint))
        }
        None => {
            log::info!("No contact endpoint configured, simulating submissions");
            Submitter::new(SimulatedSubmitter::new(SIMULATED_SUBMIT_DELAY_MS))
        }
    }
}
