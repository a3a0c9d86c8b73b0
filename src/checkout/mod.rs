//! Simulated checkout.
//!
//! No order is stored and nothing is charged: every call fabricates a fresh
//! reference, an ETA and a mock payment link.

pub mod random;
pub mod session;

use log::debug;
use uuid::Uuid;

pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom, ETA_MINUTES};
pub use session::{CheckoutRequest, CheckoutResponse, STATUS_SUCCESS};

pub const DEFAULT_PAYMENT_BASE_URL: &str = "https://checkout.pigeonhole.dev/mock";

/// Builds the confirmation for `product_id`. The id is echoed as-is, never checked against the catalog.
pub fn simulate_checkout(
    product_id: &str,
    random: &dyn RandomSource,
    payment_base_url: &str,
) -> CheckoutResponse {
    let reference = random.reference();
    let eta_minutes = random.eta_minutes();
    debug!(
        "simulated checkout product={:?} reference={} eta={}m",
        product_id, reference, eta_minutes
    );

    CheckoutResponse {
        status: STATUS_SUCCESS.to_string(),
        reference: reference.to_string(),
        message: confirmation_message(product_id, eta_minutes),
        payment_url: payment_url(payment_base_url, &reference),
    }
}

pub fn confirmation_message(product_id: &str, eta_minutes: u8) -> String {
    format!(
        "Checkout simulated for device {}. Expect confirmation in {} minutes.",
        product_id, eta_minutes
    )
}

pub fn payment_url(base: &str, reference: &Uuid) -> String {
    format!("{}/{}", base.trim_end_matches('/'), reference)
}

/// Reads the ETA back out of a confirmation message.
#[doc(hidden)]
pub fn eta_from_message(message: &str) -> Option<u8> {
    message
        .rsplit_once("Expect confirmation in ")?
        .1
        .strip_suffix(" minutes.")?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> FixedRandom {
        let reference = Uuid::parse_str("6f1c2a5e-8d4b-4c3a-9e2f-0a1b2c3d4e5f").unwrap();
        FixedRandom::new(reference, 17)
    }

    #[test]
    fn test_simulated_checkout_is_deterministic_with_fixed_source() {
        let response = simulate_checkout("cyber-finch", &fixed(), DEFAULT_PAYMENT_BASE_URL);
        assert_eq!(response.status, "success");
        assert_eq!(response.reference, "6f1c2a5e-8d4b-4c3a-9e2f-0a1b2c3d4e5f");
        assert_eq!(
            response.message,
            "Checkout simulated for device cyber-finch. Expect confirmation in 17 minutes."
        );
        assert_eq!(
            response.payment_url,
            "https://checkout.pigeonhole.dev/mock/6f1c2a5e-8d4b-4c3a-9e2f-0a1b2c3d4e5f"
        );
    }

    #[test]
    fn test_any_identifier_is_accepted() {
        let long = "x".repeat(10_000);
        for id in ["", "ünïcødé-🐦", "not-in-catalog", long.as_str()] {
            let response = simulate_checkout(id, &ThreadRandom, DEFAULT_PAYMENT_BASE_URL);
            assert!(response.is_success());
            let reference = Uuid::parse_str(&response.reference).unwrap();
            assert_eq!(reference.get_version_num(), 4);
            assert!(response.payment_url.contains(&response.reference));
            assert!(response.message.contains(id));
        }
    }

    #[test]
    fn test_eta_in_message_stays_in_window() {
        let random = SeededRandom::new(1312);
        for _ in 0..500 {
            let response = simulate_checkout("prism-dove", &random, DEFAULT_PAYMENT_BASE_URL);
            let eta = eta_from_message(&response.message).unwrap();
            assert!(ETA_MINUTES.contains(&eta));
        }
    }

    #[test]
    fn test_payment_url_joins_with_single_slash() {
        let reference = Uuid::nil();
        assert_eq!(
            payment_url("https://pay.example/mock/", &reference),
            "https://pay.example/mock/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_eta_from_message_rejects_other_text() {
        assert_eq!(eta_from_message("all good"), None);
        assert_eq!(eta_from_message(&confirmation_message("a", 9)), Some(9));
    }
}
