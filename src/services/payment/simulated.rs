use chrono::Utc;
use log::info;
use std::time::Duration;

use crate::services::payment::interface::{
    PaymentError, PaymentOperations, PaymentReceipt, PaymentRequest,
};

/// Stand-in gateway: waits a fixed delay, then approves any non-negative amount.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    pub delay: Duration,
}

impl SimulatedProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl PaymentOperations for SimulatedProvider {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        if !request.amount.is_finite() || request.amount < 0.0 {
            return Err(PaymentError::Declined(format!(
                "invalid amount {}",
                request.amount
            )));
        }

        tokio::time::sleep(self.delay).await;

        info!(
            "Simulated payment of {:.2} approved for booking {}",
            request.amount, request.reference
        );

        Ok(PaymentReceipt {
            reference: request.reference.clone(),
            amount: request.amount,
            processed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn request(amount: f64) -> PaymentRequest {
        PaymentRequest {
            reference: "K3J9QX2ZP".to_string(),
            email: "guest@example.com".to_string(),
            amount,
        }
    }

    #[actix_rt::test]
    async fn test_simulated_payment_waits_then_approves() {
        let provider = SimulatedProvider::new(Duration::from_millis(20));
        let started = std::time::Instant::now();

        let receipt = assert_ok!(provider.charge(&request(550.0)).await);

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(receipt.reference, "K3J9QX2ZP");
        assert_eq!(receipt.amount, 550.0);
    }

    #[actix_rt::test]
    async fn test_simulated_payment_rejects_negative_amount() {
        let provider = SimulatedProvider::new(Duration::ZERO);
        let err = assert_err!(provider.charge(&request(-1.0)).await);
        assert!(matches!(err, PaymentError::Declined(_)));
    }
}
